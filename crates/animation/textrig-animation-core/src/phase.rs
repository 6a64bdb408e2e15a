//! Reusable timed phases and the engine that turns them into keyframes.
//!
//! A style is an ordered list of [`Phase`] descriptors per slot. Each phase
//! carries absolute frames (already staggered for its slot), writes its keys
//! into a [`TimelineBuilder`] and reports the frame it ends on.

use std::f32::consts::TAU;

use crate::error::Result;
use crate::rng::SlotRng;
use crate::timeline::TimelineBuilder;
use crate::value::{splat, Axis, AxisMask, Channel, Interpolation, REST_SCALE, REST_TRANSLATION};

/// Components within this distance of the rest value are snapped to it exactly.
pub const REST_EPSILON: f32 = 1e-5;

#[inline]
fn frame_at(start: u32, t: f32, duration: u32) -> u32 {
    start + (t * duration as f32).round() as u32
}

/// A literal key at an absolute frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseKey {
    pub frame: u32,
    pub channel: Channel,
    pub axes: AxisMask,
    pub value: [f32; 3],
}

impl PoseKey {
    pub fn new(frame: u32, channel: Channel, axes: AxisMask, value: [f32; 3]) -> Self {
        Self {
            frame,
            channel,
            axes,
            value,
        }
    }

    pub fn z(frame: u32, z: f32) -> Self {
        Self::new(frame, Channel::Translation, AxisMask::Z, [0.0, 0.0, z])
    }

    pub fn scale(frame: u32, value: [f32; 3]) -> Self {
        Self::new(frame, Channel::Scale, AxisMask::XYZ, value)
    }

    /// Rotation in radians.
    pub fn rotation(frame: u32, value: [f32; 3]) -> Self {
        Self::new(frame, Channel::Rotation, AxisMask::XYZ, value)
    }
}

/// Plane the radial sampler orbits in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SweepPlane {
    /// `x = r·sin`, `z = r·cos`.
    Xz,
    /// `x = r·cos`, `y = r·sin`.
    Xy,
}

/// Straight-line travel along Y with a decaying zig-zag, overlaid on a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Travel {
    pub from_y: f32,
    pub zigzag_amplitude: f32,
    pub zigzag_frequency: f32,
}

/// Radial step sampler: `steps + 1` samples with the radius shrinking by `1 - t`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialSweep {
    pub start: u32,
    pub duration: u32,
    pub steps: u32,
    pub radius: f32,
    pub revolutions: f32,
    pub plane: SweepPlane,
    pub travel: Option<Travel>,
    /// Total rotation (radians) reached at `t = 1` on `spin_axes`.
    pub spin: [f32; 3],
    pub spin_axes: AxisMask,
    pub spin_interpolation: Interpolation,
    /// Replace the final sample's rotation with rest instead of the full sweep.
    pub rest_on_arrival: bool,
}

/// Squash-stretch bounce: squash on landing, stretch at the apex, rest at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounce {
    pub land: u32,
    pub duration: u32,
    /// Apex of the Z arc. `None` keys no translation at all; `Some(0.0)` still
    /// pins Z to 0 on landing.
    pub arc: Option<f32>,
    pub squash: [f32; 3],
    pub stretch: [f32; 3],
    /// Yaw added at the apex (radians, linear).
    pub spin_z: f32,
    /// Squash again on touchdown and relax to rest this many frames later.
    pub recover: Option<u32>,
}

impl Bounce {
    pub const SQUASH: [f32; 3] = [1.2, 1.2, 0.8];
    pub const STRETCH: [f32; 3] = [0.8, 0.8, 1.2];

    pub fn new(land: u32, duration: u32, height: f32) -> Self {
        Self {
            land,
            duration,
            arc: Some(height),
            squash: Self::SQUASH,
            stretch: Self::STRETCH,
            spin_z: 0.0,
            recover: None,
        }
    }
}

/// Random burst of location (and optionally XY scale) samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Jitter {
    pub start: u32,
    pub duration: u32,
    pub step_min: u32,
    pub step_max: u32,
    /// Bound of the X/Z offset.
    pub offset: f32,
    pub scale_range: Option<(f32, f32)>,
    /// Settle key lands at `start + duration + settle_delay`.
    pub settle_delay: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Pose(Vec<PoseKey>),
    /// Scale up from `from` to 1, optionally through `(fraction, scale)`.
    PopIn {
        at: u32,
        duration: u32,
        from: f32,
        overshoot: Option<(f32, f32)>,
    },
    /// Alternating X shuffle with decaying amplitude and a small Z lift.
    Shuffle {
        start: u32,
        duration: u32,
        count: u32,
        amplitude: f32,
        lift: f32,
    },
    /// Yaw held, then snapped by `angle` (radians) `count` times.
    SnapTurns {
        start: u32,
        hold: u32,
        transition: u32,
        count: u32,
        angle: f32,
    },
    RadialSweep(RadialSweep),
    Bounce(Bounce),
    /// Scale/tilt wiggle: high beat, low beat, then high beat or rest.
    Wiggle {
        start: u32,
        duration: u32,
        scale_amplitude: f32,
        /// Radians; the first beat uses `tilt * sign`.
        tilt: [f32; 3],
        sign: f32,
        rest_at_end: bool,
    },
    Jitter(Jitter),
    PulseSeries {
        start: u32,
        count: u32,
        period: u32,
        peak: f32,
        rise: u32,
        fall: u32,
    },
    /// Pin every keyed channel back to rest after the slot's last key.
    RestPin,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Pose(_) => "pose",
            Phase::PopIn { .. } => "pop_in",
            Phase::Shuffle { .. } => "shuffle",
            Phase::SnapTurns { .. } => "snap_turns",
            Phase::RadialSweep(_) => "radial_sweep",
            Phase::Bounce(_) => "bounce",
            Phase::Wiggle { .. } => "wiggle",
            Phase::Jitter(_) => "jitter",
            Phase::PulseSeries { .. } => "pulse_series",
            Phase::RestPin => "rest_pin",
        }
    }

    /// Emit this phase's keys; returns the frame the phase ends on.
    pub fn run(&self, tl: &mut TimelineBuilder, rng: &mut SlotRng) -> Result<u32> {
        let end = match self {
            Phase::Pose(keys) => {
                let mut end = 0;
                for k in keys {
                    tl.key(k.frame, k.channel, k.axes, k.value)?;
                    end = end.max(k.frame);
                }
                end
            }
            Phase::PopIn {
                at,
                duration,
                from,
                overshoot,
            } => {
                tl.key(*at, Channel::Scale, AxisMask::XYZ, splat(*from))?;
                if let Some((fraction, scale)) = overshoot {
                    tl.key(
                        frame_at(*at, *fraction, *duration),
                        Channel::Scale,
                        AxisMask::XYZ,
                        splat(*scale),
                    )?;
                }
                let end = at + duration;
                tl.key(end, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
                end
            }
            Phase::Shuffle {
                start,
                duration,
                count,
                amplitude,
                lift,
            } => {
                let step = *duration as f32 / *count as f32;
                for s in 0..*count {
                    let t = s as f32 / *count as f32;
                    let direction = if s % 2 == 0 { 1.0 } else { -1.0 };
                    let mag = amplitude * (1.0 - t);
                    let frame = start + (s as f32 * step).round() as u32;
                    tl.key(
                        frame,
                        Channel::Translation,
                        AxisMask::XZ,
                        [direction * mag, 0.0, mag.abs() * lift],
                    )?;
                }
                let end = start + duration;
                tl.key(end, Channel::Translation, AxisMask::XYZ, REST_TRANSLATION)?;
                end
            }
            Phase::SnapTurns {
                start,
                hold,
                transition,
                count,
                angle,
            } => {
                let mut frame = *start;
                let mut yaw = 0.0;
                tl.key(frame, Channel::Rotation, AxisMask::Z, [0.0, 0.0, yaw])?;
                frame += hold;
                tl.key(frame, Channel::Rotation, AxisMask::Z, [0.0, 0.0, yaw])?;
                for _ in 0..*count {
                    yaw += angle;
                    frame += transition;
                    tl.key(frame, Channel::Rotation, AxisMask::Z, [0.0, 0.0, yaw])?;
                    frame += hold;
                    tl.key(frame, Channel::Rotation, AxisMask::Z, [0.0, 0.0, yaw])?;
                }
                frame
            }
            Phase::RadialSweep(sweep) => run_sweep(sweep, tl)?,
            Phase::Bounce(bounce) => run_bounce(bounce, tl)?,
            Phase::Wiggle {
                start,
                duration,
                scale_amplitude,
                tilt,
                sign,
                rest_at_end,
            } => {
                let high = splat(1.0 + scale_amplitude);
                let low = splat(1.0 - scale_amplitude);
                let tilted = |s: f32| [tilt[0] * s, tilt[1] * s, tilt[2] * s];
                let mid = start + duration / 2;
                let end = start + duration;

                tl.key(*start, Channel::Scale, AxisMask::XYZ, high)?;
                tl.key(*start, Channel::Rotation, AxisMask::XYZ, tilted(*sign))?;
                tl.key(mid, Channel::Scale, AxisMask::XYZ, low)?;
                tl.key(mid, Channel::Rotation, AxisMask::XYZ, tilted(-sign))?;
                if *rest_at_end {
                    tl.key(end, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
                    tl.key(end, Channel::Rotation, AxisMask::XYZ, Channel::Rotation.rest())?;
                } else {
                    tl.key(end, Channel::Scale, AxisMask::XYZ, high)?;
                    tl.key(end, Channel::Rotation, AxisMask::XYZ, tilted(*sign))?;
                }
                end
            }
            Phase::Jitter(jitter) => run_jitter(jitter, tl, rng)?,
            Phase::PulseSeries {
                start,
                count,
                period,
                peak,
                rise,
                fall,
            } => {
                let mut end = *start;
                for p in 0..*count {
                    let base = start + p * period;
                    tl.key(base, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
                    tl.key(base + rise, Channel::Scale, AxisMask::XYZ, splat(*peak))?;
                    end = base + fall;
                    tl.key(end, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
                }
                end
            }
            Phase::RestPin => run_rest_pin(tl)?,
        };
        log::trace!("slot {} phase {} ends at frame {end}", tl.slot().0, self.name());
        Ok(end)
    }
}

fn run_sweep(s: &RadialSweep, tl: &mut TimelineBuilder) -> Result<u32> {
    for step in 0..=s.steps {
        let t = step as f32 / s.steps as f32;
        let frame = frame_at(s.start, t, s.duration);
        let arrived = step == s.steps;

        let location = if arrived {
            REST_TRANSLATION
        } else {
            let shrink = 1.0 - t;
            let angle = t * TAU * s.revolutions;
            let (sin, cos) = angle.sin_cos();
            let r = s.radius * shrink;
            let mut loc = match s.plane {
                SweepPlane::Xz => [r * sin, 0.0, r * cos],
                SweepPlane::Xy => [r * cos, r * sin, 0.0],
            };
            if let Some(travel) = &s.travel {
                let zig = travel.zigzag_amplitude * (t * TAU * travel.zigzag_frequency).sin() * shrink;
                loc[1] += travel.from_y * shrink + zig;
            }
            loc
        };
        tl.key(frame, Channel::Translation, AxisMask::XYZ, location)?;

        if !s.spin_axes.is_empty() {
            let rotation = if arrived && s.rest_on_arrival {
                Channel::Rotation.rest()
            } else {
                [s.spin[0] * t, s.spin[1] * t, s.spin[2] * t]
            };
            tl.key_with(frame, Channel::Rotation, s.spin_axes, rotation, s.spin_interpolation)?;
        }
    }
    Ok(s.start + s.duration)
}

fn run_bounce(b: &Bounce, tl: &mut TimelineBuilder) -> Result<u32> {
    let mid = b.land + b.duration / 2;
    let end = b.land + b.duration;
    let spinning = b.spin_z != 0.0;
    let yaw = tl.current(Channel::Rotation)[Axis::Z.index()];

    tl.key(b.land, Channel::Scale, AxisMask::XYZ, b.squash)?;
    if b.arc.is_some() {
        tl.key(b.land, Channel::Translation, AxisMask::Z, REST_TRANSLATION)?;
    }
    if spinning {
        tl.key_with(b.land, Channel::Rotation, AxisMask::Z, [0.0, 0.0, yaw], Interpolation::Linear)?;
    }

    tl.key(mid, Channel::Scale, AxisMask::XYZ, b.stretch)?;
    if let Some(height) = b.arc {
        tl.key(mid, Channel::Translation, AxisMask::Z, [0.0, 0.0, height])?;
    }
    if spinning {
        let spun = [0.0, 0.0, yaw + b.spin_z];
        tl.key_with(mid, Channel::Rotation, AxisMask::Z, spun, Interpolation::Linear)?;
        tl.key_with(end, Channel::Rotation, AxisMask::Z, spun, Interpolation::Linear)?;
    }

    if b.arc.is_some() {
        tl.key(end, Channel::Translation, AxisMask::Z, REST_TRANSLATION)?;
    }
    match b.recover {
        Some(recover) => {
            tl.key(end, Channel::Scale, AxisMask::XYZ, b.squash)?;
            tl.key(end + recover, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
            Ok(end + recover)
        }
        None => {
            tl.key(end, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
            Ok(end)
        }
    }
}

fn run_jitter(j: &Jitter, tl: &mut TimelineBuilder, rng: &mut SlotRng) -> Result<u32> {
    let end = j.start + j.duration;
    let settle = end + j.settle_delay;
    let mut frame = j.start;
    while frame < end {
        frame += rng.step(j.step_min, j.step_max);
        let dx = rng.uniform(-j.offset, j.offset);
        let dz = rng.uniform(-j.offset, j.offset);
        let scale = j
            .scale_range
            .map(|(lo, hi)| [rng.uniform(lo, hi), rng.uniform(lo, hi), 1.0]);
        if frame >= settle {
            break;
        }
        tl.key(frame, Channel::Translation, AxisMask::XYZ, [dx, 0.0, dz])?;
        if let Some(scale) = scale {
            tl.key(frame, Channel::Scale, AxisMask::XYZ, scale)?;
        }
    }
    tl.key(settle, Channel::Translation, AxisMask::XYZ, REST_TRANSLATION)?;
    if j.scale_range.is_some() {
        tl.key(settle, Channel::Scale, AxisMask::XYZ, REST_SCALE)?;
    }
    Ok(settle)
}

fn run_rest_pin(tl: &mut TimelineBuilder) -> Result<u32> {
    let Some(last) = tl.max_frame() else {
        return Ok(0);
    };
    let mut end = last;
    for channel in Channel::ALL {
        let rest = channel.rest();
        let mut pending = AxisMask::NONE;
        let mut held = rest;
        for axis in Axis::ALL {
            let Some((frame, v)) = tl.last(channel, axis) else {
                continue;
            };
            let i = axis.index();
            if v == rest[i] {
                continue;
            }
            if (v - rest[i]).abs() <= REST_EPSILON {
                tl.key(frame, channel, axis.into(), rest)?;
                continue;
            }
            pending = pending.union(axis.into());
            held[i] = v;
        }
        if pending.is_empty() {
            continue;
        }
        // Hold the final value to the slot's last frame, then snap to rest one
        // frame later so no interpolation sweeps back through the motion.
        tl.key_with(last, channel, pending, held, Interpolation::Linear)?;
        tl.key(last + 1, channel, pending, rest)?;
        end = last + 1;
    }
    Ok(end)
}

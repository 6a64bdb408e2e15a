//! Preview sampling of generated timelines.
//!
//! Model:
//! - Each (channel, axis) of a slot is an independent curve through its keys.
//! - The interpolation mode of the left key governs a segment; Bezier segments
//!   use the ease-in-out timing curve, Linear segments blend directly.
//! - Before the first key and after the last key the curve holds its end value.
//!   Curves without keys sit at the channel's rest value.

use serde::{Deserialize, Serialize};

use crate::data::SlotTimeline;
use crate::interp::{bezier_ease_t, lerp_f32, DEFAULT_BEZIER_CTRL};
use crate::value::{Axis, Channel, Interpolation, REST_ROTATION, REST_SCALE, REST_TRANSLATION};

/// Sampled local transform of a letter's joint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub translation: [f32; 3],
    /// XYZ Euler radians.
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: REST_TRANSLATION,
            rotation: REST_ROTATION,
            scale: REST_SCALE,
        }
    }
}

impl Pose {
    pub fn channel(&self, channel: Channel) -> [f32; 3] {
        match channel {
            Channel::Translation => self.translation,
            Channel::Rotation => self.rotation,
            Channel::Scale => self.scale,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut [f32; 3] {
        match channel {
            Channel::Translation => &mut self.translation,
            Channel::Rotation => &mut self.rotation,
            Channel::Scale => &mut self.scale,
        }
    }

    /// True when every component is within `eps` of rest.
    pub fn is_rest(&self, eps: f32) -> bool {
        Channel::ALL.iter().all(|&c| {
            self.channel(c)
                .iter()
                .zip(c.rest())
                .all(|(v, r)| (v - r).abs() <= eps)
        })
    }
}

/// Sample one (channel, axis) curve at `frame`.
pub fn sample_curve(timeline: &SlotTimeline, channel: Channel, axis: Axis, frame: f32) -> f32 {
    let mut prev: Option<(f32, f32, Interpolation)> = None;
    for key in timeline.keys.iter().filter(|k| k.writes(channel, axis)) {
        let (f1, v1) = (key.frame as f32, key.value[axis.index()]);
        match prev {
            None if frame <= f1 => return v1,
            Some((f0, v0, interp)) if frame <= f1 => {
                let denom = (f1 - f0).max(f32::EPSILON);
                let t = ((frame - f0) / denom).clamp(0.0, 1.0);
                let t = match interp {
                    Interpolation::Linear => t,
                    Interpolation::Bezier => bezier_ease_t(t, DEFAULT_BEZIER_CTRL),
                };
                return lerp_f32(v0, v1, t);
            }
            _ => {}
        }
        prev = Some((f1, v1, key.interpolation));
    }
    match prev {
        Some((_, v, _)) => v,
        None => channel.rest()[axis.index()],
    }
}

/// Sample the full transform of a slot at `frame` (fractional frames allowed).
pub fn sample_slot(timeline: &SlotTimeline, frame: f32) -> Pose {
    let mut pose = Pose::default();
    for channel in Channel::ALL {
        let out = pose.channel_mut(channel);
        for axis in Axis::ALL {
            out[axis.index()] = sample_curve(timeline, channel, axis, frame);
        }
    }
    pose
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Keyframe;
    use crate::ids::SlotId;
    use crate::value::AxisMask;

    fn tl(keys: Vec<Keyframe>) -> SlotTimeline {
        SlotTimeline {
            slot: SlotId(0),
            keys,
        }
    }

    fn key(frame: u32, z: f32, interpolation: Interpolation) -> Keyframe {
        Keyframe {
            frame,
            channel: Channel::Translation,
            axes: AxisMask::Z,
            value: [0.0, 0.0, z],
            interpolation,
        }
    }

    #[test]
    fn empty_timeline_samples_rest() {
        let pose = sample_slot(&tl(vec![]), 10.0);
        assert_eq!(pose, Pose::default());
        assert!(pose.is_rest(0.0));
    }

    #[test]
    fn holds_outside_key_range() {
        let t = tl(vec![key(10, 4.0, Interpolation::Linear), key(20, 2.0, Interpolation::Linear)]);
        assert_eq!(sample_curve(&t, Channel::Translation, Axis::Z, 1.0), 4.0);
        assert_eq!(sample_curve(&t, Channel::Translation, Axis::Z, 99.0), 2.0);
        assert_eq!(sample_curve(&t, Channel::Translation, Axis::X, 15.0), 0.0);
    }

    #[test]
    fn linear_and_bezier_segments() {
        let lin = tl(vec![key(0, 0.0, Interpolation::Linear), key(10, 10.0, Interpolation::Linear)]);
        assert!((sample_curve(&lin, Channel::Translation, Axis::Z, 2.5) - 2.5).abs() < 1e-5);

        let bez = tl(vec![key(0, 0.0, Interpolation::Bezier), key(10, 10.0, Interpolation::Bezier)]);
        let early = sample_curve(&bez, Channel::Translation, Axis::Z, 2.0);
        assert!(early < 2.0, "ease-in should lag linear, got {early}");
        assert!((sample_curve(&bez, Channel::Translation, Axis::Z, 5.0) - 5.0).abs() < 1e-2);
    }
}

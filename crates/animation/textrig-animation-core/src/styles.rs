//! Per-style phase sequences.
//!
//! Every style turns (slot, slot_count, params) into the ordered phases of
//! that slot. Some styles share a global base frame (for example "all letters
//! have landed") that depends only on `slot_count` and the parameters.

use crate::ids::SlotId;
use crate::params::StyleParams;
use crate::phase::{Bounce, Jitter, Phase, PoseKey, RadialSweep, SweepPlane, Travel};
use crate::rng::SlotRng;
use crate::style::StyleTag;
use crate::value::{deg3, splat, AxisMask, Channel, Interpolation};

/// Build the phases of `slot`. Random pose values are drawn here, jitter
/// draws happen when the phase runs; both come from the slot's own stream.
pub fn compose(
    style: StyleTag,
    slot: SlotId,
    slot_count: u32,
    params: &StyleParams,
    rng: &mut SlotRng,
) -> Vec<Phase> {
    let base = params.start_frame;
    let i = slot.0;
    let n = slot_count;
    let mut phases = match style {
        StyleTag::Daytona => daytona(base, i, params),
        StyleTag::CircularApproach => circular_approach(base, i, n, params),
        StyleTag::BadGameOver => bad_game_over(base, i, n, params),
        StyleTag::GoodGameOver => good_game_over(base, i, n, params),
        StyleTag::ElasticWave => elastic_wave(base, i, params),
        StyleTag::Tumble3d => tumble(base, i, params),
        StyleTag::DigitalGlitch => digital_glitch(base, i, params),
        StyleTag::SlingshotSnap => slingshot_snap(base, i, params, rng),
        StyleTag::ArcadeSlam => arcade_slam(base, i, params, rng),
    };
    phases.push(Phase::RestPin);
    phases
}

fn daytona(base: u32, i: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.daytona;
    let appear = base + i * p.pop_in_stagger;
    let shuffle_start = appear + p.pop_in_duration;
    vec![
        Phase::PopIn {
            at: appear,
            duration: p.pop_in_duration,
            from: p.pop_in_from,
            overshoot: Some((p.overshoot_at, p.overshoot)),
        },
        Phase::Shuffle {
            start: shuffle_start,
            duration: p.shuffle_duration,
            count: p.shuffle_count,
            amplitude: p.shuffle_amplitude,
            lift: p.shuffle_lift,
        },
        Phase::SnapTurns {
            start: base + p.snap_offset + i * p.snap_stagger,
            hold: p.hold_duration,
            transition: p.transition_duration,
            count: p.snap_count,
            angle: p.snap_angle_deg.to_radians(),
        },
    ]
}

fn circular_approach(base: u32, i: u32, n: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.circular_approach;
    let stagger = p.approach_duration / 2;
    let appear = base + i * stagger;
    // Pop-in takes one frame; the approach starts right after it.
    let approach_start = appear + 1;
    let approach_end_base = base + 1 + n.saturating_sub(1) * stagger + p.approach_duration;
    let jump_start = approach_end_base + i * p.jump_delay;

    let mut jump = Bounce::new(jump_start, p.jump_duration, p.jump_height);
    jump.spin_z = p.jump_spin_deg.to_radians();
    jump.recover = Some(p.jump_recover);

    vec![
        Phase::Pose(vec![PoseKey::new(appear, Channel::Rotation, AxisMask::Z, [0.0; 3])]),
        Phase::PopIn {
            at: appear,
            duration: 1,
            from: 0.001,
            overshoot: None,
        },
        Phase::RadialSweep(RadialSweep {
            start: approach_start,
            duration: p.approach_duration,
            steps: p.approach_steps,
            radius: p.radius,
            revolutions: p.revolutions,
            plane: SweepPlane::Xz,
            travel: Some(Travel {
                from_y: -p.start_distance,
                zigzag_amplitude: p.zigzag_amplitude,
                zigzag_frequency: p.zigzag_frequency,
            }),
            spin: [0.0, 0.0, p.self_spin_deg.to_radians()],
            spin_axes: AxisMask::Z,
            spin_interpolation: Interpolation::Linear,
            rest_on_arrival: false,
        }),
        Phase::Bounce(jump),
    ]
}

fn bad_game_over(base: u32, i: u32, n: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.bad_game_over;
    let appear = base + i * p.drop_stagger;
    let land = appear + p.drop_duration;
    let flip_base = base + n * p.drop_stagger + p.drop_duration + p.bounce_duration + p.flip_gap;
    let flip_start = flip_base + i * p.flip_stagger;
    let flip_end = flip_start + p.flip_duration;
    let fall_end = flip_end + p.fall_duration;

    vec![
        Phase::Pose(vec![
            PoseKey::z(appear, p.drop_height),
            PoseKey::scale(appear, [1.0; 3]),
            PoseKey::rotation(appear, [0.0; 3]),
        ]),
        Phase::Bounce(Bounce::new(land, p.bounce_duration, p.bounce_height)),
        Phase::Pose(vec![
            PoseKey::rotation(flip_start, [0.0; 3]),
            PoseKey::z(flip_start, 0.0),
            PoseKey::rotation(flip_end, [p.flip_angle_deg.to_radians(), 0.0, 0.0]),
            PoseKey::scale(flip_end, p.flip_scale),
            PoseKey::z(flip_end, 0.0),
            PoseKey::z(fall_end, p.fall_depth),
            PoseKey::scale(fall_end, [1.0; 3]),
        ]),
    ]
}

fn good_game_over(base: u32, i: u32, n: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.good_game_over;
    let appear = base + i * p.rise_stagger;
    let rise_end = appear + p.rise_duration;
    let assemble_base =
        base + n * p.rise_stagger + p.rise_duration + p.spiral_duration + p.dance_gap;
    let dance_start = assemble_base + i * p.dance_stagger;
    let second_dance_start = assemble_base + p.dance_duration + p.dance_delay + i * p.dance_stagger;
    let tilt = deg3(p.dance_tilt_deg);

    vec![
        Phase::Pose(vec![
            PoseKey::z(appear, p.rise_depth),
            PoseKey::scale(appear, splat(p.rise_scale)),
            PoseKey::rotation(appear, [0.0; 3]),
            PoseKey::z(rise_end, 0.0),
            PoseKey::scale(rise_end, [1.0; 3]),
        ]),
        Phase::RadialSweep(RadialSweep {
            start: rise_end,
            duration: p.spiral_duration,
            steps: p.spiral_steps,
            radius: p.spiral_radius,
            revolutions: p.spiral_revolutions,
            plane: SweepPlane::Xy,
            travel: None,
            spin: deg3(p.spiral_spin_deg),
            spin_axes: AxisMask::XYZ,
            spin_interpolation: Interpolation::Bezier,
            rest_on_arrival: true,
        }),
        Phase::Wiggle {
            start: dance_start,
            duration: p.dance_duration,
            scale_amplitude: p.dance_scale,
            tilt,
            sign: 1.0,
            rest_at_end: false,
        },
        Phase::Wiggle {
            start: second_dance_start,
            duration: p.dance_duration,
            scale_amplitude: p.dance_scale,
            tilt,
            sign: -1.0,
            rest_at_end: true,
        },
    ]
}

fn elastic_wave(base: u32, i: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.elastic_wave;
    let s = base + i * p.stagger;
    vec![Phase::Pose(vec![
        PoseKey::scale(s, [0.0; 3]),
        PoseKey::scale(s + p.stretch_at, p.stretch),
        PoseKey::scale(s + p.squash_at, p.squash),
        PoseKey::scale(s + p.settle_at, p.settle),
        PoseKey::scale(s + p.rest_at, [1.0; 3]),
        PoseKey::z(s, 0.0),
        PoseKey::z(s + p.stretch_at, p.bump_height),
        PoseKey::z(s + p.squash_at, 0.0),
    ])]
}

fn tumble(base: u32, i: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.tumble;
    let s = base + i * p.stagger;
    let y_sign = if i % 2 == 0 { 1.0 } else { -1.0 };
    let spun = deg3([360.0 * p.x_revolutions, y_sign * 360.0 * p.y_revolutions, 0.0]);
    let landed = s + p.duration;
    vec![Phase::Pose(vec![
        PoseKey::scale(s, [0.0; 3]),
        PoseKey::rotation(s, spun),
        PoseKey::scale(s + p.duration / 2, [1.0; 3]),
        PoseKey::rotation(landed, [0.0; 3]),
        PoseKey::rotation(landed + p.kick_at, [p.kick_deg.to_radians(), 0.0, 0.0]),
        PoseKey::rotation(landed + p.settle_at, [0.0; 3]),
    ])]
}

fn digital_glitch(base: u32, i: u32, params: &StyleParams) -> Vec<Phase> {
    let p = &params.digital_glitch;
    let s = base + i * p.stagger;
    let impact = s + p.fall_duration;
    vec![
        Phase::Pose(vec![
            PoseKey::z(s, p.drop_height),
            PoseKey::scale(s, p.drop_scale),
            PoseKey::z(impact, 0.0),
            PoseKey::scale(impact, [1.0; 3]),
        ]),
        Phase::Jitter(Jitter {
            start: impact,
            duration: p.jitter_duration,
            step_min: p.jitter_step_min,
            step_max: p.jitter_step_max,
            offset: p.jitter_offset,
            scale_range: Some((p.jitter_scale_min, p.jitter_scale_max)),
            settle_delay: p.settle_delay,
        }),
    ]
}

fn slingshot_snap(base: u32, i: u32, params: &StyleParams, rng: &mut SlotRng) -> Vec<Phase> {
    let p = &params.slingshot_snap;
    let s = base + i * p.stagger;
    let release = s + p.tension_duration;
    let snap = release + p.snap_frames;
    let tilt = deg3([
        rng.uniform(-p.tilt_deg, p.tilt_deg),
        rng.uniform(-p.tilt_deg, p.tilt_deg),
        0.0,
    ]);
    vec![Phase::Pose(vec![
        PoseKey::z(s, 0.0),
        PoseKey::scale(s, [1.0; 3]),
        PoseKey::z(release, p.pull_depth),
        PoseKey::rotation(release, tilt),
        PoseKey::z(snap, p.overshoot_height),
        PoseKey::rotation(snap, [0.0; 3]),
        PoseKey::z(snap + p.settle_dip_at, p.settle_dip),
        PoseKey::z(snap + p.settle_at, 0.0),
    ])]
}

fn arcade_slam(base: u32, i: u32, params: &StyleParams, rng: &mut SlotRng) -> Vec<Phase> {
    let p = &params.arcade_slam;
    let s = base + i * p.stagger;
    let impact = s + p.slam_duration;
    let settle = impact + p.recoil_duration;
    let jitter_end = settle + p.jitter_duration;
    let spin = p.entry_spin_deg;
    let entry = deg3([
        rng.uniform(-spin, spin),
        rng.uniform(-spin, spin),
        rng.uniform(-spin, spin),
    ]);

    let mut recoil = Bounce::new(impact, p.recoil_duration, 0.0);
    recoil.arc = None;
    recoil.squash = splat(p.impact_scale);
    recoil.stretch = splat(p.recoil_scale);

    vec![
        Phase::Pose(vec![
            PoseKey::z(s, p.entry_depth),
            PoseKey::scale(s, splat(p.entry_scale)),
            PoseKey::rotation(s, entry),
            PoseKey::z(impact, 0.0),
            PoseKey::rotation(impact, [0.0; 3]),
        ]),
        Phase::Bounce(recoil),
        Phase::Jitter(Jitter {
            start: settle,
            duration: p.jitter_duration,
            step_min: p.jitter_step,
            step_max: p.jitter_step,
            offset: p.jitter_offset,
            scale_range: None,
            settle_delay: 0,
        }),
        Phase::PulseSeries {
            start: jitter_end,
            count: p.pulse_count,
            period: p.pulse_period,
            peak: p.pulse_peak,
            rise: p.pulse_rise,
            fall: p.pulse_fall,
        },
    ]
}

//! Per-style timing and amplitude parameters.
//!
//! Every field has the default the style was authored with (frame counts are
//! relative to a 60 fps scene, angles are degrees). All structs deserialize
//! with `#[serde(default)]`, so a JSON override only needs the fields it changes:
//!
//! ```json
//! { "daytona": { "snap_count": 2 }, "start_frame": 10 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::style::StyleTag;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    /// Frame at which slot 0 starts animating.
    pub start_frame: u32,
    pub daytona: DaytonaParams,
    pub circular_approach: CircularApproachParams,
    pub bad_game_over: BadGameOverParams,
    pub good_game_over: GoodGameOverParams,
    pub elastic_wave: ElasticWaveParams,
    pub tumble: TumbleParams,
    pub digital_glitch: DigitalGlitchParams,
    pub slingshot_snap: SlingshotSnapParams,
    pub arcade_slam: ArcadeSlamParams,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            start_frame: 1,
            daytona: DaytonaParams::default(),
            circular_approach: CircularApproachParams::default(),
            bad_game_over: BadGameOverParams::default(),
            good_game_over: GoodGameOverParams::default(),
            elastic_wave: ElasticWaveParams::default(),
            tumble: TumbleParams::default(),
            digital_glitch: DigitalGlitchParams::default(),
            slingshot_snap: SlingshotSnapParams::default(),
            arcade_slam: ArcadeSlamParams::default(),
        }
    }
}

impl StyleParams {
    /// Validate the shared fields and the parameter block of `style`. Blocks of
    /// other styles are not inspected.
    pub fn validate(&self, style: StyleTag) -> Result<()> {
        if self.start_frame == 0 {
            return Err(GenerateError::param("start_frame", "frames start at 1"));
        }
        if self.start_frame > MAX_PHASE_FRAMES {
            return Err(GenerateError::param(
                "start_frame",
                format!("must be <= {MAX_PHASE_FRAMES}, got {}", self.start_frame),
            ));
        }
        match style {
            StyleTag::Daytona => self.daytona.validate(),
            StyleTag::CircularApproach => self.circular_approach.validate(),
            StyleTag::BadGameOver => self.bad_game_over.validate(),
            StyleTag::GoodGameOver => self.good_game_over.validate(),
            StyleTag::ElasticWave => self.elastic_wave.validate(),
            StyleTag::Tumble3d => self.tumble.validate(),
            StyleTag::DigitalGlitch => self.digital_glitch.validate(),
            StyleTag::SlingshotSnap => self.slingshot_snap.validate(),
            StyleTag::ArcadeSlam => self.arcade_slam.validate(),
        }
    }
}

/// Upper bound on any single frame-count parameter.
pub const MAX_PHASE_FRAMES: u32 = 100_000;
/// Upper bound on step/repeat counts.
pub const MAX_STEPS: u32 = 1_000;

/// Small helper to keep the per-block checks readable.
struct Check(&'static str);

impl Check {
    fn err(&self, field: &str, reason: impl Into<String>) -> GenerateError {
        GenerateError::param(format!("{}.{field}", self.0), reason)
    }

    fn duration(&self, field: &str, v: u32) -> Result<()> {
        if v == 0 {
            return Err(self.err(field, "must be > 0"));
        }
        self.frames(field, v)
    }

    /// Offsets and staggers; zero is allowed.
    fn frames(&self, field: &str, v: u32) -> Result<()> {
        if v > MAX_PHASE_FRAMES {
            return Err(self.err(field, format!("must be <= {MAX_PHASE_FRAMES}, got {v}")));
        }
        Ok(())
    }

    fn count(&self, field: &str, v: u32, min: u32) -> Result<()> {
        if v < min || v > MAX_STEPS {
            return Err(self.err(field, format!("must be within [{min}, {MAX_STEPS}], got {v}")));
        }
        Ok(())
    }

    /// Durations of phases that also key their midpoint.
    fn span(&self, field: &str, v: u32) -> Result<()> {
        if v < 2 {
            return Err(self.err(field, format!("must be >= 2 so the midpoint key gets its own frame, got {v}")));
        }
        self.frames(field, v)
    }

    /// Sample count of a phase spread over `duration` frames.
    fn steps(&self, field: &str, v: u32, duration: u32) -> Result<()> {
        self.count(field, v, 1)?;
        if v > duration {
            return Err(self.err(field, format!("must be <= the phase duration ({duration}), got {v}")));
        }
        Ok(())
    }

    fn finite(&self, field: &str, v: f32) -> Result<()> {
        if !v.is_finite() {
            return Err(self.err(field, format!("must be finite, got {v}")));
        }
        Ok(())
    }

    fn non_negative(&self, field: &str, v: f32) -> Result<()> {
        self.finite(field, v)?;
        if v < 0.0 {
            return Err(self.err(field, format!("must be >= 0, got {v}")));
        }
        Ok(())
    }

    fn positive(&self, field: &str, v: f32) -> Result<()> {
        self.finite(field, v)?;
        if v <= 0.0 {
            return Err(self.err(field, format!("must be > 0, got {v}")));
        }
        Ok(())
    }

    fn positive3(&self, field: &str, v: [f32; 3]) -> Result<()> {
        v.iter().try_for_each(|c| self.positive(field, *c))
    }

    fn finite3(&self, field: &str, v: [f32; 3]) -> Result<()> {
        v.iter().try_for_each(|c| self.finite(field, *c))
    }

    fn ascending(&self, fields: &str, frames: &[u32]) -> Result<()> {
        if frames.first() == Some(&0)
            || frames.last().is_some_and(|v| *v > MAX_PHASE_FRAMES)
            || frames.windows(2).any(|w| w[0] >= w[1])
        {
            return Err(self.err(fields, format!("offsets must be > 0 and strictly increasing, got {frames:?}")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaytonaParams {
    pub pop_in_stagger: u32,
    pub pop_in_duration: u32,
    pub pop_in_from: f32,
    pub overshoot: f32,
    /// Position of the overshoot key as a fraction of the pop-in.
    pub overshoot_at: f32,
    pub shuffle_duration: u32,
    pub shuffle_count: u32,
    pub shuffle_amplitude: f32,
    /// Z lift as a fraction of the current shuffle amplitude.
    pub shuffle_lift: f32,
    /// Offset of slot 0's first snap hold from `start_frame`.
    pub snap_offset: u32,
    pub snap_stagger: u32,
    pub hold_duration: u32,
    pub transition_duration: u32,
    pub snap_count: u32,
    pub snap_angle_deg: f32,
}

impl Default for DaytonaParams {
    fn default() -> Self {
        Self {
            pop_in_stagger: 4,
            pop_in_duration: 10,
            pop_in_from: 0.001,
            overshoot: 1.2,
            overshoot_at: 0.6,
            shuffle_duration: 40,
            shuffle_count: 6,
            shuffle_amplitude: 0.3,
            shuffle_lift: 0.5,
            snap_offset: 25,
            snap_stagger: 12,
            hold_duration: 60,
            transition_duration: 8,
            snap_count: 4,
            snap_angle_deg: 90.0,
        }
    }
}

impl DaytonaParams {
    fn validate(&self) -> Result<()> {
        let c = Check("daytona");
        c.frames("pop_in_stagger", self.pop_in_stagger)?;
        c.duration("pop_in_duration", self.pop_in_duration)?;
        c.positive("pop_in_from", self.pop_in_from)?;
        c.positive("overshoot", self.overshoot)?;
        c.finite("overshoot_at", self.overshoot_at)?;
        let offset = (self.overshoot_at * self.pop_in_duration as f32).round();
        if self.overshoot_at <= 0.0
            || self.overshoot_at >= 1.0
            || offset < 1.0
            || offset >= self.pop_in_duration as f32
        {
            return Err(c.err(
                "overshoot_at",
                format!(
                    "must fall strictly inside the {}-frame pop-in, got {}",
                    self.pop_in_duration, self.overshoot_at
                ),
            ));
        }
        c.duration("shuffle_duration", self.shuffle_duration)?;
        c.steps("shuffle_count", self.shuffle_count, self.shuffle_duration)?;
        c.non_negative("shuffle_amplitude", self.shuffle_amplitude)?;
        c.non_negative("shuffle_lift", self.shuffle_lift)?;
        c.frames("snap_offset", self.snap_offset)?;
        c.frames("snap_stagger", self.snap_stagger)?;
        c.duration("hold_duration", self.hold_duration)?;
        c.duration("transition_duration", self.transition_duration)?;
        c.count("snap_count", self.snap_count, 0)?;
        c.finite("snap_angle_deg", self.snap_angle_deg)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularApproachParams {
    /// Also sets the per-slot stagger (half of it).
    pub approach_duration: u32,
    pub approach_steps: u32,
    pub radius: f32,
    pub revolutions: f32,
    /// Distance along -Y the slot travels in from.
    pub start_distance: f32,
    pub zigzag_amplitude: f32,
    pub zigzag_frequency: f32,
    pub self_spin_deg: f32,
    pub jump_duration: u32,
    pub jump_delay: u32,
    pub jump_height: f32,
    pub jump_spin_deg: f32,
    pub jump_recover: u32,
}

impl Default for CircularApproachParams {
    fn default() -> Self {
        Self {
            approach_duration: 120,
            approach_steps: 40,
            radius: 2.0,
            revolutions: 2.0,
            start_distance: 20.0,
            zigzag_amplitude: 1.0,
            zigzag_frequency: 4.0,
            self_spin_deg: 360.0,
            jump_duration: 30,
            jump_delay: 5,
            jump_height: 1.0,
            jump_spin_deg: 360.0,
            jump_recover: 5,
        }
    }
}

impl CircularApproachParams {
    fn validate(&self) -> Result<()> {
        let c = Check("circular_approach");
        c.duration("approach_duration", self.approach_duration)?;
        c.steps("approach_steps", self.approach_steps, self.approach_duration)?;
        c.non_negative("radius", self.radius)?;
        c.finite("revolutions", self.revolutions)?;
        c.finite("start_distance", self.start_distance)?;
        c.non_negative("zigzag_amplitude", self.zigzag_amplitude)?;
        c.finite("zigzag_frequency", self.zigzag_frequency)?;
        c.finite("self_spin_deg", self.self_spin_deg)?;
        c.span("jump_duration", self.jump_duration)?;
        c.frames("jump_delay", self.jump_delay)?;
        c.non_negative("jump_height", self.jump_height)?;
        c.finite("jump_spin_deg", self.jump_spin_deg)?;
        c.duration("jump_recover", self.jump_recover)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadGameOverParams {
    pub drop_stagger: u32,
    pub drop_height: f32,
    pub drop_duration: u32,
    pub bounce_duration: u32,
    pub bounce_height: f32,
    /// Pause between the last slot's bounce and the first flip.
    pub flip_gap: u32,
    pub flip_stagger: u32,
    pub flip_duration: u32,
    pub flip_angle_deg: f32,
    pub flip_scale: [f32; 3],
    pub fall_duration: u32,
    pub fall_depth: f32,
}

impl Default for BadGameOverParams {
    fn default() -> Self {
        Self {
            drop_stagger: 15,
            drop_height: 5.0,
            drop_duration: 30,
            bounce_duration: 15,
            bounce_height: 0.5,
            flip_gap: 20,
            flip_stagger: 5,
            flip_duration: 20,
            flip_angle_deg: 180.0,
            flip_scale: [1.1, 1.1, 0.9],
            fall_duration: 30,
            fall_depth: -10.0,
        }
    }
}

impl BadGameOverParams {
    fn validate(&self) -> Result<()> {
        let c = Check("bad_game_over");
        c.frames("drop_stagger", self.drop_stagger)?;
        c.frames("flip_gap", self.flip_gap)?;
        c.frames("flip_stagger", self.flip_stagger)?;
        c.finite("drop_height", self.drop_height)?;
        c.duration("drop_duration", self.drop_duration)?;
        c.span("bounce_duration", self.bounce_duration)?;
        c.non_negative("bounce_height", self.bounce_height)?;
        c.duration("flip_duration", self.flip_duration)?;
        c.finite("flip_angle_deg", self.flip_angle_deg)?;
        c.positive3("flip_scale", self.flip_scale)?;
        c.duration("fall_duration", self.fall_duration)?;
        c.finite("fall_depth", self.fall_depth)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoodGameOverParams {
    pub rise_stagger: u32,
    pub rise_depth: f32,
    pub rise_scale: f32,
    pub rise_duration: u32,
    pub spiral_duration: u32,
    pub spiral_steps: u32,
    pub spiral_radius: f32,
    pub spiral_revolutions: f32,
    pub spiral_spin_deg: [f32; 3],
    /// Pause between the last slot's spiral and the first dance.
    pub dance_gap: u32,
    pub dance_stagger: u32,
    pub dance_duration: u32,
    pub dance_delay: u32,
    pub dance_scale: f32,
    pub dance_tilt_deg: [f32; 3],
}

impl Default for GoodGameOverParams {
    fn default() -> Self {
        Self {
            rise_stagger: 15,
            rise_depth: -5.0,
            rise_scale: 0.5,
            rise_duration: 60,
            spiral_duration: 60,
            spiral_steps: 20,
            spiral_radius: 0.5,
            spiral_revolutions: 2.0,
            spiral_spin_deg: [360.0, 180.0, 720.0],
            dance_gap: 20,
            dance_stagger: 5,
            dance_duration: 30,
            dance_delay: 30,
            dance_scale: 0.1,
            dance_tilt_deg: [5.0, 5.0, 10.0],
        }
    }
}

impl GoodGameOverParams {
    fn validate(&self) -> Result<()> {
        let c = Check("good_game_over");
        c.frames("rise_stagger", self.rise_stagger)?;
        c.frames("dance_gap", self.dance_gap)?;
        c.frames("dance_stagger", self.dance_stagger)?;
        c.frames("dance_delay", self.dance_delay)?;
        c.finite("rise_depth", self.rise_depth)?;
        c.positive("rise_scale", self.rise_scale)?;
        c.duration("rise_duration", self.rise_duration)?;
        c.duration("spiral_duration", self.spiral_duration)?;
        c.steps("spiral_steps", self.spiral_steps, self.spiral_duration)?;
        c.non_negative("spiral_radius", self.spiral_radius)?;
        c.finite("spiral_revolutions", self.spiral_revolutions)?;
        c.finite3("spiral_spin_deg", self.spiral_spin_deg)?;
        c.span("dance_duration", self.dance_duration)?;
        c.non_negative("dance_scale", self.dance_scale)?;
        if self.dance_scale >= 1.0 {
            return Err(c.err("dance_scale", "must be < 1 so the low beat keeps a positive scale"));
        }
        c.finite3("dance_tilt_deg", self.dance_tilt_deg)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticWaveParams {
    pub stagger: u32,
    pub stretch_at: u32,
    pub squash_at: u32,
    pub settle_at: u32,
    pub rest_at: u32,
    pub stretch: [f32; 3],
    pub squash: [f32; 3],
    pub settle: [f32; 3],
    pub bump_height: f32,
}

impl Default for ElasticWaveParams {
    fn default() -> Self {
        Self {
            stagger: 10,
            stretch_at: 10,
            squash_at: 20,
            settle_at: 28,
            rest_at: 35,
            stretch: [0.6, 0.6, 2.0],
            squash: [1.5, 1.5, 0.5],
            settle: [0.9, 0.9, 1.1],
            bump_height: 1.0,
        }
    }
}

impl ElasticWaveParams {
    fn validate(&self) -> Result<()> {
        let c = Check("elastic_wave");
        c.frames("stagger", self.stagger)?;
        c.ascending(
            "stretch_at/squash_at/settle_at/rest_at",
            &[self.stretch_at, self.squash_at, self.settle_at, self.rest_at],
        )?;
        c.positive3("stretch", self.stretch)?;
        c.positive3("squash", self.squash)?;
        c.positive3("settle", self.settle)?;
        c.finite("bump_height", self.bump_height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TumbleParams {
    pub stagger: u32,
    pub duration: u32,
    pub x_revolutions: f32,
    /// Sign alternates with slot parity (even slots positive).
    pub y_revolutions: f32,
    pub kick_deg: f32,
    pub kick_at: u32,
    pub settle_at: u32,
}

impl Default for TumbleParams {
    fn default() -> Self {
        Self {
            stagger: 10,
            duration: 60,
            x_revolutions: 2.0,
            y_revolutions: 1.5,
            kick_deg: -10.0,
            kick_at: 5,
            settle_at: 15,
        }
    }
}

impl TumbleParams {
    fn validate(&self) -> Result<()> {
        let c = Check("tumble");
        c.frames("stagger", self.stagger)?;
        c.frames("duration", self.duration)?;
        if self.duration < 2 {
            return Err(c.err("duration", "must be >= 2 so the scale-up lands before the rotation resolves"));
        }
        c.finite("x_revolutions", self.x_revolutions)?;
        c.finite("y_revolutions", self.y_revolutions)?;
        c.finite("kick_deg", self.kick_deg)?;
        c.ascending("kick_at/settle_at", &[self.kick_at, self.settle_at])
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalGlitchParams {
    pub stagger: u32,
    pub drop_height: f32,
    pub drop_scale: [f32; 3],
    pub fall_duration: u32,
    pub jitter_duration: u32,
    pub jitter_step_min: u32,
    pub jitter_step_max: u32,
    pub jitter_offset: f32,
    pub jitter_scale_min: f32,
    pub jitter_scale_max: f32,
    pub settle_delay: u32,
}

impl Default for DigitalGlitchParams {
    fn default() -> Self {
        Self {
            stagger: 5,
            drop_height: 10.0,
            drop_scale: [0.5, 0.5, 3.0],
            fall_duration: 20,
            jitter_duration: 30,
            jitter_step_min: 2,
            jitter_step_max: 4,
            jitter_offset: 0.2,
            jitter_scale_min: 0.8,
            jitter_scale_max: 1.2,
            settle_delay: 5,
        }
    }
}

impl DigitalGlitchParams {
    fn validate(&self) -> Result<()> {
        let c = Check("digital_glitch");
        c.frames("stagger", self.stagger)?;
        c.frames("settle_delay", self.settle_delay)?;
        c.finite("drop_height", self.drop_height)?;
        c.positive3("drop_scale", self.drop_scale)?;
        c.duration("fall_duration", self.fall_duration)?;
        c.duration("jitter_duration", self.jitter_duration)?;
        c.duration("jitter_step_min", self.jitter_step_min)?;
        c.frames("jitter_step_max", self.jitter_step_max)?;
        if self.jitter_step_max < self.jitter_step_min {
            return Err(c.err("jitter_step_max", "must be >= jitter_step_min"));
        }
        c.non_negative("jitter_offset", self.jitter_offset)?;
        c.positive("jitter_scale_min", self.jitter_scale_min)?;
        c.positive("jitter_scale_max", self.jitter_scale_max)?;
        if self.jitter_scale_max < self.jitter_scale_min {
            return Err(c.err("jitter_scale_max", "must be >= jitter_scale_min"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlingshotSnapParams {
    pub stagger: u32,
    pub tension_duration: u32,
    pub pull_depth: f32,
    /// Bound of the random X/Y tilt applied while under tension.
    pub tilt_deg: f32,
    pub snap_frames: u32,
    pub overshoot_height: f32,
    pub settle_dip: f32,
    pub settle_dip_at: u32,
    pub settle_at: u32,
}

impl Default for SlingshotSnapParams {
    fn default() -> Self {
        Self {
            stagger: 5,
            tension_duration: 40,
            pull_depth: -5.0,
            tilt_deg: 5.0,
            snap_frames: 4,
            overshoot_height: 2.0,
            settle_dip: -0.5,
            settle_dip_at: 8,
            settle_at: 14,
        }
    }
}

impl SlingshotSnapParams {
    fn validate(&self) -> Result<()> {
        let c = Check("slingshot_snap");
        c.frames("stagger", self.stagger)?;
        c.duration("tension_duration", self.tension_duration)?;
        c.finite("pull_depth", self.pull_depth)?;
        c.non_negative("tilt_deg", self.tilt_deg)?;
        c.duration("snap_frames", self.snap_frames)?;
        c.finite("overshoot_height", self.overshoot_height)?;
        c.finite("settle_dip", self.settle_dip)?;
        c.ascending("settle_dip_at/settle_at", &[self.settle_dip_at, self.settle_at])
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeSlamParams {
    pub stagger: u32,
    pub entry_depth: f32,
    pub entry_scale: f32,
    /// Bound of the random entry rotation on each axis.
    pub entry_spin_deg: f32,
    pub slam_duration: u32,
    pub impact_scale: f32,
    pub recoil_scale: f32,
    pub recoil_duration: u32,
    pub jitter_duration: u32,
    pub jitter_step: u32,
    pub jitter_offset: f32,
    pub pulse_count: u32,
    pub pulse_period: u32,
    pub pulse_peak: f32,
    pub pulse_rise: u32,
    pub pulse_fall: u32,
}

impl Default for ArcadeSlamParams {
    fn default() -> Self {
        Self {
            stagger: 2,
            entry_depth: -40.0,
            entry_scale: 0.1,
            entry_spin_deg: 720.0,
            slam_duration: 10,
            impact_scale: 2.0,
            recoil_scale: 0.8,
            recoil_duration: 8,
            jitter_duration: 30,
            jitter_step: 2,
            jitter_offset: 0.1,
            pulse_count: 3,
            pulse_period: 20,
            pulse_peak: 1.15,
            pulse_rise: 5,
            pulse_fall: 10,
        }
    }
}

impl ArcadeSlamParams {
    fn validate(&self) -> Result<()> {
        let c = Check("arcade_slam");
        c.frames("stagger", self.stagger)?;
        c.finite("entry_depth", self.entry_depth)?;
        c.positive("entry_scale", self.entry_scale)?;
        c.non_negative("entry_spin_deg", self.entry_spin_deg)?;
        c.duration("slam_duration", self.slam_duration)?;
        c.positive("impact_scale", self.impact_scale)?;
        c.positive("recoil_scale", self.recoil_scale)?;
        c.span("recoil_duration", self.recoil_duration)?;
        c.duration("jitter_duration", self.jitter_duration)?;
        c.duration("jitter_step", self.jitter_step)?;
        c.non_negative("jitter_offset", self.jitter_offset)?;
        c.count("pulse_count", self.pulse_count, 0)?;
        c.duration("pulse_period", self.pulse_period)?;
        c.positive("pulse_peak", self.pulse_peak)?;
        c.ascending("pulse_rise/pulse_fall", &[self.pulse_rise, self.pulse_fall])?;
        if self.pulse_fall > self.pulse_period {
            return Err(c.err("pulse_fall", "a pulse must end within its period"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_for_every_style() {
        let p = StyleParams::default();
        for style in StyleTag::ALL {
            assert_eq!(p.validate(style), Ok(()), "{style}");
        }
    }

    #[test]
    fn zero_duration_is_rejected_with_qualified_name() {
        let mut p = StyleParams::default();
        p.daytona.shuffle_duration = 0;
        match p.validate(StyleTag::Daytona) {
            Err(GenerateError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "daytona.shuffle_duration")
            }
            other => panic!("unexpected {other:?}"),
        }
        // Other styles do not look at the Daytona block.
        assert!(p.validate(StyleTag::ElasticWave).is_ok());
    }

    #[test]
    fn amplitude_ranges_are_checked() {
        let mut p = StyleParams::default();
        p.circular_approach.radius = -1.0;
        assert!(p.validate(StyleTag::CircularApproach).is_err());

        let mut p = StyleParams::default();
        p.digital_glitch.jitter_scale_min = 1.5;
        assert!(p.validate(StyleTag::DigitalGlitch).is_err());

        let mut p = StyleParams::default();
        p.arcade_slam.pulse_fall = 30;
        assert!(p.validate(StyleTag::ArcadeSlam).is_err());

        let mut p = StyleParams::default();
        p.elastic_wave.squash_at = p.elastic_wave.stretch_at;
        assert!(p.validate(StyleTag::ElasticWave).is_err());

        let mut p = StyleParams::default();
        p.good_game_over.spiral_spin_deg[1] = f32::NAN;
        assert!(p.validate(StyleTag::GoodGameOver).is_err());
    }

    #[test]
    fn start_frame_zero_is_rejected() {
        let p = StyleParams {
            start_frame: 0,
            ..StyleParams::default()
        };
        assert!(matches!(
            p.validate(StyleTag::Tumble3d),
            Err(GenerateError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn partial_json_override_keeps_defaults() {
        let p: StyleParams =
            serde_json::from_str(r#"{ "daytona": { "snap_count": 2 }, "start_frame": 10 }"#)
                .unwrap();
        assert_eq!(p.start_frame, 10);
        assert_eq!(p.daytona.snap_count, 2);
        assert_eq!(p.daytona.hold_duration, 60);
        assert_eq!(p.arcade_slam, ArcadeSlamParams::default());
    }

    #[test]
    fn frame_and_step_counts_are_capped() {
        let mut p = StyleParams::default();
        p.bad_game_over.drop_stagger = MAX_PHASE_FRAMES + 1;
        assert!(p.validate(StyleTag::BadGameOver).is_err());

        let mut p = StyleParams::default();
        p.good_game_over.spiral_steps = MAX_STEPS + 1;
        assert!(p.validate(StyleTag::GoodGameOver).is_err());

        let mut p = StyleParams::default();
        p.daytona.snap_count = 0;
        assert!(p.validate(StyleTag::Daytona).is_ok());
        p.daytona.shuffle_count = 0;
        assert!(p.validate(StyleTag::Daytona).is_err());
    }

    fn rejected_field(p: &StyleParams, style: StyleTag) -> String {
        match p.validate(style) {
            Err(GenerateError::InvalidParameter { name, .. }) => name,
            other => panic!("{style}: unexpected {other:?}"),
        }
    }

    #[test]
    fn overshoot_must_sit_strictly_inside_the_pop_in() {
        for at in [0.0, 1.0, -0.2, 1.5, f32::NAN] {
            let mut p = StyleParams::default();
            p.daytona.overshoot_at = at;
            assert_eq!(rejected_field(&p, StyleTag::Daytona), "daytona.overshoot_at", "{at}");
        }

        // 0.04 of a 10-frame pop-in rounds onto the appear frame.
        let mut p = StyleParams::default();
        p.daytona.overshoot_at = 0.04;
        assert_eq!(rejected_field(&p, StyleTag::Daytona), "daytona.overshoot_at");
        p.daytona.overshoot_at = 0.96;
        assert_eq!(rejected_field(&p, StyleTag::Daytona), "daytona.overshoot_at");

        // A one-frame pop-in has no interior frame at all.
        let mut p = StyleParams::default();
        p.daytona.pop_in_duration = 1;
        assert_eq!(rejected_field(&p, StyleTag::Daytona), "daytona.overshoot_at");

        let mut p = StyleParams::default();
        p.daytona.pop_in_duration = 2;
        p.daytona.overshoot_at = 0.5;
        assert_eq!(p.validate(StyleTag::Daytona), Ok(()));
    }

    #[test]
    fn midpoint_phases_need_two_frames() {
        let mut p = StyleParams::default();
        p.bad_game_over.bounce_duration = 1;
        assert_eq!(rejected_field(&p, StyleTag::BadGameOver), "bad_game_over.bounce_duration");

        let mut p = StyleParams::default();
        p.good_game_over.dance_duration = 1;
        assert_eq!(rejected_field(&p, StyleTag::GoodGameOver), "good_game_over.dance_duration");

        let mut p = StyleParams::default();
        p.arcade_slam.recoil_duration = 1;
        assert_eq!(rejected_field(&p, StyleTag::ArcadeSlam), "arcade_slam.recoil_duration");

        let mut p = StyleParams::default();
        p.circular_approach.jump_duration = 1;
        assert_eq!(
            rejected_field(&p, StyleTag::CircularApproach),
            "circular_approach.jump_duration"
        );

        let mut p = StyleParams::default();
        p.bad_game_over.bounce_duration = 2;
        p.good_game_over.dance_duration = 2;
        p.arcade_slam.recoil_duration = 2;
        p.circular_approach.jump_duration = 2;
        for style in [
            StyleTag::BadGameOver,
            StyleTag::GoodGameOver,
            StyleTag::ArcadeSlam,
            StyleTag::CircularApproach,
        ] {
            assert_eq!(p.validate(style), Ok(()), "{style}");
        }
    }

    #[test]
    fn sample_counts_fit_their_phase() {
        let mut p = StyleParams::default();
        p.daytona.shuffle_count = p.daytona.shuffle_duration + 1;
        assert_eq!(rejected_field(&p, StyleTag::Daytona), "daytona.shuffle_count");

        let mut p = StyleParams::default();
        p.good_game_over.spiral_steps = p.good_game_over.spiral_duration + 1;
        assert_eq!(rejected_field(&p, StyleTag::GoodGameOver), "good_game_over.spiral_steps");

        let mut p = StyleParams::default();
        p.circular_approach.approach_steps = p.circular_approach.approach_duration + 1;
        assert_eq!(
            rejected_field(&p, StyleTag::CircularApproach),
            "circular_approach.approach_steps"
        );
    }
}

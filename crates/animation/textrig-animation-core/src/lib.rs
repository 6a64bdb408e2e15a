//! TextRig Animation Core (host-agnostic)
//!
//! Generates per-letter keyframe plans for rigged 3D text. A plan is a pure
//! function of (style, slot count, parameters, seed); hosts apply it to a rig
//! through [`KeyframeSink`] or consume the JSON export.

pub mod binding;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod ids;
pub mod interp;
pub mod params;
pub mod phase;
pub mod rng;
pub mod sampling;
pub mod style;
pub mod styles;
pub mod timeline;
pub mod value;

// Re-exports for consumers (adapters)
pub use binding::{KeyframeSink, RecordingSink};
pub use config::Config;
pub use data::{export_plan_json, AnimationPlan, Keyframe, SlotTimeline, POST_ROLL_FRAMES};
pub use engine::{generate, parse_request_json, GenerateRequest, Generator, MAX_SLOTS};
pub use error::{GenerateError, Result};
pub use ids::{count_slots, SlotId};
pub use params::{
    ArcadeSlamParams, BadGameOverParams, CircularApproachParams, DaytonaParams,
    DigitalGlitchParams, ElasticWaveParams, GoodGameOverParams, SlingshotSnapParams, StyleParams,
    TumbleParams,
};
pub use sampling::{sample_curve, sample_slot, Pose};
pub use style::StyleTag;
pub use value::{Axis, AxisMask, Channel, Interpolation};

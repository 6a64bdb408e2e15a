//! Plan data model: keyframes, per-slot timelines and the aggregated plan.

use serde::{Deserialize, Serialize};

use crate::ids::SlotId;
use crate::style::StyleTag;
use crate::value::{Axis, AxisMask, Channel, Interpolation};

/// Frames appended after the last emitted key so the final pose is held on screen.
pub const POST_ROLL_FRAMES: u32 = 50;

/// A single time-stamped write to one transform channel of a slot's joint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Integer frame index, >= 1.
    pub frame: u32,
    pub channel: Channel,
    /// Components of `value` this key writes; the others are ignored.
    pub axes: AxisMask,
    /// Translation/scale in scene units, rotation as XYZ Euler radians.
    pub value: [f32; 3],
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl Keyframe {
    #[inline]
    pub fn writes(&self, channel: Channel, axis: Axis) -> bool {
        self.channel == channel && self.axes.contains(axis)
    }
}

/// Ordered keyframes for one letter slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotTimeline {
    pub slot: SlotId,
    pub keys: Vec<Keyframe>,
}

impl SlotTimeline {
    /// Keys touching (channel, axis), in emission order, as (frame, component value).
    pub fn samples(&self, channel: Channel, axis: Axis) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.keys
            .iter()
            .filter(move |k| k.writes(channel, axis))
            .map(move |k| (k.frame, k.value[axis.index()]))
    }

    /// Keys of a channel, in emission order.
    pub fn channel_keys(&self, channel: Channel) -> impl Iterator<Item = &Keyframe> + '_ {
        self.keys.iter().filter(move |k| k.channel == channel)
    }

    /// Last value written to (channel, axis), if any.
    pub fn last_value(&self, channel: Channel, axis: Axis) -> Option<f32> {
        self.samples(channel, axis).last().map(|(_, v)| v)
    }

    /// Highest frame carried by any key of this slot.
    pub fn max_frame(&self) -> Option<u32> {
        self.keys.iter().map(|k| k.frame).max()
    }
}

/// Generated keyframes for every slot of a text, plus the scene end frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    pub style: StyleTag,
    pub slot_count: u32,
    /// One timeline per slot; `timelines[i].slot == SlotId(i)`.
    pub timelines: Vec<SlotTimeline>,
    /// Last emitted frame plus [`POST_ROLL_FRAMES`].
    pub end_frame: u32,
}

impl AnimationPlan {
    pub fn timeline(&self, slot: SlotId) -> Option<&SlotTimeline> {
        self.timelines.get(slot.index())
    }

    /// Highest frame across all slots and channels.
    pub fn max_key_frame(&self) -> Option<u32> {
        self.timelines.iter().filter_map(|t| t.max_frame()).max()
    }

    /// Check structural invariants: slot indices are dense and ordered, frames are
    /// >= 1 and strictly increase per (slot, channel, axis), and the end frame
    /// covers the last key plus post-roll.
    pub fn validate(&self) -> Result<(), String> {
        if self.timelines.len() != self.slot_count as usize {
            return Err(format!(
                "plan declares {} slots but carries {} timelines",
                self.slot_count,
                self.timelines.len()
            ));
        }
        for (i, tl) in self.timelines.iter().enumerate() {
            if tl.slot.index() != i {
                return Err(format!("timeline {i} is tagged with slot {}", tl.slot.0));
            }
            for key in &tl.keys {
                if key.frame == 0 {
                    return Err(format!("slot {i}: key at frame 0"));
                }
                if key.axes.is_empty() {
                    return Err(format!("slot {i}: key at frame {} writes no axes", key.frame));
                }
                if key.value.iter().any(|v| !v.is_finite()) {
                    return Err(format!("slot {i}: non-finite value at frame {}", key.frame));
                }
            }
            for channel in Channel::ALL {
                for axis in Axis::ALL {
                    let mut last = 0u32;
                    for (frame, _) in tl.samples(channel, axis) {
                        if frame <= last {
                            return Err(format!(
                                "slot {i}: {channel:?}.{axis:?} frame {frame} does not follow {last}"
                            ));
                        }
                        last = frame;
                    }
                }
            }
        }
        if let Some(max) = self.max_key_frame() {
            if self.end_frame != max + POST_ROLL_FRAMES {
                return Err(format!(
                    "end_frame {} != last key {max} + {POST_ROLL_FRAMES}",
                    self.end_frame
                ));
            }
        }
        Ok(())
    }
}

/// Export a plan as serde_json::Value (stable schema for hosts and FFI).
pub fn export_plan_json(plan: &AnimationPlan) -> serde_json::Value {
    serde_json::to_value(plan).unwrap_or(serde_json::Value::Null)
}

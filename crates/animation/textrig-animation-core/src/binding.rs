//! Host seam: delivering a plan's keys to a rig.
//!
//! Hosts (Blender bridge, wasm, test recorders) implement [`KeyframeSink`] and
//! pass it to [`AnimationPlan::apply`]. Keys arrive slot by slot, in emission
//! order, addressed by the joint name of the slot.

use crate::data::{AnimationPlan, Keyframe};
use crate::ids::SlotId;

/// Receiver of generated keys.
pub trait KeyframeSink {
    fn key(&mut self, bone: &str, slot: SlotId, key: &Keyframe);

    /// Called once after all keys with the scene end frame.
    fn end_frame(&mut self, _frame: u32) {}
}

impl AnimationPlan {
    /// Stream every key of the plan into `sink`. Returns the number of keys delivered.
    pub fn apply<S: KeyframeSink + ?Sized>(&self, sink: &mut S) -> usize {
        let mut delivered = 0;
        for tl in &self.timelines {
            let bone = tl.slot.bone_name();
            for key in &tl.keys {
                sink.key(&bone, tl.slot, key);
                delivered += 1;
            }
        }
        sink.end_frame(self.end_frame);
        log::trace!("applied {delivered} keys across {} slots", self.timelines.len());
        delivered
    }
}

/// Sink that records `(bone, key)` pairs; handy for hosts that batch writes.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub keys: Vec<(String, Keyframe)>,
    pub end_frame: Option<u32>,
}

impl KeyframeSink for RecordingSink {
    fn key(&mut self, bone: &str, _slot: SlotId, key: &Keyframe) {
        self.keys.push((bone.to_string(), key.clone()));
    }

    fn end_frame(&mut self, frame: u32) {
        self.end_frame = Some(frame);
    }
}

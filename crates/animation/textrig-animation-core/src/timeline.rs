//! Incremental builder for a slot's keyframes.

use hashbrown::HashMap;

use crate::data::{Keyframe, SlotTimeline};
use crate::error::{GenerateError, Result};
use crate::ids::SlotId;
use crate::value::{Axis, AxisMask, Channel, Interpolation};

/// Collects keys for one slot while enforcing per-(channel, axis) ordering.
///
/// Keying a frame that already holds a key for the same channel/axis replaces
/// that component in place, like re-inserting a key on a host F-curve. Keying
/// an earlier frame is a phase-timing error.
#[derive(Debug)]
pub struct TimelineBuilder {
    slot: SlotId,
    keys: Vec<Keyframe>,
    /// (channel, axis) -> (last frame, index of the key holding it)
    last: HashMap<(Channel, Axis), (u32, usize)>,
}

impl TimelineBuilder {
    pub fn new(slot: SlotId) -> Self {
        Self {
            slot,
            keys: Vec::new(),
            last: HashMap::new(),
        }
    }

    #[inline]
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Insert a Bezier key.
    pub fn key(&mut self, frame: u32, channel: Channel, axes: AxisMask, value: [f32; 3]) -> Result<()> {
        self.key_with(frame, channel, axes, value, Interpolation::Bezier)
    }

    pub fn key_with(
        &mut self,
        frame: u32,
        channel: Channel,
        axes: AxisMask,
        value: [f32; 3],
        interpolation: Interpolation,
    ) -> Result<()> {
        if frame == 0 {
            return Err(GenerateError::param(
                "start_frame",
                format!("slot {} would key frame 0", self.slot.0),
            ));
        }
        for axis in axes.iter() {
            if let Some(&(last, _)) = self.last.get(&(channel, axis)) {
                if frame < last {
                    return Err(GenerateError::param(
                        "phase timing",
                        format!(
                            "slot {}: {channel:?}.{axis:?} keyed at frame {frame} after frame {last}; phases overlap",
                            self.slot.0
                        ),
                    ));
                }
            }
        }

        let mut fresh = axes;
        for axis in axes.iter() {
            if let Some(&(last, idx)) = self.last.get(&(channel, axis)) {
                if last == frame {
                    let existing = &mut self.keys[idx];
                    existing.value[axis.index()] = value[axis.index()];
                    existing.interpolation = interpolation;
                    fresh = fresh.without(axis);
                }
            }
        }
        if fresh.is_empty() {
            return Ok(());
        }

        let idx = self.keys.len();
        self.keys.push(Keyframe {
            frame,
            channel,
            axes: fresh,
            value,
            interpolation,
        });
        for axis in fresh.iter() {
            self.last.insert((channel, axis), (frame, idx));
        }
        Ok(())
    }

    /// Last (frame, component) keyed for (channel, axis).
    pub fn last(&self, channel: Channel, axis: Axis) -> Option<(u32, f32)> {
        self.last
            .get(&(channel, axis))
            .map(|&(frame, idx)| (frame, self.keys[idx].value[axis.index()]))
    }

    /// Current value of a channel, falling back to rest for unkeyed axes.
    pub fn current(&self, channel: Channel) -> [f32; 3] {
        let mut out = channel.rest();
        for axis in Axis::ALL {
            if let Some((_, v)) = self.last(channel, axis) {
                out[axis.index()] = v;
            }
        }
        out
    }

    pub fn max_frame(&self) -> Option<u32> {
        self.last.values().map(|&(frame, _)| frame).max()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn finish(self) -> SlotTimeline {
        SlotTimeline {
            slot: self.slot,
            keys: self.keys,
        }
    }
}

//! Identifiers for letter slots.

use serde::{Deserialize, Serialize};

/// Left-to-right index of a non-whitespace character in the animated text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u32);

impl SlotId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Name of the rig joint driving this slot on the host armature.
    pub fn bone_name(self) -> String {
        format!("Bone_{}", self.0)
    }
}

/// Number of animated slots for a piece of text: every non-whitespace character
/// gets its own joint, spaces only contribute to layout.
pub fn count_slots(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

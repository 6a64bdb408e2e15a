//! Transform channels, axes and per-key interpolation hints.

use serde::{Deserialize, Serialize};

/// Neutral translation (origin).
pub const REST_TRANSLATION: [f32; 3] = [0.0, 0.0, 0.0];
/// Neutral XYZ Euler rotation (radians).
pub const REST_ROTATION: [f32; 3] = [0.0, 0.0, 0.0];
/// Neutral scale.
pub const REST_SCALE: [f32; 3] = [1.0, 1.0, 1.0];

/// Transform channel of a rig joint that a keyframe writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Translation,
    /// XYZ Euler angles in radians.
    Rotation,
    Scale,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Translation, Channel::Rotation, Channel::Scale];

    /// Rest value of this channel.
    #[inline]
    pub fn rest(self) -> [f32; 3] {
        match self {
            Channel::Translation => REST_TRANSLATION,
            Channel::Rotation => REST_ROTATION,
            Channel::Scale => REST_SCALE,
        }
    }

    /// Host data path for the channel (pose bone property name).
    pub fn data_path(self) -> &'static str {
        match self {
            Channel::Translation => "location",
            Channel::Rotation => "rotation_euler",
            Channel::Scale => "scale",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Subset of {X, Y, Z} written by a keyframe. Serialized as its bit pattern
/// (X = 1, Y = 2, Z = 4).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisMask(u8);

impl AxisMask {
    pub const NONE: AxisMask = AxisMask(0);
    pub const X: AxisMask = AxisMask(0b001);
    pub const Y: AxisMask = AxisMask(0b010);
    pub const Z: AxisMask = AxisMask(0b100);
    pub const XY: AxisMask = AxisMask(0b011);
    pub const XZ: AxisMask = AxisMask(0b101);
    pub const XYZ: AxisMask = AxisMask(0b111);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn contains(self, axis: Axis) -> bool {
        self.0 & axis.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 & 0b111 == 0
    }

    #[inline]
    pub fn without(self, axis: Axis) -> AxisMask {
        AxisMask(self.0 & !axis.bit())
    }

    #[inline]
    pub fn union(self, other: AxisMask) -> AxisMask {
        AxisMask((self.0 | other.0) & 0b111)
    }

    /// Axes in the mask, in X, Y, Z order.
    pub fn iter(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl From<Axis> for AxisMask {
    fn from(axis: Axis) -> Self {
        AxisMask(axis.bit())
    }
}

/// Interpolation hint for the curve segment leaving a key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpolation {
    #[default]
    Bezier,
    Linear,
}

#[inline]
pub(crate) fn deg3(v: [f32; 3]) -> [f32; 3] {
    [v[0].to_radians(), v[1].to_radians(), v[2].to_radians()]
}

#[inline]
pub(crate) fn splat(v: f32) -> [f32; 3] {
    [v, v, v]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_membership() {
        let m = AxisMask::XZ;
        assert!(m.contains(Axis::X));
        assert!(!m.contains(Axis::Y));
        assert!(m.contains(Axis::Z));
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![Axis::X, Axis::Z]);
        assert_eq!(m.without(Axis::X), AxisMask::Z);
        assert!(m.without(Axis::X).without(Axis::Z).is_empty());
        assert_eq!(AxisMask::from(Axis::Y).union(AxisMask::XZ), AxisMask::XYZ);
    }

    #[test]
    fn channel_rest_values() {
        assert_eq!(Channel::Scale.rest(), [1.0, 1.0, 1.0]);
        assert_eq!(Channel::Rotation.rest(), [0.0; 3]);
        assert_eq!(Channel::Translation.data_path(), "location");
    }
}

//! Animation style tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Named animation archetype selecting the phase sequence of every slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTag {
    #[default]
    #[serde(rename = "DAYTONA")]
    Daytona,
    #[serde(rename = "CIRCULAR_APPROACH")]
    CircularApproach,
    #[serde(rename = "BAD_GAME_OVER")]
    BadGameOver,
    #[serde(rename = "GOOD_GAME_OVER")]
    GoodGameOver,
    #[serde(rename = "ELASTIC_WAVE")]
    ElasticWave,
    #[serde(rename = "3D_TUMBLE")]
    Tumble3d,
    #[serde(rename = "DIGITAL_GLITCH")]
    DigitalGlitch,
    #[serde(rename = "SLINGSHOT_SNAP")]
    SlingshotSnap,
    #[serde(rename = "ARCADE_SLAM")]
    ArcadeSlam,
}

impl StyleTag {
    pub const ALL: [StyleTag; 9] = [
        StyleTag::Daytona,
        StyleTag::CircularApproach,
        StyleTag::BadGameOver,
        StyleTag::GoodGameOver,
        StyleTag::ElasticWave,
        StyleTag::Tumble3d,
        StyleTag::DigitalGlitch,
        StyleTag::SlingshotSnap,
        StyleTag::ArcadeSlam,
    ];

    /// Canonical tag string.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Daytona => "DAYTONA",
            StyleTag::CircularApproach => "CIRCULAR_APPROACH",
            StyleTag::BadGameOver => "BAD_GAME_OVER",
            StyleTag::GoodGameOver => "GOOD_GAME_OVER",
            StyleTag::ElasticWave => "ELASTIC_WAVE",
            StyleTag::Tumble3d => "3D_TUMBLE",
            StyleTag::DigitalGlitch => "DIGITAL_GLITCH",
            StyleTag::SlingshotSnap => "SLINGSHOT_SNAP",
            StyleTag::ArcadeSlam => "ARCADE_SLAM",
        }
    }

    /// Menu label shown by hosts.
    pub fn label(self) -> &'static str {
        match self {
            StyleTag::Daytona => "Daytona USA-like",
            StyleTag::CircularApproach => "Circular Approach",
            StyleTag::BadGameOver => "Bad Game Over",
            StyleTag::GoodGameOver => "Good Game Over",
            StyleTag::ElasticWave => "Elastic Wave",
            StyleTag::Tumble3d => "3D Tumble",
            StyleTag::DigitalGlitch => "Digital Glitch",
            StyleTag::SlingshotSnap => "Slingshot Snap",
            StyleTag::ArcadeSlam => "Arcade Slam",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StyleTag::Daytona => "Shuffle and Snap",
            StyleTag::CircularApproach => "Helical approach, then spin-jump",
            StyleTag::BadGameOver => "Drop, bounce, flip and fall away",
            StyleTag::GoodGameOver => "Rise, spiral in and dance",
            StyleTag::ElasticWave => "Stretch and squash wave",
            StyleTag::Tumble3d => "Multi-axis tumble into place",
            StyleTag::DigitalGlitch => "Phase 1: Fall, Phase 2: Glitch",
            StyleTag::SlingshotSnap => "Phase 1: Tension, Phase 2: Release",
            StyleTag::ArcadeSlam => "Phase 1: Meteor, Phase 2: Impact, Phase 3: Pulse",
        }
    }

    /// Styles whose keyframes depend on the random stream.
    pub fn is_randomized(self) -> bool {
        matches!(
            self,
            StyleTag::DigitalGlitch | StyleTag::SlingshotSnap | StyleTag::ArcadeSlam
        )
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleTag {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| GenerateError::InvalidStyle { tag: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for tag in StyleTag::ALL {
            assert_eq!(tag.as_str().parse::<StyleTag>(), Ok(tag));
        }
    }

    #[test]
    fn unknown_tag_is_invalid_style() {
        let err = "MOONWALK".parse::<StyleTag>().unwrap_err();
        assert_eq!(
            err,
            GenerateError::InvalidStyle {
                tag: "MOONWALK".into()
            }
        );
        // Tags are case-sensitive, matching the host enum identifiers.
        assert!("daytona".parse::<StyleTag>().is_err());
    }

    #[test]
    fn serde_uses_host_identifiers() {
        let s = serde_json::to_string(&StyleTag::Tumble3d).unwrap();
        assert_eq!(s, "\"3D_TUMBLE\"");
        let back: StyleTag = serde_json::from_str("\"ARCADE_SLAM\"").unwrap();
        assert_eq!(back, StyleTag::ArcadeSlam);
    }

    #[test]
    fn randomized_styles() {
        let randomized: Vec<_> = StyleTag::ALL
            .into_iter()
            .filter(|s| s.is_randomized())
            .collect();
        assert_eq!(
            randomized,
            vec![
                StyleTag::DigitalGlitch,
                StyleTag::SlingshotSnap,
                StyleTag::ArcadeSlam
            ]
        );
    }
}

//! Adaptive display-state record shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! mirrors them into JS objects for reactive binding.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentDensity {
    Sparse,
    #[default]
    Normal,
    Dense,
}

impl ContentDensity {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentDensity::Sparse => "sparse",
            ContentDensity::Normal => "normal",
            ContentDensity::Dense => "dense",
        }
    }
}

/// Ordered so that expertise can only be raised with `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserExpertise {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl UserExpertise {
    pub fn as_str(self) -> &'static str {
        match self {
            UserExpertise::Beginner => "beginner",
            UserExpertise::Intermediate => "intermediate",
            UserExpertise::Expert => "expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visualization {
    #[default]
    TwoD,
    ThreeD,
    Heatmap,
}

impl Visualization {
    pub fn as_str(self) -> &'static str {
        match self {
            Visualization::TwoD => "2d",
            Visualization::ThreeD => "3d",
            Visualization::Heatmap => "heatmap",
        }
    }
}

impl FromStr for Visualization {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" | "2D" => Ok(Visualization::TwoD),
            "3d" | "3D" => Ok(Visualization::ThreeD),
            "heatmap" => Ok(Visualization::Heatmap),
            other => Err(ParseError::Visualization(other.to_string())),
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI preferences derived from layout observation and interaction counting.
///
/// `preferred_visualization` and `color_blind_mode` are owned by the page;
/// the tracker never writes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdaptiveState {
    pub content_density: ContentDensity,
    pub user_expertise: UserExpertise,
    pub preferred_visualization: Visualization,
    pub color_blind_mode: bool,
    pub is_large_display: bool,
    pub touch_mode: bool,
}

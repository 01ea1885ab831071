//! Injectable tuning for the trackers.
//!
//! Defaults come from `constants.rs`; tests and embedders may tighten them.

use crate::constants::*;

/// Thresholds used by [`crate::AdaptiveTracker`].
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptiveConfig {
    pub large_display_min_width: f64,
    pub history_capacity: usize,
    pub dense_score_above: f64,
    pub sparse_score_below: f64,
    pub visibility_threshold: f64,
    pub intermediate_clicks_above: u64,
    pub expert_clicks_above: u64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            large_display_min_width: LARGE_DISPLAY_MIN_WIDTH,
            history_capacity: HISTORY_CAPACITY,
            dense_score_above: DENSE_SCORE_ABOVE,
            sparse_score_below: SPARSE_SCORE_BELOW,
            visibility_threshold: VISIBILITY_THRESHOLD,
            intermediate_clicks_above: INTERMEDIATE_CLICKS_ABOVE,
            expert_clicks_above: EXPERT_CLICKS_ABOVE,
        }
    }
}

/// Dwell timing used by [`crate::GazeTracker`].
#[derive(Clone, Debug, PartialEq)]
pub struct GazeConfig {
    /// Milliseconds on one target before focus is re-emitted on each move.
    pub dwell_refocus_ms: f64,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            dwell_refocus_ms: DWELL_REFOCUS_MS,
        }
    }
}

use crate::config::AdaptiveConfig;
use crate::constants::{CLASS_DENSE, CLASS_NORMAL, CLASS_SPARSE, DENSITY_SCALE};
use crate::state::ContentDensity;

/// Children per 1000 px² of client area.
///
/// Returns `None` for zero, negative or non-finite areas.
#[inline]
pub fn density_score(child_count: u32, client_width: f64, client_height: f64) -> Option<f64> {
    let area = client_width * client_height;
    if !area.is_finite() || area <= 0.0 {
        return None;
    }
    Some(child_count as f64 * DENSITY_SCALE / area)
}

#[inline]
pub fn classify_score(score: f64, config: &AdaptiveConfig) -> ContentDensity {
    if score > config.dense_score_above {
        ContentDensity::Dense
    } else if score < config.sparse_score_below {
        ContentDensity::Sparse
    } else {
        ContentDensity::Normal
    }
}

/// Score and classify in one step; degenerate geometry lands on `Normal`.
#[inline]
pub fn classify_element(
    child_count: u32,
    client_width: f64,
    client_height: f64,
    config: &AdaptiveConfig,
) -> ContentDensity {
    match density_score(child_count, client_width, client_height) {
        Some(score) => classify_score(score, config),
        None => ContentDensity::Normal,
    }
}

#[inline]
pub fn marker_class(density: ContentDensity) -> &'static str {
    match density {
        ContentDensity::Dense => CLASS_DENSE,
        ContentDensity::Sparse => CLASS_SPARSE,
        ContentDensity::Normal => CLASS_NORMAL,
    }
}

pub const ALL_MARKER_CLASSES: [&str; 3] = [CLASS_DENSE, CLASS_SPARSE, CLASS_NORMAL];

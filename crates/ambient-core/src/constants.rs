// Shared tuning constants for adaptive state and gaze focus.

// Device capabilities
pub const LARGE_DISPLAY_MIN_WIDTH: f64 = 1440.0; // logical px, inclusive

// Element sizing history
pub const HISTORY_CAPACITY: usize = 10; // samples kept per element key

// Density scoring: children per 1000 px²
pub const DENSITY_SCALE: f64 = 1000.0;
pub const DENSE_SCORE_ABOVE: f64 = 1.0;
pub const SPARSE_SCORE_BELOW: f64 = 0.2;

// Visibility
pub const VISIBILITY_THRESHOLD: f64 = 0.1; // intersection ratio for "in-viewport"
// The observer callback fired for the threshold crossing may carry a ratio
// just below the threshold.
pub const VISIBILITY_TOLERANCE: f64 = 1e-3;

// Expertise: cumulative clicks since start
pub const INTERMEDIATE_CLICKS_ABOVE: u64 = 50;
pub const EXPERT_CLICKS_ABOVE: u64 = 150;

// Gaze
pub const DWELL_REFOCUS_MS: f64 = 1000.0; // re-emit focus after this much dwell
pub const CAPTURE_IDEAL_WIDTH: u32 = 640;
pub const CAPTURE_IDEAL_HEIGHT: u32 = 480;
pub const CAPTURE_FACING_MODE: &str = "user";

// Marker classes
pub const CLASS_DENSE: &str = "content-dense";
pub const CLASS_SPARSE: &str = "content-sparse";
pub const CLASS_NORMAL: &str = "content-normal";
pub const CLASS_IN_VIEWPORT: &str = "in-viewport";

// Scene defaults
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

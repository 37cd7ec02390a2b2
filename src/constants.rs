//! Crate-wide constants.
//!
//! Centralizes the tuning values of the gesture path and the engine defaults
//! so they are not scattered as magic numbers.

// ============================================================================
// Gestures
// ============================================================================

/// How strongly finger spread maps onto zoom (1.0 = proportional)
pub const SCALE_SENSITIVITY: f32 = 0.8;

/// Smallest scale factor a single two-pointer batch may apply
pub const MIN_SCALE_STEP: f32 = 0.95;

/// Largest scale factor a single two-pointer batch may apply
pub const MAX_SCALE_STEP: f32 = 1.05;

/// Lowest `min_scale_step` accepted from settings; anything below this would
/// let a single batch collapse the scale towards zero
pub const DEGENERATE_SCALE_STEP: f32 = 1e-5;

/// Numerator of the rotation dead zone: angle changes below
/// `ROTATION_DEAD_ZONE / finger_distance` radians are ignored
pub const ROTATION_DEAD_ZONE: f32 = 1.0;

// ============================================================================
// Engine Defaults
// ============================================================================

/// Canvas resolution applied to a fresh drawing engine instance
pub const DEFAULT_CANVAS_RESOLUTION: (u32, u32) = (2304, 1440);

// ============================================================================
// Logging & Profiling
// ============================================================================

/// Default `EnvFilter` directive when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,paint_viewport=trace";

/// Touch batches slower than this are reported when profiling
pub const SLOW_BATCH_MS: f64 = 4.0;

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "paint-viewport";

/// Settings file name inside [`CONFIG_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

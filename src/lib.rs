//! Interaction core of a touch/stylus painting surface.
//!
//! Raw multi-pointer input becomes a viewport transform (pan, zoom, rotate)
//! and a stream of content-space stylus samples for the drawing engine.
//! Engine resources (runtime, behaviour, surface) are held as typed handles
//! that release themselves and tolerate repeated destroy.

pub mod app;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod native;
pub mod perf;
pub mod settings;
pub mod types;

pub use app::{PaintSession, PaintViewport, SurfaceBinding, SurfaceBindingController};
pub use error::{LifecycleError, LifecycleResult, SettingsError, SettingsResult};
pub use settings::{GestureSettings, Settings};
pub use types::{Point, Slot, TransformState, point};

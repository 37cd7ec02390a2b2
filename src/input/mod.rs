//! Touch and stylus input handling for the painting surface.
//!
//! ## Architecture
//!
//! Finger input drives the viewport transform through an explicit gesture
//! state machine (`GestureState`). Stylus input is mapped back into content
//! space with the inverse of that transform and forwarded as brush strokes.
//!
//! ## Modules
//!
//! - `event` - Pointer batches as delivered by the window system
//! - `state` - Gesture state machine enum and helper methods
//! - `gesture` - Pan / pinch / twist interpretation
//! - `coords` - Screen <-> content coordinate conversion
//! - `stroke` - Stylus samples to content-space stroke updates

pub mod coords;
mod event;
mod gesture;
mod state;
mod stroke;

pub use event::{HistoricalSample, PointerAction, PointerBatch, PointerSample, ToolType};
pub use gesture::{GestureInterpreter, scale_step, step, suppress_micro_rotation};
pub use state::GestureState;
pub use stroke::{StrokeCoordinateMapper, StrokeSample, StrokeSession, StrokeSink, map_batch};

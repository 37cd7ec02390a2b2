//! Application glue - session scope and surface views.
//!
//! - `session` - `PaintSession`, the long-lived owner of Runtime and Behaviour
//! - `binding` - `SurfaceBindingController`, surface notifications to handles
//! - `viewport` - `PaintViewport`, the adapter a painting view drives

mod binding;
mod session;
mod viewport;

pub use binding::{SurfaceBinding, SurfaceBindingController};
pub use session::PaintSession;
pub use viewport::PaintViewport;

//! Native resource lifecycle for the external rendering engine.
//!
//! - `engine` - The `RenderEngine` call surface and raw identifiers
//! - `target` - Window-system surface references handed to the engine
//! - `handle` - Typed, self-releasing Runtime / Behaviour / Surface handles

mod engine;
mod handle;
mod target;

pub use engine::{HandleKind, RawHandle, RenderEngine, SharedEngine, share};
pub use handle::{
    BehaviourHandle, HandleState, NativeHandleLifecycle, RuntimeHandle, SurfaceHandle,
};
pub use target::SurfaceTarget;

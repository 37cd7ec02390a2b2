//! Boundary to the external rendering engine.
//!
//! The engine is opaque: it hands out raw identifiers and accepts a fixed set
//! of submit-and-return calls. Liveness of those identifiers is tracked on
//! this side of the boundary by the typed handles in `handle.rs`.

use super::target::SurfaceTarget;
use crate::types::Slot;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// Engine-side identifier of a runtime, behaviour or surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RawHandle(pub u64);

impl std::fmt::Display for RawHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three resource kinds the engine manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleKind {
    /// Session-scoped engine context
    Runtime,
    /// Stateful drawing-engine instance bound to a runtime
    Behaviour,
    /// Render target bound to a runtime and a window-system surface
    Surface,
}

impl std::fmt::Display for HandleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HandleKind::Runtime => "runtime",
            HandleKind::Behaviour => "behaviour",
            HandleKind::Surface => "surface",
        })
    }
}

/// Calls issued to the rendering engine.
///
/// Every call is synchronous from the caller's point of view and must only
/// be issued while the handles involved are live.
pub trait RenderEngine: Send {
    fn create_runtime(&mut self) -> RawHandle;

    fn create_behaviour(&mut self, runtime: RawHandle) -> RawHandle;

    /// Wrap a window-system surface. `None` if the engine cannot use it.
    fn create_surface(&mut self, runtime: RawHandle, target: &SurfaceTarget) -> Option<RawHandle>;

    /// Bind `surface` to `slot`, replacing (and implicitly detaching) any
    /// previous binding of that slot.
    fn attach(&mut self, behaviour: RawHandle, surface: RawHandle, slot: Slot);

    fn resize(&mut self, surface: RawHandle, width: u32, height: u32);

    fn set_canvas_resolution(&mut self, behaviour: RawHandle, width: u32, height: u32);

    fn set_viewport_transform(&mut self, behaviour: RawHandle, scale: f32, angle: f32, x: f32, y: f32);

    /// Ask the engine to present `slot` again.
    fn invalidate(&mut self, behaviour: RawHandle, slot: Slot);

    fn begin_stroke(&mut self, behaviour: RawHandle);

    fn update_stroke(&mut self, behaviour: RawHandle, x: f32, y: f32, pressure: f32);

    fn end_stroke(&mut self, behaviour: RawHandle);

    /// Release the engine resources behind `handle`. Called at most once per handle.
    fn destroy(&mut self, kind: HandleKind, handle: RawHandle);
}

/// The engine as shared between the session scope and its views.
pub type SharedEngine = Arc<Mutex<dyn RenderEngine>>;

/// Wrap an engine for sharing.
pub fn share<E: RenderEngine + 'static>(engine: E) -> SharedEngine {
    Arc::new(Mutex::new(engine))
}

//! Ownership-typed native handles.
//!
//! Each handle wraps an engine identifier plus a lifecycle tag. Construction
//! is the `Uninitialized -> Live` transition; `destroy` is `Live -> Destroyed`
//! and is idempotent. Dropping a live handle destroys it, so engine resources
//! are released when the owning scope ends.
//!
//! Destruction order between kinds is not enforced here: surfaces and
//! behaviours must go before their runtime. Owners get this right by
//! scoping runtimes to the session and surfaces to views.

use super::engine::{HandleKind, RawHandle, SharedEngine};
use super::target::SurfaceTarget;
use crate::error::{LifecycleError, LifecycleResult};
use crate::input::StrokeSink;
use crate::types::{Slot, TransformState};
use tracing::{error, trace, warn};

/// Lifecycle tag of a constructed handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    Live,
    Destroyed,
}

/// Shared core of the typed handles.
struct NativeHandle {
    engine: SharedEngine,
    raw: RawHandle,
    kind: HandleKind,
    state: HandleState,
}

impl std::fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeHandle")
            .field("raw", &self.raw)
            .field("kind", &self.kind)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl NativeHandle {
    fn new(engine: SharedEngine, kind: HandleKind, raw: RawHandle) -> Self {
        trace!(%kind, %raw, "Created native handle");
        Self {
            engine,
            raw,
            kind,
            state: HandleState::Live,
        }
    }

    #[inline]
    fn is_live(&self) -> bool {
        self.state == HandleState::Live
    }

    /// Guard for every operation except `destroy`.
    ///
    /// Use after destroy is a programming error: fatal in debug builds,
    /// logged and dropped in release builds.
    fn ensure_live(&self, op: &'static str) -> bool {
        let live = self.is_live();
        debug_assert!(live, "`{op}` issued against destroyed {} handle {}", self.kind, self.raw);
        if !live {
            error!(op, kind = %self.kind, raw = %self.raw, "Operation on destroyed handle dropped");
        }
        live
    }

    fn destroy(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        self.engine.lock().destroy(self.kind, self.raw);
        self.state = HandleState::Destroyed;
        trace!(kind = %self.kind, raw = %self.raw, "Destroyed native handle");
        true
    }
}

impl Drop for NativeHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

macro_rules! handle_accessors {
    ($ty:ident) => {
        impl $ty {
            /// Engine-side identifier
            pub fn raw(&self) -> RawHandle {
                self.inner.raw
            }

            pub fn state(&self) -> HandleState {
                self.inner.state
            }

            pub fn is_live(&self) -> bool {
                self.inner.is_live()
            }

            /// Release the engine resource. Returns false if already destroyed.
            pub fn destroy(&mut self) -> bool {
                self.inner.destroy()
            }
        }
    };
}

// ============================================================================
// Lifecycle entry point
// ============================================================================

/// Creates runtimes against a shared engine; everything else hangs off them.
#[derive(Clone)]
pub struct NativeHandleLifecycle {
    engine: SharedEngine,
}

impl std::fmt::Debug for NativeHandleLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeHandleLifecycle").finish_non_exhaustive()
    }
}

impl NativeHandleLifecycle {
    pub fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    pub fn create_runtime(&self) -> RuntimeHandle {
        let raw = self.engine.lock().create_runtime();
        RuntimeHandle {
            inner: NativeHandle::new(self.engine.clone(), HandleKind::Runtime, raw),
        }
    }
}

// ============================================================================
// Runtime
// ============================================================================

#[derive(Debug)]
pub struct RuntimeHandle {
    inner: NativeHandle,
}

handle_accessors!(RuntimeHandle);

impl RuntimeHandle {
    /// Create a drawing-engine instance on this runtime.
    ///
    /// The runtime must be live; creating on a destroyed runtime is a
    /// programming error and panics.
    pub fn create_behaviour(&self) -> BehaviourHandle {
        assert!(
            self.inner.ensure_live("create_behaviour"),
            "create_behaviour on destroyed runtime {}",
            self.inner.raw
        );
        let raw = self.inner.engine.lock().create_behaviour(self.inner.raw);
        BehaviourHandle {
            inner: NativeHandle::new(self.inner.engine.clone(), HandleKind::Behaviour, raw),
        }
    }

    /// Wrap a window-system surface as a render target on this runtime.
    pub fn create_surface(&self, target: &SurfaceTarget) -> LifecycleResult<SurfaceHandle> {
        assert!(
            self.inner.ensure_live("create_surface"),
            "create_surface on destroyed runtime {}",
            self.inner.raw
        );
        let raw = self
            .inner
            .engine
            .lock()
            .create_surface(self.inner.raw, target)
            .ok_or(LifecycleError::SurfaceUnavailable)?;
        Ok(SurfaceHandle {
            inner: NativeHandle::new(self.inner.engine.clone(), HandleKind::Surface, raw),
            size: target.size(),
        })
    }
}

// ============================================================================
// Behaviour
// ============================================================================

#[derive(Debug)]
pub struct BehaviourHandle {
    inner: NativeHandle,
}

handle_accessors!(BehaviourHandle);

impl BehaviourHandle {
    /// Bind `surface` to `slot`. A previous binding of the slot is replaced.
    pub fn attach(&self, surface: &SurfaceHandle, slot: Slot) {
        if !self.inner.ensure_live("attach") || !surface.inner.ensure_live("attach") {
            return;
        }
        self.inner.engine.lock().attach(self.inner.raw, surface.raw(), slot);
        trace!(%slot, behaviour = %self.inner.raw, surface = %surface.raw(), "Attached surface");
    }

    pub fn invalidate(&self, slot: Slot) {
        if self.inner.ensure_live("invalidate") {
            self.inner.engine.lock().invalidate(self.inner.raw, slot);
        }
    }

    pub fn set_canvas_resolution(&self, width: u32, height: u32) {
        if self.inner.ensure_live("set_canvas_resolution") {
            self.inner
                .engine
                .lock()
                .set_canvas_resolution(self.inner.raw, width, height);
        }
    }

    pub fn set_viewport_transform(&self, transform: &TransformState) {
        if self.inner.ensure_live("set_viewport_transform") {
            self.inner.engine.lock().set_viewport_transform(
                self.inner.raw,
                transform.scale,
                transform.angle,
                transform.x,
                transform.y,
            );
        }
    }
}

impl StrokeSink for BehaviourHandle {
    fn begin_stroke(&self) {
        if self.inner.ensure_live("begin_stroke") {
            self.inner.engine.lock().begin_stroke(self.inner.raw);
        }
    }

    fn update_stroke(&self, x: f32, y: f32, pressure: f32) {
        if self.inner.ensure_live("update_stroke") {
            self.inner.engine.lock().update_stroke(self.inner.raw, x, y, pressure);
        }
    }

    fn end_stroke(&self) {
        if self.inner.ensure_live("end_stroke") {
            self.inner.engine.lock().end_stroke(self.inner.raw);
        }
    }
}

// ============================================================================
// Surface
// ============================================================================

#[derive(Debug)]
pub struct SurfaceHandle {
    inner: NativeHandle,
    /// Last size known to the engine
    size: (u32, u32),
}

handle_accessors!(SurfaceHandle);

impl SurfaceHandle {
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Resize the render target.
    ///
    /// Zero-sized requests are ignored, and a request for the current size is
    /// not forwarded. Returns true if the engine was called.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.inner.ensure_live("resize") {
            return false;
        }
        if width == 0 || height == 0 {
            warn!(width, height, surface = %self.inner.raw, "Tried to resize to a zero-sized surface, ignoring");
            return false;
        }
        if self.size == (width, height) {
            return false;
        }

        self.inner.engine.lock().resize(self.inner.raw, width, height);
        self.size = (width, height);
        true
    }
}

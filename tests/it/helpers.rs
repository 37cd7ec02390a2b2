//! Test helpers for reducing boilerplate in tests.
//!
//! This module provides:
//! - `RecordingEngine` - a `RenderEngine` that logs every call and flags
//!   calls against handles that are not live
//! - `Harness` - a recording engine wired into a `NativeHandleLifecycle`
//! - Pointer batch and surface target builders

use paint_viewport::input::{PointerAction, PointerBatch, PointerSample};
use paint_viewport::native::{
    HandleKind, NativeHandleLifecycle, RawHandle, RenderEngine, SharedEngine, SurfaceTarget,
};
use paint_viewport::{PaintSession, Settings, Slot};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

// ============================================================================
// RecordingEngine
// ============================================================================

#[derive(Default)]
pub struct RecordingEngine {
    next: u64,
    live: HashMap<RawHandle, HandleKind>,
    /// Human-readable log of every call, in order
    pub calls: Vec<String>,
    /// Calls that referenced a destroyed or unknown handle
    pub violations: Vec<String>,
    /// Destroy calls, including repeated ones
    pub destroyed: Vec<(HandleKind, RawHandle)>,
    /// When set, `create_surface` refuses every target
    pub refuse_surfaces: bool,
}

impl RecordingEngine {
    fn alloc(&mut self, kind: HandleKind) -> RawHandle {
        self.next += 1;
        let raw = RawHandle(self.next);
        self.live.insert(raw, kind);
        raw
    }

    fn check(&mut self, op: &str, kind: HandleKind, raw: RawHandle) {
        if self.live.get(&raw) != Some(&kind) {
            self.violations.push(format!("{op} on non-live {kind} {raw}"));
        }
    }
}

impl RenderEngine for RecordingEngine {
    fn create_runtime(&mut self) -> RawHandle {
        let raw = self.alloc(HandleKind::Runtime);
        self.calls.push(format!("create_runtime -> {raw}"));
        raw
    }

    fn create_behaviour(&mut self, runtime: RawHandle) -> RawHandle {
        self.check("create_behaviour", HandleKind::Runtime, runtime);
        let raw = self.alloc(HandleKind::Behaviour);
        self.calls.push(format!("create_behaviour({runtime}) -> {raw}"));
        raw
    }

    fn create_surface(&mut self, runtime: RawHandle, _target: &SurfaceTarget) -> Option<RawHandle> {
        self.check("create_surface", HandleKind::Runtime, runtime);
        if self.refuse_surfaces {
            self.calls.push(format!("create_surface({runtime}) -> refused"));
            return None;
        }
        let raw = self.alloc(HandleKind::Surface);
        self.calls.push(format!("create_surface({runtime}) -> {raw}"));
        Some(raw)
    }

    fn attach(&mut self, behaviour: RawHandle, surface: RawHandle, slot: Slot) {
        self.check("attach", HandleKind::Behaviour, behaviour);
        self.check("attach", HandleKind::Surface, surface);
        self.calls.push(format!("attach({behaviour}, {surface}, {slot})"));
    }

    fn resize(&mut self, surface: RawHandle, width: u32, height: u32) {
        self.check("resize", HandleKind::Surface, surface);
        self.calls.push(format!("resize({surface}, {width}x{height})"));
    }

    fn set_canvas_resolution(&mut self, behaviour: RawHandle, width: u32, height: u32) {
        self.check("set_canvas_resolution", HandleKind::Behaviour, behaviour);
        self.calls
            .push(format!("set_canvas_resolution({behaviour}, {width}x{height})"));
    }

    fn set_viewport_transform(&mut self, behaviour: RawHandle, scale: f32, angle: f32, x: f32, y: f32) {
        self.check("set_viewport_transform", HandleKind::Behaviour, behaviour);
        self.calls.push(format!(
            "set_viewport_transform({behaviour}, scale={scale}, angle={angle}, x={x}, y={y})"
        ));
    }

    fn invalidate(&mut self, behaviour: RawHandle, slot: Slot) {
        self.check("invalidate", HandleKind::Behaviour, behaviour);
        self.calls.push(format!("invalidate({behaviour}, {slot})"));
    }

    fn begin_stroke(&mut self, behaviour: RawHandle) {
        self.check("begin_stroke", HandleKind::Behaviour, behaviour);
        self.calls.push(format!("begin_stroke({behaviour})"));
    }

    fn update_stroke(&mut self, behaviour: RawHandle, x: f32, y: f32, pressure: f32) {
        self.check("update_stroke", HandleKind::Behaviour, behaviour);
        self.calls
            .push(format!("update_stroke({behaviour}, {x}, {y}, {pressure})"));
    }

    fn end_stroke(&mut self, behaviour: RawHandle) {
        self.check("end_stroke", HandleKind::Behaviour, behaviour);
        self.calls.push(format!("end_stroke({behaviour})"));
    }

    fn destroy(&mut self, kind: HandleKind, handle: RawHandle) {
        self.check("destroy", kind, handle);
        self.live.remove(&handle);
        self.destroyed.push((kind, handle));
        self.calls.push(format!("destroy({kind} {handle})"));
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A recording engine plus the lifecycle that issues calls into it.
pub struct Harness {
    pub engine: Arc<Mutex<RecordingEngine>>,
    pub lifecycle: NativeHandleLifecycle,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        let engine = Arc::new(Mutex::new(RecordingEngine::default()));
        let shared: SharedEngine = engine.clone();
        Self {
            engine,
            lifecycle: NativeHandleLifecycle::new(shared),
        }
    }

    /// A session with default settings.
    pub fn session(&self) -> Arc<PaintSession> {
        Arc::new(PaintSession::new(&self.lifecycle, Settings::default()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.engine.lock().calls.clone()
    }

    /// Calls whose description starts with `prefix`.
    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.engine
            .lock()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.engine.lock().calls.clear();
    }

    pub fn violations(&self) -> Vec<String> {
        self.engine.lock().violations.clone()
    }

    pub fn destroyed(&self) -> Vec<(HandleKind, RawHandle)> {
        self.engine.lock().destroyed.clone()
    }
}

// ============================================================================
// Builders
// ============================================================================

/// A window-system surface reference with a distinct identity.
pub fn target(id: usize) -> SurfaceTarget {
    let ptr = NonNull::new(std::ptr::without_provenance_mut::<c_void>(id))
        .expect("surface ids start at 1");
    SurfaceTarget::android(ptr, 0, 0)
}

pub fn finger(action: PointerAction, x: f32, y: f32) -> PointerBatch {
    PointerBatch::single(action, PointerSample::finger(x, y))
}

/// Two finger batch; `action_index` names the pointer going down or up.
pub fn fingers(action: PointerAction, a: (f32, f32), b: (f32, f32), action_index: usize) -> PointerBatch {
    PointerBatch::new(
        action,
        vec![PointerSample::finger(a.0, a.1), PointerSample::finger(b.0, b.1)],
    )
    .with_action_index(action_index)
}

pub fn stylus(action: PointerAction, x: f32, y: f32, pressure: f32) -> PointerBatch {
    PointerBatch::single(action, PointerSample::stylus(x, y, pressure))
}

//! Paint viewport - the thin adapter between a surface view and the core.
//!
//! Surface notifications go to the binding controller; touch batches go to
//! the gesture interpreter or, for a lone stylus, to the stroke mapper. The
//! resulting transform is submitted to the engine after every touch batch.

use super::binding::SurfaceBindingController;
use super::session::PaintSession;
use crate::input::{
    GestureInterpreter, GestureState, PointerAction, PointerBatch, StrokeCoordinateMapper,
    ToolType,
};
use crate::native::SurfaceTarget;
use crate::profile_scope;
use crate::types::{Slot, TransformState};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct PaintViewport {
    controller: SurfaceBindingController,
    gestures: GestureInterpreter,
    strokes: StrokeCoordinateMapper,
    transform: TransformState,
}

impl Default for PaintViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintViewport {
    pub fn new() -> Self {
        Self {
            controller: SurfaceBindingController::new(Slot::Viewport),
            gestures: GestureInterpreter::default(),
            strokes: StrokeCoordinateMapper::new(),
            transform: TransformState::IDENTITY,
        }
    }

    /// Attach to a session; picks up its gesture settings.
    pub fn bind(&mut self, session: Arc<PaintSession>) {
        if self
            .controller
            .session()
            .is_some_and(|current| Arc::ptr_eq(current, &session))
        {
            return;
        }
        if let Some(previous) = self.controller.session() {
            self.strokes.finish(previous.behaviour());
        }
        self.gestures = GestureInterpreter::new(session.settings().gesture);
        self.controller.bind_session(session);
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.gestures.state()
    }

    pub fn is_stroking(&self) -> bool {
        self.strokes.is_stroking()
    }

    pub fn controller(&self) -> &SurfaceBindingController {
        &self.controller
    }

    // ------------------------------------------------------------------------
    // Window-system surface notifications
    // ------------------------------------------------------------------------

    pub fn surface_created(&mut self, target: &SurfaceTarget) {
        self.controller.on_created(target);
    }

    pub fn surface_changed(&mut self, width: u32, height: u32) {
        self.controller.on_resized(width, height);
    }

    /// Close any open stroke, then release the surface.
    pub fn surface_destroyed(&mut self) {
        if let Some(session) = self.controller.session() {
            if self.strokes.finish(session.behaviour()) {
                debug!("Surface destroyed mid-stroke, stroke finalized");
            }
        }
        self.controller.on_destroyed();
    }

    // ------------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------------

    /// Handle one touch batch.
    pub fn handle_touch(&mut self, batch: &PointerBatch) {
        profile_scope!("handle_touch");

        if batch.action == PointerAction::Hover {
            self.handle_hover(batch);
            return;
        }

        let session = self.controller.session().cloned();

        if batch.is_single_stylus() {
            match &session {
                Some(session) => {
                    self.strokes.handle(batch, &self.transform, session.behaviour());
                }
                None => trace!(action = ?batch.action, "Stylus input without a session, dropping"),
            }
        } else {
            self.gestures.handle(batch, &mut self.transform);
            if Self::ends_stylus_contact(batch) {
                if let Some(session) = &session {
                    if self.strokes.finish(session.behaviour()) {
                        debug!(action = ?batch.action, "Stylus left a multi-pointer batch, stroke finalized");
                    }
                }
            }
        }

        if let Some(session) = session {
            session.behaviour().set_viewport_transform(&self.transform);
        }
    }

    /// Cancel, or a stylus lifting while other pointers stay down.
    fn ends_stylus_contact(batch: &PointerBatch) -> bool {
        match batch.action {
            PointerAction::Cancel => true,
            PointerAction::PointerUp => batch
                .pointers
                .get(batch.action_index)
                .is_some_and(|p| p.tool == ToolType::Stylus),
            _ => false,
        }
    }

    /// Stylus hover carries no contact; it is only logged.
    pub fn handle_hover(&self, batch: &PointerBatch) {
        for (index, pointer) in batch.pointers.iter().enumerate() {
            if pointer.tool != ToolType::Stylus {
                continue;
            }
            debug!(
                index,
                x = pointer.position.x,
                y = pointer.position.y,
                pressure = pointer.pressure,
                "Stylus hover"
            );
        }
    }
}

impl Drop for PaintViewport {
    fn drop(&mut self) {
        // Fields drop after this, so the session's behaviour is still live here
        if let Some(session) = self.controller.session() {
            if self.strokes.finish(session.behaviour()) {
                debug!("Viewport dropped mid-stroke, stroke finalized");
            }
        }
    }
}

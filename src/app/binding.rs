//! Surface binding - window-system surface notifications to native handles.
//!
//! ## State Transitions
//!
//! ```text
//! Unbound -> Bound     (created, with a session bound)
//! Bound   -> Bound     (resized; forwarded to the surface handle)
//! Bound   -> Unbound   (destroyed; surface handle destroyed first)
//! Unbound -> Unbound   (created without a session, resized: dropped)
//! ```
//!
//! Notifications must be fed in delivery order. Once `destroyed` has been
//! handled the controller is Unbound, so a late resize is dropped instead of
//! reaching a dead surface.

use super::session::PaintSession;
use crate::native::{SurfaceHandle, SurfaceTarget};
use crate::types::Slot;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Whether a live surface handle currently backs the slot.
#[derive(Debug, Default)]
pub enum SurfaceBinding {
    #[default]
    Unbound,
    Bound {
        surface: SurfaceHandle,
        /// Window-system reference, valid until `on_destroyed`
        target: SurfaceTarget,
    },
}

impl SurfaceBinding {
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }
}

#[derive(Debug)]
pub struct SurfaceBindingController {
    slot: Slot,
    // Declared before `session` so the surface drops before the runtime it uses.
    binding: SurfaceBinding,
    session: Option<Arc<PaintSession>>,
}

impl SurfaceBindingController {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            binding: SurfaceBinding::Unbound,
            session: None,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn session(&self) -> Option<&Arc<PaintSession>> {
        self.session.as_ref()
    }

    pub fn binding(&self) -> &SurfaceBinding {
        &self.binding
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    pub fn surface(&self) -> Option<&SurfaceHandle> {
        match &self.binding {
            SurfaceBinding::Bound { surface, .. } => Some(surface),
            SurfaceBinding::Unbound => None,
        }
    }

    /// Attach this view to a session.
    ///
    /// Re-binding the same session is a no-op. Switching sessions while bound
    /// recreates the surface on the new runtime from the still-valid target.
    pub fn bind_session(&mut self, session: Arc<PaintSession>) {
        if self
            .session
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &session))
        {
            return;
        }

        let target = self.release_surface();
        self.session = Some(session);
        debug!(slot = %self.slot, "Bound session");

        if let Some(target) = target {
            self.on_created(&target);
        }
    }

    /// Detach from the session, destroying the surface if one is bound.
    pub fn unbind_session(&mut self) {
        self.release_surface();
        self.session = None;
    }

    /// The window system created a surface for this view.
    pub fn on_created(&mut self, target: &SurfaceTarget) {
        let Some(session) = self.session.clone() else {
            trace!(slot = %self.slot, "Surface created before a session was bound, dropping");
            return;
        };

        if self.is_bound() {
            warn!(slot = %self.slot, "Surface created while already bound, replacing");
            self.release_surface();
        }

        let surface = match session.runtime().create_surface(target) {
            Ok(surface) => surface,
            Err(e) => {
                warn!(slot = %self.slot, "Failed to bind surface: {}", e);
                return;
            }
        };

        let behaviour = session.behaviour();
        behaviour.attach(&surface, self.slot);
        behaviour.invalidate(self.slot);

        self.binding = SurfaceBinding::Bound {
            surface,
            target: *target,
        };
    }

    /// The window system changed the surface size. Returns true if forwarded.
    pub fn on_resized(&mut self, width: u32, height: u32) -> bool {
        match &mut self.binding {
            SurfaceBinding::Bound { surface, .. } => surface.resize(width, height),
            SurfaceBinding::Unbound => {
                trace!(slot = %self.slot, width, height, "Resize without a surface, dropping");
                false
            }
        }
    }

    /// The window system is about to invalidate the surface.
    pub fn on_destroyed(&mut self) {
        if self.release_surface().is_none() {
            trace!(slot = %self.slot, "Surface destroyed while unbound");
        }
    }

    /// Destroy the bound surface handle, returning the target it wrapped.
    fn release_surface(&mut self) -> Option<SurfaceTarget> {
        match std::mem::take(&mut self.binding) {
            SurfaceBinding::Bound {
                mut surface,
                target,
            } => {
                surface.destroy();
                Some(target)
            }
            SurfaceBinding::Unbound => None,
        }
    }
}

//! Window-system surface references.
//!
//! A [`SurfaceTarget`] is only valid between the window system's "created"
//! and "destroyed" notifications for it. This crate never dereferences it;
//! it is passed through to the engine's `create_surface`.

use raw_window_handle::{
    AndroidDisplayHandle, AndroidNdkWindowHandle, RawDisplayHandle, RawWindowHandle,
};
use std::ffi::c_void;
use std::ptr::NonNull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTarget {
    window: RawWindowHandle,
    display: RawDisplayHandle,
    width: u32,
    height: u32,
}

impl SurfaceTarget {
    pub fn new(window: RawWindowHandle, display: RawDisplayHandle, width: u32, height: u32) -> Self {
        Self {
            window,
            display,
            width,
            height,
        }
    }

    /// Target backed by an Android `ANativeWindow`.
    pub fn android(native_window: NonNull<c_void>, width: u32, height: u32) -> Self {
        Self::new(
            RawWindowHandle::AndroidNdk(AndroidNdkWindowHandle::new(native_window)),
            RawDisplayHandle::Android(AndroidDisplayHandle::new()),
            width,
            height,
        )
    }

    pub fn raw_window_handle(&self) -> RawWindowHandle {
        self.window
    }

    pub fn raw_display_handle(&self) -> RawDisplayHandle {
        self.display
    }

    /// Size reported by the window system at creation.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

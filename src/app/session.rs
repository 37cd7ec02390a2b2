//! Session scope - owns the engine runtime and drawing-engine instance.
//!
//! A session outlives every surface view that binds to it. Views hold it by
//! `Arc`, so the runtime is only released once the last view has dropped its
//! surface.

use crate::native::{BehaviourHandle, NativeHandleLifecycle, RuntimeHandle};
use crate::settings::Settings;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug)]
pub struct PaintSession {
    // Fields drop in declaration order: the behaviour must go before the runtime.
    behaviour: BehaviourHandle,
    runtime: RuntimeHandle,
    settings: Settings,
}

impl PaintSession {
    /// Create the runtime and behaviour, then apply the configured canvas resolution.
    ///
    /// Settings that fail validation are replaced by the defaults.
    pub fn new(lifecycle: &NativeHandleLifecycle, settings: Settings) -> Self {
        let start_time = Instant::now();
        info!("Initializing paint session");

        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                warn!("Rejected session settings, using defaults: {}", e);
                Settings::default()
            }
        };

        let runtime = lifecycle.create_runtime();
        let behaviour = runtime.create_behaviour();

        let resolution = settings.canvas_resolution;
        behaviour.set_canvas_resolution(resolution.width, resolution.height);

        info!(
            runtime = %runtime.raw(),
            behaviour = %behaviour.raw(),
            "Finished session initialization in {:?}",
            start_time.elapsed()
        );

        Self {
            behaviour,
            runtime,
            settings,
        }
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.runtime
    }

    pub fn behaviour(&self) -> &BehaviourHandle {
        &self.behaviour
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

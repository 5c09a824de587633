//! Browser-facing helpers: viewport queries, page reload and runtime effect execution.
//!
//! Everything that touches `web_sys` directly is gated on `wasm32`; native builds (tests) see the
//! configured fallback viewport and no-op side effects.

#[cfg(target_arch = "wasm32")]
use leptos::logging;

use crate::{model::Viewport, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Host bundle handed to the runtime by [`crate::DesktopProvider`].
pub struct DesktopHostContext {
    fallback_viewport: Viewport,
}

impl DesktopHostContext {
    pub fn new(fallback_viewport: Viewport) -> Self {
        Self { fallback_viewport }
    }

    /// Current browser viewport in CSS pixels, taskbar included.
    pub fn desktop_viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(self.fallback_viewport.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(self.fallback_viewport.height);
                return Viewport::new(width, height);
            }
        }

        self.fallback_viewport
    }

    /// Reloads the page (desktop context menu "Refresh").
    pub fn reload(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().reload() {
                    logging::warn!("page reload failed: {err:?}");
                }
            }
        }
    }

    /// Executes one reducer-emitted effect against runtime-owned state.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        runtime.content.update_value(|content| content.apply(&effect));
    }
}

//! Reducer actions, side-effect intents, and transition logic for the window registry.

use desktop_app_contract::ApplicationId;
use leptos::logging;
use serde_json::Value;

use crate::{
    model::{Position, Size, WindowId},
    registry::{OpenOutcome, WindowRegistry},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`]. Each maps onto one registry operation.
pub enum DesktopAction {
    /// Open an app, or focus its existing window.
    OpenWindow {
        /// App to open.
        app_id: ApplicationId,
        /// Opaque payload handed to the hosted content on first mount.
        props: Value,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus a window, or clear focus with `None`.
    SetActiveWindow {
        /// Window to focus.
        window_id: Option<WindowId>,
    },
    /// Hide a window from the surface.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Unhide and focus a window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Commit an already-clamped position.
    UpdateWindowPosition {
        /// Window being moved.
        window_id: WindowId,
        /// New top-left corner.
        position: Position,
    },
    /// Commit an already-clamped frame size.
    UpdateWindowSize {
        /// Window being resized.
        window_id: WindowId,
        /// New frame size.
        size: Size,
    },
    /// Close everything at the end of the desktop session.
    EndSession,
}

impl DesktopAction {
    /// Convenience constructor for opening an app without props.
    pub fn open(app_id: ApplicationId) -> Self {
        Self::OpenWindow {
            app_id,
            props: Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// A frame changed size; its hosted content must be told the new content size.
    ContentResized {
        /// Window whose frame changed.
        window_id: WindowId,
        /// New frame size, chrome included.
        size: Size,
    },
    /// A record was removed; its hosted content must be unmounted.
    ContentReleased {
        /// Window that no longer exists.
        window_id: WindowId,
    },
}

/// Applies a [`DesktopAction`] to the registry and collects resulting side effects.
///
/// Total: actions naming windows that are not open degrade to no-ops. In debug builds the
/// registry invariants are re-checked after every step.
pub fn reduce_desktop(registry: &mut WindowRegistry, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { app_id, props } => {
            if registry.open_window(&app_id, props) == OpenOutcome::UnknownApp {
                logging::debug_warn!("ignoring open request for unknown app `{app_id}`");
            }
        }
        DesktopAction::CloseWindow { window_id } => match registry.close_window(window_id) {
            Some(_) => effects.push(RuntimeEffect::ContentReleased { window_id }),
            None => stale(window_id, "close"),
        },
        DesktopAction::SetActiveWindow { window_id } => {
            if !registry.set_active_window(window_id) {
                if let Some(window_id) = window_id {
                    stale(window_id, "focus");
                }
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if !registry.minimize_window(window_id) {
                stale(window_id, "minimize");
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            if !registry.restore_window(window_id) {
                stale(window_id, "restore");
            }
        }
        DesktopAction::UpdateWindowPosition {
            window_id,
            position,
        } => {
            registry.update_window_position(window_id, position);
        }
        DesktopAction::UpdateWindowSize { window_id, size } => {
            if registry.update_window_size(window_id, size) {
                effects.push(RuntimeEffect::ContentResized { window_id, size });
            }
        }
        DesktopAction::EndSession => {
            effects.extend(
                registry
                    .teardown()
                    .into_iter()
                    .map(|window_id| RuntimeEffect::ContentReleased { window_id }),
            );
        }
    }

    #[cfg(debug_assertions)]
    {
        let checked = registry.check_invariants();
        if let Err(violation) = &checked {
            logging::error!("window registry invariant violated: {violation}");
        }
        debug_assert_eq!(checked, Ok(()));
    }

    effects
}

fn stale(window_id: WindowId, operation: &str) {
    logging::debug_warn!("ignoring {operation} for {window_id}: not open");
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::catalog::fixtures::test_catalog;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(Rc::new(test_catalog()))
    }

    fn open(registry: &mut WindowRegistry, app: &str) -> WindowId {
        let app_id = ApplicationId::trusted(app);
        let effects = reduce_desktop(registry, DesktopAction::open(app_id.clone()));
        assert!(effects.is_empty());
        registry.window_for_app(&app_id).expect("window opened")
    }

    #[test]
    fn open_passes_props_through_untouched() {
        let mut registry = registry();
        let props = json!({ "content": "hello", "nested": [1, 2, 3] });
        reduce_desktop(
            &mut registry,
            DesktopAction::OpenWindow {
                app_id: ApplicationId::trusted("about"),
                props: props.clone(),
            },
        );
        let record = registry.windows().next().expect("record");
        assert_eq!(record.props, props);
    }

    #[test]
    fn close_emits_content_release_once() {
        let mut registry = registry();
        let id = open(&mut registry, "terminal");

        assert_eq!(
            reduce_desktop(&mut registry, DesktopAction::CloseWindow { window_id: id }),
            vec![RuntimeEffect::ContentReleased { window_id: id }]
        );
        assert_eq!(
            reduce_desktop(&mut registry, DesktopAction::CloseWindow { window_id: id }),
            Vec::new()
        );
    }

    #[test]
    fn size_change_emits_content_resize_only_when_changed() {
        let mut registry = registry();
        let id = open(&mut registry, "terminal");
        let size = Size::new(820, 500);

        assert_eq!(
            reduce_desktop(
                &mut registry,
                DesktopAction::UpdateWindowSize {
                    window_id: id,
                    size,
                }
            ),
            vec![RuntimeEffect::ContentResized {
                window_id: id,
                size,
            }]
        );
        assert_eq!(
            reduce_desktop(
                &mut registry,
                DesktopAction::UpdateWindowSize {
                    window_id: id,
                    size,
                }
            ),
            Vec::new()
        );
    }

    #[test]
    fn stale_ids_leave_registry_untouched() {
        let mut registry = registry();
        open(&mut registry, "about");
        let before = registry.clone();
        let ghost = WindowId(404);

        for action in [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::SetActiveWindow {
                window_id: Some(ghost),
            },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::RestoreWindow { window_id: ghost },
            DesktopAction::UpdateWindowPosition {
                window_id: ghost,
                position: Position::new(1, 1),
            },
            DesktopAction::UpdateWindowSize {
                window_id: ghost,
                size: Size::new(900, 900),
            },
            DesktopAction::open(ApplicationId::trusted("solitaire")),
        ] {
            assert_eq!(reduce_desktop(&mut registry, action), Vec::new());
        }
        assert_eq!(registry, before);
    }

    #[test]
    fn end_session_releases_every_window() {
        let mut registry = registry();
        let a = open(&mut registry, "about");
        let b = open(&mut registry, "files");

        assert_eq!(
            reduce_desktop(&mut registry, DesktopAction::EndSession),
            vec![
                RuntimeEffect::ContentReleased { window_id: a },
                RuntimeEffect::ContentReleased { window_id: b },
            ]
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn background_click_clears_focus() {
        let mut registry = registry();
        open(&mut registry, "about");
        reduce_desktop(
            &mut registry,
            DesktopAction::SetActiveWindow { window_id: None },
        );
        assert_eq!(registry.active_window(), None);
    }
}

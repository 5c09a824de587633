//! Per-window interaction state machine.
//!
//! A [`WindowFrame`] turns pointer gestures and chrome buttons into [`DesktopAction`]s. It keeps a
//! mirror of the committed geometry so each pointer move can be clamped against the latest state,
//! plus the transient bits the registry never sees: the active gesture, the maximized flag and the
//! pre-maximize snapshot.

use crate::{
    catalog::WindowManagerConfig,
    geometry,
    model::{PointerPosition, Position, Size, Viewport, WindowGeometry, WindowId, WindowRecord},
    reducer::DesktopAction,
};

/// Observable frame state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Normal,
    Dragging,
    Resizing,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Idle,
    Dragging {
        grab_offset: Position,
    },
    Resizing {
        pointer_start: PointerPosition,
        size_start: Size,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    window_id: WindowId,
    min_size: Size,
    config: WindowManagerConfig,
    geometry: WindowGeometry,
    maximized: bool,
    restore_snapshot: Option<WindowGeometry>,
    gesture: Gesture,
}

impl WindowFrame {
    pub fn new(record: &WindowRecord, min_size: Size, config: WindowManagerConfig) -> Self {
        Self {
            window_id: record.id,
            min_size,
            config,
            geometry: record.geometry(),
            maximized: false,
            restore_snapshot: None,
            gesture: Gesture::Idle,
        }
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn state(&self) -> FrameState {
        match self.gesture {
            Gesture::Dragging { .. } => FrameState::Dragging,
            Gesture::Resizing { .. } => FrameState::Resizing,
            Gesture::Idle if self.maximized => FrameState::Maximized,
            Gesture::Idle => FrameState::Normal,
        }
    }

    /// Title-bar pointer-down. Starts a drag unless maximized; always requests focus.
    pub fn begin_drag(&mut self, pointer: PointerPosition) -> Vec<DesktopAction> {
        if !self.maximized {
            let origin = self.geometry.position;
            self.gesture = Gesture::Dragging {
                grab_offset: Position::new(pointer.x - origin.x, pointer.y - origin.y),
            };
        }
        vec![self.focus_action()]
    }

    /// Resize-handle pointer-down. Starts a resize unless maximized; always requests focus.
    pub fn begin_resize(&mut self, pointer: PointerPosition) -> Vec<DesktopAction> {
        if !self.maximized {
            self.gesture = Gesture::Resizing {
                pointer_start: pointer,
                size_start: self.geometry.size,
            };
        }
        vec![self.focus_action()]
    }

    /// Applies a pointer move to the in-progress gesture and commits the clamped result.
    pub fn pointer_move(
        &mut self,
        pointer: PointerPosition,
        viewport: Viewport,
    ) -> Vec<DesktopAction> {
        let next = match self.gesture {
            Gesture::Idle => return Vec::new(),
            Gesture::Dragging { grab_offset } => WindowGeometry {
                position: geometry::drag_to(
                    pointer,
                    grab_offset,
                    self.geometry.size,
                    viewport,
                    &self.config,
                ),
                size: self.geometry.size,
            },
            Gesture::Resizing {
                pointer_start,
                size_start,
            } => WindowGeometry {
                position: self.geometry.position,
                size: geometry::resize_to(pointer, pointer_start, size_start, self.min_size),
            },
        };
        self.commit(next)
    }

    /// Ends any gesture. Returns whether one was in progress.
    pub fn end_gesture(&mut self) -> bool {
        let was_active = self.gesture != Gesture::Idle;
        self.gesture = Gesture::Idle;
        was_active
    }

    pub fn toggle_maximize(&mut self, viewport: Viewport) -> Vec<DesktopAction> {
        if self.maximized {
            self.restore()
        } else {
            self.maximize(viewport)
        }
    }

    /// Fills the viewport above the taskbar. Maximizing again only re-asserts that geometry; the
    /// snapshot from the first call is kept.
    pub fn maximize(&mut self, viewport: Viewport) -> Vec<DesktopAction> {
        self.end_gesture();
        let (target, snapshot) = geometry::maximize(self.geometry, viewport, &self.config);
        if !self.maximized {
            self.restore_snapshot = Some(snapshot);
            self.maximized = true;
        }
        let mut actions = vec![self.focus_action()];
        actions.extend(self.commit(self.fit_minimum(target)));
        actions
    }

    /// Replays the pre-maximize snapshot. On a normal frame this is just a focus request.
    pub fn restore(&mut self) -> Vec<DesktopAction> {
        self.end_gesture();
        let mut actions = vec![self.focus_action()];
        if !self.maximized {
            return actions;
        }
        self.maximized = false;
        if let Some(snapshot) = self.restore_snapshot.take() {
            actions.extend(self.commit(geometry::restore(snapshot)));
        }
        actions
    }

    pub fn minimize(&mut self) -> Vec<DesktopAction> {
        self.end_gesture();
        vec![DesktopAction::MinimizeWindow {
            window_id: self.window_id,
        }]
    }

    pub fn close(&mut self) -> Vec<DesktopAction> {
        self.end_gesture();
        vec![DesktopAction::CloseWindow {
            window_id: self.window_id,
        }]
    }

    /// Pointer-down anywhere on the frame.
    pub fn focus(&self) -> Vec<DesktopAction> {
        vec![self.focus_action()]
    }

    /// Re-applies viewport-dependent bounds after mount or a browser resize.
    ///
    /// A maximized frame tracks the new viewport; a normal frame is pulled back so its title bar
    /// stays reachable. Does not request focus.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) -> Vec<DesktopAction> {
        let next = if self.maximized {
            self.fit_minimum(geometry::maximized_geometry(viewport, &self.config))
        } else {
            WindowGeometry {
                position: geometry::clamp_drag(
                    self.geometry.position,
                    self.geometry.size,
                    viewport,
                    &self.config,
                ),
                size: self.geometry.size,
            }
        };
        self.commit(next)
    }

    fn fit_minimum(&self, target: WindowGeometry) -> WindowGeometry {
        WindowGeometry {
            position: target.position,
            size: geometry::clamp_resize(target.size, self.min_size),
        }
    }

    fn commit(&mut self, next: WindowGeometry) -> Vec<DesktopAction> {
        let mut actions = Vec::new();
        if next.position != self.geometry.position {
            actions.push(DesktopAction::UpdateWindowPosition {
                window_id: self.window_id,
                position: next.position,
            });
        }
        if next.size != self.geometry.size {
            actions.push(DesktopAction::UpdateWindowSize {
                window_id: self.window_id,
                size: next.size,
            });
        }
        self.geometry = next;
        actions
    }

    fn focus_action(&self) -> DesktopAction {
        DesktopAction::SetActiveWindow {
            window_id: Some(self.window_id),
        }
    }
}

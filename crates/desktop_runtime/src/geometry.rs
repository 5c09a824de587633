//! Pure clamp and transform helpers for drag, resize, and maximize/restore.
//!
//! Nothing here holds state. Callers pass the current geometry, the proposed change and the
//! viewport, and commit whatever comes back.

use crate::{
    catalog::WindowManagerConfig,
    model::{PointerPosition, Position, Size, Viewport, WindowGeometry},
};

/// Largest `y` a title bar may be dragged to.
pub fn max_drag_y(viewport: Viewport, config: &WindowManagerConfig) -> i32 {
    viewport.height - config.taskbar_height - config.drag_bottom_allowance
}

/// Clamps a proposed window position so the title bar stays reachable.
///
/// `x` stays within `[0, viewport.width - size.width]` and `y` within `[0, max_drag_y]`. When the
/// window is wider (or the viewport shorter) than the range allows, the lower bound wins.
pub fn clamp_drag(
    proposed: Position,
    size: Size,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> Position {
    Position {
        x: proposed.x.min(viewport.width - size.width).max(0),
        y: proposed.y.min(max_drag_y(viewport, config)).max(0),
    }
}

/// Clamps a proposed size to the app minimum. There is no upper bound.
pub fn clamp_resize(proposed: Size, min_size: Size) -> Size {
    proposed.clamped_min(min_size)
}

/// Position for a drag whose pointer grabbed the window `grab_offset` away from its corner.
pub fn drag_to(
    pointer: PointerPosition,
    grab_offset: Position,
    size: Size,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> Position {
    clamp_drag(
        Position::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y),
        size,
        viewport,
        config,
    )
}

/// Size for a bottom-right resize that started at `pointer_start` with `size_start`.
pub fn resize_to(
    pointer: PointerPosition,
    pointer_start: PointerPosition,
    size_start: Size,
    min_size: Size,
) -> Size {
    clamp_resize(
        Size::new(
            size_start.width + (pointer.x - pointer_start.x),
            size_start.height + (pointer.y - pointer_start.y),
        ),
        min_size,
    )
}

/// Geometry of a maximized window: the whole viewport above the taskbar.
pub fn maximized_geometry(viewport: Viewport, config: &WindowManagerConfig) -> WindowGeometry {
    WindowGeometry {
        position: Position::ORIGIN,
        size: Size::new(viewport.width, viewport.height - config.taskbar_height),
    }
}

/// Maximize transform. Returns the maximized geometry and the snapshot to restore later.
pub fn maximize(
    current: WindowGeometry,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> (WindowGeometry, WindowGeometry) {
    (maximized_geometry(viewport, config), current)
}

/// Restore transform: the snapshot taken by the most recent [`maximize`].
pub fn restore(snapshot: WindowGeometry) -> WindowGeometry {
    snapshot
}

/// Default position for a new window given how many are already open.
pub fn cascade_position(open_count: usize, config: &WindowManagerConfig) -> Position {
    let index = match config.cascade_wrap {
        Some(wrap) if wrap > 0 => open_count % wrap as usize,
        _ => open_count,
    };
    let offset = config.cascade_origin + config.cascade_step * index as i32;
    Position::new(offset, offset)
}

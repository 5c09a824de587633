//! Desktop shell UI composition and interaction surfaces.

mod gesture;
mod menus;
mod notifications;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    menus::DesktopContextMenu, notifications::NotificationPanel, taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    icons::{IconSize, ShellIcon},
    model::{PointerPosition, Position},
    reducer::DesktopAction,
    surface::{self, ShellOverlays},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CONTEXT_MENU_WIDTH_PX: i32 = 200;
const CONTEXT_MENU_HEIGHT_PX: i32 = 180;
const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Applies `change` to a copy of the overlays and publishes it only when something changed.
fn update_overlays(
    overlays: RwSignal<ShellOverlays>,
    change: impl FnOnce(&mut ShellOverlays) -> bool,
) {
    let mut next = overlays.get_untracked();
    if change(&mut next) {
        overlays.set(next);
    }
}

fn open_desktop_context_menu(
    runtime: DesktopRuntimeContext,
    overlays: RwSignal<ShellOverlays>,
    x: i32,
    y: i32,
) {
    let position = surface::clamp_popup_position(
        Position::new(x, y),
        CONTEXT_MENU_WIDTH_PX,
        CONTEXT_MENU_HEIGHT_PX,
        runtime.viewport.get_untracked(),
        runtime.config().taskbar_height,
    );
    update_overlays(overlays, |overlays| overlays.open_context_menu(position));
}

#[component]
/// Renders the full desktop shell: wallpaper, icons, open windows, popups and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let wallpaper = create_rw_signal(0_usize);
    let overlays = create_rw_signal(ShellOverlays::default());
    let desktop_icons = store_value(
        runtime
            .registry
            .with_untracked(|registry| surface::desktop_icons(registry.catalog())),
    );

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            update_overlays(overlays, ShellOverlays::dismiss_all);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            style=move || format!("background:{};", surface::wallpaper_css(wallpaper.get()))
            on:click=move |_| update_overlays(overlays, ShellOverlays::close_context_menu)
        >
            <div
                class="desktop-background"
                data-ui-slot="dismiss-layer"
                on:click=move |_| {
                    update_overlays(overlays, ShellOverlays::dismiss_all);
                    runtime.dispatch_action(DesktopAction::SetActiveWindow { window_id: None });
                }
                on:contextmenu=move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    open_desktop_context_menu(runtime, overlays, ev.client_x(), ev.client_y());
                }
            />
            <div class="desktop-icon-grid">
                <For
                    each=move || desktop_icons.get_value()
                    key=|icon| icon.app_id.to_string()
                    let:icon
                >
                    {{
                        let app_id = icon.app_id.clone();
                        view! {
                            <button
                                class="desktop-icon"
                                title=icon.label.clone()
                                on:dblclick=move |ev| {
                                    ev.stop_propagation();
                                    runtime.open_app(app_id.clone());
                                }
                            >
                                <span class="desktop-icon-glyph">
                                    <ShellIcon icon=icon.icon size=IconSize::Lg />
                                </span>
                                <span class="desktop-icon-label">{icon.label.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || runtime.registry.with(surface::window_layer)
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <DesktopWindow window_id />
                </For>
            </div>

            <DesktopContextMenu runtime overlays wallpaper />
            <NotificationPanel overlays />

            <Taskbar overlays />
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

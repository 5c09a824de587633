use desktop_app_contract::AppHandle;
use leptos::leptos_dom::helpers::WindowListenerHandle;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{gesture::GestureScope, *};
use crate::{
    apps,
    frame::{FrameState, WindowFrame},
    icons::IconName,
    model::WindowId,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Runs one frame transition and dispatches what it produced, after the frame borrow ends.
fn drive_frame(
    runtime: DesktopRuntimeContext,
    frame: StoredValue<WindowFrame>,
    maximized: RwSignal<bool>,
    step: impl FnOnce(&mut WindowFrame) -> Vec<DesktopAction>,
) {
    let Some((actions, is_maximized)) = frame.try_update_value(|frame| {
        let actions = step(frame);
        (actions, frame.is_maximized())
    }) else {
        return;
    };
    if maximized.get_untracked() != is_maximized {
        maximized.set(is_maximized);
    }
    runtime.dispatch_all(actions);
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let Some((record, min_size, title, icon)) = runtime.registry.with_untracked(|registry| {
        let record = registry.window(window_id)?.clone();
        let min_size = registry
            .catalog()
            .descriptor(&record.app_id)
            .map_or(record.size, |app| app.min_size);
        let (title, icon) = surface::title_and_icon(registry.catalog(), &record.app_id);
        Some((record, min_size, title, icon))
    }) else {
        logging::debug_warn!("{window_id} rendered after it closed");
        return ().into_view();
    };

    let frame = store_value(WindowFrame::new(&record, min_size, runtime.config()));
    let maximized = create_rw_signal(false);
    let gesture = store_value(None::<GestureScope<WindowListenerHandle>>);
    on_cleanup(move || {
        gesture.try_update_value(Option::take);
    });

    let rendered = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| surface::rendered_window(registry, window_id))
    });

    create_effect(move |_| {
        let viewport = runtime.viewport.get();
        drive_frame(runtime, frame, maximized, |frame| {
            frame.fit_to_viewport(viewport)
        });
    });

    let finish_gesture = move || {
        frame.update_value(|frame| {
            frame.end_gesture();
        });
        gesture.set_value(None);
    };
    let start_gesture = move || {
        let pointer_move = window_event_listener(ev::pointermove, move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            let viewport = runtime.viewport.get_untracked();
            drive_frame(runtime, frame, maximized, |frame| {
                frame.pointer_move(pointer, viewport)
            });
        });
        let pointer_up = window_event_listener(ev::pointerup, move |_| finish_gesture());
        let pointer_cancel = window_event_listener(ev::pointercancel, move |_| finish_gesture());
        let blur = window_event_listener(ev::blur, move |_| finish_gesture());
        gesture.set_value(Some(GestureScope::new(vec![
            pointer_move,
            pointer_up,
            pointer_cancel,
            blur,
        ])));
    };

    let focus = move |_| {
        if rendered.get_untracked().is_some_and(|win| !win.active) {
            drive_frame(runtime, frame, maximized, |frame| frame.focus());
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        drive_frame(runtime, frame, maximized, |frame| frame.begin_drag(pointer));
        if frame.with_value(|frame| frame.state() == FrameState::Dragging) {
            try_set_pointer_capture(&ev);
            start_gesture();
        }
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        drive_frame(runtime, frame, maximized, |frame| frame.begin_resize(pointer));
        if frame.with_value(|frame| frame.state() == FrameState::Resizing) {
            try_set_pointer_capture(&ev);
            start_gesture();
        }
    };
    let toggle_maximize = move || {
        let viewport = runtime.viewport.get_untracked();
        drive_frame(runtime, frame, maximized, |frame| {
            frame.toggle_maximize(viewport)
        });
    };
    let minimize = move || {
        gesture.set_value(None);
        drive_frame(runtime, frame, maximized, WindowFrame::minimize);
    };
    let close = move || {
        gesture.set_value(None);
        drive_frame(runtime, frame, maximized, WindowFrame::close);
    };

    let style = move || match rendered.get() {
        Some(win) => format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.geometry.position.x,
            win.geometry.position.y,
            win.geometry.size.width,
            win.geometry.size.height,
            win.z_index
        ),
        // Minimized frames stay in the DOM so hosted content keeps its state.
        None => "display:none;".to_string(),
    };
    let class = move || {
        let active_class = if rendered.get().is_some_and(|win| win.active) {
            " active"
        } else {
            ""
        };
        let maximized_class = if maximized.get() { " maximized" } else { "" };
        format!("desktop-window{active_class}{maximized_class}")
    };

    let mounted = with_owner(runtime.owner, move || {
        runtime.content.try_update_value(|content| {
            content.ensure_mounted(&record, apps::hosted_app(&record.app_id))
        })
    });
    let content_lifecycle = mounted.as_ref().map(AppHandle::lifecycle);
    let body = mounted.map(|handle| handle.view());

    view! {
        <section
            class=class
            style=style
            data-window-id=window_id.0
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">
                        <ShellIcon icon size=IconSize::Sm />
                    </span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        <ShellIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </button>
                    <button
                        aria-label=move || {
                            if maximized.get() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || {
                            let icon = if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <ShellIcon icon size=IconSize::Xs /> }
                        }}
                    </button>
                    <button
                        class="close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                    </button>
                </div>
            </header>
            <div
                class="window-body"
                data-content-lifecycle=move || {
                    content_lifecycle.map_or("", |lifecycle| lifecycle.get().token())
                }
            >
                {body}
            </div>
            <Show when=move || !maximized.get() fallback=|| ()>
                <div
                    class="window-resize-handle"
                    aria-hidden="true"
                    on:pointerdown=begin_resize
                />
            </Show>
        </section>
    }
    .into_view()
}

use super::*;
use crate::{
    icons::IconName,
    surface::{ClockReading, TaskbarModel},
};

#[component]
pub(super) fn Taskbar(overlays: RwSignal<ShellOverlays>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let model = create_memo(move |_| runtime.registry.with(surface::taskbar_model));
    let clock_now = create_rw_signal(ClockReading::now());
    let taskbar_style = format!("height:{}px;", runtime.config().taskbar_height);

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let now = ClockReading::now();
            if clock_now.get_untracked() != now {
                clock_now.set(now);
            }
        },
        CLOCK_TICK,
    ) {
        on_cleanup(move || interval.clear());
    }

    let launchers = move || model.with(|model: &TaskbarModel| model.launchers.clone());
    let window_buttons = move || model.with(|model: &TaskbarModel| model.windows.clone());
    let badge = create_memo(move |_| overlays.with(ShellOverlays::badge_count));

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=taskbar_style
            on:contextmenu=move |ev| ev.prevent_default()
        >
            <div class="taskbar-launchers">
                <For
                    each=launchers
                    key=|app| (app.app_id.to_string(), app.running)
                    let:app
                >
                    {{
                        let app_id = app.app_id.clone();
                        view! {
                            <button
                                class=if app.running { "taskbar-launcher running" } else { "taskbar-launcher" }
                                title=app.title.clone()
                                aria-label=format!("Open {}", app.title)
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.open_app(app_id.clone());
                                }
                            >
                                <ShellIcon icon=app.icon size=IconSize::Sm />
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-windows" role="list">
                <For
                    each=window_buttons
                    key=|win| (win.window_id.0, win.active, win.minimized)
                    let:win
                >
                    {{
                        let window_id = win.window_id;
                        let mut class = String::from("taskbar-window");
                        if win.active {
                            class.push_str(" active");
                        }
                        if win.minimized {
                            class.push_str(" minimized");
                        }
                        view! {
                            <button
                                class=class
                                role="listitem"
                                aria-pressed=win.active.to_string()
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
                                }
                            >
                                <ShellIcon icon=win.icon size=IconSize::Xs />
                                <span class="taskbar-window-title">{win.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <button
                    class="taskbar-bell"
                    aria-label="Notifications"
                    aria-expanded=move || overlays.with(ShellOverlays::notifications_open).to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        update_overlays(overlays, ShellOverlays::toggle_notifications);
                    }
                >
                    <ShellIcon icon=IconName::Bell size=IconSize::Sm />
                    {move || {
                        badge
                            .get()
                            .map(|count| view! { <span class="taskbar-badge">{count}</span> })
                    }}
                </button>
                <div
                    class="taskbar-clock"
                    aria-live="off"
                    title=move || clock_now.get().label()
                >
                    <span class="taskbar-clock-time">{move || clock_now.get().time_label()}</span>
                    <span class="taskbar-clock-date">{move || clock_now.get().date_label()}</span>
                </div>
            </div>
        </footer>
    }
}

use super::*;
use crate::{icons::IconName, surface::Notification};

#[component]
fn NotificationItem(notification: Notification) -> impl IntoView {
    view! {
        <li class=format!("notification-item {}", notification.kind.token())>
            <span class="notification-icon" aria-hidden="true">
                <ShellIcon icon=notification.icon size=IconSize::Sm />
            </span>
            <div class="notification-text">
                <p class="notification-title">{notification.title}</p>
                <p class="notification-message">{notification.message}</p>
                <p class="notification-time">{notification.time_label}</p>
            </div>
        </li>
    }
}

/// Panel opened from the tray bell. Stops clicks so the shell's dismiss handlers ignore them.
#[component]
pub(super) fn NotificationPanel(overlays: RwSignal<ShellOverlays>) -> impl IntoView {
    let notifications = create_memo(move |_| overlays.with(|o| o.notifications().to_vec()));

    view! {
        <Show when=move || overlays.with(ShellOverlays::notifications_open) fallback=|| ()>
            <section
                id="notification-panel"
                class="notification-panel"
                role="dialog"
                aria-label="Notifications"
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| stop_mouse_event(&ev)
            >
                <header class="notification-header">
                    <h3>"Notifications"</h3>
                    <button
                        class="notification-close"
                        aria-label="Close notifications"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            update_overlays(overlays, ShellOverlays::close_notifications);
                        }
                    >
                        <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                    </button>
                </header>
                <Show
                    when=move || notifications.with(|list| !list.is_empty())
                    fallback=|| {
                        view! {
                            <div class="notification-empty">
                                <ShellIcon icon=IconName::CheckCircle size=IconSize::Lg />
                                <p>"No notifications"</p>
                            </div>
                        }
                    }
                >
                    <ul class="notification-list">
                        <For each=move || notifications.get() key=|note| note.id let:note>
                            <NotificationItem notification=note />
                        </For>
                    </ul>
                    <button
                        class="notification-clear"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            update_overlays(overlays, ShellOverlays::clear_notifications);
                        }
                    >
                        "Clear all notifications"
                    </button>
                </Show>
            </section>
        </Show>
    }
}

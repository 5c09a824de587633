use super::*;
use crate::surface::ContextMenuCommand;

fn run_context_command(
    runtime: DesktopRuntimeContext,
    wallpaper: RwSignal<usize>,
    command: ContextMenuCommand,
) {
    match command {
        ContextMenuCommand::Refresh => runtime.host.get_value().reload(),
        ContextMenuCommand::ChangeWallpaper => wallpaper.update(|index| {
            *index = surface::next_wallpaper(*index);
        }),
        ContextMenuCommand::DisplaySettings | ContextMenuCommand::SystemInfo => {
            if let Some(action) = command.action() {
                runtime.dispatch_action(action);
            }
        }
    }
}

#[component]
pub(super) fn DesktopContextMenu(
    runtime: DesktopRuntimeContext,
    overlays: RwSignal<ShellOverlays>,
    wallpaper: RwSignal<usize>,
) -> impl IntoView {
    let menu_position = create_memo(move |_| overlays.with(ShellOverlays::context_menu));
    view! {
        <Show when=move || menu_position.get().is_some() fallback=|| ()>
            {move || {
                let Some(menu) = menu_position.get() else {
                    return ().into_view();
                };
                let menu_style = format!("left:{}px;top:{}px;", menu.x, menu.y);

                view! {
                    <div
                        id="desktop-context-menu"
                        class="desktop-context-menu"
                        role="menu"
                        aria-label="Desktop context menu"
                        style=menu_style
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=move |ev| ev.stop_propagation()
                        on:contextmenu=move |ev| stop_mouse_event(&ev)
                    >
                        {ContextMenuCommand::ALL
                            .into_iter()
                            .map(|command| {
                                view! {
                                    <button
                                        role="menuitem"
                                        class="desktop-context-menu-item"
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            update_overlays(overlays, ShellOverlays::close_context_menu);
                                            run_context_command(runtime, wallpaper, command);
                                        }
                                    >
                                        <ShellIcon icon=command.icon() size=IconSize::Xs />
                                        <span>{command.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </Show>
    }
}

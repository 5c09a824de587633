//! View-models for the desktop surface, context menu, notification panel and taskbar.
//!
//! Components render these and nothing else, so everything the user can see about registry state
//! is decided here and covered by plain unit tests.

use desktop_app_contract::ApplicationId;

use crate::{
    catalog::AppCatalog,
    icons::IconName,
    model::{Position, Viewport, WindowGeometry, WindowId},
    reducer::DesktopAction,
    registry::WindowRegistry,
};

const ACTIVE_WINDOW_Z_INDEX: i32 = 50;
const INACTIVE_WINDOW_Z_INDEX: i32 = 40;
const POPUP_EDGE_MARGIN: i32 = 6;

/// Background gradients cycled by the context menu.
pub const WALLPAPERS: [&str; 5] = [
    "linear-gradient(135deg, hsl(220 26% 14%) 0%, hsl(217 91% 20%) 100%)",
    "linear-gradient(135deg, hsl(240 26% 14%) 0%, hsl(260 91% 20%) 100%)",
    "linear-gradient(135deg, hsl(200 26% 14%) 0%, hsl(180 91% 20%) 100%)",
    "linear-gradient(135deg, hsl(280 26% 14%) 0%, hsl(300 91% 20%) 100%)",
    "linear-gradient(135deg, hsl(160 26% 14%) 0%, hsl(120 91% 20%) 100%)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopIcon {
    pub app_id: ApplicationId,
    pub label: String,
    pub icon: IconName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWindow {
    pub window_id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: IconName,
    pub geometry: WindowGeometry,
    pub z_index: i32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarLauncher {
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: IconName,
    /// The app has an open window (minimized or not).
    pub running: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarWindowButton {
    pub window_id: WindowId,
    pub title: String,
    pub icon: IconName,
    pub active: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskbarModel {
    pub launchers: Vec<TaskbarLauncher>,
    pub windows: Vec<TaskbarWindowButton>,
}

/// Entries of the desktop background context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuCommand {
    Refresh,
    ChangeWallpaper,
    DisplaySettings,
    SystemInfo,
}

impl ContextMenuCommand {
    pub const ALL: [Self; 4] = [
        Self::Refresh,
        Self::ChangeWallpaper,
        Self::DisplaySettings,
        Self::SystemInfo,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::ChangeWallpaper => "Change Wallpaper",
            Self::DisplaySettings => "Display Settings",
            Self::SystemInfo => "System Info",
        }
    }

    pub const fn icon(self) -> IconName {
        match self {
            Self::Refresh => IconName::Refresh,
            Self::ChangeWallpaper => IconName::Palette,
            Self::DisplaySettings => IconName::Settings,
            Self::SystemInfo => IconName::Info,
        }
    }

    /// Registry action for the entry, if it has one. Refresh and wallpaper are surface-local.
    pub fn action(self) -> Option<DesktopAction> {
        match self {
            Self::Refresh | Self::ChangeWallpaper => None,
            Self::DisplaySettings | Self::SystemInfo => {
                Some(DesktopAction::open(ApplicationId::trusted("about")))
            }
        }
    }
}

pub fn desktop_icons(catalog: &AppCatalog) -> Vec<DesktopIcon> {
    catalog
        .desktop_apps()
        .map(|app| DesktopIcon {
            app_id: app.id.clone(),
            label: app.title.clone(),
            icon: IconName::for_app_token(&app.icon),
        })
        .collect()
}

/// Frames mounted in the window layer: every open window in insertion order, minimized ones
/// included so their content survives. Stacking comes from [`rendered_window`]'s z-index.
pub fn window_layer(registry: &WindowRegistry) -> Vec<WindowId> {
    registry.windows().map(|record| record.id).collect()
}

/// Render model for one window, or `None` while it is minimized or after it closed.
pub fn rendered_window(registry: &WindowRegistry, window_id: WindowId) -> Option<RenderedWindow> {
    if registry.is_minimized(window_id) {
        return None;
    }
    let record = registry.window(window_id)?;
    let active = registry.active_window() == Some(window_id);
    let (title, icon) = title_and_icon(registry.catalog(), &record.app_id);
    Some(RenderedWindow {
        window_id,
        app_id: record.app_id.clone(),
        title,
        icon,
        geometry: record.geometry(),
        z_index: if active {
            ACTIVE_WINDOW_Z_INDEX
        } else {
            INACTIVE_WINDOW_Z_INDEX
        },
        active,
    })
}

/// One launcher per taskbar app and one button per open window, minimized ones included.
pub fn taskbar_model(registry: &WindowRegistry) -> TaskbarModel {
    let launchers = registry
        .catalog()
        .taskbar_apps()
        .map(|app| TaskbarLauncher {
            app_id: app.id.clone(),
            title: app.title.clone(),
            icon: IconName::for_app_token(&app.icon),
            running: registry.window_for_app(&app.id).is_some(),
        })
        .collect();

    let windows = registry
        .windows()
        .map(|record| {
            let (title, icon) = title_and_icon(registry.catalog(), &record.app_id);
            TaskbarWindowButton {
                window_id: record.id,
                title,
                icon,
                active: registry.active_window() == Some(record.id),
                minimized: registry.is_minimized(record.id),
            }
        })
        .collect();

    TaskbarModel { launchers, windows }
}

/// Keeps a popup of `popup_size` fully inside the area above the taskbar.
pub fn clamp_popup_position(
    pointer: Position,
    popup_width: i32,
    popup_height: i32,
    viewport: Viewport,
    taskbar_height: i32,
) -> Position {
    let max_x = (viewport.width - popup_width - POPUP_EDGE_MARGIN).max(POPUP_EDGE_MARGIN);
    let usable_height = viewport.height - taskbar_height;
    let max_y = (usable_height - popup_height - POPUP_EDGE_MARGIN).max(POPUP_EDGE_MARGIN);
    Position::new(
        pointer.x.clamp(POPUP_EDGE_MARGIN, max_x),
        pointer.y.clamp(POPUP_EDGE_MARGIN, max_y),
    )
}

pub fn next_wallpaper(current: usize) -> usize {
    (current + 1) % WALLPAPERS.len()
}

pub fn wallpaper_css(index: usize) -> &'static str {
    WALLPAPERS[index % WALLPAPERS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
}

impl NotificationKind {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub icon: IconName,
    pub title: String,
    pub message: String,
    pub time_label: String,
    pub kind: NotificationKind,
}

/// Notifications present when the session starts.
pub fn default_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            icon: IconName::Mail,
            title: "New message received".to_string(),
            message: "Someone visited your portfolio".to_string(),
            time_label: "2 min ago".to_string(),
            kind: NotificationKind::Info,
        },
        Notification {
            id: 2,
            icon: IconName::Download,
            title: "Download complete".to_string(),
            message: "Resume.pdf downloaded successfully".to_string(),
            time_label: "5 min ago".to_string(),
            kind: NotificationKind::Success,
        },
    ]
}

/// Transient shell popups: the background context menu and the notification panel.
///
/// At most one of the two is open. Every mutator returns whether anything changed so callers
/// only notify subscribers on real transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOverlays {
    context_menu: Option<Position>,
    notifications_open: bool,
    notifications: Vec<Notification>,
}

impl Default for ShellOverlays {
    fn default() -> Self {
        Self::with_notifications(default_notifications())
    }
}

impl ShellOverlays {
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            context_menu: None,
            notifications_open: false,
            notifications,
        }
    }

    pub fn context_menu(&self) -> Option<Position> {
        self.context_menu
    }

    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Tray badge count; `None` hides the badge.
    pub fn badge_count(&self) -> Option<usize> {
        match self.notifications.len() {
            0 => None,
            count => Some(count),
        }
    }

    pub fn open_context_menu(&mut self, position: Position) -> bool {
        let changed = self.context_menu != Some(position) || self.notifications_open;
        self.context_menu = Some(position);
        self.notifications_open = false;
        changed
    }

    pub fn close_context_menu(&mut self) -> bool {
        self.context_menu.take().is_some()
    }

    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_open = !self.notifications_open;
        self.context_menu = None;
        true
    }

    pub fn close_notifications(&mut self) -> bool {
        std::mem::replace(&mut self.notifications_open, false)
    }

    /// Empties the list. The panel stays open on its empty state.
    pub fn clear_notifications(&mut self) -> bool {
        let changed = !self.notifications.is_empty();
        self.notifications.clear();
        changed
    }

    /// Closes whichever popup is open.
    pub fn dismiss_all(&mut self) -> bool {
        let menu = self.close_context_menu();
        let panel = self.close_notifications();
        menu || panel
    }
}

/// Wall-clock reading for the taskbar tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    /// Day of the week, 0 = Sunday.
    pub weekday: u32,
    /// Month, 0 = January.
    pub month: u32,
    /// Day of the month, from 1.
    pub day: u32,
}

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl ClockReading {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
            }
        }

        // The Unix epoch, a Thursday.
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hour: 0,
                minute: 0,
                weekday: 4,
                month: 0,
                day: 1,
            }
        }
    }

    pub fn time_label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Short date such as `Mon, Jan 5`.
    pub fn date_label(self) -> String {
        let weekday = WEEKDAY_NAMES[self.weekday as usize % WEEKDAY_NAMES.len()];
        let month = MONTH_NAMES[self.month as usize % MONTH_NAMES.len()];
        format!("{weekday}, {month} {}", self.day)
    }

    /// Time and date together, for accessible labels.
    pub fn label(self) -> String {
        format!("{} {}", self.time_label(), self.date_label())
    }
}

/// Catalog title and icon for `app_id`; unknown apps fall back to their id and a generic glyph.
pub fn title_and_icon(catalog: &AppCatalog, app_id: &ApplicationId) -> (String, IconName) {
    match catalog.descriptor(app_id) {
        Some(app) => (app.title.clone(), IconName::for_app_token(&app.icon)),
        None => (app_id.to_string(), IconName::File),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog::fixtures::test_catalog, model::Size, reducer::reduce_desktop};

    fn registry() -> WindowRegistry {
        WindowRegistry::new(Rc::new(test_catalog()))
    }

    fn open(registry: &mut WindowRegistry, app: &str) -> WindowId {
        let app_id = ApplicationId::trusted(app);
        reduce_desktop(registry, DesktopAction::open(app_id.clone()));
        registry.window_for_app(&app_id).expect("opened")
    }

    #[test]
    fn builtin_desktop_shows_first_six_apps() {
        let catalog = AppCatalog::builtin().expect("builtin catalog");
        let labels: Vec<String> = desktop_icons(&catalog)
            .into_iter()
            .map(|icon| icon.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "About Me",
                "My Projects",
                "Terminal",
                "Mail Client",
                "File Explorer",
                "Music Player",
            ]
        );
    }

    /// What the shell's window layer mounts: `(id, z-index)` per frame, `None` while hidden.
    fn layer(registry: &WindowRegistry) -> Vec<(WindowId, Option<i32>)> {
        window_layer(registry)
            .into_iter()
            .map(|window_id| {
                let z_index = rendered_window(registry, window_id).map(|win| win.z_index);
                (window_id, z_index)
            })
            .collect()
    }

    #[test]
    fn active_window_is_raised_above_the_rest() {
        let mut registry = registry();
        let about = open(&mut registry, "about");
        let terminal = open(&mut registry, "terminal");
        let files = open(&mut registry, "files");
        reduce_desktop(
            &mut registry,
            DesktopAction::SetActiveWindow {
                window_id: Some(about),
            },
        );

        assert_eq!(
            layer(&registry),
            vec![(about, Some(50)), (terminal, Some(40)), (files, Some(40))]
        );
        let about_window = rendered_window(&registry, about).expect("about is visible");
        assert!(about_window.active);
        assert_eq!(about_window.geometry.size, Size::new(600, 500));

        reduce_desktop(&mut registry, DesktopAction::SetActiveWindow { window_id: None });
        assert_eq!(
            layer(&registry),
            vec![(about, Some(40)), (terminal, Some(40)), (files, Some(40))]
        );
    }

    #[test]
    fn closed_windows_leave_the_layer() {
        let mut registry = registry();
        let about = open(&mut registry, "about");
        let terminal = open(&mut registry, "terminal");
        reduce_desktop(&mut registry, DesktopAction::CloseWindow { window_id: about });

        assert_eq!(layer(&registry), vec![(terminal, Some(50))]);
        assert_eq!(rendered_window(&registry, about), None);
    }

    #[test]
    fn minimized_windows_stay_mounted_hidden_and_on_taskbar() {
        let mut registry = registry();
        let about = open(&mut registry, "about");
        let terminal = open(&mut registry, "terminal");
        reduce_desktop(&mut registry, DesktopAction::MinimizeWindow { window_id: about });

        assert_eq!(layer(&registry), vec![(about, None), (terminal, Some(50))]);

        let taskbar = taskbar_model(&registry);
        assert_eq!(
            taskbar.windows,
            vec![
                TaskbarWindowButton {
                    window_id: about,
                    title: "about".to_string(),
                    icon: IconName::File,
                    active: false,
                    minimized: true,
                },
                TaskbarWindowButton {
                    window_id: terminal,
                    title: "terminal".to_string(),
                    icon: IconName::File,
                    active: true,
                    minimized: false,
                },
            ]
        );
        let running: Vec<bool> = taskbar.launchers.iter().map(|app| app.running).collect();
        assert_eq!(running, vec![true, true, false]);
    }

    #[test]
    fn popup_is_clamped_above_taskbar() {
        let viewport = Viewport::new(1280, 800);
        assert_eq!(
            clamp_popup_position(Position::new(1270, 790), 200, 180, viewport, 56),
            Position::new(1074, 558)
        );
        assert_eq!(
            clamp_popup_position(Position::new(-20, 2), 200, 180, viewport, 56),
            Position::new(6, 6)
        );
    }

    #[test]
    fn settings_and_info_entries_open_about() {
        let actions: Vec<Option<DesktopAction>> = ContextMenuCommand::ALL
            .into_iter()
            .map(ContextMenuCommand::action)
            .collect();
        let about = Some(DesktopAction::open(ApplicationId::trusted("about")));
        assert_eq!(actions, vec![None, None, about.clone(), about]);
    }

    #[test]
    fn wallpaper_cycle_wraps() {
        assert_eq!(next_wallpaper(0), 1);
        assert_eq!(next_wallpaper(WALLPAPERS.len() - 1), 0);
        assert_eq!(wallpaper_css(5), WALLPAPERS[0]);
    }

    #[test]
    fn clock_shows_padded_time_and_short_date() {
        let reading = ClockReading {
            hour: 9,
            minute: 5,
            weekday: 1,
            month: 0,
            day: 5,
        };
        assert_eq!(reading.time_label(), "09:05");
        assert_eq!(reading.date_label(), "Mon, Jan 5");
        assert_eq!(reading.label(), "09:05 Mon, Jan 5");
        assert_eq!(ClockReading::now().date_label(), "Thu, Jan 1");
    }

    #[test]
    fn notification_panel_toggles_and_closes_the_context_menu() {
        let mut overlays = ShellOverlays::default();
        assert_eq!(overlays.badge_count(), Some(2));
        assert!(overlays.open_context_menu(Position::new(40, 60)));

        assert!(overlays.toggle_notifications());
        assert!(overlays.notifications_open());
        assert_eq!(overlays.context_menu(), None);

        assert!(overlays.toggle_notifications());
        assert!(!overlays.notifications_open());
    }

    #[test]
    fn context_menu_and_background_click_dismiss_the_panel() {
        let mut overlays = ShellOverlays::default();
        overlays.toggle_notifications();
        assert!(overlays.open_context_menu(Position::new(10, 10)));
        assert!(!overlays.notifications_open());
        assert!(!overlays.open_context_menu(Position::new(10, 10)));

        overlays.toggle_notifications();
        assert!(overlays.dismiss_all());
        assert_eq!(overlays.context_menu(), None);
        assert!(!overlays.notifications_open());
        assert!(!overlays.dismiss_all());
    }

    #[test]
    fn clearing_notifications_hides_the_badge_and_keeps_the_panel_open() {
        let mut overlays = ShellOverlays::default();
        let titles: Vec<&str> = overlays
            .notifications()
            .iter()
            .map(|note| note.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New message received", "Download complete"]);

        overlays.toggle_notifications();
        assert!(overlays.clear_notifications());
        assert_eq!(overlays.badge_count(), None);
        assert!(overlays.notifications().is_empty());
        assert!(overlays.notifications_open());
        assert!(!overlays.clear_notifications());
    }
}

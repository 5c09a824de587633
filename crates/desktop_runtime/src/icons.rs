//! Icon tokens and the single SVG renderer used by the desktop chrome.
//!
//! Catalog entries name their icon with an opaque token string; [`IconName::from_token`] is the
//! only place that interprets it. Glyphs are 24px, filled with `currentColor`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Profile / about app.
    User,
    /// Projects showcase app.
    Monitor,
    /// Terminal app.
    Terminal,
    /// Mail client app.
    Mail,
    /// File explorer app.
    Folder,
    /// Music player app.
    Music,
    /// Image viewer app.
    Image,
    /// Text viewer app.
    FileText,
    /// Generic document; also the fallback for unknown tokens.
    File,
    Refresh,
    Palette,
    Settings,
    Info,
    /// Notification tray toggle.
    Bell,
    Download,
    /// Empty notification list.
    CheckCircle,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Close control.
    Dismiss,
}

impl IconName {
    const ALL: [Self; 20] = [
        Self::User,
        Self::Monitor,
        Self::Terminal,
        Self::Mail,
        Self::Folder,
        Self::Music,
        Self::Image,
        Self::FileText,
        Self::File,
        Self::Refresh,
        Self::Palette,
        Self::Settings,
        Self::Info,
        Self::Bell,
        Self::Download,
        Self::CheckCircle,
        Self::WindowMinimize,
        Self::WindowMaximize,
        Self::WindowRestore,
        Self::Dismiss,
    ];

    /// Stable token used in the app catalog and as a CSS hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Monitor => "monitor",
            Self::Terminal => "terminal",
            Self::Mail => "mail",
            Self::Folder => "folder",
            Self::Music => "music",
            Self::Image => "image",
            Self::FileText => "file-text",
            Self::File => "file",
            Self::Refresh => "refresh",
            Self::Palette => "palette",
            Self::Settings => "settings",
            Self::Info => "info",
            Self::Bell => "bell",
            Self::Download => "download",
            Self::CheckCircle => "check-circle",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    /// Resolves a catalog token, falling back to [`IconName::File`].
    pub fn for_app_token(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::File)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::User => {
                r#"<path d="M12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM4 20.25C4 16.8 7.58 14 12 14s8 2.8 8 6.25a.75.75 0 0 1-1.5 0c0-2.5-2.8-4.75-6.5-4.75s-6.5 2.25-6.5 4.75a.75.75 0 0 1-1.5 0Z"/>"#
            }
            Self::Monitor => {
                r#"<path d="M4.25 3A2.25 2.25 0 0 0 2 5.25v9.5A2.25 2.25 0 0 0 4.25 17h7v2.5H8.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-2.5V17h7A2.25 2.25 0 0 0 22 14.75v-9.5A2.25 2.25 0 0 0 19.75 3H4.25ZM3.5 5.25c0-.41.34-.75.75-.75h15.5c.41 0 .75.34.75.75v9.5c0 .41-.34.75-.75.75H4.25a.75.75 0 0 1-.75-.75v-9.5Z"/>"#
            }
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v5.66a1.4 1.4 0 0 0-.99-.8 5.08 5.08 0 0 0-.51-.08V8.5h-15v9.25c0 .97.78 1.75 1.75 1.75h5.68l-.19.19c-.37.37-.6.83-.7 1.31H6.25A3.25 3.25 0 0 1 3 17.75V6.25Zm13 5.68-1.72-1.71a.75.75 0 1 0-1.06 1.06l1.7 1.7a5.12 5.12 0 0 1 1.07-1.05ZM4.5 7h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75V7Zm6.28 4.28a.75.75 0 1 0-1.06-1.06l-3 3c-.3.3-.3.77 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-2.47-2.47 2.47-2.47Zm9.02.81c.35.08.44.51.18.77l-1.9 1.9a1.53 1.53 0 0 0 2.16 2.16l1.9-1.9c.26-.26.69-.17.77.18a4.07 4.07 0 0 1-5.57 4.62l-2.73 2.73a1.53 1.53 0 0 1-2.16-2.16l2.73-2.73a4.07 4.07 0 0 1 4.62-5.57Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M4.25 4A2.25 2.25 0 0 0 2 6.25v11.5A2.25 2.25 0 0 0 4.25 20h15.5A2.25 2.25 0 0 0 22 17.75V6.25A2.25 2.25 0 0 0 19.75 4H4.25ZM3.5 7.6l8.1 4.9c.25.15.55.15.8 0l8.1-4.9v10.15c0 .41-.34.75-.75.75H4.25a.75.75 0 0 1-.75-.75V7.6Zm.35-2 .4-.1h15.5l.4.1L12 10.98 3.85 5.6Z"/>"#
            }
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Music => {
                r#"<path d="M20 2.75a.75.75 0 0 0-.97-.72l-10 3a.75.75 0 0 0-.53.72v10.03A3.5 3.5 0 1 0 10 18.5V10.3l8.5-2.55v6.03A3.5 3.5 0 1 0 20 16.5V2.75ZM10 8.73V6.31l8.5-2.55v2.42L10 8.73ZM6.5 20.5a2 2 0 1 1 0-4 2 2 0 0 1 0 4Zm10-2a2 2 0 1 1 0-4 2 2 0 0 1 0 4Z"/>"#
            }
            Self::Image => {
                r#"<path d="M5.25 3A2.25 2.25 0 0 0 3 5.25v13.5A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V5.25A2.25 2.25 0 0 0 18.75 3H5.25ZM4.5 5.25c0-.41.34-.75.75-.75h13.5c.41 0 .75.34.75.75v10.19l-3.47-3.47a.75.75 0 0 0-1.06 0l-2.22 2.22-4.22-4.22a.75.75 0 0 0-1.06 0L4.5 13.94V5.25ZM15.5 9a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Z"/>"#
            }
            Self::FileText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::File => {
                r#"<path d="M6 2a2 2 0 0 0-2 2v16c0 1.1.9 2 2 2h12a2 2 0 0 0 2-2V9.83a2 2 0 0 0-.59-1.42L13.6 2.6A2 2 0 0 0 12.17 2H6Zm-.5 2c0-.28.22-.5.5-.5h6V8c0 1.1.9 2 2 2h4.5v10a.5.5 0 0 1-.5.5H6a.5.5 0 0 1-.5-.5V4Zm12.38 4.5H14a.5.5 0 0 1-.5-.5V4.12l4.38 4.38Z"/>"#
            }
            Self::Refresh => {
                r#"<path d="M12 4.5a7.5 7.5 0 1 0 7.4 8.75.75.75 0 0 1 1.48.25A9 9 0 1 1 18 5.3V3.75a.75.75 0 0 1 1.5 0v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1 0-1.5h1.7A7.47 7.47 0 0 0 12 4.5Z"/>"#
            }
            Self::Palette => {
                r#"<path d="M12 2C6.48 2 2 6.03 2 11c0 3.1 2.5 5.5 5.5 5.5h1.75c.69 0 1.25.56 1.25 1.25 0 .3-.1.57-.28.8-.37.46-.47 1.07-.25 1.6.22.52.72.85 1.28.85h.75c5.52 0 10-4.48 10-10S17.52 2 12 2Zm0 18.5h-.75a.25.25 0 0 1-.2-.41c.4-.5.45-1.2.45-1.34A2.75 2.75 0 0 0 8.75 15H7.5a4 4 0 0 1-4-4c0-4.14 3.81-7.5 8.5-7.5s8.5 3.81 8.5 8.5-3.81 8.5-8.5 8.5ZM7.5 12a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Zm3-4a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Zm5 0a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-.38 1.5H10.4l-.24 1.16a1 1 0 0 1-.76.78 6.6 6.6 0 0 0-2.2.91 1 1 0 0 1-1.09.02l-1.02-.62-.86.86.62 1.02a1 1 0 0 1-.02 1.09 6.6 6.6 0 0 0-.91 2.2 1 1 0 0 1-.78.76L2 11.62v1.2l1.16.24a1 1 0 0 1 .78.76 6.6 6.6 0 0 0 .91 2.2 1 1 0 0 1 .02 1.09l-.62 1.02.86.86 1.02-.62a1 1 0 0 1 1.09.02 6.6 6.6 0 0 0 2.2.91 1 1 0 0 1 .76.78l.24 1.16h1.2l.24-1.16a1 1 0 0 1 .76-.78 6.6 6.6 0 0 0 2.2-.91 1 1 0 0 1 1.09-.02l1.02.62.86-.86-.62-1.02a1 1 0 0 1 .02-1.09 6.6 6.6 0 0 0 .91-2.2 1 1 0 0 1 .78-.76l1.16-.24v-1.2l-1.16-.24a1 1 0 0 1-.78-.76 6.6 6.6 0 0 0-.91-2.2 1 1 0 0 1-.02-1.09l.62-1.02-.86-.86-1.02.62a1 1 0 0 1-1.09-.02 6.6 6.6 0 0 0-2.2-.91 1 1 0 0 1-.76-.78l-.24-1.16ZM11 8a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm0 7a.75.75 0 0 1 .75.75v5.5a.75.75 0 0 1-1.5 0v-5.5a.75.75 0 0 1 .75-.75ZM12 7a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
            Self::Bell => {
                r#"<path d="M12 2a7 7 0 0 1 7 7v4.1l1.43 3.3A1.15 1.15 0 0 1 19.38 18H15a3 3 0 0 1-6 0H4.62a1.15 1.15 0 0 1-1.05-1.6L5 13.1V9a7 7 0 0 1 7-7Zm1.5 16h-3a1.5 1.5 0 0 0 3 0ZM12 3.5A5.5 5.5 0 0 0 6.5 9v4.25c0 .1-.02.2-.06.3L5.16 16.5h13.68l-1.28-2.95a.75.75 0 0 1-.06-.3V9A5.5 5.5 0 0 0 12 3.5Z"/>"#
            }
            Self::Download => {
                r#"<path d="M12 3a.75.75 0 0 1 .75.75v10.19l3.72-3.72a.75.75 0 1 1 1.06 1.06l-5 5a.75.75 0 0 1-1.06 0l-5-5a.75.75 0 1 1 1.06-1.06l3.72 3.72V3.75A.75.75 0 0 1 12 3ZM4.75 19.5h14.5a.75.75 0 0 1 0 1.5H4.75a.75.75 0 0 1 0-1.5Z"/>"#
            }
            Self::CheckCircle => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm3.22 5.22a.75.75 0 1 1 1.06 1.06l-5.25 5.25a.75.75 0 0 1-1.06 0l-2.25-2.25a.75.75 0 1 1 1.06-1.06l1.72 1.72 4.72-4.72Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// 14px, window controls.
    Xs,
    /// 16px, menus and taskbar buttons.
    #[default]
    Sm,
    /// 32px, desktop icons.
    Lg,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders one glyph from the icon set.
pub fn ShellIcon(
    icon: IconName,
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

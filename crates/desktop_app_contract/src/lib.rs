//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! The window manager knows nothing about what a hosted app does. It hands each app a window id,
//! an opaque props payload and a reactive content size, and drives the app through the
//! [`HostedApp`] capability interface (`mount` / `resize` / `unmount`).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{ReadSignal, RwSignal, SignalGetUntracked, SignalSet, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Stable identifier for an app package/module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is one or more dot-separated kebab-case segments.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected lowercase kebab-case segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    raw.split('.').all(|part| {
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        !part.ends_with('-')
    })
}

/// Pixel size of the region a hosted app may draw into (window frame minus chrome).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSize {
    /// Content width in CSS pixels.
    pub width: i32,
    /// Content height in CSS pixels.
    pub height: i32,
}

impl ContentSize {
    /// Derives the content region for a frame of `frame_width` x `frame_height` whose title bar
    /// and bottom margin take `chrome_height` pixels. Never negative.
    pub fn for_frame(frame_width: i32, frame_height: i32, chrome_height: i32) -> Self {
        Self {
            width: frame_width.max(0),
            height: (frame_height - chrome_height).max(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Lifecycle notifications the window manager delivers to hosted content.
pub enum AppLifecycleEvent {
    /// App view has been mounted into a managed window.
    Mounted,
    /// Content region changed size.
    Resized,
    /// Window record was removed and the content is being torn down.
    Unmounted,
}

impl AppLifecycleEvent {
    /// Returns a stable string token, used for status text and DOM data attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Resized => "resized",
            Self::Unmounted => "unmounted",
        }
    }
}

#[derive(Clone)]
/// Mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// App id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Runtime window id.
    pub window_id: WindowRuntimeId,
    /// Opaque props supplied at window-open time. The window manager never inspects it.
    pub props: Value,
    /// Initial content size.
    pub initial_size: ContentSize,
}

/// Live handle to content mounted inside one window frame.
#[derive(Clone)]
pub struct AppHandle {
    window_id: WindowRuntimeId,
    view: View,
    size: RwSignal<ContentSize>,
    lifecycle: RwSignal<AppLifecycleEvent>,
}

impl AppHandle {
    /// Creates a handle around a mounted view and its reactive size/lifecycle channels.
    pub fn new(
        window_id: WindowRuntimeId,
        view: View,
        size: RwSignal<ContentSize>,
        lifecycle: RwSignal<AppLifecycleEvent>,
    ) -> Self {
        Self {
            window_id,
            view,
            size,
            lifecycle,
        }
    }

    /// Window the content belongs to.
    pub fn window_id(&self) -> WindowRuntimeId {
        self.window_id
    }

    /// View to insert into the frame body.
    pub fn view(&self) -> View {
        self.view.clone()
    }

    /// Reactive content size.
    pub fn size(&self) -> ReadSignal<ContentSize> {
        self.size.read_only()
    }

    /// Reactive lifecycle signal.
    pub fn lifecycle(&self) -> ReadSignal<AppLifecycleEvent> {
        self.lifecycle.read_only()
    }

    /// Pushes a new content size into the handle, skipping unchanged values.
    pub fn set_size(&self, size: ContentSize) {
        if self.size.get_untracked() != size {
            self.size.set(size);
            self.lifecycle.set(AppLifecycleEvent::Resized);
        }
    }

    /// Marks the handle as torn down.
    pub fn mark_unmounted(&self) {
        self.lifecycle.set(AppLifecycleEvent::Unmounted);
    }
}

/// Capability interface every hosted application satisfies.
///
/// Implementations only describe how to put content into a frame; they are never told about
/// geometry beyond the content size, focus, or stacking.
pub trait HostedApp {
    /// Mounts the app content for one window.
    fn mount(&self, context: AppMountContext) -> AppHandle;

    /// Tells mounted content that its region changed size.
    fn resize(&self, handle: &AppHandle, size: ContentSize) {
        handle.set_size(size);
    }

    /// Tears mounted content down.
    fn unmount(&self, handle: AppHandle) {
        handle.mark_unmounted();
    }
}

/// Static mount function used by simple function-backed apps. It receives the live content size
/// and lifecycle channels of its window.
pub type AppMountFn =
    fn(&AppMountContext, ReadSignal<ContentSize>, ReadSignal<AppLifecycleEvent>) -> View;

#[derive(Debug, Clone, Copy)]
/// [`HostedApp`] backed by a plain mount function.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }
}

impl HostedApp for AppModule {
    fn mount(&self, context: AppMountContext) -> AppHandle {
        let size = leptos::create_rw_signal(context.initial_size);
        let lifecycle = leptos::create_rw_signal(AppLifecycleEvent::Mounted);
        let view = (self.mount_fn)(&context, size.read_only(), lifecycle.read_only());
        AppHandle::new(context.window_id, view, size, lifecycle)
    }
}

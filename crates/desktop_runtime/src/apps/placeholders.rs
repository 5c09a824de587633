//! Placeholder content for the built-in apps.
//!
//! Real app logic lives outside the window manager. These views only prove the hosting contract:
//! they show what they were opened with and track the content size they are given.

use desktop_app_contract::{AppLifecycleEvent, AppMountContext, ContentSize};
use leptos::*;

use super::prop_str;

fn status_label(size: ContentSize, lifecycle: AppLifecycleEvent) -> String {
    format!("{} x {} ({})", size.width, size.height, lifecycle.token())
}

#[component]
fn ContentSizeStatus(
    size: ReadSignal<ContentSize>,
    lifecycle: ReadSignal<AppLifecycleEvent>,
) -> impl IntoView {
    view! {
        <div class="app-statusbar">
            <span>{move || status_label(size.get(), lifecycle.get())}</span>
        </div>
    }
}

pub(super) fn mount_generic(
    context: &AppMountContext,
    size: ReadSignal<ContentSize>,
    lifecycle: ReadSignal<AppLifecycleEvent>,
) -> View {
    let app_id = context.app_id.to_string();
    view! {
        <div class="app-shell app-placeholder" data-app=app_id.clone()>
            <p><strong>{app_id}</strong></p>
            <p>"This app is hosted by the window manager but has no content yet."</p>
            <ContentSizeStatus size lifecycle />
        </div>
    }
    .into_view()
}

pub(super) fn mount_about(
    context: &AppMountContext,
    size: ReadSignal<ContentSize>,
    lifecycle: ReadSignal<AppLifecycleEvent>,
) -> View {
    let window_label = format!("Window {}", context.window_id);
    view! {
        <div class="app-shell app-about">
            <h2>"About this desktop"</h2>
            <p>"Windows can be dragged by the title bar, resized from the corner and maximized."</p>
            <p class="app-muted">{window_label}</p>
            <ContentSizeStatus size lifecycle />
        </div>
    }
    .into_view()
}

pub(super) fn mount_text_viewer(
    context: &AppMountContext,
    size: ReadSignal<ContentSize>,
    lifecycle: ReadSignal<AppLifecycleEvent>,
) -> View {
    let body = prop_str(&context.props, "content")
        .unwrap_or("No document loaded.")
        .to_string();
    view! {
        <div class="app-shell app-text-viewer">
            <pre class="app-document">{body}</pre>
            <ContentSizeStatus size lifecycle />
        </div>
    }
    .into_view()
}

pub(super) fn mount_image_viewer(
    context: &AppMountContext,
    size: ReadSignal<ContentSize>,
    lifecycle: ReadSignal<AppLifecycleEvent>,
) -> View {
    let source = prop_str(&context.props, "imageSrc").map(str::to_string);
    let body = match source {
        Some(src) => view! { <img class="app-image" src=src alt="" /> }.into_view(),
        None => view! { <p class="app-muted">"No image selected."</p> }.into_view(),
    };
    view! {
        <div class="app-shell app-image-viewer">
            {body}
            <ContentSizeStatus size lifecycle />
        </div>
    }
    .into_view()
}

pub(super) fn mount_pdf_viewer(
    context: &AppMountContext,
    size: ReadSignal<ContentSize>,
    lifecycle: ReadSignal<AppLifecycleEvent>,
) -> View {
    let source = prop_str(&context.props, "pdfSrc").map(str::to_string);
    let body = match source {
        Some(src) => view! {
            <iframe
                class="app-document-frame"
                src=src
                style=move || format!("height:{}px;", size.get().height.saturating_sub(28).max(0))
            />
        }
        .into_view(),
        None => view! { <p class="app-muted">"No document selected."</p> }.into_view(),
    };
    view! {
        <div class="app-shell app-pdf-viewer">
            {body}
            <ContentSizeStatus size lifecycle />
        </div>
    }
    .into_view()
}

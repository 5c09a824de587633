//! Hosted app lookup for the built-in catalog.

mod placeholders;

use std::rc::Rc;

use desktop_app_contract::{AppModule, ApplicationId, HostedApp};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceholderKind {
    About,
    TextViewer,
    ImageViewer,
    PdfViewer,
    Generic,
}

impl PlaceholderKind {
    fn for_app(app_id: &ApplicationId) -> Self {
        match app_id.as_str() {
            "about" => Self::About,
            "text-viewer" => Self::TextViewer,
            "image-viewer" => Self::ImageViewer,
            "pdf-viewer" => Self::PdfViewer,
            _ => Self::Generic,
        }
    }

    fn module(self) -> AppModule {
        match self {
            Self::About => AppModule::new(placeholders::mount_about),
            Self::TextViewer => AppModule::new(placeholders::mount_text_viewer),
            Self::ImageViewer => AppModule::new(placeholders::mount_image_viewer),
            Self::PdfViewer => AppModule::new(placeholders::mount_pdf_viewer),
            Self::Generic => AppModule::new(placeholders::mount_generic),
        }
    }
}

/// Content implementation for `app_id`. Apps without a dedicated placeholder get the generic one.
pub fn hosted_app(app_id: &ApplicationId) -> Rc<dyn HostedApp> {
    Rc::new(PlaceholderKind::for_app(app_id).module())
}

/// Reads a string field from an opaque props bag.
fn prop_str<'a>(props: &'a Value, key: &str) -> Option<&'a str> {
    props
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
}

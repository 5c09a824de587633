//! Application descriptors and window-manager tunables.
//!
//! Both come from `catalog/desktop.toml`, which `build.rs` validates and embeds as JSON. The
//! catalog is immutable once built; the registry and frames only read it.

use std::collections::HashSet;

use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Size, Viewport};

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Tunables for placement, clamping and frame chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManagerConfig {
    /// Height reserved for the taskbar at the bottom of the viewport.
    pub taskbar_height: i32,
    /// Extra band above the taskbar a title bar may never be dragged into.
    pub drag_bottom_allowance: i32,
    /// Position of the first cascaded window on both axes.
    pub cascade_origin: i32,
    /// Diagonal offset added per already-open window.
    pub cascade_step: i32,
    /// Wraps the cascade index so new windows stay near the origin. `None` cascades unbounded.
    pub cascade_wrap: Option<u32>,
    /// Title bar plus bottom margin subtracted from the frame to size hosted content.
    pub content_chrome_height: i32,
    /// Viewport assumed when no browser window is available.
    pub fallback_viewport: Viewport,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            taskbar_height: 56,
            drag_bottom_allowance: 24,
            cascade_origin: 100,
            cascade_step: 30,
            cascade_wrap: Some(10),
            content_chrome_height: 48,
            fallback_viewport: Viewport::new(1280, 800),
        }
    }
}

/// Static description of one launchable application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub id: ApplicationId,
    pub title: String,
    /// Opaque render token resolved by [`crate::icons`].
    pub icon: String,
    pub default_size: Size,
    pub min_size: Size,
    pub show_on_desktop: bool,
    pub show_in_taskbar: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("desktop catalog is malformed: {0}")]
    Malformed(String),
    #[error("unsupported desktop catalog schema version {0}")]
    SchemaVersion(u32),
    #[error("duplicate app id `{0}`")]
    DuplicateApp(ApplicationId),
    #[error("app `{app_id}` declares a non-positive {field}")]
    NonPositiveSize {
        app_id: ApplicationId,
        field: &'static str,
    },
    #[error("app `{0}` default size is smaller than its minimum size")]
    DefaultBelowMinimum(ApplicationId),
    #[error("window manager setting `{0}` must not be negative")]
    NegativeSetting(&'static str),
}

#[derive(Debug, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    window_manager: WindowManagerConfig,
    apps: Vec<AppDescriptor>,
}

/// Validated, immutable set of application descriptors plus window-manager config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppCatalog {
    config: WindowManagerConfig,
    apps: Vec<AppDescriptor>,
}

impl AppCatalog {
    /// Builds a catalog after checking ids are unique and every size is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn new(
        config: WindowManagerConfig,
        apps: Vec<AppDescriptor>,
    ) -> Result<Self, CatalogError> {
        validate_config(&config)?;
        let mut seen = HashSet::new();
        for app in &apps {
            if !seen.insert(app.id.clone()) {
                return Err(CatalogError::DuplicateApp(app.id.clone()));
            }
            validate_size(&app.id, app.default_size, "default size")?;
            validate_size(&app.id, app.min_size, "minimum size")?;
            if !app.default_size.covers(app.min_size) {
                return Err(CatalogError::DefaultBelowMinimum(app.id.clone()));
            }
        }
        Ok(Self { config, apps })
    }

    /// Parses a catalog from the JSON form emitted by the build script.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] for unparsable input and any validation error from
    /// [`AppCatalog::new`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest =
            serde_json::from_str(raw).map_err(|err| CatalogError::Malformed(err.to_string()))?;
        if manifest.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion(manifest.schema_version));
        }
        Self::new(manifest.window_manager, manifest.apps)
    }

    /// Catalog compiled in from `catalog/desktop.toml`.
    ///
    /// # Errors
    ///
    /// See [`AppCatalog::from_json`].
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(DESKTOP_CATALOG_JSON)
    }

    pub fn config(&self) -> WindowManagerConfig {
        self.config
    }

    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn descriptor(&self, app_id: &ApplicationId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == *app_id)
    }

    pub fn desktop_apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|app| app.show_on_desktop)
    }

    pub fn taskbar_apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|app| app.show_in_taskbar)
    }
}

fn validate_config(config: &WindowManagerConfig) -> Result<(), CatalogError> {
    let settings = [
        ("taskbar_height", config.taskbar_height),
        ("drag_bottom_allowance", config.drag_bottom_allowance),
        ("cascade_origin", config.cascade_origin),
        ("cascade_step", config.cascade_step),
        ("content_chrome_height", config.content_chrome_height),
    ];
    match settings.iter().find(|(_, value)| *value < 0) {
        Some((name, _)) => Err(CatalogError::NegativeSetting(*name)),
        None => Ok(()),
    }
}

fn validate_size(
    app_id: &ApplicationId,
    size: Size,
    field: &'static str,
) -> Result<(), CatalogError> {
    if size.width <= 0 || size.height <= 0 {
        return Err(CatalogError::NonPositiveSize {
            app_id: app_id.clone(),
            field,
        });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fixtures::descriptor;
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_keeps_manifest_order() {
        let catalog = AppCatalog::builtin().expect("builtin catalog");
        let ids: Vec<&str> = catalog.apps().iter().map(|app| app.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "about",
                "projects",
                "terminal",
                "contact",
                "files",
                "music-player",
                "image-viewer",
                "text-viewer",
                "pdf-viewer",
            ]
        );
        assert_eq!(catalog.desktop_apps().count(), 6);
        assert_eq!(catalog.taskbar_apps().count(), 6);
        assert_eq!(catalog.config(), WindowManagerConfig::default());
    }

    #[test]
    fn builtin_terminal_descriptor_matches_manifest() {
        let catalog = AppCatalog::builtin().expect("builtin catalog");
        let terminal = catalog
            .descriptor(&ApplicationId::trusted("terminal"))
            .expect("terminal descriptor");
        assert_eq!(terminal.default_size, Size::new(700, 450));
        assert_eq!(terminal.min_size, Size::new(400, 300));
        assert_eq!(terminal.icon, "terminal");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = AppCatalog::new(
            WindowManagerConfig::default(),
            vec![
                descriptor("about", Size::new(600, 500), Size::new(400, 300)),
                descriptor("about", Size::new(600, 500), Size::new(400, 300)),
            ],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateApp(ApplicationId::trusted("about")));
    }

    #[test]
    fn default_size_must_cover_minimum() {
        let err = AppCatalog::new(
            WindowManagerConfig::default(),
            vec![descriptor("about", Size::new(300, 500), Size::new(400, 300))],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DefaultBelowMinimum(ApplicationId::trusted("about")));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let err = AppCatalog::new(
            WindowManagerConfig::default(),
            vec![descriptor("about", Size::new(600, 500), Size::new(0, 300))],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NonPositiveSize { field: "minimum size", .. }));
    }

    #[test]
    fn negative_config_is_rejected() {
        let config = WindowManagerConfig {
            taskbar_height: -1,
            ..WindowManagerConfig::default()
        };
        assert_eq!(
            AppCatalog::new(config, Vec::new()).unwrap_err(),
            CatalogError::NegativeSetting("taskbar_height")
        );
    }

    #[test]
    fn malformed_and_mismatched_json_is_reported() {
        assert!(matches!(
            AppCatalog::from_json("{not json"),
            Err(CatalogError::Malformed(_))
        ));

        let future =
            DESKTOP_CATALOG_JSON.replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);
        assert_eq!(
            AppCatalog::from_json(&future).unwrap_err(),
            CatalogError::SchemaVersion(7)
        );
    }
}

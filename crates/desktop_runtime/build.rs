use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Dimensions {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManagerSection {
    taskbar_height: i32,
    drag_bottom_allowance: i32,
    cascade_origin: i32,
    cascade_step: i32,
    cascade_wrap: Option<u32>,
    content_chrome_height: i32,
    fallback_viewport: Dimensions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    title: String,
    icon: String,
    default_size: Dimensions,
    min_size: Dimensions,
    show_on_desktop: bool,
    show_in_taskbar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    window_manager: WindowManagerSection,
    apps: Vec<AppEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "desktop manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.apps.is_empty() {
        panic!("desktop manifest {} declares no apps", path.display());
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop manifest");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

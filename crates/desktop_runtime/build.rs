use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use desktop_app_contract::{is_valid_application_id, WindowDefaults};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    window_title: String,
    icon: String,
    desktop_icon_label: String,
    show_on_desktop: bool,
    window_defaults: WindowDefaults,
}

/// Catalog entry shape consumed by `desktop_app_contract::AppRegistration`.
#[derive(Debug, Clone, Serialize)]
struct AppCatalogEntry {
    app_id: String,
    display_name: String,
    window_title: String,
    icon: String,
    desktop_icon_label: String,
    show_on_desktop: bool,
    window_defaults: WindowDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Viewport {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfigFile {
    taskbar_height: i32,
    base_z_index: u64,
    clock_interval_ms: u64,
    fallback_viewport: Viewport,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = ["notepad", "calculator", "browser"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect();
    paths.push(root.join("apps").join("about.manifest.toml"));
    paths
}

fn load_manifest(path: &Path) -> AppCatalogEntry {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: AppManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if !is_valid_application_id(&manifest.app_id) {
        panic!(
            "invalid app id `{}` in {}",
            manifest.app_id,
            path.display()
        );
    }
    if !manifest.window_defaults.is_valid() {
        panic!(
            "window_defaults in {} must be positive, found {}x{}",
            path.display(),
            manifest.window_defaults.width,
            manifest.window_defaults.height
        );
    }

    AppCatalogEntry {
        app_id: manifest.app_id,
        display_name: manifest.display_name,
        window_title: manifest.window_title,
        icon: manifest.icon,
        desktop_icon_label: manifest.desktop_icon_label,
        show_on_desktop: manifest.show_on_desktop,
        window_defaults: manifest.window_defaults,
    }
}

fn load_desktop_config(path: &Path) -> DesktopConfigFile {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DesktopConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if config.taskbar_height < 0 {
        panic!("taskbar_height in {} must not be negative", path.display());
    }
    config
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));

    // Manifest order is desktop icon order.
    let catalog: Vec<AppCatalogEntry> = app_manifest_paths(&crate_root)
        .iter()
        .map(|path| load_manifest(path))
        .collect();
    let mut seen = HashSet::new();
    for entry in &catalog {
        if !seen.insert(entry.app_id.as_str()) {
            panic!("duplicate app id `{}` in manifests", entry.app_id);
        }
    }

    let config = load_desktop_config(&crate_root.join("desktop.toml"));

    let catalog_json =
        serde_json::to_string_pretty(&catalog).expect("serialize app manifest catalog");
    let config_json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    write_generated(
        &out_dir.join("app_catalog_generated.rs"),
        "/// Build-time generated app manifest catalog JSON.",
        "APP_MANIFEST_CATALOG_JSON",
        &catalog_json,
    );
    write_generated(
        &out_dir.join("desktop_config_generated.rs"),
        "/// Build-time generated desktop configuration JSON.",
        "DESKTOP_CONFIG_JSON",
        &config_json,
    );
}

fn write_generated(out_file: &Path, doc: &str, const_name: &str, json: &str) {
    let generated = format!("{doc}\npub const {const_name}: &str = r##\"{json}\"##;\n");
    fs::write(out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

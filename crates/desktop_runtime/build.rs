use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Position {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalogEntry {
    app_id: String,
    window_id: String,
    display_name: String,
    glyph: String,
    show_on_desktop: bool,
    show_in_dock: bool,
    show_in_start_menu: bool,
    default_position: Position,
}

#[derive(Debug, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    apps: Vec<AppCatalogEntry>,
}

fn is_kebab_token(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= 32
        && raw.as_bytes()[0].is_ascii_lowercase()
        && !raw.ends_with('-')
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut app_ids = BTreeSet::new();
    let mut window_ids = BTreeSet::new();
    for entry in &catalog.apps {
        for id in [&entry.app_id, &entry.window_id] {
            if !is_kebab_token(id) {
                panic!("invalid identifier `{id}` in {}", path.display());
            }
        }
        if !app_ids.insert(entry.app_id.clone()) {
            panic!("duplicate app id `{}` in {}", entry.app_id, path.display());
        }
        if !window_ids.insert(entry.window_id.clone()) {
            panic!(
                "duplicate window id `{}` in {}",
                entry.window_id,
                path.display()
            );
        }
    }

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

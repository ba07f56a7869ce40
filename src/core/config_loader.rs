// src/core/config_loader.rs

use directories::BaseDirs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "statusbar-rs";

// Where `Config::load` looks for its two layers.
//
// `STATUSBAR_RS_CONFIG` replaces the user layer, which is handy when the bar
// host starts us with an unusual environment.
pub fn config_paths() -> (PathBuf, PathBuf) {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    let system = system_default(exe_dir.as_deref(), Path::new(env!("CARGO_MANIFEST_DIR")));

    let user = std::env::var_os("STATUSBAR_RS_CONFIG")
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|d| d.config_dir().join(APP_DIR).join("config.toml")))
        .unwrap_or_else(|| PathBuf::from("config/config.toml"));

    (system, user)
}

// `default.toml` beside the installed binary wins; during development the
// source tree's `config/default.toml` is used instead.
fn system_default(exe_dir: Option<&Path>, manifest_dir: &Path) -> PathBuf {
    let fallback = manifest_dir.join("config").join("default.toml");
    let Some(installed) = exe_dir.map(|d| d.join("default.toml")) else {
        return fallback;
    };
    if installed.exists() || !fallback.exists() {
        installed
    } else {
        fallback
    }
}

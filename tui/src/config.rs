use std::path::{Path, PathBuf};

use fuel_core::AssetPaths;

const LOG_FILE: &str = "fuel_tui.log";

/// Runtime settings, all derived from the program's location.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assets: AssetPaths,
    pub log_file: PathBuf,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: &'static str,
}

impl AppConfig {
    pub fn resolve() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(std::env::temp_dir);

        Self {
            assets: AssetPaths::resolve(bundled_assets()),
            log_file: exe_dir.join(LOG_FILE),
            log_filter: "info",
        }
    }
}

/// Artifacts shipped with this crate.
pub fn bundled_assets() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

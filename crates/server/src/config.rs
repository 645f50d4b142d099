use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Query-service settings, loadable from a TOML file. Every field has a
/// default so a missing or partial file still yields a runnable config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Combined multi-year dataset served at /api/colleges.
    pub combined_csv: PathBuf,
    /// Precomputed predictions served at /api/predictions.
    pub predictions_csv: PathBuf,
    /// Ephemeral destination for admin uploads.
    pub upload_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: ([127, 0, 0, 1], 8000).into(),
            combined_csv: PathBuf::from("csv_data/nirf_combined_data.csv"),
            predictions_csv: PathBuf::from("nirf_predictions_2025.csv"),
            upload_dir: std::env::temp_dir(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

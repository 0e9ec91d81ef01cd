mod classifier;
mod scaler;

pub use classifier::SegmentModel;
pub use scaler::StandardScaler;

use crate::config::ArtifactConfig;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{info, warn};

/// The two pre-trained artifacts, loaded once at startup and shared read-only
/// with every request handler. Either slot may be empty: the server then runs
/// degraded (health checks and 503s) until a restart with the files in place.
#[derive(Debug, Default)]
pub struct Artifacts {
    pub model: Option<SegmentModel>,
    pub scaler: Option<StandardScaler>,
}

impl Artifacts {
    /// Loads whatever artifacts exist at the configured paths. A missing or
    /// undecodable file is logged and leaves its slot empty; loading never
    /// fails the process.
    pub async fn load(config: &ArtifactConfig) -> Self {
        Self {
            model: load_slot("model", &config.model_path).await,
            scaler: load_slot("scaler", &config.scaler_path).await,
        }
    }

    pub fn model_status(&self) -> &'static str {
        slot_status(self.model.is_some())
    }

    pub fn scaler_status(&self) -> &'static str {
        slot_status(self.scaler.is_some())
    }
}

fn slot_status(loaded: bool) -> &'static str {
    if loaded {
        "loaded"
    } else {
        "not loaded"
    }
}

async fn load_slot<T: DeserializeOwned>(kind: &str, path: &str) -> Option<T> {
    if !Path::new(path).exists() {
        warn!("{} file not found at {}", kind, path);
        return None;
    }
    match read_artifact(path).await {
        Ok(artifact) => {
            info!("{} loaded successfully from {}", kind, path);
            Some(artifact)
        }
        Err(e) => {
            warn!("Failed to load {} from {}: {}", kind, path, e);
            None
        }
    }
}

async fn read_artifact<T: DeserializeOwned>(path: &str) -> crate::Result<T> {
    let bytes = tokio::fs::read(path).await?;
    Ok(bincode::deserialize(&bytes)?)
}

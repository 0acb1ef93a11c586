use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::Mutex;

use serde::de::DeserializeOwned;

use crate::{
    encoder::EncoderSet,
    error::{Artifact, AssetError},
    model::ModelAsset,
};

pub const MODEL_FILE: &str = "model.json";
pub const ENCODER_FILE: &str = "label_encoder.json";

/// Where the two artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub model: PathBuf,
    pub encoder: PathBuf,
}

impl AssetPaths {
    /// Paths of both artifacts inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(MODEL_FILE),
            encoder: dir.join(ENCODER_FILE),
        }
    }

    /// Resolves the artifacts relative to the program rather than the
    /// working directory.
    ///
    /// The executable's directory wins when it holds a model artifact,
    /// otherwise `fallback` is used.
    pub fn resolve(fallback: impl AsRef<Path>) -> Self {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Self::in_dir));

        match beside_exe {
            Some(paths) if paths.model.exists() => paths,
            _ => Self::in_dir(fallback),
        }
    }
}

/// The immutable pair every prediction request reuses.
#[derive(Debug)]
pub struct Assets {
    pub model: ModelAsset,
    pub encoders: EncoderSet,
}

/// Loads the artifacts once and hands out the cached pair afterwards.
#[derive(Debug)]
pub struct AssetLoader {
    paths: AssetPaths,
    cached: Mutex<Option<Arc<Assets>>>,
}

impl AssetLoader {
    pub fn new(paths: AssetPaths) -> Self {
        Self {
            paths,
            cached: Mutex::new(None),
        }
    }

    /// Returns the loaded assets, reading them from disk on the first call.
    ///
    /// Concurrent callers wait for the first load instead of reading the
    /// files again. A failed load is not cached.
    ///
    /// # Errors
    /// Returns an [`AssetError`] if an artifact is missing, unreadable or
    /// cannot be deserialized.
    pub fn load(&self) -> Result<Arc<Assets>, AssetError> {
        let mut cached = self.cached.lock();
        if let Some(assets) = cached.as_ref() {
            return Ok(Arc::clone(assets));
        }

        let assets = Arc::new(load_from(&self.paths)?);
        *cached = Some(Arc::clone(&assets));
        Ok(assets)
    }
}

/// Checks both artifacts exist, model first, then deserializes them.
fn load_from(paths: &AssetPaths) -> Result<Assets, AssetError> {
    if !paths.model.exists() {
        return Err(AssetError::MissingModel {
            path: paths.model.clone(),
        });
    }

    if !paths.encoder.exists() {
        return Err(AssetError::MissingEncoder {
            path: paths.encoder.clone(),
        });
    }

    let model: ModelAsset = read_artifact(Artifact::Model, &paths.model)?;
    log::info!(path:% = paths.model.display(); "loaded model artifact");

    let encoders: EncoderSet = read_artifact(Artifact::Encoder, &paths.encoder)?;
    log::info!(
        path:% = paths.encoder.display(), features = encoders.features().count();
        "loaded encoder artifact"
    );

    Ok(Assets { model, encoders })
}

fn read_artifact<T: DeserializeOwned>(artifact: Artifact, path: &Path) -> Result<T, AssetError> {
    let content = fs::read_to_string(path).map_err(|source| AssetError::Io {
        artifact,
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AssetError::Deserialize {
        artifact,
        path: path.to_path_buf(),
        source,
    })
}

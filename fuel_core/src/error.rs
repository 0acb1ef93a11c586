use std::{fmt, io, path::PathBuf};

/// Which of the two artifacts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Model,
    Encoder,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Encoder => write!(f, "encoder"),
        }
    }
}

/// Failures while locating or loading the artifacts. All of them are fatal.
#[derive(Debug)]
pub enum AssetError {
    /// The model artifact does not exist at its expected path.
    MissingModel { path: PathBuf },
    /// The encoder artifact does not exist at its expected path.
    MissingEncoder { path: PathBuf },
    /// The artifact exists but is corrupt or incompatible.
    Deserialize {
        artifact: Artifact,
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact exists but could not be read.
    Io {
        artifact: Artifact,
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingModel { path } => {
                write!(f, "model artifact not found at {}", path.display())
            }
            Self::MissingEncoder { path } => {
                write!(f, "encoder artifact not found at {}", path.display())
            }
            Self::Deserialize {
                artifact,
                path,
                source,
            } => write!(
                f,
                "{artifact} artifact at {} could not be deserialized: {source}",
                path.display()
            ),
            Self::Io {
                artifact,
                path,
                source,
            } => write!(
                f,
                "{artifact} artifact at {} could not be read: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Deserialize { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failures raised by a model while predicting. Recoverable per request.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The model expects a column the record does not carry.
    FeatureMismatch { column: String },
    /// The column carries a value of the wrong kind.
    TypeMismatch {
        column: String,
        expected: &'static str,
    },
    /// The label was never seen by the model for that column.
    UnknownCategory { column: String, label: String },
    /// The model produced no value for the submitted row.
    EmptyOutput,
    /// Any other failure reported by the model itself.
    Model(String),
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeatureMismatch { column } => {
                write!(f, "feature names mismatch: missing column '{column}'")
            }
            Self::TypeMismatch { column, expected } => {
                write!(f, "column '{column}' must hold a {expected} value")
            }
            Self::UnknownCategory { column, label } => {
                write!(f, "column '{column}' contains previously unseen label '{label}'")
            }
            Self::EmptyOutput => write!(f, "model returned no predictions"),
            Self::Model(msg) => write!(f, "model error: {msg}"),
        }
    }
}

impl std::error::Error for PredictionError {}

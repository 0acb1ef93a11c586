pub mod assets;
pub mod encoder;
pub mod error;
pub mod model;
pub mod predict;
pub mod record;

pub use assets::{AssetLoader, AssetPaths, Assets};
pub use encoder::{EncoderSet, LabelEncoder};
pub use error::{Artifact, AssetError, PredictionError};
pub use model::{ModelAsset, Regressor};
pub use predict::{predict, PredictionOutcome};
pub use record::PredictionRecord;

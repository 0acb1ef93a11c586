use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    error::PredictionError,
    record::{PredictionRecord, Value},
};

/// Anything able to score a batch of records.
pub trait Regressor: Send + Sync {
    /// Predicts one value per record, in order.
    ///
    /// # Errors
    /// Returns a [`PredictionError`] if a record does not fit the model.
    fn predict(&self, batch: &[PredictionRecord]) -> Result<Vec<f64>, PredictionError>;
}

/// Trained estimator deserialized from the model artifact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelAsset {
    Linear(LinearRegressor),
    Constant(ConstantRegressor),
}

impl Regressor for ModelAsset {
    fn predict(&self, batch: &[PredictionRecord]) -> Result<Vec<f64>, PredictionError> {
        match self {
            ModelAsset::Linear(m) => m.predict(batch),
            ModelAsset::Constant(m) => m.predict(batch),
        }
    }
}

/// Linear model over numeric columns plus one-hot categorical terms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    #[serde(default)]
    pub numeric: BTreeMap<String, f64>,
    /// column -> label -> coefficient
    #[serde(default)]
    pub categorical: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LinearRegressor {
    fn score(&self, record: &PredictionRecord) -> Result<f64, PredictionError> {
        let mut y = self.intercept;

        for (column, coef) in &self.numeric {
            match cell(record, column)? {
                Value::Number(x) => y += coef * x,
                Value::Text(_) => {
                    return Err(PredictionError::TypeMismatch {
                        column: column.clone(),
                        expected: "numeric",
                    });
                }
            }
        }

        for (column, table) in &self.categorical {
            let Value::Text(label) = cell(record, column)? else {
                return Err(PredictionError::TypeMismatch {
                    column: column.clone(),
                    expected: "categorical",
                });
            };

            y += table
                .get(label)
                .ok_or_else(|| PredictionError::UnknownCategory {
                    column: column.clone(),
                    label: label.to_string(),
                })?;
        }

        Ok(y)
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, batch: &[PredictionRecord]) -> Result<Vec<f64>, PredictionError> {
        batch.iter().map(|r| self.score(r)).collect()
    }
}

/// Returns the same value for every row. Checks the listed columns exist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstantRegressor {
    pub value: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Regressor for ConstantRegressor {
    fn predict(&self, batch: &[PredictionRecord]) -> Result<Vec<f64>, PredictionError> {
        batch
            .iter()
            .map(|r| {
                for column in &self.features {
                    cell(r, column)?;
                }
                Ok(self.value)
            })
            .collect()
    }
}

fn cell<'a>(record: &'a PredictionRecord, column: &str) -> Result<Value<'a>, PredictionError> {
    record
        .get(column)
        .ok_or_else(|| PredictionError::FeatureMismatch {
            column: column.to_string(),
        })
}

use std::fmt;

use crate::{
    error::PredictionError,
    model::Regressor,
    record::{self, PredictionRecord},
};

pub const FAILURE_MESSAGE: &str = "Prediction failed. Check model & encoder compatibility.";

/// Result of a single prediction request, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success(f64),
    Failure(PredictionError),
}

impl PredictionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Underlying error text, only present for failures.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e.to_string()),
        }
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => {
                write!(f, "Predicted Fuel Efficiency: ")?;
                record::write_number(f, *value)
            }
            Self::Failure(_) => write!(f, "{FAILURE_MESSAGE}"),
        }
    }
}

/// Submits `record` to `model` as a single-row batch.
///
/// Never fails: model errors are folded into [`PredictionOutcome::Failure`].
pub fn predict<M: Regressor + ?Sized>(model: &M, record: PredictionRecord) -> PredictionOutcome {
    log::debug!("predicting for {record}");

    let batch = [record];
    let result = model
        .predict(&batch)
        .and_then(|values| values.first().copied().ok_or(PredictionError::EmptyOutput));

    match result {
        Ok(value) => {
            log::info!("predicted fuel efficiency {value}");
            PredictionOutcome::Success(value)
        }
        Err(e) => {
            log::warn!("prediction failed: {e}");
            PredictionOutcome::Failure(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Regressor for Failing {
        fn predict(&self, _batch: &[PredictionRecord]) -> Result<Vec<f64>, PredictionError> {
            Err(PredictionError::Model("could not convert string to float: '130'".into()))
        }
    }

    struct Silent;

    impl Regressor for Silent {
        fn predict(&self, _batch: &[PredictionRecord]) -> Result<Vec<f64>, PredictionError> {
            Ok(Vec::new())
        }
    }

    fn record() -> PredictionRecord {
        PredictionRecord {
            car_name: String::new(),
            horsepower: "130".into(),
            displacement: "307".into(),
            model_year: "70".into(),
            weight_of_vehicle: 100.0,
        }
    }

    #[test]
    fn failure_keeps_generic_message_and_detail() {
        let outcome = predict(&Failing, record());

        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), FAILURE_MESSAGE);
        assert_eq!(
            outcome.detail().as_deref(),
            Some("model error: could not convert string to float: '130'")
        );
    }

    #[test]
    fn empty_output_is_a_failure() {
        assert_eq!(
            predict(&Silent, record()),
            PredictionOutcome::Failure(PredictionError::EmptyOutput)
        );
    }

    #[test]
    fn works_through_trait_objects() {
        let model: Box<dyn Regressor> = Box::new(Failing);
        assert!(!predict(model.as_ref(), record()).is_success());
    }
}

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::record::{DISPLACEMENT, HORSEPOWER, MODEL_YEAR};

/// Features the form needs a category list for.
pub const REQUIRED_FEATURES: [&str; 3] = [HORSEPOWER, DISPLACEMENT, MODEL_YEAR];

/// Ordered, duplicate-free category labels of a single feature.
///
/// Numeric classes in the artifact are kept as their textual form so the
/// form can offer and submit them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLabelEncoder")]
pub struct LabelEncoder {
    classes: Vec<String>,
}

#[derive(Deserialize)]
struct RawLabelEncoder {
    classes: Vec<serde_json::Value>,
}

impl TryFrom<RawLabelEncoder> for LabelEncoder {
    type Error = String;

    fn try_from(raw: RawLabelEncoder) -> Result<Self, Self::Error> {
        let classes = raw
            .classes
            .into_iter()
            .map(|v| match v {
                serde_json::Value::String(s) => Ok(s),
                serde_json::Value::Number(n) => Ok(n.to_string()),
                other => Err(format!("class labels must be strings or numbers, got {other}")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(classes)
    }
}

impl LabelEncoder {
    /// Builds an encoder from its ordered labels.
    ///
    /// # Errors
    /// Returns a message if the labels are empty or repeat.
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("classes must not be empty".into());
        }

        if let Some(dup) = first_duplicate(&classes) {
            return Err(format!("duplicate class label '{dup}'"));
        }

        Ok(Self { classes })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Index the label was encoded as during training.
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn inverse_transform(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}

fn first_duplicate(classes: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(classes.len());
    classes
        .iter()
        .map(String::as_str)
        .find(|c| !seen.insert(*c))
}

/// Per-feature label encoders keyed by feature name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, LabelEncoder>")]
pub struct EncoderSet {
    encoders: BTreeMap<String, LabelEncoder>,
}

impl TryFrom<BTreeMap<String, LabelEncoder>> for EncoderSet {
    type Error = String;

    fn try_from(encoders: BTreeMap<String, LabelEncoder>) -> Result<Self, Self::Error> {
        if let Some(missing) = REQUIRED_FEATURES
            .iter()
            .find(|f| !encoders.contains_key(**f))
        {
            return Err(format!("missing encoder for feature '{missing}'"));
        }

        Ok(Self { encoders })
    }
}

impl EncoderSet {
    pub fn get(&self, feature: &str) -> Option<&LabelEncoder> {
        self.encoders.get(feature)
    }

    /// Category labels of a feature, in the order the encoder stores them.
    pub fn classes(&self, feature: &str) -> Option<&[String]> {
        self.get(feature).map(LabelEncoder::classes)
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(String::as_str)
    }
}

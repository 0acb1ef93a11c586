use std::fmt;

pub const CAR_NAME: &str = "Car_name";
pub const HORSEPOWER: &str = "Horsepower";
pub const DISPLACEMENT: &str = "Displacement";
pub const MODEL_YEAR: &str = "Model year";
pub const WEIGHT_OF_VEHICLE: &str = "Weight_of_vehicle";

/// Inclusive bounds of the weight input.
pub const WEIGHT_MIN: i64 = 100;
pub const WEIGHT_MAX: i64 = 400;

/// A single cell of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(n) => write_number(f, *n),
        }
    }
}

/// Writes a float the way a numpy scalar prints: whole values keep `.0`.
pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

/// One row submitted to the model.
///
/// Categorical fields hold the raw label picked in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub car_name: String,
    pub horsepower: String,
    pub displacement: String,
    pub model_year: String,
    pub weight_of_vehicle: f64,
}

impl PredictionRecord {
    /// Column names in submission order.
    pub const COLUMNS: [&'static str; 5] = [
        CAR_NAME,
        HORSEPOWER,
        DISPLACEMENT,
        MODEL_YEAR,
        WEIGHT_OF_VEHICLE,
    ];

    /// Looks up a cell by its column name.
    pub fn get(&self, column: &str) -> Option<Value<'_>> {
        match column {
            CAR_NAME => Some(Value::Text(&self.car_name)),
            HORSEPOWER => Some(Value::Text(&self.horsepower)),
            DISPLACEMENT => Some(Value::Text(&self.displacement)),
            MODEL_YEAR => Some(Value::Text(&self.model_year)),
            WEIGHT_OF_VEHICLE => Some(Value::Number(self.weight_of_vehicle)),
            _ => None,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = (&'static str, Value<'_>)> {
        Self::COLUMNS
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }
}

impl fmt::Display for PredictionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (column, value)) in self.columns().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PredictionRecord {
        PredictionRecord {
            car_name: "chevrolet chevelle malibu".into(),
            horsepower: "130".into(),
            displacement: "307".into(),
            model_year: "70".into(),
            weight_of_vehicle: 350.0,
        }
    }

    #[test]
    fn columns_follow_submission_order() {
        let names: Vec<_> = record().columns().map(|(c, _)| c).collect();
        assert_eq!(
            names,
            ["Car_name", "Horsepower", "Displacement", "Model year", "Weight_of_vehicle"]
        );
    }

    #[test]
    fn display_lists_columns_in_order() {
        assert_eq!(
            record().to_string(),
            "Car_name=chevrolet chevelle malibu, Horsepower=130, Displacement=307, \
             Model year=70, Weight_of_vehicle=350.0"
        );
    }

    #[test]
    fn get_returns_typed_cells() {
        let r = record();
        assert_eq!(r.get(MODEL_YEAR), Some(Value::Text("70")));
        assert_eq!(r.get(WEIGHT_OF_VEHICLE), Some(Value::Number(350.0)));
        assert_eq!(r.get("Model_year"), None);
    }
}

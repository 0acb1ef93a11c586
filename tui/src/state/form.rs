use fuel_core::{
    record::{DISPLACEMENT, HORSEPOWER, MODEL_YEAR, WEIGHT_MAX, WEIGHT_MIN},
    EncoderSet, PredictionRecord,
};

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CarName,
    Horsepower,
    Displacement,
    ModelYear,
    Weight,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::CarName,
        Field::Horsepower,
        Field::Displacement,
        Field::ModelYear,
        Field::Weight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CarName => "Car Name",
            Field::Horsepower => "Horsepower",
            Field::Displacement => "Displacement",
            Field::ModelYear => "Model Year",
            Field::Weight => "Weight of Vehicle",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Single choice among a fixed list of labels.
#[derive(Debug, Clone)]
pub struct Select {
    options: Vec<String>,
    selected: usize,
}

impl Select {
    pub fn new(options: &[String]) -> Self {
        Self {
            options: options.to_vec(),
            selected: 0,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn position(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

/// Integer input bounded to `[min, max]`.
///
/// Typed digits go to a buffer; the buffer is clamped into range on commit.
#[derive(Debug, Clone)]
pub struct NumberInput {
    min: i64,
    max: i64,
    value: i64,
    buffer: String,
}

impl NumberInput {
    const MAX_DIGITS: usize = 6;

    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            value: min,
            buffer: min.to_string(),
        }
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Last committed value, always within bounds.
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.buffer.len() < Self::MAX_DIGITS {
            self.buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn step(&mut self, delta: i64) {
        let base = self.commit();
        self.set(base.saturating_add(delta));
    }

    pub fn set(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
        self.buffer = self.value.to_string();
    }

    /// Applies the buffer. An empty buffer keeps the previous value.
    pub fn commit(&mut self) -> i64 {
        let parsed = self.buffer.parse::<i64>().unwrap_or(self.value);
        self.set(parsed);
        self.value
    }
}

/// Current values of every form field.
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: Field,
    pub car_name: String,
    pub horsepower: Select,
    pub displacement: Select,
    pub model_year: Select,
    pub weight: NumberInput,
}

impl FormState {
    /// Builds the form with selection options taken from the encoders.
    pub fn new(encoders: &EncoderSet) -> Self {
        let options = |feature: &str| Select::new(encoders.classes(feature).unwrap_or_default());

        Self {
            focus: Field::CarName,
            car_name: String::new(),
            horsepower: options(HORSEPOWER),
            displacement: options(DISPLACEMENT),
            model_year: options(MODEL_YEAR),
            weight: NumberInput::new(WEIGHT_MIN, WEIGHT_MAX),
        }
    }

    pub fn focus_next(&mut self) {
        self.leave_focus();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.leave_focus();
        self.focus = self.focus.prev();
    }

    fn leave_focus(&mut self) {
        if self.focus == Field::Weight {
            self.weight.commit();
        }
    }

    pub fn select_mut(&mut self, field: Field) -> Option<&mut Select> {
        match field {
            Field::Horsepower => Some(&mut self.horsepower),
            Field::Displacement => Some(&mut self.displacement),
            Field::ModelYear => Some(&mut self.model_year),
            Field::CarName | Field::Weight => None,
        }
    }

    pub fn select(&self, field: Field) -> Option<&Select> {
        match field {
            Field::Horsepower => Some(&self.horsepower),
            Field::Displacement => Some(&self.displacement),
            Field::ModelYear => Some(&self.model_year),
            Field::CarName | Field::Weight => None,
        }
    }

    /// Commits pending input and assembles the record for the current values.
    pub fn to_record(&mut self) -> PredictionRecord {
        let weight = self.weight.commit();
        let label = |s: &Select| s.selected().unwrap_or_default().to_string();

        PredictionRecord {
            car_name: self.car_name.clone(),
            horsepower: label(&self.horsepower),
            displacement: label(&self.displacement),
            model_year: label(&self.model_year),
            weight_of_vehicle: weight as f64,
        }
    }
}

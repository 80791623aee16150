use std::fmt;

use crate::units::{distance, temperature, weight};

/// A conversion domain with its own unit set and base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Temperature,
    Distance,
    Weight,
}

impl Dimension {
    /// Parse a dimension name as given on the command line
    pub fn parse(name: &str) -> Option<Dimension> {
        match name {
            "temperature" => Some(Dimension::Temperature),
            "distance" => Some(Dimension::Distance),
            "weight" => Some(Dimension::Weight),
            _ => None,
        }
    }

    /// Find the dimension a unit token belongs to, if any
    pub fn of_unit(token: &str) -> Option<Dimension> {
        if temperature::TemperatureUnit::parse(token).is_some() {
            return Some(Dimension::Temperature);
        }
        if distance::DistanceUnit::parse(token).is_some() {
            return Some(Dimension::Distance);
        }
        if weight::WeightUnit::parse(token).is_some() {
            return Some(Dimension::Weight);
        }
        None
    }

    /// Base unit token used as the pivot for comparisons
    pub fn base_unit(&self) -> &'static str {
        match self {
            Dimension::Temperature => temperature::BASE_UNIT.token(),
            Dimension::Distance => distance::BASE_UNIT.token(),
            Dimension::Weight => weight::BASE_UNIT.token(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Temperature => write!(f, "temperature"),
            Dimension::Distance => write!(f, "distance"),
            Dimension::Weight => write!(f, "weight"),
        }
    }
}

/// A value as supplied by the caller, before validation
#[derive(Debug, Clone)]
pub enum RawValue {
    /// Already numeric (may still be NaN or infinite)
    Number(f64),
    /// Textual input, e.g. from the command line
    Text(String),
    /// No value supplied at all
    Missing,
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<Option<&str>> for RawValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => RawValue::Text(s.to_string()),
            None => RawValue::Missing,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Missing => Ok(()),
        }
    }
}

//! Weight conversion between grams, ounces, and pounds.

const GRAMS_PER_POUND: f64 = 453.592;
// Derived rather than written as its own literal (28.3495) so that
// 16 oz round-trips to exactly 1 lb: division by 16 is exact in binary.
const GRAMS_PER_OUNCE: f64 = GRAMS_PER_POUND / 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Gram,
    Ounce,
    Pound,
}

impl WeightUnit {
    pub fn parse(token: &str) -> Option<WeightUnit> {
        match token {
            "g" => Some(WeightUnit::Gram),
            "oz" => Some(WeightUnit::Ounce),
            "lb" => Some(WeightUnit::Pound),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lb",
        }
    }

    /// Grams per one of this unit
    fn factor(&self) -> f64 {
        match self {
            WeightUnit::Gram => 1.0,
            WeightUnit::Ounce => GRAMS_PER_OUNCE,
            WeightUnit::Pound => GRAMS_PER_POUND,
        }
    }
}

/// Base unit for comparisons
pub const BASE_UNIT: WeightUnit = WeightUnit::Gram;

pub fn convert(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.factor() / to.factor()
}

/// Convert to the base unit (grams), skipping the identity case
pub fn to_base(value: f64, unit: WeightUnit) -> f64 {
    if unit == BASE_UNIT {
        value
    } else {
        convert(value, unit, BASE_UNIT)
    }
}

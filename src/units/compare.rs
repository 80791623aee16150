//! Compare facade: infers each operand's dimension from its unit token,
//! pivots both through the dimension's base unit, and reports ordering
//! and magnitude difference.

use serde::Serialize;

use crate::config::Config;
use crate::units::error::ConvertError;
use crate::units::formatter::apply_precision;
use crate::units::types::{Dimension, RawValue};
use crate::units::validator::to_finite;
use crate::units::{distance, temperature, weight};

/// Outcome of comparing two quantities of the same dimension.
/// `larger` and `smaller` keep the original display text ("1 km"), not
/// the converted base-unit values.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub larger: String,
    pub smaller: String,
    pub difference: f64,
    pub difference_unit: String,
    pub equal: bool,
}

pub fn compare(
    config: &Config,
    value1: &RawValue,
    unit1: &str,
    value2: &RawValue,
    unit2: &str,
) -> Result<Comparison, ConvertError> {
    // Either value failing validation collapses into one InvalidNumber
    let numeric1 = to_finite(value1)?;
    let numeric2 = to_finite(value2)?;

    let dim1 = Dimension::of_unit(unit1)
        .ok_or_else(|| ConvertError::UnknownUnit(unit1.to_string()))?;
    let dim2 = Dimension::of_unit(unit2)
        .ok_or_else(|| ConvertError::UnknownUnit(unit2.to_string()))?;

    if dim1 != dim2 {
        return Err(ConvertError::DimensionMismatch {
            unit1: unit1.to_string(),
            dimension1: dim1,
            unit2: unit2.to_string(),
            dimension2: dim2,
        });
    }

    let base1 = to_base(numeric1, unit1, dim1);
    let base2 = to_base(numeric2, unit2, dim1);

    let difference = apply_precision((base1 - base2).abs(), config.precision);

    // Ordering uses the raw base values; ties label operand 1 as larger.
    // The equal flag uses the rounded difference so it agrees with the
    // difference the caller sees.
    let display1 = format!("{} {}", value1, unit1);
    let display2 = format!("{} {}", value2, unit2);
    let (larger, smaller) = if base2 > base1 {
        (display2, display1)
    } else {
        (display1, display2)
    };

    let threshold = 10f64.powi(-(config.precision as i32));
    let equal = difference < threshold;

    Ok(Comparison {
        larger,
        smaller,
        difference,
        difference_unit: dim1.base_unit().to_string(),
        equal,
    })
}

/// Pivot a value to its dimension's base unit. The unit token is known
/// to belong to the dimension at this point.
fn to_base(value: f64, unit: &str, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Temperature => {
            match temperature::TemperatureUnit::parse(unit) {
                Some(u) => temperature::to_base(value, u),
                None => value,
            }
        }
        Dimension::Distance => match distance::DistanceUnit::parse(unit) {
            Some(u) => distance::to_base(value, u),
            None => value,
        },
        Dimension::Weight => match weight::WeightUnit::parse(unit) {
            Some(u) => weight::to_base(value, u),
            None => value,
        },
    }
}

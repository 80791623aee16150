//! Convert facade: dispatches by dimension name to the right converter,
//! applying configured defaults and precision.

use crate::config::Config;
use crate::units::error::ConvertError;
use crate::units::formatter::apply_precision;
use crate::units::types::{Dimension, RawValue};
use crate::units::validator::to_finite;
use crate::units::{distance, temperature, weight};

/// Convert `value` from `from` to `to` within the named dimension and
/// round the result to the configured precision.
///
/// Temperature substitutes the configured default units when from/to are
/// omitted; the other dimensions require both.
pub fn convert(
    config: &Config,
    dimension: &str,
    value: &RawValue,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<f64, ConvertError> {
    let numeric = to_finite(value)?;

    let dim = Dimension::parse(dimension)
        .ok_or_else(|| ConvertError::UnknownType(dimension.to_string()))?;

    let converted = match dim {
        Dimension::Temperature => {
            let from = from.unwrap_or(config.temperature.default_from.as_str());
            let to = to.unwrap_or(config.temperature.default_to.as_str());
            let from_unit = temperature::TemperatureUnit::parse(from)
                .ok_or_else(|| unsupported(dim, from, to))?;
            let to_unit = temperature::TemperatureUnit::parse(to)
                .ok_or_else(|| unsupported(dim, from, to))?;
            temperature::convert(numeric, from_unit, to_unit)
        }
        Dimension::Distance => {
            let from = from.unwrap_or("");
            let to = to.unwrap_or("");
            let from_unit =
                distance::DistanceUnit::parse(from).ok_or_else(|| unsupported(dim, from, to))?;
            let to_unit =
                distance::DistanceUnit::parse(to).ok_or_else(|| unsupported(dim, from, to))?;
            distance::convert(numeric, from_unit, to_unit)
        }
        Dimension::Weight => {
            let from = from.unwrap_or("");
            let to = to.unwrap_or("");
            let from_unit =
                weight::WeightUnit::parse(from).ok_or_else(|| unsupported(dim, from, to))?;
            let to_unit =
                weight::WeightUnit::parse(to).ok_or_else(|| unsupported(dim, from, to))?;
            weight::convert(numeric, from_unit, to_unit)
        }
    };

    Ok(apply_precision(converted, config.precision))
}

fn unsupported(dimension: Dimension, from: &str, to: &str) -> ConvertError {
    ConvertError::UnsupportedConversion {
        dimension,
        from: from.to_string(),
        to: to.to_string(),
    }
}

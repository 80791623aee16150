use std::fmt;

use crate::units::types::Dimension;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Value missing, empty, non-numeric, NaN, or infinite
    InvalidNumber,
    /// Dimension name is not one of temperature/distance/weight
    UnknownType(String),
    /// Unit pair not representable within the dimension's table
    UnsupportedConversion {
        dimension: Dimension,
        from: String,
        to: String,
    },
    /// Unit token does not belong to any known dimension
    UnknownUnit(String),
    /// Comparison requested across two different dimensions
    DimensionMismatch {
        unit1: String,
        dimension1: Dimension,
        unit2: String,
        dimension2: Dimension,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidNumber => {
                write!(f, "Invalid input: value must be a valid number")
            }
            ConvertError::UnknownType(name) => write!(f, "Unknown type {}", name),
            ConvertError::UnsupportedConversion { dimension, from, to } => {
                write!(
                    f,
                    "Unsupported {} conversion: '{}' to '{}'",
                    dimension, from, to
                )
            }
            ConvertError::UnknownUnit(token) => write!(f, "Unknown unit '{}'", token),
            ConvertError::DimensionMismatch {
                unit1,
                dimension1,
                unit2,
                dimension2,
            } => {
                write!(
                    f,
                    "Cannot compare '{}' ({}) with '{}' ({})",
                    unit1, dimension1, unit2, dimension2
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConvertError::InvalidNumber.to_string(),
            "Invalid input: value must be a valid number"
        );
        assert_eq!(
            ConvertError::UnknownType("volume".to_string()).to_string(),
            "Unknown type volume"
        );
        assert_eq!(
            ConvertError::UnsupportedConversion {
                dimension: Dimension::Distance,
                from: "km".to_string(),
                to: "ft".to_string(),
            }
            .to_string(),
            "Unsupported distance conversion: 'km' to 'ft'"
        );
        assert_eq!(
            ConvertError::UnknownUnit("kg".to_string()).to_string(),
            "Unknown unit 'kg'"
        );
        assert_eq!(
            ConvertError::DimensionMismatch {
                unit1: "C".to_string(),
                dimension1: Dimension::Temperature,
                unit2: "m".to_string(),
                dimension2: Dimension::Distance,
            }
            .to_string(),
            "Cannot compare 'C' (temperature) with 'm' (distance)"
        );
    }
}

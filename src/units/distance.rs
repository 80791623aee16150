//! Distance conversion between kilometers, miles, and meters.
//!
//! Purely multiplicative: every unit carries a fixed factor relative to
//! the base unit (meters), and conversion pivots through it.

const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometer,
    Mile,
    Meter,
}

impl DistanceUnit {
    pub fn parse(token: &str) -> Option<DistanceUnit> {
        match token {
            "km" => Some(DistanceUnit::Kilometer),
            "mi" => Some(DistanceUnit::Mile),
            "m" => Some(DistanceUnit::Meter),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Mile => "mi",
            DistanceUnit::Meter => "m",
        }
    }

    /// Meters per one of this unit
    fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Kilometer => METERS_PER_KILOMETER,
            DistanceUnit::Mile => METERS_PER_MILE,
            DistanceUnit::Meter => 1.0,
        }
    }
}

/// Base unit for comparisons
pub const BASE_UNIT: DistanceUnit = DistanceUnit::Meter;

pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.factor() / to.factor()
}

/// Convert to the base unit (meters), skipping the identity case
pub fn to_base(value: f64, unit: DistanceUnit) -> f64 {
    if unit == BASE_UNIT {
        value
    } else {
        convert(value, unit, BASE_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DistanceUnit::*;

    #[test]
    fn test_kilometers_meters() {
        assert_eq!(convert(5.0, Kilometer, Meter), 5000.0);
        assert_eq!(convert(1000.0, Meter, Kilometer), 1.0);
    }

    #[test]
    fn test_miles_meters() {
        assert_eq!(convert(1.0, Mile, Meter), 1609.344);
        assert_eq!(convert(1609.344, Meter, Mile), 1.0);
    }

    #[test]
    fn test_kilometers_miles() {
        let miles = convert(1.609344, Kilometer, Mile);
        assert!((miles - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity() {
        assert_eq!(convert(42.0, Meter, Meter), 42.0);
        assert_eq!(convert(42.0, Kilometer, Kilometer), 42.0);
    }

    #[test]
    fn test_round_trip() {
        let v = 1000.0;
        let km = convert(v, Meter, Kilometer);
        assert_eq!(convert(km, Kilometer, Meter), v);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(DistanceUnit::parse("km"), Some(Kilometer));
        assert_eq!(DistanceUnit::parse("mi"), Some(Mile));
        assert_eq!(DistanceUnit::parse("m"), Some(Meter));
        assert_eq!(DistanceUnit::parse("ft"), None);
        assert_eq!(DistanceUnit::parse("M"), None);
    }
}

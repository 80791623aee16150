//! Temperature conversion between Celsius, Fahrenheit, and Kelvin.
//!
//! Temperature scales are affine, not purely multiplicative, so each
//! unit pair gets an explicit formula instead of a factor table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn parse(token: &str) -> Option<TemperatureUnit> {
        match token {
            "C" => Some(TemperatureUnit::Celsius),
            "F" => Some(TemperatureUnit::Fahrenheit),
            "K" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// Base unit for comparisons
pub const BASE_UNIT: TemperatureUnit = TemperatureUnit::Celsius;

pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
    }
}

/// Convert to the base unit (Celsius), skipping the identity case
pub fn to_base(value: f64, unit: TemperatureUnit) -> f64 {
    if unit == BASE_UNIT {
        value
    } else {
        convert(value, unit, BASE_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::*;

    #[test]
    fn test_celsius_fahrenheit() {
        assert_eq!(convert(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(convert(212.0, Fahrenheit, Celsius), 100.0);
        // -40 is the fixed point of the affine map
        assert_eq!(convert(-40.0, Celsius, Fahrenheit), -40.0);
    }

    #[test]
    fn test_celsius_kelvin() {
        assert_eq!(convert(0.0, Celsius, Kelvin), 273.15);
        assert_eq!(convert(273.15, Kelvin, Celsius), 0.0);
    }

    #[test]
    fn test_fahrenheit_kelvin() {
        assert_eq!(convert(32.0, Fahrenheit, Kelvin), 273.15);
        assert_eq!(convert(273.15, Kelvin, Fahrenheit), 32.0);
    }

    #[test]
    fn test_identity() {
        assert_eq!(convert(37.5, Celsius, Celsius), 37.5);
        assert_eq!(convert(98.6, Fahrenheit, Fahrenheit), 98.6);
        assert_eq!(convert(300.0, Kelvin, Kelvin), 300.0);
    }

    #[test]
    fn test_round_trip() {
        let v = 21.7;
        let f = convert(v, Celsius, Fahrenheit);
        assert!((convert(f, Fahrenheit, Celsius) - v).abs() < 1e-9);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(TemperatureUnit::parse("C"), Some(Celsius));
        assert_eq!(TemperatureUnit::parse("F"), Some(Fahrenheit));
        assert_eq!(TemperatureUnit::parse("K"), Some(Kelvin));
        assert_eq!(TemperatureUnit::parse("c"), None);
        assert_eq!(TemperatureUnit::parse("R"), None);
    }
}

//! Current weather model and display methods

use serde::{Deserialize, Serialize};

/// Current weather observation for a set of coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// WMO weather code reported by the weather service
    pub weather_code: i32,
}

impl CurrentWeather {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature() {
        let weather = CurrentWeather {
            temperature_celsius: 21.37,
            weather_code: 0,
        };
        assert_eq!(weather.format_temperature(), "21.4°C");
    }
}

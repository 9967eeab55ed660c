//! `cinecast` - Weather-matched movie recommendations and a decision roulette
//!
//! This library provides the core functionality: a total weather-code
//! mapping table, clients for the geocoding/weather/movie services, the
//! recommendation orchestrator, and the comma-separated option picker.

pub mod conditions;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod movie;
pub mod recommend;
pub mod roulette;
pub mod weather;

// Re-export core types for public API
pub use conditions::{ConditionProfile, WeatherKind};
pub use config::AppConfig;
pub use error::CinecastError;
pub use geocoding::{GeocodeService, GeocodingClient};
pub use models::{Coordinates, CurrentWeather, MovieDetails, Recommendation};
pub use movie::{MovieClient, MovieService};
pub use recommend::Recommender;
pub use weather::{ForecastService, WeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CinecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

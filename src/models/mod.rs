//! Data models for the cinecast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates resolved from a city name
//! - Weather: Current weather observation for those coordinates
//! - Movie: Metadata returned by the movie service
//! - Recommendation: The assembled result handed to the presentation layer

pub mod location;
pub mod movie;
pub mod recommendation;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Coordinates;
pub use movie::MovieDetails;
pub use recommendation::Recommendation;
pub use weather::CurrentWeather;

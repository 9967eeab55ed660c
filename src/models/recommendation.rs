//! The assembled recommendation handed to the presentation layer

use serde::Serialize;

use crate::conditions::ConditionProfile;
use crate::models::{CurrentWeather, MovieDetails};

/// Result of one recommendation run.
///
/// Weather and the matched condition profile are always present; movie
/// details are best effort and their absence never invalidates the result.
#[derive(Debug, Serialize, Clone)]
pub struct Recommendation {
    /// City name as entered by the user
    pub city: String,
    /// Current weather at the resolved coordinates
    pub weather: CurrentWeather,
    /// Matched weather-code profile (description, genre, canonical title)
    pub conditions: &'static ConditionProfile,
    /// Movie metadata, absent when the lookup was skipped or failed
    pub movie: Option<MovieDetails>,
    /// Advisory shown when movie details are unavailable
    pub advisory: Option<String>,
}

impl Recommendation {
    /// Whether the movie lookup succeeded
    #[must_use]
    pub fn has_movie(&self) -> bool {
        self.movie.is_some()
    }
}

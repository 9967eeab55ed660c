//! Recommendation orchestration
//!
//! Sequences geocoding, current weather, the condition table, and the movie
//! lookup into one result. Weather information is required; movie metadata is
//! best effort and any movie failure degrades to an advisory instead of
//! failing the run.

use tracing::{debug, info, warn};

use crate::conditions;
use crate::geocoding::GeocodeService;
use crate::models::Recommendation;
use crate::movie::MovieService;
use crate::weather::ForecastService;
use crate::{CinecastError, Result};

/// Advisory shown when movie metadata could not be fetched
pub const MOVIE_UNAVAILABLE_ADVISORY: &str =
    "영화 정보를 불러오지 못했습니다. OMDb API 키를 확인해주세요.";

/// Orchestrates the city → weather → movie pipeline
pub struct Recommender<G, F, M> {
    geocoder: G,
    forecast: F,
    movies: M,
}

impl<G, F, M> Recommender<G, F, M>
where
    G: GeocodeService,
    F: ForecastService,
    M: MovieService,
{
    /// Create a recommender over the three service collaborators
    pub fn new(geocoder: G, forecast: F, movies: M) -> Self {
        Self {
            geocoder,
            forecast,
            movies,
        }
    }

    /// Produce a weather-matched movie recommendation for a city.
    ///
    /// Inputs are validated before any network call. Geocoding and weather
    /// failures abort the run; movie failures only clear the movie details
    /// and attach an advisory.
    pub fn recommend(&self, city: &str, api_key: &str) -> Result<Recommendation> {
        let city = city.trim();
        if city.is_empty() {
            return Err(CinecastError::missing_input("city"));
        }
        if api_key.trim().is_empty() {
            return Err(CinecastError::missing_input("API key"));
        }

        debug!("Recommending for city '{}'", city);

        let coords = self
            .geocoder
            .resolve(city)?
            .ok_or_else(|| CinecastError::city_not_found(city))?;

        let weather = self.forecast.current(&coords)?;
        let profile = conditions::describe(weather.weather_code);
        info!(
            "Weather for '{}': {} ({}), recommending '{}'",
            city, profile.description, weather.weather_code, profile.movie_title
        );

        let (movie, advisory) = match self.movies.lookup(profile.movie_title, api_key) {
            Ok(details) => (Some(details), None),
            Err(err) => {
                warn!("Movie lookup failed, continuing without details: {}", err);
                (None, Some(MOVIE_UNAVAILABLE_ADVISORY.to_string()))
            }
        };

        Ok(Recommendation {
            city: city.to_string(),
            weather,
            conditions: profile,
            movie,
            advisory,
        })
    }
}

//! Error types and handling for the `cinecast` application

use thiserror::Error;

/// Underlying cause attached to transport failures
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the `cinecast` application
#[derive(Error, Debug)]
pub enum CinecastError {
    /// A required user input was empty or missing
    #[error("Missing input: {field}")]
    MissingInput { field: &'static str },

    /// Geocoding returned no match for the requested city
    #[error("No location found for '{city}'")]
    CityNotFound { city: String },

    /// Movie lookup was skipped because no API key is configured
    #[error("Movie lookup skipped: no API key configured")]
    NotConfigured,

    /// The movie service explicitly rejected the lookup
    #[error("Movie lookup failed: {message}")]
    MovieNotFound { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network, HTTP status, or response-parsing failures
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: Cause,
    },
}

impl CinecastError {
    /// Create a missing-input error for the named field
    pub fn missing_input(field: &'static str) -> Self {
        Self::MissingInput { field }
    }

    /// Create a city-not-found error
    pub fn city_not_found<S: Into<String>>(city: S) -> Self {
        Self::CityNotFound { city: city.into() }
    }

    /// Create a movie-not-found error from the service message
    pub fn movie_not_found<S: Into<String>>(message: S) -> Self {
        Self::MovieNotFound {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error carrying the underlying cause
    pub fn transport<E: Into<Cause>>(service: &'static str, source: E) -> Self {
        Self::Transport {
            service,
            source: source.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CinecastError::MissingInput { field } => {
                format!("{field} 값을 입력해주세요.")
            }
            CinecastError::CityNotFound { city } => {
                format!("'{city}' 도시를 찾을 수 없습니다. 도시 이름을 확인해주세요.")
            }
            CinecastError::NotConfigured => "OMDb API 키가 설정되지 않았습니다.".to_string(),
            CinecastError::MovieNotFound { message } => {
                format!("영화 정보를 찾을 수 없습니다: {message}")
            }
            CinecastError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            CinecastError::Transport { service, .. } => {
                format!(
                    "Unable to reach the {service} service. Please check your internet connection."
                )
            }
        }
    }
}

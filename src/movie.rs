//! Movie metadata client for the OMDb API
//!
//! Lookups require a caller-supplied API key. A blank key short-circuits to
//! [`CinecastError::NotConfigured`] without touching the network. OMDb
//! signals failure in-band through the `Response` field of the payload.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::models::MovieDetails;
use crate::{CinecastError, Result};

/// Client for the movie metadata service
pub struct MovieClient {
    client: Client,
    base_url: String,
}

/// Looks up movie metadata by title
pub trait MovieService {
    /// Look up a movie by title, requesting the full plot.
    fn lookup(&self, title: &str, api_key: &str) -> Result<MovieDetails>;
}

impl MovieClient {
    /// Create a new movie client
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.movie.timeout_seconds.into()))
            .user_agent(crate::geocoding::USER_AGENT)
            .build()
            .map_err(|e| CinecastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.movie.base_url.clone(),
        })
    }

    fn lookup_url(&self, title: &str, api_key: &str) -> String {
        format!(
            "{}/?apikey={}&t={}&plot=full&r=json",
            self.base_url,
            api_key,
            urlencoding::encode(title)
        )
    }
}

impl MovieService for MovieClient {
    #[instrument(skip(self, api_key))]
    fn lookup(&self, title: &str, api_key: &str) -> Result<MovieDetails> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            warn!("Skipping movie lookup: no API key configured");
            return Err(CinecastError::NotConfigured);
        }

        let url = self.lookup_url(title, api_key);
        debug!("Movie lookup for '{}'", title);

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| CinecastError::transport("movie", e))?;

        let payload: omdb::LookupResponse = response
            .json()
            .map_err(|e| CinecastError::transport("movie", e))?;

        let details = details_from(payload)?;
        info!("Found movie '{}' ({})", details.title, details.released);
        Ok(details)
    }
}

/// Convert an OMDb payload into movie details.
///
/// OMDb reports failure in-band: `Response` is the string "True" or "False",
/// with an `Error` message on failure. The poster sentinel "N/A" maps to
/// `None`.
fn details_from(payload: omdb::LookupResponse) -> Result<MovieDetails> {
    if payload.response != "True" {
        let message = payload
            .error
            .unwrap_or_else(|| "unknown service error".to_string());
        return Err(CinecastError::movie_not_found(message));
    }

    Ok(MovieDetails {
        title: payload.title.unwrap_or_default(),
        released: payload.released.unwrap_or_default(),
        genre: payload.genre.unwrap_or_default(),
        imdb_rating: payload.imdb_rating.unwrap_or_default(),
        poster_url: payload.poster.filter(|poster| poster != "N/A"),
        plot: payload.plot.unwrap_or_default(),
    })
}

/// OMDb API response structures
mod omdb {
    use serde::Deserialize;

    /// Title lookup response; success is signalled by `Response`
    #[derive(Debug, Deserialize)]
    pub struct LookupResponse {
        #[serde(rename = "Response")]
        pub response: String,
        #[serde(rename = "Error")]
        pub error: Option<String>,
        #[serde(rename = "Title")]
        pub title: Option<String>,
        #[serde(rename = "Released")]
        pub released: Option<String>,
        #[serde(rename = "Genre")]
        pub genre: Option<String>,
        #[serde(rename = "imdbRating")]
        pub imdb_rating: Option<String>,
        #[serde(rename = "Poster")]
        pub poster: Option<String>,
        #[serde(rename = "Plot")]
        pub plot: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> omdb::LookupResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_details_from_success_payload() {
        let details = details_from(payload(
            r#"{"Title": "Mad Max: Fury Road", "Released": "15 May 2015",
                "Genre": "Action, Adventure, Sci-Fi", "imdbRating": "8.1",
                "Poster": "https://example.com/poster.jpg",
                "Plot": "In a post-apocalyptic wasteland...",
                "Response": "True"}"#,
        ))
        .unwrap();

        assert_eq!(details.title, "Mad Max: Fury Road");
        assert_eq!(details.imdb_rating, "8.1");
        assert_eq!(
            details.poster_url.as_deref(),
            Some("https://example.com/poster.jpg")
        );
    }

    #[test]
    fn test_poster_sentinel_maps_to_none() {
        let details = details_from(payload(
            r#"{"Title": "Obscure Film", "Released": "01 Jan 1970", "Genre": "Drama",
                "imdbRating": "N/A", "Poster": "N/A", "Plot": "...", "Response": "True"}"#,
        ))
        .unwrap();

        assert!(details.poster_url.is_none());
    }

    #[test]
    fn test_service_rejection_carries_message() {
        let err = details_from(payload(
            r#"{"Response": "False", "Error": "Movie not found!"}"#,
        ))
        .unwrap_err();

        match err {
            CinecastError::MovieNotFound { message } => assert_eq!(message, "Movie not found!"),
            other => panic!("expected MovieNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_key_rejection() {
        let err = details_from(payload(
            r#"{"Response": "False", "Error": "Invalid API key!"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, CinecastError::MovieNotFound { .. }));
    }

    #[test]
    fn test_blank_key_skips_network() {
        let config = AppConfig::default();
        let client = MovieClient::new(&config).unwrap();
        // A blank key must short-circuit before any request is attempted.
        let err = client.lookup("Inception", "   ").unwrap_err();
        assert!(matches!(err, CinecastError::NotConfigured));
    }

    #[test]
    fn test_lookup_url_requests_full_plot() {
        let config = AppConfig::default();
        let client = MovieClient::new(&config).unwrap();
        let url = client.lookup_url("Mad Max: Fury Road", "secret");
        assert!(url.contains("apikey=secret"));
        assert!(url.contains("t=Mad%20Max%3A%20Fury%20Road"));
        assert!(url.contains("plot=full"));
        assert!(url.contains("r=json"));
    }
}

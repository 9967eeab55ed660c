//! Geocoding client for resolving city names to coordinates
//!
//! Uses the Nominatim search API. The service's usage policy requires a
//! client-identifying User-Agent on every request.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::models::Coordinates;
use crate::{CinecastError, Result};

/// User-Agent sent on geocoding requests (required by the service policy)
pub const USER_AGENT: &str = concat!("cinecast/", env!("CARGO_PKG_VERSION"));

/// Client for the geocoding service
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

/// Resolves a place name to coordinates
pub trait GeocodeService {
    /// Resolve a free-text place name to coordinates.
    ///
    /// Returns `Ok(None)` when the service has no match; transport failures
    /// are errors.
    fn resolve(&self, place: &str) -> Result<Option<Coordinates>>;
}

impl GeocodingClient {
    /// Create a new geocoding client
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.geocoding.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CinecastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.geocoding.base_url.clone(),
        })
    }

    fn search_url(&self, place: &str) -> String {
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(place)
        )
    }
}

impl GeocodeService for GeocodingClient {
    #[instrument(skip(self))]
    fn resolve(&self, place: &str) -> Result<Option<Coordinates>> {
        let url = self.search_url(place);
        debug!("Geocoding request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| CinecastError::transport("geocoding", e))?;

        let hits: Vec<nominatim::SearchResult> = response
            .json()
            .map_err(|e| CinecastError::transport("geocoding", e))?;

        match first_match(hits)? {
            Some(coords) => {
                info!("Geocoded '{}' to {}", place, coords.format());
                Ok(Some(coords))
            }
            None => {
                warn!("No geocoding results for '{}'", place);
                Ok(None)
            }
        }
    }
}

/// Convert the top search hit into coordinates, parsing the string-encoded
/// latitude and longitude fields.
fn first_match(hits: Vec<nominatim::SearchResult>) -> Result<Option<Coordinates>> {
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let latitude: f64 = hit
        .lat
        .parse()
        .map_err(|e| CinecastError::transport("geocoding", e))?;
    let longitude: f64 = hit
        .lon
        .parse()
        .map_err(|e| CinecastError::transport("geocoding", e))?;

    Ok(Some(Coordinates::new(latitude, longitude)))
}

/// Nominatim API response structures
mod nominatim {
    use serde::Deserialize;

    /// One search hit; latitude and longitude arrive string-encoded
    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        pub lat: String,
        pub lon: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hits(json: &str) -> Vec<nominatim::SearchResult> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_match_parses_string_coordinates() {
        let hits = sample_hits(r#"[{"lat": "37.5666791", "lon": "126.9782914"}]"#);
        let coords = first_match(hits).unwrap().unwrap();
        assert!((coords.latitude - 37.5666791).abs() < 1e-9);
        assert!((coords.longitude - 126.9782914).abs() < 1e-9);
    }

    #[test]
    fn test_first_match_empty_is_not_found() {
        let hits = sample_hits("[]");
        assert!(first_match(hits).unwrap().is_none());
    }

    #[test]
    fn test_first_match_takes_top_hit_only() {
        let hits = sample_hits(
            r#"[{"lat": "1.0", "lon": "2.0"}, {"lat": "3.0", "lon": "4.0"}]"#,
        );
        let coords = first_match(hits).unwrap().unwrap();
        assert_eq!(coords, Coordinates::new(1.0, 2.0));
    }

    #[test]
    fn test_first_match_malformed_latitude_is_transport_error() {
        let hits = sample_hits(r#"[{"lat": "not-a-number", "lon": "2.0"}]"#);
        let err = first_match(hits).unwrap_err();
        assert!(matches!(
            err,
            CinecastError::Transport {
                service: "geocoding",
                ..
            }
        ));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let config = AppConfig::default();
        let client = GeocodingClient::new(&config).unwrap();
        let url = client.search_url("New York");
        assert!(url.contains("q=New%20York"));
        assert!(url.contains("format=json"));
        assert!(url.contains("limit=1"));
    }
}

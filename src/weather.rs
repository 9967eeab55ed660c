//! Weather client for Open-Meteo current conditions
//!
//! Requests only the current temperature and WMO weather code, with the
//! timezone detected server-side. No retry: any failure surfaces as a
//! transport error.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::models::{Coordinates, CurrentWeather};
use crate::{CinecastError, Result};

/// Client for the weather forecast service
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Fetches current weather for coordinates
pub trait ForecastService {
    /// Fetch the current temperature and weather code for the coordinates.
    fn current(&self, coords: &Coordinates) -> Result<CurrentWeather>;
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.weather.timeout_seconds.into()))
            .user_agent(crate::geocoding::USER_AGENT)
            .build()
            .map_err(|e| CinecastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.weather.base_url.clone(),
        })
    }

    fn forecast_url(&self, coords: &Coordinates) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,weather_code&timezone=auto",
            self.base_url, coords.latitude, coords.longitude
        )
    }
}

impl ForecastService for WeatherClient {
    #[instrument(skip(self, coords), fields(coords = %coords.format()))]
    fn current(&self, coords: &Coordinates) -> Result<CurrentWeather> {
        let url = self.forecast_url(coords);
        debug!("Weather request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| CinecastError::transport("weather", e))?;

        let forecast: openmeteo::ForecastResponse = response
            .json()
            .map_err(|e| CinecastError::transport("weather", e))?;

        let weather = current_from(forecast)?;
        info!(
            "Current weather at {}: {} (code {})",
            coords.format(),
            weather.format_temperature(),
            weather.weather_code
        );
        Ok(weather)
    }
}

/// Extract the current observation from a forecast response.
fn current_from(forecast: openmeteo::ForecastResponse) -> Result<CurrentWeather> {
    let current = forecast.current.ok_or_else(|| {
        CinecastError::transport("weather", "response is missing the current weather block")
    })?;

    Ok(CurrentWeather {
        temperature_celsius: current.temperature,
        weather_code: current.weather_code,
    })
}

/// Open-Meteo API response structures
mod openmeteo {
    use serde::Deserialize;

    /// Forecast response carrying the requested current fields
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    /// Current weather data from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: f64,
        pub weather_code: i32,
    }
}

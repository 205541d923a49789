//! Open-Meteo upstream client.
//!
//! Two lookups are used: the forecast API for hourly 10m wind speed, and the
//! elevation API. Both are plain GET requests keyed by latitude/longitude.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default Open-Meteo API base URL.
pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Upstream client for forecast and elevation lookups.
#[derive(Debug, Clone)]
pub struct Meteo {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyWind,
}

#[derive(Debug, Deserialize)]
struct HourlyWind {
    wind_speed_10m: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    elevation: f64,
}

impl Meteo {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL format: `{base}/forecast?latitude={lat}&longitude={lon}&hourly=wind_speed_10m`
    fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&hourly=wind_speed_10m",
            self.base_url, latitude, longitude
        )
    }

    /// URL format: `{base}/elevation?latitude={lat}&longitude={lon}`
    fn elevation_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/elevation?latitude={}&longitude={}",
            self.base_url, latitude, longitude
        )
    }

    /// Fetch the first hourly 10m wind speed value for the given coordinates.
    pub async fn wind_speed(&self, latitude: f64, longitude: f64) -> Result<f64> {
        let url = self.forecast_url(latitude, longitude);

        let response: ForecastResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach forecast API")?
            .error_for_status()
            .context("Forecast API returned an error status")?
            .json()
            .await
            .context("Invalid forecast response")?;

        response
            .hourly
            .wind_speed_10m
            .first()
            .copied()
            .context("Forecast response contained no hourly wind speed values")
    }

    /// Fetch the terrain elevation for the given coordinates.
    pub async fn elevation(&self, latitude: f64, longitude: f64) -> Result<f64> {
        let url = self.elevation_url(latitude, longitude);

        let response: ElevationResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach elevation API")?
            .error_for_status()
            .context("Elevation API returned an error status")?
            .json()
            .await
            .context("Invalid elevation response")?;

        Ok(response.elevation)
    }
}

impl Default for Meteo {
    fn default() -> Self {
        Self::new(OPEN_METEO_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_forecast_url() {
        let meteo = Meteo::new(OPEN_METEO_BASE_URL);
        assert_eq!(
            meteo.forecast_url(52.52, 13.41),
            "https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.41&hourly=wind_speed_10m"
        );
    }

    #[test]
    fn test_elevation_url() {
        let meteo = Meteo::new(OPEN_METEO_BASE_URL);
        assert_eq!(
            meteo.elevation_url(52.52, 13.41),
            "https://api.open-meteo.com/v1/elevation?latitude=52.52&longitude=13.41"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let meteo = Meteo::new("http://localhost:8080/");
        assert_eq!(
            meteo.elevation_url(1.0, 2.0),
            "http://localhost:8080/elevation?latitude=1&longitude=2"
        );
    }

    #[tokio::test]
    async fn test_wind_speed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .and(query_param("hourly", "wind_speed_10m"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hourly": { "wind_speed_10m": [7.5, 9.1, 11.0] }
            })))
            .mount(&server)
            .await;

        let meteo = Meteo::new(&server.uri());
        let speed = meteo.wind_speed(52.52, 13.41).await.unwrap();
        assert_eq!(speed, 7.5);
    }

    #[tokio::test]
    async fn test_wind_speed_empty_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hourly": { "wind_speed_10m": [] }
            })))
            .mount(&server)
            .await;

        let meteo = Meteo::new(&server.uri());
        assert!(meteo.wind_speed(52.52, 13.41).await.is_err());
    }

    #[tokio::test]
    async fn test_elevation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/elevation"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "elevation": 120.3 })),
            )
            .mount(&server)
            .await;

        let meteo = Meteo::new(&server.uri());
        let elevation = meteo.elevation(52.52, 13.41).await.unwrap();
        assert_eq!(elevation, 120.3);
    }

    #[tokio::test]
    async fn test_elevation_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/elevation"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let meteo = Meteo::new(&server.uri());
        assert!(meteo.elevation(52.52, 13.41).await.is_err());
    }

    #[tokio::test]
    async fn test_wind_speed_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "hourly": {} })),
            )
            .mount(&server)
            .await;

        let meteo = Meteo::new(&server.uri());
        assert!(meteo.wind_speed(52.52, 13.41).await.is_err());
    }
}

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::meteo::Meteo;

/// Number of compass sectors in the wind rose.
const DIRECTION_SECTORS: usize = 8;

#[derive(Debug, Deserialize)]
pub struct SiteDataRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct SiteDataResponse {
    pub wind_speed: f64,
    pub elevation: f64,
    #[serde(rename = "directionData")]
    pub direction_data: Vec<f64>,
}

/// Sample per-sector wind intensities for the wind rose.
///
/// No upstream source provides sector data; values are drawn uniformly from
/// [5, 20] and rounded to two decimals.
fn sample_directions() -> Vec<f64> {
    let mut rng = rand::rng();
    (0..DIRECTION_SECTORS)
        .map(|_| (rng.random_range(5.0..=20.0) * 100.0_f64).round() / 100.0)
        .collect()
}

/// Build the full site report for the given coordinates: upstream wind speed
/// and elevation, plus the sampled wind rose sectors.
pub async fn collect(meteo: &Meteo, request: &SiteDataRequest) -> Result<SiteDataResponse> {
    let wind_speed = meteo.wind_speed(request.latitude, request.longitude).await?;
    let elevation = meteo.elevation(request.latitude, request.longitude).await?;

    Ok(SiteDataResponse {
        wind_speed,
        elevation,
        direction_data: sample_directions(),
    })
}

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MeteoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub meteo: MeteoConfig,
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    envy::prefixed("WINDSITE_METEO_")
        .from_env::<MeteoConfig>()
        .map(|meteo| Config { meteo })
        .expect("Invalid meteo config. Optional env var: WINDSITE_METEO_BASE_URL")
});

pub fn config() -> &'static Config {
    &CONFIG
}

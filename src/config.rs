//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first, if present.

use crate::services::normalize_district_id;
use std::env;
use std::path::PathBuf;

const DEFAULT_BOUNDARIES_PATH: &str = "data/tx_congressional_districts.geojson";
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_REGION_SUFFIX: &str = ", Texas, USA";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Boundary data ---
    /// GeoJSON file with district boundaries
    pub boundaries_path: PathBuf,
    /// If set, boundaries are downloaded from here instead of read from disk
    pub boundaries_url: Option<String>,
    /// Attribute holding the district number in this data source
    pub district_field: Option<String>,

    // --- Presentation ---
    /// The campaign's district, normalized (e.g. "8")
    pub highlight_district: String,

    // --- Geocoding ---
    /// Nominatim base URL
    pub geocoder_url: String,
    /// Appended to every address query
    pub geocoder_region_suffix: String,
    /// User-Agent sent to the geocoder
    pub geocoder_user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boundaries_path: PathBuf::from(DEFAULT_BOUNDARIES_PATH),
            boundaries_url: None,
            district_field: None,
            highlight_district: "8".to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_region_suffix: DEFAULT_REGION_SUFFIX.to_string(),
            geocoder_user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let highlight_district = match lookup("HIGHLIGHT_DISTRICT") {
            Some(raw) => normalize_district_id(&raw)
                .ok_or(ConfigError::Invalid("HIGHLIGHT_DISTRICT", raw))?,
            None => "8".to_string(),
        };

        Ok(Self {
            boundaries_path: non_empty("DISTRICT_BOUNDARIES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BOUNDARIES_PATH)),
            boundaries_url: non_empty("DISTRICT_BOUNDARIES_URL"),
            district_field: non_empty("DISTRICT_FIELD"),
            highlight_district,
            geocoder_url: non_empty("GEOCODER_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string()),
            geocoder_region_suffix: lookup("GEOCODER_REGION_SUFFIX")
                .unwrap_or_else(|| DEFAULT_REGION_SUFFIX.to_string()),
            geocoder_user_agent: non_empty("GEOCODER_USER_AGENT")
                .unwrap_or_else(default_user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("district-locator/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

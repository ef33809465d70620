use serde::Deserialize;
use std::time::Duration;

use crate::models::Coordinate;

/// Environment variable prefix for every setting, e.g. `SOS_BASE_URL`.
pub const ENV_PREFIX: &str = "SOS_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Origin of the dispatch server; the SOS path is resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_lat")]
    pub lat: f64,

    #[serde(default = "default_lon")]
    pub lon: f64,

    // Deadline for the whole exchange, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env::<Config>()
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lat: default_lat(),
            lon: default_lon(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_lat() -> f64 {
    19.076
}

fn default_lon() -> f64 {
    72.877
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("sos-notifier/{}", env!("CARGO_PKG_VERSION"))
}

use crate::client::DEFAULT_ACTIVITIES_URL;
use crate::hours::HourFormat;
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/settings.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub activities_url: String,
    pub hour_format: HourFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let activities_url = lookup("ACTIVITIES_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACTIVITIES_URL.to_string());

        let hour_format = match lookup("HOUR_FORMAT") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                warn!("{err}, falling back to rounded");
                HourFormat::default()
            }),
            None => HourFormat::default(),
        };

        Self {
            port,
            data_path,
            activities_url,
            hour_format,
        }
    }
}

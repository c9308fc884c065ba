use crate::client::ActivityClient;
use crate::config::AppConfig;
use crate::hours::HourFormat;
use crate::models::Settings;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub settings_path: PathBuf,
    pub settings: Arc<Mutex<Settings>>,
    pub client: ActivityClient,
    pub hour_format: HourFormat,
}

impl AppState {
    pub fn new(config: &AppConfig, settings: Settings) -> Self {
        Self {
            settings_path: config.data_path.clone(),
            settings: Arc::new(Mutex::new(settings)),
            client: ActivityClient::new(config.activities_url.clone()),
            hour_format: config.hour_format,
        }
    }
}

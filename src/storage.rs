use crate::errors::AppError;
use crate::models::Settings;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the stored credential once at startup. A missing or unreadable
/// file starts the page with an empty key field.
pub async fn load_settings(path: &Path) -> Settings {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(settings) => settings,
            Err(err) => {
                error!("failed to parse settings file: {err}");
                Settings::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            error!("failed to read settings file: {err}");
            Settings::default()
        }
    }
}

/// Overwrites the whole file with the latest `apiKey`; the last submit wins.
pub async fn persist_settings(path: &Path, settings: &Settings) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(settings).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

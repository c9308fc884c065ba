use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Named {
    pub name: String,
}

/// One time entry as returned by the activities endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub customer: Named,
    pub project: Named,
    pub hours: f64,
}

/// The persisted credential.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CredentialForm {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct HourRow {
    pub name: String,
    pub hours: f64,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub from: String,
    pub to: String,
    pub customers: Vec<HourRow>,
    pub projects: Vec<HourRow>,
}

use crate::models::Activity;
use crate::week::{date_key, WeekRange};
use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION},
    Client, StatusCode,
};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ACTIVITIES_URL: &str = "https://denkwerk.mocoapp.com/api/v1/activities";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("credential is not a valid header value: {0}")]
    InvalidCredential(#[from] InvalidHeaderValue),
    #[error("credential rejected with status {0}")]
    Unauthorized(StatusCode),
    #[error("response is not a list of activities: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the time-tracking activities endpoint.
#[derive(Clone)]
pub struct ActivityClient {
    client: Client,
    endpoint: String,
}

impl ActivityClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches every activity between the range's Monday and Sunday.
    ///
    /// Statuses other than 401/403 are not checked; the body decides.
    pub async fn fetch_activities(
        &self,
        api_key: &str,
        range: &WeekRange,
    ) -> Result<Vec<Activity>, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&authorization(api_key))?);

        let query = [
            ("from", date_key(range.from_date())),
            ("to", date_key(range.to_date())),
        ];
        let res = self
            .client
            .get(&self.endpoint)
            .headers(headers)
            .query(&query)
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FetchError::Unauthorized(status));
        }

        let body = res.bytes().await?;
        let activities = parse_activities(&body)?;
        debug!(status = %status, count = activities.len(), "fetched activities");
        Ok(activities)
    }
}

pub fn authorization(api_key: &str) -> String {
    format!("Token token={api_key}")
}

pub fn parse_activities(body: &[u8]) -> Result<Vec<Activity>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, FETCH_FAILED_MESSAGE};

    #[test]
    fn authorization_uses_token_scheme() {
        assert_eq!(authorization("abc123"), "Token token=abc123");
    }

    #[test]
    fn parses_activities_and_ignores_extra_fields() {
        let body = br#"[
            {"id": 1, "date": "2026-10-19", "hours": 2,
             "customer": {"id": 7, "name": "Acme"},
             "project": {"id": 9, "name": "X"}},
            {"hours": 1.5, "customer": {"name": "Acme"}, "project": {"name": "Y"}}
        ]"#;
        let activities = parse_activities(body).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].customer.name, "Acme");
        assert_eq!(activities[0].hours, 2.0);
        assert_eq!(activities[1].project.name, "Y");
    }

    #[test]
    fn missing_nested_field_fails_the_whole_response() {
        let body = br#"[
            {"hours": 1, "customer": {"name": "Acme"}, "project": {"name": "X"}},
            {"hours": 1, "customer": {"name": "Acme"}}
        ]"#;
        assert!(parse_activities(body).is_err());
    }

    #[test]
    fn non_list_body_fails() {
        assert!(parse_activities(br#"{"message": "Unauthorized"}"#).is_err());
        assert!(parse_activities(b"<html>oops</html>").is_err());
    }

    #[tokio::test]
    async fn credential_with_control_characters_is_rejected_before_sending() {
        let client = ActivityClient::new("http://127.0.0.1:9/api/v1/activities");
        let range = crate::week::current_week();

        let err = client
            .fetch_activities("abc\ndef", &range)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidCredential(_)));

        let app_err = AppError::from(err);
        assert_eq!(app_err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(app_err.message, FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn errors_are_tagged() {
        let err = FetchError::from(parse_activities(b"nope").unwrap_err());
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(FetchError::Unauthorized(StatusCode::UNAUTHORIZED)
            .to_string()
            .contains("401"));
    }
}

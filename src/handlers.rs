use crate::aggregate::WeeklySummary;
use crate::client::FetchError;
use crate::errors::AppError;
use crate::models::{CredentialForm, SummaryResponse};
use crate::state::AppState;
use crate::storage::persist_settings;
use crate::ui::{render_index, Report};
use crate::week::{current_week, WeekResponse};
use axum::{extract::State, response::Html, Form, Json};
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let api_key = state.settings.lock().await.api_key.clone().unwrap_or_default();
    Html(render_index(
        &api_key,
        &Report::Pending(current_week()),
        state.hour_format,
    ))
}

pub async fn get_week() -> Json<WeekResponse> {
    Json(current_week().to_response())
}

pub async fn report(
    State(state): State<AppState>,
    Form(form): Form<CredentialForm>,
) -> Result<Html<String>, AppError> {
    store_credential(&state, &form.api_key).await?;

    let html = match fetch_summary(&state, &form.api_key).await {
        Ok(summary) => render_index(&form.api_key, &Report::Summary(&summary), state.hour_format),
        Err(_) => render_index(&form.api_key, &Report::Failed, state.hour_format),
    };
    Ok(Html(html))
}

pub async fn summary(
    State(state): State<AppState>,
    Json(payload): Json<CredentialForm>,
) -> Result<Json<SummaryResponse>, AppError> {
    store_credential(&state, &payload.api_key).await?;

    let summary = fetch_summary(&state, &payload.api_key).await?;
    Ok(Json(summary.to_response(state.hour_format)))
}

async fn store_credential(state: &AppState, api_key: &str) -> Result<(), AppError> {
    let mut settings = state.settings.lock().await;
    settings.api_key = Some(api_key.to_string());
    persist_settings(&state.settings_path, &settings).await
}

async fn fetch_summary(state: &AppState, api_key: &str) -> Result<WeeklySummary, FetchError> {
    let range = current_week();
    match state.client.fetch_activities(api_key, &range).await {
        Ok(activities) => {
            info!(count = activities.len(), "aggregating activities");
            Ok(WeeklySummary::build(range, &activities))
        }
        Err(err) => {
            error!(endpoint = state.client.endpoint(), "failed to fetch activities: {err}");
            Err(err)
        }
    }
}

use std::sync::Arc;

use axum::{extract::State, Json};

use service::file::submissions::{ContactInput, FormStore, NewsletterInput, VolunteerInput};

use crate::errors::ApiError;

pub async fn submit_contact(
    State(store): State<Arc<FormStore>>,
    Json(input): Json<ContactInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.submit_contact(input).await?;
    Ok(Json(serde_json::json!({"message": "Contact form submitted successfully!"})))
}

pub async fn submit_volunteer(
    State(store): State<Arc<FormStore>>,
    Json(input): Json<VolunteerInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.submit_volunteer(input).await?;
    Ok(Json(serde_json::json!({"message": "Volunteer form submitted successfully!"})))
}

pub async fn subscribe_newsletter(
    State(store): State<Arc<FormStore>>,
    Json(input): Json<NewsletterInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Re-subscribing an existing email is reported as success as well.
    store.subscribe_newsletter(input).await?;
    Ok(Json(serde_json::json!({"message": "Subscribed successfully!"})))
}

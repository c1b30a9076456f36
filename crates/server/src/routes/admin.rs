use std::sync::Arc;

use axum::{extract::State, Json};

use service::file::submissions::{FormSnapshot, FormStore};

/// Aggregate view of all three collections. Always 200; a collection whose
/// backing file could not be read shows up as an empty array.
pub async fn form_data(State(store): State<Arc<FormStore>>) -> Json<FormSnapshot> {
    Json(store.admin_snapshot().await)
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::error::StoreError;
use crate::state::AppState;
use crate::task::Task;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

/// POST /tasks. A body that is not a JSON object with a string title counts
/// as a missing title.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), StoreError> {
    let title = match body {
        Ok(Json(req)) => req.title,
        Err(rejection) => {
            warn!("Unreadable create body: {rejection}");
            None
        }
    };

    match state.tasks.create(title.as_deref()).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(task))),
        Err(e) => {
            warn!("Create rejected: {e}");
            Err(e)
        }
    }
}

/// PATCH /tasks/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StoreError> {
    state.tasks.toggle(&id).await.map(Json).inspect_err(|e| {
        warn!(%id, "Toggle rejected: {e}");
    })
}

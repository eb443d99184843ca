use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled, completable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// New open task with a fresh id. `title` must already be trimmed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

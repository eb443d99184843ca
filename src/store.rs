use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::StoreError;
use crate::task::Task;

/// Authoritative in-memory task collection, kept in insertion order.
///
/// Clones share the same collection. Each operation holds the lock for its
/// whole read-modify-write section.
#[derive(Clone, Default)]
pub struct TaskStore {
    inner: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.clone()
    }

    /// Append a new open task. Absent or blank titles are rejected.
    pub async fn create(&self, title: Option<&str>) -> Result<Task, StoreError> {
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(StoreError::InvalidInput),
        };

        let task = Task::new(title);
        let mut tasks = self.inner.write().await;
        tasks.push(task.clone());
        info!(id = %task.id, total = tasks.len(), "Task created");

        Ok(task)
    }

    /// Flip `completed` on the task with `id` and return the updated task.
    pub async fn toggle(&self, id: &str) -> Result<Task, StoreError> {
        let mut tasks = self.inner.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        task.completed = !task.completed;
        info!(id = %task.id, completed = task.completed, "Task toggled");

        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn list_starts_empty() {
        let store = TaskStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn create_trims_and_appends() {
        let store = TaskStore::new();
        let task = store.create(Some(" Buy milk ")).await.unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert_eq!(store.list().await, vec![task]);
    }

    #[tokio::test]
    async fn create_preserves_insertion_order() {
        let store = TaskStore::new();
        let a = store.create(Some("a")).await.unwrap();
        let b = store.create(Some("b")).await.unwrap();
        let c = store.create(Some("c")).await.unwrap();
        let ids: Vec<_> = store.list().await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store = TaskStore::new();
        for _ in 0..100 {
            store.create(Some("same title")).await.unwrap();
        }
        let mut ids: Vec<_> = store.list().await.into_iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[rstest]
    #[case::missing(None)]
    #[case::empty(Some(""))]
    #[case::spaces(Some("   "))]
    #[case::whitespace(Some("\t\n "))]
    #[tokio::test]
    async fn create_rejects_blank_titles(#[case] title: Option<&str>) {
        let store = TaskStore::new();
        let existing = store.create(Some("keep")).await.unwrap();

        assert_eq!(store.create(title).await, Err(StoreError::InvalidInput));
        assert_eq!(store.list().await, vec![existing]);
    }

    #[tokio::test]
    async fn toggle_flips_only_target() {
        let store = TaskStore::new();
        let a = store.create(Some("a")).await.unwrap();
        let b = store.create(Some("b")).await.unwrap();

        let toggled = store.toggle(&b.id).await.unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.title, b.title);
        assert_eq!(toggled.created_at, b.created_at);

        let tasks = store.list().await;
        assert_eq!(tasks[0], a);
        assert_eq!(tasks[1], toggled);
    }

    #[tokio::test]
    async fn toggle_twice_restores() {
        let store = TaskStore::new();
        let task = store.create(Some("a")).await.unwrap();
        store.toggle(&task.id).await.unwrap();
        let again = store.toggle(&task.id).await.unwrap();
        assert!(!again.completed);
        assert_eq!(again, task);
    }

    #[tokio::test]
    async fn toggle_unknown_is_not_found() {
        let store = TaskStore::new();
        let task = store.create(Some("a")).await.unwrap();
        assert_eq!(store.toggle("nope").await, Err(StoreError::NotFound));
        assert_eq!(store.list().await, vec![task]);
    }

    #[tokio::test]
    async fn clones_share_collection() {
        let store = TaskStore::new();
        let other = store.clone();
        store.create(Some("a")).await.unwrap();
        assert_eq!(other.list().await.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_toggles_are_not_lost() {
        let store = TaskStore::new();
        let task = store.create(Some("a")).await.unwrap();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                let id = task.id.clone();
                tokio::spawn(async move { store.toggle(&id).await })
            })
            .collect();
        for h in handles {
            h.await.unwrap().unwrap();
        }

        assert!(!store.list().await[0].completed);
    }
}

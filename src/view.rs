//! Client-side view state.
//!
//! The service is the source of truth. The view only applies a mutation
//! after the service confirms it, so a failed call leaves the list as it was.

use crate::client::{ClientError, TaskApi};
use crate::task::Task;

/// Replace the task whose id matches `updated`, keeping order. Unknown ids
/// leave the list unchanged.
pub fn replace_by_id(tasks: &[Task], updated: &Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id == updated.id {
                updated.clone()
            } else {
                t.clone()
            }
        })
        .collect()
}

#[derive(Debug, Default, Clone)]
pub struct ViewState {
    pub tasks: Vec<Task>,
    /// Current contents of the new-task input.
    pub input: String,
    pub loading: bool,
    pub adding: bool,
    /// Last error. Later successes do not clear it; a new error replaces it.
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Task>, ClientError>) {
        self.loading = false;
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn can_add(&self) -> bool {
        !self.input.trim().is_empty() && !self.adding
    }

    /// Mark an add as in flight and return the title to submit, or `None`
    /// when adding is not currently allowed.
    pub fn begin_add(&mut self) -> Option<String> {
        if !self.can_add() {
            return None;
        }
        self.adding = true;
        Some(self.input.clone())
    }

    pub fn finish_add(&mut self, result: Result<Task, ClientError>) {
        match result {
            Ok(task) => {
                self.tasks.push(task);
                self.input.clear();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.adding = false;
    }

    pub fn finish_toggle(&mut self, result: Result<Task, ClientError>) {
        match result {
            Ok(task) => self.tasks = replace_by_id(&self.tasks, &task),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Drives the view's three intents against a task service.
pub struct Controller<A> {
    api: A,
    pub state: ViewState,
}

impl<A: TaskApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    pub async fn load(&mut self) {
        self.state.begin_load();
        let result = self.api.list().await;
        self.state.finish_load(result);
    }

    /// Submit the current input. Returns false if nothing was sent.
    pub async fn add(&mut self) -> bool {
        let Some(title) = self.state.begin_add() else {
            return false;
        };
        let result = self.api.create(&title).await;
        self.state.finish_add(result);
        true
    }

    pub async fn toggle(&mut self, id: &str) {
        let result = self.api.toggle(id).await;
        self.state.finish_toggle(result);
    }
}

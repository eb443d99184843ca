use crate::store::TaskStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub tasks: TaskStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: TaskStore::new(),
        }
    }
}

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod store;
pub mod task;
pub mod ui;
pub mod view;

pub mod app;
pub mod codec;
pub mod errors;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod navigator;
pub mod plan;
pub mod progress;
pub mod snapshot;
pub mod state;
pub mod storage;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use plan::{Plan, resolve_plan_path};
pub use state::AppState;
pub use storage::{KeyValueStore, MemoryStore, load_data, resolve_data_path};
pub use tracker::Tracker;

pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod storage;
pub mod thumbnail;
pub mod ui;
pub mod state;

pub use app::router;
pub use catalog::Catalog;
pub use history::HistoryStore;
pub use models::HistoryRecord;
pub use state::AppState;
pub use storage::{resolve_data_path, resolve_workouts_path};

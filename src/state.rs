use crate::catalog::Catalog;
use crate::history::HistoryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub history: Arc<Mutex<HistoryStore>>,
}

impl AppState {
    pub fn new(catalog: Catalog, history: HistoryStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            history: Arc::new(Mutex::new(history)),
        }
    }
}

use crate::store::{DailyTrackerStore, StoreData};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<DailyTrackerStore<StoreData>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: StoreData) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(DailyTrackerStore::new(data))),
        }
    }
}


mod error;
pub mod employee;
mod record_store;

use std::sync::Arc;

pub use self::error::{Error, Result};
pub use self::record_store::RecordStore;

/// Owns the record store. Cloning hands out another handle to the same store.
#[derive(Clone, Default)]
pub struct ModelManager {
    store: Arc<RecordStore>,
}

impl ModelManager {
    pub fn new() -> Self {
        ModelManager {
            store: Arc::new(RecordStore::new()),
        }
    }

    pub(in crate::model) fn store(&self) -> &RecordStore {
        &self.store
    }
}

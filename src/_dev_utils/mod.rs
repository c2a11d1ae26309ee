
use crate::model::ModelManager;

/// Fresh, empty model manager. Each test gets its own store.
pub fn init_test() -> ModelManager {
    ModelManager::new()
}

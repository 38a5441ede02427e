mod error;
mod store;

pub use error::JsonFileError;
pub use store::JsonFileStore;

use crate::dao::storage::StorageError;

impl From<JsonFileError> for StorageError {
    fn from(err: JsonFileError) -> Self {
        StorageError::backend("json file".to_string(), err)
    }
}

use std::sync::Arc;

use tracing::warn;

use heartspace_core::model::ProgressRecord;

use crate::keys;
use crate::store::{KeyValueStore, StorageError};

/// Persistence for the `ProgressRecord`, under the fixed progress key.
///
/// The record is written whole on every save (write-through, no batching).
/// A stored value that fails to parse is treated as an empty record: local
/// progress is best-effort state and availability wins over strictness here.
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the persisted record. Absence is the expected initial state and
    /// yields an empty record, as does a malformed stored value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the store itself cannot be read.
    pub fn load(&self) -> Result<ProgressRecord, StorageError> {
        let Some(raw) = self.store.get_item(keys::PROGRESS)? else {
            return Ok(ProgressRecord::new());
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(error = %e, "stored progress is malformed; starting empty");
                Ok(ProgressRecord::new())
            }
        }
    }

    /// Serializes and stores the whole record in a single write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set_item(keys::PROGRESS, &raw)
    }

    /// Deletes the stored key entirely (sign-out path).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(keys::PROGRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use heartspace_core::model::{ChapterId, ProgramId};

    fn store() -> (Arc<MemoryStore>, ProgressStore) {
        let kv = Arc::new(MemoryStore::new());
        let progress = ProgressStore::new(kv.clone());
        (kv, progress)
    }

    #[test]
    fn load_absent_yields_empty_record() {
        let (_, progress) = store();
        assert!(progress.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_, progress) = store();
        let mut record = ProgressRecord::new();
        record.mark_complete(ProgramId::new(1), ChapterId::new("ew-1"));
        record.mark_complete(ProgramId::new(3), ChapterId::new("ae-5"));

        progress.save(&record).unwrap();
        assert_eq!(progress.load().unwrap(), record);
    }

    #[test]
    fn malformed_state_degrades_to_empty() {
        let (kv, progress) = store();
        kv.set_item(keys::PROGRESS, "{not json").unwrap();
        assert!(progress.load().unwrap().is_empty());
    }

    #[test]
    fn wrong_shape_degrades_to_empty() {
        let (kv, progress) = store();
        kv.set_item(keys::PROGRESS, r#"["a","b"]"#).unwrap();
        assert!(progress.load().unwrap().is_empty());
    }

    #[test]
    fn clear_removes_the_key() {
        let (kv, progress) = store();
        let mut record = ProgressRecord::new();
        record.mark_complete(ProgramId::new(1), ChapterId::new("ew-1"));
        progress.save(&record).unwrap();

        progress.clear().unwrap();
        assert_eq!(kv.get_item(keys::PROGRESS).unwrap(), None);
        assert!(progress.load().unwrap().is_empty());
    }
}

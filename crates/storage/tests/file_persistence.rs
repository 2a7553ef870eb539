use std::sync::Arc;

use heartspace_core::model::{ChapterId, ProgramId, ProgressRecord};
use storage::{FileStore, KeyValueStore, ProgressStore, keys};

#[test]
fn progress_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    // First "run": mark some chapters and persist.
    {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::open(dir.path()).unwrap());
        let progress = ProgressStore::new(store);

        let mut record = ProgressRecord::new();
        record.mark_complete(ProgramId::new(1), ChapterId::new("ew-1"));
        record.mark_complete(ProgramId::new(1), ChapterId::new("ew-3"));
        record.mark_complete(ProgramId::new(2), ChapterId::new("sl-2"));
        progress.save(&record).unwrap();
    }

    // Second "run": a fresh store over the same directory sees the same state.
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());
    let progress = ProgressStore::new(store);
    let record = progress.load().unwrap();

    assert!(record.is_complete(ProgramId::new(1), &ChapterId::new("ew-1")));
    assert!(record.is_complete(ProgramId::new(1), &ChapterId::new("ew-3")));
    assert!(record.is_complete(ProgramId::new(2), &ChapterId::new("sl-2")));
    assert!(!record.is_complete(ProgramId::new(1), &ChapterId::new("ew-2")));
}

#[test]
fn sign_out_clears_every_owned_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    for key in keys::ALL {
        store.set_item(key, "x").unwrap();
    }
    for key in keys::ALL {
        store.remove_item(key).unwrap();
    }
    for key in keys::ALL {
        assert_eq!(store.get_item(key).unwrap(), None);
    }
}

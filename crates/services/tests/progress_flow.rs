//! Progress tracking exercised through the assembled service graph.

use std::sync::Arc;

use heartspace_core::model::{ChapterId, ProgramId};
use heartspace_core::time::fixed_clock;
use services::AppServices;
use storage::{KeyValueStore, MemoryStore, keys};

fn services_over(store: Arc<MemoryStore>) -> AppServices {
    AppServices::new(
        "http://localhost:3000/api",
        store as Arc<dyn KeyValueStore>,
        fixed_clock(),
    )
    .unwrap()
}

#[test]
fn progress_persists_across_a_rebuild() {
    let store = Arc::new(MemoryStore::new());

    {
        let mut services = services_over(store.clone());
        let tracker = services.tracker_mut();
        tracker.complete(ProgramId::new(1), &ChapterId::new("ew-1")).unwrap();
        tracker.complete(ProgramId::new(1), &ChapterId::new("ew-2")).unwrap();
    }

    // A rebuilt graph over the same store sees the same state.
    let services = services_over(store.clone());
    assert_eq!(
        services.tracker().percent_complete(ProgramId::new(1)).unwrap(),
        40
    );

    // The stored value uses the legacy key and shape.
    let raw = store.get_item(keys::PROGRESS).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["1"]["ew-1"], serde_json::Value::Bool(true));
}

#[test]
fn a_corrupt_stored_record_degrades_to_a_fresh_start() {
    let store = Arc::new(MemoryStore::new());
    store.set_item(keys::PROGRESS, "{\"1\": [oops").unwrap();

    let services = services_over(store);
    assert_eq!(services.tracker().completed_chapter_count(), 0);
    assert_eq!(
        services.tracker().percent_complete(ProgramId::new(1)).unwrap(),
        0
    );
}

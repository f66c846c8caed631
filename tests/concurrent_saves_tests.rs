/// Concurrent save tests
///
/// Tests that identity allocation stays collision-free under concurrent inserts
/// Run with: cargo test --test concurrent_saves_tests

use std::collections::HashSet;
use std::sync::Arc;

use userstore::{RecordStore, StoreConfig, UserRecord};

#[tokio::test]
async fn test_concurrent_inserts_never_collide() {
    let store = Arc::new(RecordStore::in_memory(StoreConfig::new()));

    let mut handles = vec![];
    let num_tasks = 8;
    let saves_per_task = 25;

    for task_id in 0..num_tasks {
        let store_clone = Arc::clone(&store);

        let handle = tokio::spawn(async move {
            let mut ids = vec![];
            for i in 0..saves_per_task {
                let record = UserRecord::new(format!("user_{}_{}", task_id, i));
                let saved = store_clone.save(record).await.unwrap();
                ids.push(saved.id().unwrap());
            }
            ids
        });

        handles.push(handle);
    }

    let mut all_ids = vec![];
    for handle in handles {
        all_ids.extend(handle.await.unwrap());
    }

    let unique: HashSet<_> = all_ids.iter().copied().collect();
    assert_eq!(all_ids.len(), num_tasks * saves_per_task);
    assert_eq!(unique.len(), all_ids.len(), "duplicate id assigned");
    assert_eq!(*all_ids.iter().max().unwrap(), (num_tasks * saves_per_task) as i64);
}

#[tokio::test]
async fn test_ids_within_a_task_are_strictly_increasing() {
    let store = Arc::new(RecordStore::in_memory(StoreConfig::new()));

    let mut handles = vec![];
    for task_id in 0..4 {
        let store_clone = Arc::clone(&store);

        handles.push(tokio::spawn(async move {
            let mut last = 0;
            for i in 0..20 {
                let record = UserRecord::new(format!("user_{}_{}", task_id, i));
                let id = store_clone.save(record).await.unwrap().id().unwrap();
                assert!(id > last, "id {} not greater than {}", id, last);
                last = id;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

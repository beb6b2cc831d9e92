//! Integration tests for the task store: lookup, mutation, deletion, counts,
//! and change-notification semantics.

use chrono::{Duration, Utc};
use storeflow_core::store::TaskStore;
use storeflow_core::types::{FeatureType, Priority, Task, TaskStatus};
use tokio::sync::broadcast::error::TryRecvError;
use uuid::Uuid;

fn task(title: &str, priority: Priority, status: TaskStatus) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        priority,
        due_time: Some(Utc::now() + Duration::hours(2)),
        created_at: Utc::now(),
        related_feature: Some(FeatureType::Replenishment),
        status,
        assigned_to: None,
        completed_at: None,
        completed_by: None,
    }
}

fn seeded_store() -> (TaskStore, Vec<Uuid>) {
    let tasks = vec![
        task("Complete Morning Pick Lists", Priority::High, TaskStatus::NotStarted),
        task("Restock Dairy Section", Priority::High, TaskStatus::InProgress),
        task("Morning Shelf Audit", Priority::Medium, TaskStatus::Complete),
    ];
    let ids = tasks.iter().map(|t| t.id).collect();
    (TaskStore::with_tasks(tasks), ids)
}

#[test]
fn get_returns_every_task_from_the_snapshot() {
    let (store, _) = seeded_store();
    for snapshot_task in store.tasks() {
        let found = store.get(snapshot_task.id).expect("task should be present");
        assert_eq!(*found, snapshot_task);
    }
}

#[test]
fn get_unknown_id_is_none() {
    let (store, _) = seeded_store();
    assert!(store.get(Uuid::new_v4()).is_none());
}

#[test]
fn set_status_changes_only_the_status_field() {
    let (mut store, ids) = seeded_store();
    let before = store.get(ids[0]).unwrap().clone();

    assert!(store.set_status(ids[0], TaskStatus::InProgress));

    let after = store.get(ids[0]).unwrap();
    assert_eq!(after.status, TaskStatus::InProgress);
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.due_time, before.due_time);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.assigned_to, before.assigned_to);
}

#[test]
fn set_status_is_immediately_visible() {
    let (mut store, ids) = seeded_store();
    store.set_status(ids[2], TaskStatus::NotStarted);
    assert_eq!(store.get(ids[2]).unwrap().status, TaskStatus::NotStarted);
    assert_eq!(store.count(TaskStatus::Complete), 0);
}

#[test]
fn set_status_on_absent_id_changes_nothing_and_stays_silent() {
    let (mut store, _) = seeded_store();
    let mut rx = store.subscribe();
    let before = store.tasks();
    let counts_before: Vec<usize> = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Complete,
        TaskStatus::Cancelled,
    ]
    .iter()
    .map(|s| store.count(*s))
    .collect();

    assert!(!store.set_status(Uuid::new_v4(), TaskStatus::Complete));

    assert_eq!(store.tasks(), before);
    let counts_after: Vec<usize> = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Complete,
        TaskStatus::Cancelled,
    ]
    .iter()
    .map(|s| store.count(*s))
    .collect();
    assert_eq!(counts_after, counts_before);

    // No notification was emitted for the no-op.
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn delete_removes_permanently_and_conserves_counts() {
    let (mut store, ids) = seeded_store();
    let total_before: usize = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Complete,
        TaskStatus::Cancelled,
    ]
    .iter()
    .map(|s| store.count(*s))
    .sum();

    assert!(store.delete(ids[1]));
    assert!(store.get(ids[1]).is_none());

    let total_after: usize = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Complete,
        TaskStatus::Cancelled,
    ]
    .iter()
    .map(|s| store.count(*s))
    .sum();
    assert_eq!(total_after, total_before - 1);

    // Deleting again is a no-op.
    assert!(!store.delete(ids[1]));
    assert_eq!(store.len(), 2);
}

#[test]
fn subscribers_see_each_change_once_in_order() {
    let (mut store, ids) = seeded_store();
    let mut rx = store.subscribe();

    store.set_status(ids[0], TaskStatus::InProgress);
    store.delete(ids[2]);

    // First emission: full collection after the status change.
    let first = rx.try_recv().unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(
        first.iter().find(|t| t.id == ids[0]).unwrap().status,
        TaskStatus::InProgress
    );

    // Second emission: full collection after the deletion.
    let second = rx.try_recv().unwrap();
    assert_eq!(second.len(), 2);
    assert!(second.iter().all(|t| t.id != ids[2]));

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn subscribers_get_no_historical_replay() {
    let (mut store, ids) = seeded_store();
    store.set_status(ids[0], TaskStatus::Complete);

    // Subscribing after a change sees nothing until the next one.
    let mut rx = store.subscribe();
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    store.set_status(ids[0], TaskStatus::NotStarted);
    assert!(rx.try_recv().is_ok());
}

#[test]
fn each_subscriber_sees_every_emission() {
    let (mut store, ids) = seeded_store();
    let mut rx_a = store.subscribe();
    let mut rx_b = store.subscribe();

    store.set_status(ids[0], TaskStatus::Cancelled);

    assert_eq!(rx_a.try_recv().unwrap().len(), 3);
    assert_eq!(rx_b.try_recv().unwrap().len(), 3);
}

#[test]
fn snapshot_does_not_update_in_place() {
    let (mut store, ids) = seeded_store();
    let snapshot = store.tasks();
    store.set_status(ids[0], TaskStatus::Cancelled);
    assert_eq!(
        snapshot.iter().find(|t| t.id == ids[0]).unwrap().status,
        TaskStatus::NotStarted
    );
}

#[test]
fn reopening_a_completed_task_is_allowed() {
    // Status is not a governed state machine; the detail screen allows
    // explicit reopening.
    let (mut store, ids) = seeded_store();
    assert_eq!(store.get(ids[2]).unwrap().status, TaskStatus::Complete);
    assert!(store.set_status(ids[2], TaskStatus::NotStarted));
    assert_eq!(store.get(ids[2]).unwrap().status, TaskStatus::NotStarted);
}

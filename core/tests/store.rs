//! Collection semantics of a freshly seeded `TodoStore`.
//!
//! Each test starts from the seed so the expected ids and items are fixed.

use pretty_assertions::assert_eq;
use todo_core::{seed_todos, Todo, TodoError, TodoStore};

fn ids(store: &TodoStore) -> Vec<&str> {
    store.list().iter().map(|t| t.id.as_str()).collect()
}

fn not_found(id: &str) -> TodoError {
    TodoError::NotFound(id.to_string())
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

#[test]
fn fresh_store_lists_the_seed_in_order() {
    let store = TodoStore::seeded();
    assert_eq!(
        store.list(),
        &[
            Todo::new("1", "Learn Go"),
            Todo::new("2", "Build a REST API"),
            Todo::new("3", "Become a Fullstack Developer"),
        ]
    );
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_appends_to_the_end() {
    let mut store = TodoStore::seeded();
    let new = Todo::new("4", "X");

    let created = store.create(new.clone());

    assert_eq!(created, new);
    assert_eq!(store.len(), 4);
    assert_eq!(&store.list()[..3], seed_todos().as_slice());
    assert_eq!(store.list()[3], new);
}

#[test]
fn create_keeps_completed_as_received() {
    let mut store = TodoStore::seeded();
    let created = store.create(Todo {
        id: "4".to_string(),
        item: "Already done".to_string(),
        completed: true,
    });
    assert!(created.completed);
    assert!(store.list()[3].completed);
}

#[test]
fn create_does_not_check_for_duplicate_ids() {
    let mut store = TodoStore::seeded();
    store.create(Todo::new("1", "Duplicate"));

    assert_eq!(ids(&store), ["1", "2", "3", "1"]);
    assert_eq!(store.get("1").unwrap().item, "Learn Go");
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_returns_matching_todo() {
    let store = TodoStore::seeded();
    assert_eq!(store.get("2"), Ok(&Todo::new("2", "Build a REST API")));
}

#[test]
fn get_unknown_id_is_not_found() {
    let store = TodoStore::seeded();
    assert_eq!(store.get("999"), Err(not_found("999")));
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_twice_alternates_completed() {
    let mut store = TodoStore::seeded();

    assert!(store.toggle_completed("1").unwrap().completed);
    assert!(store.get("1").unwrap().completed);

    assert!(!store.toggle_completed("1").unwrap().completed);
    assert!(!store.get("1").unwrap().completed);
}

#[test]
fn toggle_unknown_id_leaves_store_unchanged() {
    let mut store = TodoStore::seeded();
    assert_eq!(store.toggle_completed("999"), Err(not_found("999")));
    assert_eq!(store, TodoStore::seeded());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_removes_exactly_one() {
    let mut store = TodoStore::seeded();

    let removed = store.delete("2").unwrap();

    assert_eq!(removed.id, "2");
    assert_eq!(ids(&store), ["1", "3"]);
}

#[test]
fn repeated_delete_is_not_found() {
    let mut store = TodoStore::seeded();
    store.delete("2").unwrap();
    let before = store.clone();

    assert_eq!(store.delete("2"), Err(not_found("2")));
    assert_eq!(store, before);
}

#[test]
fn delete_everything_leaves_empty_store() {
    let mut store = TodoStore::seeded();
    for id in ["3", "1", "2"] {
        store.delete(id).unwrap();
    }
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

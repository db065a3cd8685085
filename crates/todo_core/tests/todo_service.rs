use std::collections::HashSet;
use std::fs;
use todo_core::{
    JsonTodoStore, Listing, MemoryTodoStore, Priority, StoreError, Todo, TodoService,
    TodoServiceError, TodoStats, TodoStore,
};

fn fixture(id: u64, title: &str, completed: bool) -> Todo {
    let mut todo = Todo::with_created_at(id, title, Priority::Medium, "2024-03-01 08:15:00");
    todo.completed = completed;
    todo
}

fn titles(listing: &Listing<'_>) -> Vec<String> {
    listing.items().iter().map(|todo| todo.title.clone()).collect()
}

#[test]
fn open_loads_existing_collection() {
    let store = MemoryTodoStore::with_todos(vec![fixture(1, "a", false), fixture(2, "b", true)]);
    let service = TodoService::open(&store).unwrap();

    assert_eq!(service.todos().len(), 2);
    assert_eq!(service.get(2).map(|todo| todo.completed), Some(true));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn open_propagates_malformed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");
    fs::write(&path, "[oops").unwrap();

    let err = TodoService::open(JsonTodoStore::new(path)).err().unwrap();
    assert!(err.is_parse_error());
}

#[test]
fn add_preserves_insertion_order_and_persists_each_time() {
    let store = MemoryTodoStore::new();
    let mut service = TodoService::open(&store).unwrap();

    for title in ["first", "second", "third"] {
        service.add(title, "low").unwrap();
    }

    assert_eq!(titles(&service.list()), vec!["first", "second", "third"]);
    assert_eq!(store.save_count(), 3);
    assert_eq!(store.snapshot(), service.todos());
}

#[test]
fn add_normalizes_unknown_priority_to_medium() {
    let mut service = TodoService::open(MemoryTodoStore::new()).unwrap();

    let todo = service.add("Call mom", "whenever").unwrap();
    assert_eq!(todo.priority, Priority::Medium);
    let todo = service.add("Pay rent", "HIGH").unwrap();
    assert_eq!(todo.priority, Priority::High);
}

#[test]
fn add_accepts_empty_title() {
    let mut service = TodoService::open(MemoryTodoStore::new()).unwrap();
    let todo = service.add("", "medium").unwrap();
    assert_eq!(todo.title, "");
    assert_eq!(todo.id, 1);
}

#[test]
fn add_roundtrips_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");

    let added = {
        let mut service = TodoService::open(JsonTodoStore::new(&path)).unwrap();
        service.add("Write spec", "high").unwrap()
    };

    let reloaded = TodoService::open(JsonTodoStore::new(&path)).unwrap();
    assert_eq!(reloaded.todos(), &[added.clone()]);
    assert_eq!(added.id, 1);
    assert!(!added.completed);
    assert_eq!(added.priority, Priority::High);
    added.validate().unwrap();
}

#[test]
fn list_reports_empty_collection() {
    let service = TodoService::open(MemoryTodoStore::new()).unwrap();
    assert_eq!(service.list(), Listing::Empty);
    assert!(service.list().is_empty());
}

#[test]
fn complete_is_idempotent_but_persists_each_call() {
    let store = MemoryTodoStore::new();
    let mut service = TodoService::open(&store).unwrap();
    service.add("a", "medium").unwrap();

    assert!(service.complete(1).unwrap().completed);
    assert!(service.complete(1).unwrap().completed);

    assert!(service.get(1).unwrap().completed);
    assert_eq!(store.save_count(), 3);
    assert!(store.snapshot()[0].completed);
}

#[test]
fn complete_and_delete_missing_id_change_nothing() {
    let store = MemoryTodoStore::new();
    let mut service = TodoService::open(&store).unwrap();
    service.add("a", "medium").unwrap();
    let before = store.snapshot();

    assert!(matches!(
        service.complete(42),
        Err(TodoServiceError::NotFound(42))
    ));
    assert!(matches!(
        service.delete(42),
        Err(TodoServiceError::NotFound(42))
    ));

    assert_eq!(store.save_count(), 1);
    assert_eq!(store.snapshot(), before);
    assert_eq!(service.todos(), before.as_slice());
}

#[test]
fn not_found_on_json_store_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");
    let mut service = TodoService::open(JsonTodoStore::new(&path)).unwrap();
    service.add("a", "low").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    service.complete(9).unwrap_err();
    service.delete(9).unwrap_err();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn delete_removes_first_match_and_returns_it() {
    let store = MemoryTodoStore::new();
    let mut service = TodoService::open(&store).unwrap();
    service.add("a", "medium").unwrap();
    service.add("b", "medium").unwrap();

    let removed = service.delete(1).unwrap();
    assert_eq!(removed.title, "a");
    assert_eq!(titles(&service.list()), vec!["b"]);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn search_is_case_insensitive_substring_on_title() {
    let store = MemoryTodoStore::with_todos(vec![
        fixture(1, "Buy milk", false),
        fixture(2, "Clean house", false),
    ]);
    let service = TodoService::open(&store).unwrap();

    assert_eq!(titles(&service.search("MILK")), vec!["Buy milk"]);
    assert_eq!(titles(&service.search("u")), vec!["Buy milk", "Clean house"]);
    assert_eq!(service.search("zzz"), Listing::Empty);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn stats_counts_completed_and_pending() {
    let service = TodoService::open(MemoryTodoStore::with_todos(vec![
        fixture(1, "a", true),
        fixture(2, "b", false),
        fixture(3, "c", false),
    ]))
    .unwrap();

    assert_eq!(
        service.stats(),
        TodoStats {
            total: 3,
            completed: 1,
            pending: 2
        }
    );
}

#[test]
fn add_complete_delete_scenario() {
    let mut service = TodoService::open(MemoryTodoStore::new()).unwrap();

    service.add("Write spec", "high").unwrap();
    let listing = service.list();
    let only = listing.items()[0];
    assert_eq!(listing.len(), 1);
    assert_eq!((only.id, only.priority, only.completed), (1, Priority::High, false));

    service.complete(1).unwrap();
    assert!(service.list().items()[0].completed);

    service.delete(1).unwrap();
    assert!(service.list().is_empty());
}

#[test]
fn id_after_deletion_can_repeat_a_live_id() {
    let mut service = TodoService::open(MemoryTodoStore::new()).unwrap();
    assert_eq!(service.add("A", "medium").unwrap().id, 1);
    assert_eq!(service.add("B", "medium").unwrap().id, 2);
    service.delete(1).unwrap();

    let c = service.add("C", "medium").unwrap();
    assert_eq!(c.id, 2);

    let ids: Vec<u64> = service.todos().iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![2, 2]);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 1);

    // Lookups hit the first match in collection order.
    assert_eq!(service.complete(2).unwrap().title, "B");
    assert!(!service.todos()[1].completed);
}

#[test]
fn failed_save_rolls_back_every_mutation() {
    let store = MemoryTodoStore::new();
    let mut service = TodoService::open(&store).unwrap();
    service.add("keep", "low").unwrap();
    store.set_fail_saves(true);

    let err = service.add("lost", "low").unwrap_err();
    assert!(matches!(err, TodoServiceError::Store(StoreError::Io { .. })));
    assert_eq!(service.todos().len(), 1);

    service.complete(1).unwrap_err();
    assert!(!service.get(1).unwrap().completed);

    service.delete(1).unwrap_err();
    assert_eq!(titles(&service.list()), vec!["keep"]);

    assert_eq!(store.snapshot(), service.todos());
}

#[test]
fn from_parts_does_not_touch_store() {
    let store = MemoryTodoStore::with_todos(vec![fixture(1, "persisted", false)]);
    let service = TodoService::from_parts(&store, vec![fixture(1, "in memory", false)]);

    assert_eq!(service.todos()[0].title, "in memory");
    assert_eq!(service.store().load().unwrap()[0].title, "persisted");
}

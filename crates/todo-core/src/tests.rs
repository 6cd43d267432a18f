//! Scenario Tests
//!
//! End-to-end flows through the controller against in-memory storage.

#[cfg(test)]
mod tests {
    use crate::controller::{EditMode, UiState, ViewController};
    use crate::domain::{Filter, TodoError, TodoId};
    use crate::id::UlidGenerator;
    use crate::render::RenderedList;
    use crate::repository::{KeyValueStorage, MemoryStorage, TodoStore};
    use crate::TodoConfig;

    fn setup_controller(storage: &MemoryStorage) -> ViewController<&MemoryStorage, UlidGenerator> {
        ViewController::new(TodoStore::new(storage, UlidGenerator, &TodoConfig::default()))
    }

    fn texts(ctl: &ViewController<&MemoryStorage, UlidGenerator>) -> Vec<String> {
        ctl.store().list().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_add_single_todo() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);

        ctl.on_submit(UiState::default(), "Buy milk").unwrap();

        let todos = ctl.store().list();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_newest_first() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);

        let state = ctl.on_submit(UiState::default(), "A").unwrap();
        ctl.on_submit(state, "B").unwrap();

        assert_eq!(texts(&ctl), vec!["B", "A"]);
    }

    #[test]
    fn test_completed_hidden_by_pending_filter() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);
        let x = ctl.store().add("A").unwrap().id;

        let state = ctl.on_complete(UiState::default(), &x);
        let state = ctl.on_filter_change(state, Filter::Pending);

        assert_eq!(
            ctl.render(&state),
            RenderedList::Empty("No pending todos. Everything’s under control.")
        );
    }

    #[test]
    fn test_blank_update_stays_in_edit_mode() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);
        let x = ctl.store().add("A").unwrap().id;
        let state = ctl.on_start_edit(UiState::default(), &x);

        let result = ctl.on_submit(state.clone(), "");

        assert_eq!(result, Err(TodoError::EmptyInput));
        assert_eq!(state.edit_mode, EditMode::Editing(x.clone()));
        assert_eq!(ctl.store().get(&x).unwrap().text, "A");
    }

    #[test]
    fn test_update_returns_to_idle() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);
        let x = ctl.store().add("A").unwrap().id;
        let state = ctl.on_start_edit(UiState::default(), &x);

        let state = ctl.on_submit(state, "A2").unwrap();

        let todos = ctl.store().list();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, x);
        assert_eq!(todos[0].text, "A2");
        assert!(!todos[0].completed);
        assert_eq!(state.edit_mode, EditMode::Idle);
        assert_eq!(state.primary_label(), "Add Todo");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);
        ctl.store().add("A").unwrap();
        ctl.store().add("B").unwrap();
        let before = ctl.store().list();
        let ghost = TodoId::new("ghost");

        ctl.store().remove(&ghost);
        ctl.store().update(&ghost, "boo").unwrap();
        ctl.store().set_completed(&ghost);

        assert_eq!(ctl.store().list(), before);
    }

    #[test]
    fn test_complete_twice() {
        let storage = MemoryStorage::new();
        let ctl = setup_controller(&storage);
        let x = ctl.store().add("A").unwrap().id;

        ctl.store().set_completed(&x);
        ctl.store().set_completed(&x);

        assert!(ctl.store().get(&x).unwrap().completed);
    }

    #[test]
    fn test_order_survives_reload() {
        let storage = MemoryStorage::new();
        {
            let ctl = setup_controller(&storage);
            for text in ["one", "two", "three"] {
                ctl.store().add(text).unwrap();
            }
        }

        // A new controller over the same slot, like a page reload
        let ctl = setup_controller(&storage);
        assert_eq!(texts(&ctl), vec!["three", "two", "one"]);
    }

    #[test]
    fn test_reads_collection_from_older_page() {
        let raw = r#"[
            {"id":"1700000000123k3j9x0abc","todoText":"Water plants","completed":false},
            {"id":"1699999999000zz81mq2pd","todoText":"Pay rent","completed":true}
        ]"#;
        let storage = MemoryStorage::with_slot("todos", raw);
        let ctl = setup_controller(&storage);

        let state = ctl.on_filter_change(UiState::default(), Filter::Completed);
        let rendered = ctl.render(&state);

        assert_eq!(rendered.rows().len(), 1);
        assert_eq!(rendered.rows()[0].text, "Pay rent");
        assert_eq!(rendered.rows()[0].id.as_str(), "1699999999000zz81mq2pd");
    }

    #[test]
    fn test_corrupt_slot_recovers_on_next_write() {
        let storage = MemoryStorage::with_slot("todos", "{oops");
        let ctl = setup_controller(&storage);

        assert_eq!(ctl.render(&UiState::default()), RenderedList::Empty(Filter::All.empty_message()));

        ctl.on_submit(UiState::default(), "fresh start").unwrap();
        assert_eq!(texts(&ctl), vec!["fresh start"]);
        assert!(storage.read("todos").unwrap().starts_with('['));
    }
}

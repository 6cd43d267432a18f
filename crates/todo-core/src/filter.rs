//! Filter Logic

use crate::domain::{Filter, TodoItem};

/// Ordered subsequence of `todos` that passes `filter`
pub fn filter_todos(todos: &[TodoItem], filter: Filter) -> Vec<TodoItem> {
    todos
        .iter()
        .filter(|todo| filter.accepts(todo.completed))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;

    fn make_todo(id: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            text: format!("Todo {}", id),
            completed,
        }
    }

    fn sample() -> Vec<TodoItem> {
        vec![
            make_todo("5", false),
            make_todo("4", true),
            make_todo("3", false),
            make_todo("2", true),
            make_todo("1", false),
        ]
    }

    fn ids(todos: &[TodoItem]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_all_passes_everything() {
        let todos = sample();
        assert_eq!(filter_todos(&todos, Filter::All), todos);
    }

    #[test]
    fn test_pending_and_completed_partition() {
        let todos = sample();
        let pending = filter_todos(&todos, Filter::Pending);
        let completed = filter_todos(&todos, Filter::Completed);

        assert_eq!(ids(&pending), vec!["5", "3", "1"]);
        assert_eq!(ids(&completed), vec!["4", "2"]);
        assert_eq!(pending.len() + completed.len(), todos.len());
        assert!(pending.iter().all(|p| !completed.contains(p)));
    }

    #[test]
    fn test_empty_collection() {
        for filter in Filter::ALL {
            assert!(filter_todos(&[], filter).is_empty());
        }
    }
}

//! Pure derivations over the todo list.
//!
//! Nothing here is cached: the store calls these on every read so the visible
//! list can never go stale relative to the list and the filter.

use crate::types::{Filter, TodoCounts, TodoItem};

/// The subset of `todos` visible under `filter`, in original order.
pub fn derive(todos: &[TodoItem], filter: Filter) -> Vec<TodoItem> {
    todos
        .iter()
        .filter(|todo| matches(todo, filter))
        .cloned()
        .collect()
}

pub fn matches(todo: &TodoItem, filter: Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Active => !todo.is_completed,
        Filter::Completed => todo.is_completed,
    }
}

pub fn counts(todos: &[TodoItem]) -> TodoCounts {
    let completed = todos.iter().filter(|todo| todo.is_completed).count();
    TodoCounts {
        total: todos.len(),
        active: todos.len() - completed,
        completed,
    }
}

/// Case-insensitive substring match on the text. An empty term matches
/// everything.
pub fn search(todos: &[TodoItem], term: &str) -> Vec<TodoItem> {
    if term.is_empty() {
        return todos.to_vec();
    }
    let needle = term.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Footer text for the number of active items.
pub fn items_left_label(active: usize) -> String {
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{active} items left")
    }
}

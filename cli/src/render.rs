//! Plain-text rendering of store state.

use todo_core::filter::items_left_label;
use todo_core::{Filter, TodoCounts, TodoItem};

pub fn render_line(todo: &TodoItem) -> String {
    let mark = if todo.is_completed { 'x' } else { ' ' };
    format!("[{mark}] {}  {}", todo.id, todo.text)
}

/// The visible items followed by the footer. The footer is omitted when the
/// list is empty.
pub fn render(visible: &[TodoItem], counts: TodoCounts, filter: Filter) -> String {
    let mut out = String::new();
    for todo in visible {
        out.push_str(&render_line(todo));
        out.push('\n');
    }
    if counts.total > 0 {
        out.push_str(&format!("{} ({filter})\n", items_left_label(counts.active)));
    }
    out
}

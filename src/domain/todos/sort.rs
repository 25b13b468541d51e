//! Display ordering: incomplete entries first, original indices preserved.
//!
//! Storage order never changes; these helpers only reorder borrowed views.
//! Every yielded entry carries its original storage index so that action
//! links keep targeting the right position after the visual reshuffle.

use super::list::{Todo, TodoList};

/// Partition todos for display: incomplete first, then complete, keeping
/// the stored order within each group.
pub fn sort_todos(todos: &[Todo]) -> Vec<(usize, &Todo)> {
    let (incomplete, complete): (Vec<_>, Vec<_>) = todos
        .iter()
        .enumerate()
        .partition(|(_, todo)| !todo.completed);
    incomplete.into_iter().chain(complete).collect()
}

/// The same partition rule applied to whole lists using completeness.
pub fn sort_lists(lists: &[TodoList]) -> Vec<(usize, &TodoList)> {
    let (incomplete, complete): (Vec<_>, Vec<_>) = lists
        .iter()
        .enumerate()
        .partition(|(_, list)| !list.is_complete());
    incomplete.into_iter().chain(complete).collect()
}

//! Todo lists: aggregates, validation, and display ordering.

mod board;
mod errors;
mod list;
mod sort;

pub use board::ListBoard;
pub use errors::TodoError;
pub use list::{Todo, TodoList, MAX_NAME_LENGTH};
pub use sort::{sort_lists, sort_todos};

//! Todo and list entities.

use serde::{Deserialize, Serialize};

use super::errors::TodoError;

/// Maximum length for list and todo names, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Display name, 1-100 characters after trimming.
    pub name: String,

    /// Whether the item has been checked off.
    pub completed: bool,
}

impl Todo {
    /// Create an incomplete todo, trimming and validating the name.
    ///
    /// # Errors
    ///
    /// - `Validation` if the trimmed name is empty or over 100 characters
    pub fn new(name: &str) -> Result<Self, TodoError> {
        let name = validate_name(name)?;
        Ok(Self {
            name,
            completed: false,
        })
    }

    /// Human-readable completion state, as quoted in flash messages.
    pub fn state_label(&self) -> &'static str {
        if self.completed {
            "completed"
        } else {
            "not yet completed"
        }
    }
}

/// A named, ordered collection of todos.
///
/// # Invariants
///
/// - `name` is 1-100 characters after trimming
/// - uniqueness of `name` within a session is enforced by [`super::ListBoard`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Build an empty list around an already-validated name.
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            todos: Vec::new(),
        }
    }

    /// Total number of todos.
    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    /// Todos still waiting to be completed.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// A list is complete once it has at least one todo and none remain.
    /// Empty lists are never complete.
    pub fn is_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.completed)
    }

    /// Append a todo. Duplicate names are allowed within a list.
    ///
    /// # Errors
    ///
    /// - `Validation` if the trimmed name is empty or over 100 characters
    pub fn add_todo(&mut self, name: &str) -> Result<(), TodoError> {
        let todo = Todo::new(name)?;
        self.todos.push(todo);
        Ok(())
    }

    /// Remove the todo at `index`, returning it. Later todos shift down.
    ///
    /// # Errors
    ///
    /// - `TodoNotFound` if `index` is out of bounds
    pub fn remove_todo(&mut self, index: usize) -> Result<Todo, TodoError> {
        if index >= self.todos.len() {
            return Err(TodoError::TodoNotFound);
        }
        Ok(self.todos.remove(index))
    }

    /// Set the completion flag of the todo at `index`, returning a
    /// reference for reporting.
    ///
    /// # Errors
    ///
    /// - `TodoNotFound` if `index` is out of bounds
    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<&Todo, TodoError> {
        let todo = self
            .todos
            .get_mut(index)
            .ok_or(TodoError::TodoNotFound)?;
        todo.completed = completed;
        Ok(todo)
    }

    /// Mark every todo complete, whatever its current state.
    pub fn complete_all(&mut self) {
        for todo in &mut self.todos {
            todo.completed = true;
        }
    }
}

/// Trim and length-check a submitted name.
pub(crate) fn validate_name(raw: &str) -> Result<String, TodoError> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(TodoError::length());
    }
    Ok(name.to_string())
}

//! The ordered collection of lists owned by one session.

use serde::{Deserialize, Serialize};

use super::errors::TodoError;
use super::list::{validate_name, TodoList};

/// All lists belonging to one session, in creation order.
///
/// Lists and todos are addressed by position, and positions shift on
/// deletion, so every id coming off the wire is re-parsed and
/// bounds-checked here before any lookup or mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListBoard {
    lists: Vec<TodoList>,
}

impl ListBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists in storage order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Parse a positional id from its wire form.
    ///
    /// Only the canonical decimal spelling of an index is accepted: the
    /// parsed value must render back to the exact input, which rejects
    /// signs, whitespace, and leading zeros.
    ///
    /// # Errors
    ///
    /// - `MalformedId` if `raw` is not a canonical non-negative integer
    pub fn parse_index(raw: &str) -> Result<usize, TodoError> {
        let index: usize = raw.parse().map_err(|_| TodoError::MalformedId)?;
        if index.to_string() != raw {
            return Err(TodoError::MalformedId);
        }
        Ok(index)
    }

    /// Resolve a wire id to an in-bounds list index, distinguishing
    /// malformed ids from out-of-bounds ones.
    ///
    /// # Errors
    ///
    /// - `MalformedId` if `raw` is not a canonical non-negative integer
    /// - `ListNotFound` if the index is past the end of the sequence
    pub fn resolve(&self, raw: &str) -> Result<usize, TodoError> {
        let index = Self::parse_index(raw)?;
        if index >= self.lists.len() {
            return Err(TodoError::ListNotFound);
        }
        Ok(index)
    }

    /// Mutably borrow the list at `index`.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if `index` is out of bounds
    pub fn get_mut(&mut self, index: usize) -> Result<&mut TodoList, TodoError> {
        self.lists.get_mut(index).ok_or(TodoError::ListNotFound)
    }

    /// Create a list with a trimmed, unique name.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name fails the length or uniqueness check
    pub fn create(&mut self, raw_name: &str) -> Result<(), TodoError> {
        let name = self.validate_unique_name(raw_name)?;
        self.lists.push(TodoList::new(name));
        Ok(())
    }

    /// Rename the list at `index`.
    ///
    /// Uniqueness is checked against every list, including the one being
    /// renamed, so renaming a list to its current name fails with the
    /// duplicate error.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if `index` is out of bounds
    /// - `Validation` if the name fails the length or uniqueness check
    pub fn rename(&mut self, index: usize, raw_name: &str) -> Result<(), TodoError> {
        if index >= self.lists.len() {
            return Err(TodoError::ListNotFound);
        }
        let name = self.validate_unique_name(raw_name)?;
        self.lists[index].name = name;
        Ok(())
    }

    /// Delete the list at `index`, returning its name for the confirmation
    /// message. Later lists shift down by one.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if `index` is out of bounds
    pub fn delete(&mut self, index: usize) -> Result<String, TodoError> {
        if index >= self.lists.len() {
            return Err(TodoError::ListNotFound);
        }
        Ok(self.lists.remove(index).name)
    }

    fn validate_unique_name(&self, raw: &str) -> Result<String, TodoError> {
        let name = validate_name(raw)?;
        if self.lists.iter().any(|list| list.name == name) {
            return Err(TodoError::duplicate());
        }
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todos::MAX_NAME_LENGTH;
    use proptest::prelude::*;

    fn board_with(names: &[&str]) -> ListBoard {
        let mut board = ListBoard::new();
        for name in names {
            board.create(name).unwrap();
        }
        board
    }

    #[test]
    fn test_create_appends_empty_list() {
        let board = board_with(&["Groceries"]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.lists()[0].name, "Groceries");
        assert!(board.lists()[0].todos.is_empty());
    }

    #[test]
    fn test_create_length_boundaries() {
        let mut board = ListBoard::new();
        assert!(board.create("a").is_ok());
        assert!(board.create(&"b".repeat(MAX_NAME_LENGTH)).is_ok());
        assert_eq!(
            board.create(&"c".repeat(MAX_NAME_LENGTH + 1)),
            Err(TodoError::length())
        );
        assert_eq!(board.create(""), Err(TodoError::length()));
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let mut board = board_with(&["Groceries"]);
        assert_eq!(board.create("Groceries"), Err(TodoError::duplicate()));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_create_trims_before_uniqueness_check() {
        let mut board = board_with(&["Groceries"]);
        assert_eq!(board.create("  Groceries  "), Err(TodoError::duplicate()));
    }

    #[test]
    fn test_rename_replaces_name() {
        let mut board = board_with(&["Groceries"]);
        board.rename(0, "Errands").unwrap();
        assert_eq!(board.lists()[0].name, "Errands");
    }

    #[test]
    fn test_rename_to_own_name_fails_uniqueness() {
        let mut board = board_with(&["Groceries"]);
        assert_eq!(board.rename(0, "Groceries"), Err(TodoError::duplicate()));
    }

    #[test]
    fn test_rename_out_of_bounds() {
        let mut board = board_with(&["Groceries"]);
        assert_eq!(board.rename(1, "Errands"), Err(TodoError::ListNotFound));
    }

    #[test]
    fn test_delete_returns_name_and_shifts_indices() {
        let mut board = board_with(&["A", "B", "C"]);
        let name = board.delete(1).unwrap();
        assert_eq!(name, "B");
        assert_eq!(board.lists()[0].name, "A");
        assert_eq!(board.lists()[1].name, "C");
        assert_eq!(board.resolve("1").unwrap(), 1);
        assert_eq!(board.resolve("2"), Err(TodoError::ListNotFound));
    }

    #[test]
    fn test_parse_index_accepts_canonical_integers() {
        assert_eq!(ListBoard::parse_index("0").unwrap(), 0);
        assert_eq!(ListBoard::parse_index("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_index_rejects_non_canonical_forms() {
        for raw in ["abc", "", "-1", "+1", " 1", "1 ", "007", "1.0"] {
            assert_eq!(
                ListBoard::parse_index(raw),
                Err(TodoError::MalformedId),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_distinguishes_malformed_from_missing() {
        let board = board_with(&["Groceries"]);
        assert_eq!(board.resolve("0").unwrap(), 0);
        assert_eq!(board.resolve("1"), Err(TodoError::ListNotFound));
        assert_eq!(board.resolve("one"), Err(TodoError::MalformedId));
    }

    proptest! {
        #[test]
        fn prop_name_length_decides_validity(len in 0usize..=150) {
            let mut board = ListBoard::new();
            let name = "x".repeat(len);
            let result = board.create(&name);
            if (1..=MAX_NAME_LENGTH).contains(&len) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(TodoError::length()));
            }
        }

        #[test]
        fn prop_parse_index_round_trips(index in 0usize..10_000) {
            prop_assert_eq!(
                ListBoard::parse_index(&index.to_string()).unwrap(),
                index
            );
        }
    }
}

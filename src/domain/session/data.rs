//! The session snapshot: lists plus one-shot flash fields.

use serde::{Deserialize, Serialize};

use crate::domain::todos::ListBoard;

/// Everything the server remembers for one browser.
///
/// `error` and `success` are one-shot flash fields: set by the handler
/// that produced them, taken (and cleared) by the next rendered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// All lists for this session, in creation order.
    #[serde(default)]
    pub lists: ListBoard,

    /// Pending error flash, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Pending success flash, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

/// Flash messages pulled out of a session for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Flash {
    /// A flash carrying only an error, for same-request form re-renders.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            success: None,
        }
    }
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success flash for the next rendered view.
    pub fn flash_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    /// Queue an error flash for the next rendered view.
    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Consume both flash fields, leaving them clear for later requests.
    pub fn take_flash(&mut self) -> Flash {
        Flash {
            error: self.error.take(),
            success: self.success.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_is_one_shot() {
        let mut session = SessionData::new();
        session.flash_success("List created successfully.");
        session.flash_error("Name already exists.");

        let flash = session.take_flash();
        assert_eq!(flash.success.as_deref(), Some("List created successfully."));
        assert_eq!(flash.error.as_deref(), Some("Name already exists."));

        let flash = session.take_flash();
        assert_eq!(flash, Flash::default());
    }

    #[test]
    fn test_snapshot_serializes_without_empty_flash() {
        let session = SessionData::new();
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("error").is_none());
        assert!(json.get("success").is_none());
    }
}

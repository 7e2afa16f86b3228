//! # Actions
//!
//! Defines the actions an admin can be granted on an action-typed role.
//! Boolean-typed roles carry no actions; see [`crate::catalog`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action: {0}")]
pub struct ParseActionError(pub String);

/// Actions that can be granted on an action-typed role.
///
/// The catalog order is `add, edit, view, delete`, which is also the order
/// an admin panel presents the checkboxes in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create new records.
    Add,

    /// Modify existing records.
    Edit,

    /// See records.
    View,

    /// Remove records.
    Delete,
}

impl Action {
    /// Get the string representation of the action.
    ///
    /// This is the exact token stored in a persisted role string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Edit => "edit",
            Action::View => "view",
            Action::Delete => "delete",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Returns
    ///
    /// `Some(Action)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use directory_roles::actions::Action;
    ///
    /// assert_eq!(Action::parse("add"), Some(Action::Add));
    /// assert_eq!(Action::parse(" View "), Some(Action::View));
    /// assert_eq!(Action::parse("access"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Some(Action::Add),
            "edit" => Some(Action::Edit),
            "view" => Some(Action::View),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }

    /// Get all actions, in catalog order.
    pub fn all() -> &'static [Action] {
        &[Action::Add, Action::Edit, Action::View, Action::Delete]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s).ok_or_else(|| ParseActionError(s.to_string()))
    }
}

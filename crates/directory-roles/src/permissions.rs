//! # Permissions
//!
//! The structured, in-memory form of a role grant. Everything past the
//! decode boundary works on [`RoleAssignment`]; the persisted string form
//! lives only in [`crate::codec`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::actions::Action;
use crate::codec;

/// Marker stored for a boolean role that has been granted.
pub const ACCESS: &str = "access";

/// Ordered permission entries of one role.
///
/// Order is whatever the mutation sequence produced; it is never sorted.
/// [`Permissions::insert`] never creates duplicates. Decoded data is kept
/// as found, so a persisted string that already repeats an entry keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(Vec<String>);

impl Permissions {
    /// Create an empty permission list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The granted marker of a boolean role.
    pub fn access() -> Self {
        Self(vec![ACCESS.to_string()])
    }

    /// Check whether `permission` is present.
    pub fn contains(&self, permission: &str) -> bool {
        self.0.iter().any(|p| p == permission)
    }

    /// Check whether an action is granted.
    pub fn grants(&self, action: Action) -> bool {
        self.contains(action.as_str())
    }

    /// Append a permission unless it is already present.
    ///
    /// # Returns
    ///
    /// `true` if the permission was added
    pub fn insert(&mut self, permission: impl Into<String>) -> bool {
        let permission = permission.into();
        if self.contains(&permission) {
            return false;
        }
        self.0.push(permission);
        true
    }

    /// Remove the first occurrence of a permission, keeping the order of
    /// the rest.
    ///
    /// # Returns
    ///
    /// `true` if the permission was present
    pub fn remove(&mut self, permission: &str) -> bool {
        match self.0.iter().position(|p| p == permission) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Any entry at all counts as "on" for a boolean role.
    pub fn is_granted(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Permissions {
    /// Collects entries as given, without de-duplicating.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Permissions {
    fn from(permissions: Vec<String>) -> Self {
        Self(permissions)
    }
}

/// One role granted to an admin, with its permissions.
///
/// # Example
///
/// ```
/// use directory_roles::RoleAssignment;
///
/// let role: RoleAssignment = "Category -- add, view".parse().unwrap();
/// assert_eq!(role.role_name, "Category");
/// assert!(role.permissions.contains("view"));
/// assert_eq!(role.to_string(), "Category -- add, view");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// Role name; never empty once decoded.
    pub role_name: String,
    /// Permissions in mutation order.
    pub permissions: Permissions,
}

impl RoleAssignment {
    /// Create a role with no permissions.
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            permissions: Permissions::new(),
        }
    }

    /// Create a role with the given permissions, in the given order.
    pub fn with_permissions<I, S>(role_name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role_name: role_name.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    /// The persisted string form of this role.
    pub fn encode(&self) -> String {
        codec::encode_role_string(&self.role_name, self.permissions.as_slice())
    }

    /// Check whether the role grants anything at all.
    pub fn is_granted(&self) -> bool {
        self.permissions.is_granted()
    }
}

impl fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for RoleAssignment {
    type Err = std::convert::Infallible;

    /// Decoding never fails; malformed input yields a safe default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(codec::decode_role_str(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_does_not_duplicate() {
        let mut perms = Permissions::new();
        assert!(perms.insert("add"));
        assert!(!perms.insert("add"));
        assert_eq!(perms.len(), 1);
    }

    #[test]
    fn test_insert_appends_last() {
        let mut perms: Permissions = ["view", "add"].into_iter().collect();
        perms.insert("delete");
        assert_eq!(perms.iter().collect::<Vec<_>>(), vec!["view", "add", "delete"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut perms: Permissions = ["add", "edit", "view"].into_iter().collect();
        assert!(perms.remove("edit"));
        assert!(!perms.remove("edit"));
        assert_eq!(perms.iter().collect::<Vec<_>>(), vec!["add", "view"]);
    }

    #[test]
    fn test_remove_takes_first_duplicate_only() {
        let mut perms: Permissions = ["add", "view", "add"].into_iter().collect();
        perms.remove("add");
        assert_eq!(perms.iter().collect::<Vec<_>>(), vec!["view", "add"]);
    }

    #[test]
    fn test_grants_action() {
        let perms: Permissions = ["edit"].into_iter().collect();
        assert!(perms.grants(Action::Edit));
        assert!(!perms.grants(Action::Add));
    }

    #[test]
    fn test_access_marker() {
        let perms = Permissions::access();
        assert!(perms.is_granted());
        assert!(perms.contains(ACCESS));
        assert!(!Permissions::new().is_granted());
    }

    #[test]
    fn test_assignment_display_is_encoded_form() {
        let role = RoleAssignment::with_permissions("Member Management", ["add", "edit"]);
        assert_eq!(role.to_string(), "Member Management -- add, edit");
        assert_eq!(RoleAssignment::new("Referral System").to_string(), "Referral System");
    }

    #[test]
    fn test_assignment_serializes_for_views() {
        let role = RoleAssignment::with_permissions("Category", ["view"]);
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "roleName": "Category", "permissions": ["view"] })
        );
    }
}

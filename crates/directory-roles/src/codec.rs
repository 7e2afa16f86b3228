//! # Role String Codec
//!
//! Translates between the persisted role format and [`RoleAssignment`].
//!
//! ```text
//! "<role name> -- <perm>, <perm>, ..."   role with permissions
//! "<role name>"                          role with no permissions
//! ```
//!
//! The admin record's `role` field is loosely typed upstream: it may be an
//! array, a JSON-encoded array string, a single bare value, or missing.
//! [`decode_role_list`] accepts all of these and never fails; malformed
//! data degrades to [`UNKNOWN_ROLE`] entries or a single-element list.

use serde_json::Value;
use tracing::warn;

use crate::permissions::{Permissions, RoleAssignment};

/// Separator between the role name and its permission list.
pub const ROLE_SEPARATOR: &str = " -- ";

/// Role name used when the persisted value has no usable name.
pub const UNKNOWN_ROLE: &str = "Unknown Role";

/// Shape of a persisted `role` field, classified before decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoleField<'a> {
    /// Already an array of elements.
    Array(&'a [Value]),
    /// A string that looks like a JSON array (`"[...]"`).
    JsonArrayString(&'a str),
    /// Any other non-empty value, treated as one element.
    Single(&'a Value),
    /// `null` or an empty string.
    Empty,
}

impl<'a> RoleField<'a> {
    /// Classify a raw `role` value.
    pub fn classify(raw: &'a Value) -> Self {
        match raw {
            Value::Null => RoleField::Empty,
            Value::Array(items) => RoleField::Array(items),
            Value::String(s) if s.is_empty() => RoleField::Empty,
            Value::String(s) if s.starts_with('[') => RoleField::JsonArrayString(s),
            other => RoleField::Single(other),
        }
    }
}

/// Coerce a value to a slice of elements; anything but an array is empty.
pub fn safe_array(raw: &Value) -> &[Value] {
    raw.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Decode one persisted role string.
///
/// Splits on the first [`ROLE_SEPARATOR`]; permission entries are trimmed
/// and empty entries dropped. The role name is never empty.
pub fn decode_role_str(raw: &str) -> RoleAssignment {
    let Some((name, rest)) = raw.split_once(ROLE_SEPARATOR) else {
        if raw.is_empty() {
            return RoleAssignment::new(UNKNOWN_ROLE);
        }
        return RoleAssignment::new(raw);
    };

    let permissions: Permissions = rest
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let role_name = if name.is_empty() { UNKNOWN_ROLE } else { name };

    RoleAssignment {
        role_name: role_name.to_string(),
        permissions,
    }
}

/// Decode one element of a persisted role array.
///
/// Non-string values decode to [`UNKNOWN_ROLE`] with no permissions.
///
/// # Example
///
/// ```
/// use directory_roles::codec::{decode_role_string, UNKNOWN_ROLE};
/// use serde_json::json;
///
/// let role = decode_role_string(&json!("Category -- add, edit"));
/// assert_eq!(role.role_name, "Category");
/// assert_eq!(role.permissions.len(), 2);
///
/// assert_eq!(decode_role_string(&json!(42)).role_name, UNKNOWN_ROLE);
/// ```
pub fn decode_role_string(raw: &Value) -> RoleAssignment {
    match raw {
        Value::String(s) => decode_role_str(s),
        _ => RoleAssignment::new(UNKNOWN_ROLE),
    }
}

/// Encode a role and its permissions into the persisted string.
///
/// Permissions are joined in the order given.
pub fn encode_role_string<S: AsRef<str>>(role_name: &str, permissions: &[S]) -> String {
    if permissions.is_empty() {
        return role_name.to_string();
    }

    let joined = permissions
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}{}{}", role_name, ROLE_SEPARATOR, joined)
}

/// Decode an admin's persisted `role` field into structured roles.
///
/// # Example
///
/// ```
/// use directory_roles::codec::decode_role_list;
/// use serde_json::json;
///
/// let roles = decode_role_list(&json!("[\"Category -- view\", \"Referral System\"]"));
/// assert_eq!(roles.len(), 2);
/// assert!(decode_role_list(&json!(null)).is_empty());
/// ```
pub fn decode_role_list(raw: &Value) -> Vec<RoleAssignment> {
    match RoleField::classify(raw) {
        RoleField::Array(items) => items.iter().map(decode_role_string).collect(),
        RoleField::JsonArrayString(s) => match serde_json::from_str::<Vec<Value>>(s) {
            Ok(items) => items.iter().map(decode_role_string).collect(),
            Err(e) => {
                warn!(error = %e, raw = %s, "Role field is not a valid JSON array, decoding as a single role");
                vec![decode_role_str(s)]
            }
        },
        RoleField::Single(value) => vec![decode_role_string(value)],
        RoleField::Empty => Vec::new(),
    }
}

/// Encode structured roles back into the persisted array of strings.
pub fn encode_role_list(roles: &[RoleAssignment]) -> Vec<String> {
    roles.iter().map(RoleAssignment::encode).collect()
}

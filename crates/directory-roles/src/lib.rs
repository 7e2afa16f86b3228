//! # Directory Roles
//!
//! This crate provides the role/permission model used by the directory
//! admin panel to manage community administrators.
//!
//! ## Overview
//!
//! The directory-roles crate handles:
//! - **Actions**: `add`, `edit`, `view`, `delete`
//! - **Catalog**: The fixed role names and whether each is action- or boolean-typed
//! - **Codec**: The persisted role string format, in and out
//! - **Toggle Engine**: Pure permission edits on a decoded role list
//!
//! ## Persisted Format
//!
//! ```text
//! RoleString = RoleName [" -- " Permission {", " Permission}]
//!
//! Examples:
//!   "Member Management -- add, edit"   - action role with two actions
//!   "Referral System -- access"        - boolean role, granted
//!   "Referral System"                  - boolean role, not granted
//! ```
//!
//! The string form never travels past [`codec`]; callers work on
//! [`RoleAssignment`] and re-encode on save.
//!
//! ## Usage
//!
//! ```rust
//! use directory_roles::{decode_role_list, encode_role_list, toggle_catalog_role, Action};
//! use serde_json::json;
//!
//! let roles = decode_role_list(&json!(["Member Management -- add, edit", "Referral System"]));
//!
//! let roles = toggle_catalog_role(&roles, "Referral System", None);
//! let roles = toggle_catalog_role(&roles, "Member Management", Some(Action::View));
//!
//! assert_eq!(
//!     encode_role_list(&roles),
//!     vec!["Member Management -- add, edit, view", "Referral System -- access"]
//! );
//! ```
//!
//! ## Robustness
//!
//! Decoding and toggling never fail. Malformed stored values decode to
//! `Unknown Role` entries or a single-element list, and toggling a role
//! that is not in the list is a no-op.

pub mod actions;
pub mod catalog;
pub mod codec;
pub mod permissions;
pub mod toggle;

// Re-export main types for convenience
pub use actions::{Action, ParseActionError};
pub use catalog::{PermissionKind, RoleCatalog};
pub use codec::{
    decode_role_list, decode_role_str, decode_role_string, encode_role_list, encode_role_string,
    safe_array, RoleField, ROLE_SEPARATOR, UNKNOWN_ROLE,
};
pub use permissions::{Permissions, RoleAssignment, ACCESS};
pub use toggle::{is_well_formed, toggle_catalog_role, toggle_permission, toggle_permission_value};

//! # Permission Toggle Engine
//!
//! Pure transitions over an admin's role list. Every function returns a new
//! list and leaves its input untouched. Only entries whose name equals the
//! edited role change; everything else keeps its value and position.
//!
//! Per role the reachable states are:
//! - boolean roles: no access, or `[access]`
//! - action roles: any subset of `add, edit, view, delete`, in toggle order

use serde_json::Value;
use tracing::debug;

use crate::actions::Action;
use crate::catalog::{PermissionKind, RoleCatalog};
use crate::codec::{decode_role_string, safe_array};
use crate::permissions::{Permissions, RoleAssignment, ACCESS};

/// Toggle one permission on every role named `role_name`.
///
/// With `permission == None` the whole set flips: any entries become none,
/// none becomes `[access]`. With `Some(p)`, `p` is removed if present and
/// appended otherwise. An unmatched `role_name` returns the list unchanged.
///
/// Duplicate role names are all toggled; the list is never de-duplicated.
///
/// # Example
///
/// ```
/// use directory_roles::{toggle_permission, RoleAssignment};
///
/// let roles = vec![RoleAssignment::with_permissions("Category", ["add"])];
/// let roles = toggle_permission(&roles, "Category", Some("view"));
/// assert_eq!(roles[0].to_string(), "Category -- add, view");
///
/// let roles = vec![RoleAssignment::new("Referral System")];
/// let roles = toggle_permission(&roles, "Referral System", None);
/// assert_eq!(roles[0].to_string(), "Referral System -- access");
/// ```
pub fn toggle_permission(
    roles: &[RoleAssignment],
    role_name: &str,
    permission: Option<&str>,
) -> Vec<RoleAssignment> {
    roles
        .iter()
        .map(|role| {
            if role.role_name != role_name {
                return role.clone();
            }
            RoleAssignment {
                role_name: role.role_name.clone(),
                permissions: toggled(&role.permissions, permission),
            }
        })
        .collect()
}

fn toggled(current: &Permissions, permission: Option<&str>) -> Permissions {
    let Some(permission) = permission else {
        return if current.is_granted() {
            Permissions::new()
        } else {
            Permissions::access()
        };
    };

    let mut next = current.clone();
    if !next.remove(permission) {
        next.insert(permission);
    }
    next
}

/// Toggle on an untyped role list.
///
/// Anything that is not an array is treated as an empty list; elements are
/// decoded with [`decode_role_string`] first.
pub fn toggle_permission_value(
    roles: &Value,
    role_name: &str,
    permission: Option<&str>,
) -> Vec<RoleAssignment> {
    let decoded: Vec<RoleAssignment> = safe_array(roles).iter().map(decode_role_string).collect();
    toggle_permission(&decoded, role_name, permission)
}

/// Toggle a role using its catalog kind.
///
/// - Boolean roles always get the whole-set flip; `action` is ignored, so
///   their permissions stay either empty or exactly `[access]`.
/// - Action roles need an action; `None` leaves the list unchanged.
/// - Roles outside the catalog fall back to [`toggle_permission`] with the
///   action's string form, or the whole-set flip when `action` is `None`.
pub fn toggle_catalog_role(
    roles: &[RoleAssignment],
    role_name: &str,
    action: Option<Action>,
) -> Vec<RoleAssignment> {
    match (RoleCatalog::kind(role_name), action) {
        (Some(PermissionKind::Boolean), _) => toggle_permission(roles, role_name, None),
        (Some(PermissionKind::Action), None) => {
            debug!(role = role_name, "Action role toggled without an action, ignoring");
            roles.to_vec()
        }
        (_, action) => toggle_permission(roles, role_name, action.as_ref().map(Action::as_str)),
    }
}

/// Check that a role's permissions fit its catalog kind.
///
/// Roles outside the catalog are always considered well-formed.
pub fn is_well_formed(role: &RoleAssignment) -> bool {
    match RoleCatalog::kind(&role.role_name) {
        Some(PermissionKind::Boolean) => {
            role.permissions.is_empty()
                || (role.permissions.len() == 1 && role.permissions.contains(ACCESS))
        }
        Some(PermissionKind::Action) => role
            .permissions
            .iter()
            .all(|p| Action::parse(p).map(|a| a.as_str()) == Some(p)),
        None => true,
    }
}

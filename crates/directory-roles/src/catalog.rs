//! # Role Catalog
//!
//! The fixed set of roles a community admin can hold, and whether each role
//! is granted per action or as a single on/off switch.

use serde::{Deserialize, Serialize};

use crate::actions::Action;

/// How permissions on a role are expressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    /// Any subset of `add, edit, view, delete`.
    Action,

    /// Either no access or the single [`ACCESS`](crate::ACCESS) marker.
    Boolean,
}

impl PermissionKind {
    /// The options an admin panel offers for this kind.
    ///
    /// Boolean roles have no options; presence of any permission is the switch.
    pub fn options(&self) -> &'static [Action] {
        match self {
            PermissionKind::Action => Action::all(),
            PermissionKind::Boolean => &[],
        }
    }
}

/// Role names, in display order.
pub const ROLE_NAMES: &[&str] = &[
    MEMBER_MANAGEMENT,
    CATEGORY,
    BUSINESS_MANAGEMENT,
    FAMILY_INFORMATION,
    REFERRAL_SYSTEM,
    REVIEW_TESTIMONIALS,
];

pub const MEMBER_MANAGEMENT: &str = "Member Management";
pub const CATEGORY: &str = "Category";
pub const BUSINESS_MANAGEMENT: &str = "Business Management";
pub const FAMILY_INFORMATION: &str = "Family Information";
pub const REFERRAL_SYSTEM: &str = "Referral System";
pub const REVIEW_TESTIMONIALS: &str = "Review Testimonials";

/// Static lookup from role name to [`PermissionKind`].
///
/// Names are matched exactly; the catalog has no lifecycle beyond the
/// binary it is compiled into.
///
/// # Example
///
/// ```
/// use directory_roles::{PermissionKind, RoleCatalog};
///
/// assert_eq!(RoleCatalog::kind("Category"), Some(PermissionKind::Action));
/// assert_eq!(RoleCatalog::kind("Referral System"), Some(PermissionKind::Boolean));
/// assert_eq!(RoleCatalog::kind("category"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCatalog;

impl RoleCatalog {
    /// Look up the permission kind of a role.
    pub fn kind(role_name: &str) -> Option<PermissionKind> {
        match role_name {
            MEMBER_MANAGEMENT | CATEGORY | BUSINESS_MANAGEMENT => Some(PermissionKind::Action),
            FAMILY_INFORMATION | REFERRAL_SYSTEM | REVIEW_TESTIMONIALS => {
                Some(PermissionKind::Boolean)
            }
            _ => None,
        }
    }

    /// Options offered for a role, or `None` for roles outside the catalog.
    pub fn options(role_name: &str) -> Option<&'static [Action]> {
        Self::kind(role_name).map(|kind| kind.options())
    }

    /// Check whether a role name is in the catalog.
    pub fn is_known(role_name: &str) -> bool {
        Self::kind(role_name).is_some()
    }

    /// All catalog role names in display order.
    pub fn names() -> &'static [&'static str] {
        ROLE_NAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_has_a_kind() {
        for name in RoleCatalog::names() {
            assert!(RoleCatalog::is_known(name), "{name} missing from lookup");
        }
        assert_eq!(RoleCatalog::names().len(), 6);
    }

    #[test]
    fn test_action_roles_offer_all_actions() {
        assert_eq!(
            RoleCatalog::options(MEMBER_MANAGEMENT),
            Some(Action::all())
        );
        assert_eq!(RoleCatalog::options(CATEGORY).map(<[Action]>::len), Some(4));
    }

    #[test]
    fn test_boolean_roles_offer_nothing() {
        assert_eq!(RoleCatalog::options(REFERRAL_SYSTEM), Some(&[][..]));
        assert_eq!(
            RoleCatalog::kind(REVIEW_TESTIMONIALS),
            Some(PermissionKind::Boolean)
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(RoleCatalog::kind("Member Management "), None);
        assert_eq!(RoleCatalog::kind("Unknown Role"), None);
        assert!(RoleCatalog::options("").is_none());
    }
}

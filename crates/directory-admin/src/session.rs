//! Permission editing session for one community admin.
//!
//! A session decodes the admin's roles once, applies toggles locally, and
//! writes the re-encoded list back on [`RoleEditSession::save`]. Loading a
//! different admin or reloading the same one discards local edits.

use directory_roles::{
    encode_role_list, is_well_formed, toggle_catalog_role, toggle_permission, Action,
    RoleAssignment,
};
use tracing::{debug, warn};

use crate::client::AdminDirectory;
use crate::error::AdminResult;
use crate::record::{AdminId, CommunityAdmin};

/// Local, unsaved permission edits for one admin.
#[derive(Debug, Clone)]
pub struct RoleEditSession {
    admin: CommunityAdmin,
    baseline: Vec<RoleAssignment>,
    roles: Vec<RoleAssignment>,
}

impl RoleEditSession {
    /// Start editing an admin record.
    pub fn open(admin: CommunityAdmin) -> Self {
        let roles = admin.roles();
        for role in roles.iter().filter(|role| !is_well_formed(role)) {
            warn!(
                admin_id = %admin.id,
                role = %role,
                "Stored role does not match its catalog kind"
            );
        }

        Self {
            admin,
            baseline: roles.clone(),
            roles,
        }
    }

    pub fn admin_id(&self) -> &AdminId {
        &self.admin.id
    }

    /// The record as last loaded or saved.
    pub fn admin(&self) -> &CommunityAdmin {
        &self.admin
    }

    /// Current roles, including unsaved edits.
    pub fn roles(&self) -> &[RoleAssignment] {
        &self.roles
    }

    /// Check whether there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.roles != self.baseline
    }

    /// Toggle a role using its catalog kind.
    ///
    /// Boolean roles flip between no access and access; action roles toggle
    /// `action`. See [`toggle_catalog_role`].
    pub fn toggle(&mut self, role_name: &str, action: Option<Action>) -> &[RoleAssignment] {
        debug!(admin_id = %self.admin.id, role = role_name, ?action, "Toggling role");
        self.roles = toggle_catalog_role(&self.roles, role_name, action);
        &self.roles
    }

    /// Toggle an arbitrary permission string, bypassing the catalog.
    pub fn toggle_raw(&mut self, role_name: &str, permission: Option<&str>) -> &[RoleAssignment] {
        self.roles = toggle_permission(&self.roles, role_name, permission);
        &self.roles
    }

    /// The role list as it would be persisted.
    pub fn encoded_roles(&self) -> Vec<String> {
        encode_role_list(&self.roles)
    }

    /// The full record as it would be sent on save.
    pub fn to_record(&self) -> CommunityAdmin {
        self.admin.with_roles(&self.roles)
    }

    /// Replace the session with a freshly loaded record, dropping edits.
    pub fn reload(&mut self, admin: CommunityAdmin) {
        *self = Self::open(admin);
    }

    /// Persist the edited roles.
    ///
    /// On success the saved record becomes the new baseline. On failure the
    /// edits are kept so the caller can retry.
    pub async fn save(&mut self, directory: &dyn AdminDirectory) -> AdminResult<()> {
        let record = self.to_record();
        directory.update_admin(&record).await?;

        debug!(admin_id = %record.id, roles = ?record.role, "Saved community admin roles");
        self.admin = record;
        self.baseline = self.roles.clone();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::AdminError;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    /// In-memory directory that records every update.
    #[derive(Default)]
    pub(crate) struct MemoryDirectory {
        pub(crate) admins: Mutex<Vec<CommunityAdmin>>,
        pub(crate) updates: Mutex<Vec<CommunityAdmin>>,
        pub(crate) fail_updates: bool,
    }

    #[async_trait]
    impl AdminDirectory for MemoryDirectory {
        async fn list_admins(&self) -> AdminResult<Vec<CommunityAdmin>> {
            Ok(self.admins.lock().await.clone())
        }

        async fn update_admin(&self, admin: &CommunityAdmin) -> AdminResult<()> {
            if self.fail_updates {
                return Err(AdminError::ApiError {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.updates.lock().await.push(admin.clone());
            Ok(())
        }

        async fn delete_admin(&self, id: &AdminId) -> AdminResult<()> {
            let mut admins = self.admins.lock().await;
            let before = admins.len();
            admins.retain(|admin| &admin.id != id);
            if admins.len() == before {
                return Err(AdminError::AdminNotFound(id.clone()));
            }
            Ok(())
        }
    }

    fn sample_admin() -> CommunityAdmin {
        let mut admin = CommunityAdmin::new(1u64).with_field("name", "Asha");
        admin.role = json!(["Member Management -- add, edit", "Referral System"]);
        admin
    }

    #[test]
    fn test_open_decodes_roles() {
        let session = RoleEditSession::open(sample_admin());
        assert_eq!(session.roles().len(), 2);
        assert!(!session.is_dirty());
        assert_eq!(session.admin_id(), &AdminId::Number(1));
    }

    #[test]
    fn test_toggle_marks_dirty_and_back() {
        let mut session = RoleEditSession::open(sample_admin());

        session.toggle("Referral System", None);
        assert!(session.is_dirty());
        assert_eq!(
            session.encoded_roles(),
            vec!["Member Management -- add, edit", "Referral System -- access"]
        );

        session.toggle("Referral System", None);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_toggle_unknown_role_keeps_clean() {
        let mut session = RoleEditSession::open(sample_admin());
        session.toggle("Category", Some(Action::Add));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_toggle_raw_bypasses_catalog() {
        let mut session = RoleEditSession::open(sample_admin());
        session.toggle_raw("Referral System", Some("view"));
        assert_eq!(session.encoded_roles()[1], "Referral System -- view");
    }

    #[test]
    fn test_reload_discards_edits() {
        let mut session = RoleEditSession::open(sample_admin());
        session.toggle("Member Management", Some(Action::Delete));
        assert!(session.is_dirty());

        session.reload(sample_admin());
        assert!(!session.is_dirty());
        assert_eq!(session.encoded_roles()[0], "Member Management -- add, edit");
    }

    #[tokio::test]
    async fn test_save_sends_full_record() {
        let directory = MemoryDirectory::default();
        let mut session = RoleEditSession::open(sample_admin());
        session.toggle("Member Management", Some(Action::Add));

        session.save(&directory).await.unwrap();

        let updates = directory.updates.lock().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(
            serde_json::to_value(&updates[0]).unwrap(),
            json!({
                "id": 1,
                "name": "Asha",
                "role": ["Member Management -- edit", "Referral System"]
            })
        );
        assert!(!session.is_dirty());
        assert_eq!(session.admin().role, json!(["Member Management -- edit", "Referral System"]));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_edits() {
        let directory = MemoryDirectory {
            fail_updates: true,
            ..MemoryDirectory::default()
        };
        let mut session = RoleEditSession::open(sample_admin());
        session.toggle("Referral System", None);

        let err = session.save(&directory).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(session.is_dirty());
    }
}

//! The loaded list of community admins.
//!
//! The roster caches the last fetched admins, hands out edit sessions, and
//! allows at most one save per admin at a time. A second save for the same
//! admin while one is still running fails with
//! [`AdminError::SaveInFlight`] instead of racing it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::client::AdminDirectory;
use crate::error::{AdminError, AdminResult};
use crate::record::{AdminId, CommunityAdmin};
use crate::session::RoleEditSession;

/// Community admins loaded from a directory backend.
pub struct AdminRoster {
    directory: Arc<dyn AdminDirectory>,
    admins: RwLock<Vec<CommunityAdmin>>,
    save_locks: Mutex<HashMap<AdminId, Arc<Mutex<()>>>>,
}

impl AdminRoster {
    /// Create an empty roster; call [`Self::refresh`] to load it.
    pub fn new(directory: Arc<dyn AdminDirectory>) -> Self {
        Self {
            directory,
            admins: RwLock::new(Vec::new()),
            save_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Reload every admin from the backend.
    ///
    /// # Returns
    ///
    /// The number of admins loaded
    pub async fn refresh(&self) -> AdminResult<usize> {
        let admins = self.directory.list_admins().await?;
        let count = admins.len();
        *self.admins.write().await = admins;
        self.save_locks
            .lock()
            .await
            .retain(|_, lock| lock.try_lock().is_err());
        info!(count, "Loaded community admins");
        Ok(count)
    }

    /// Snapshot of the loaded admins.
    pub async fn admins(&self) -> Vec<CommunityAdmin> {
        self.admins.read().await.clone()
    }

    /// Look up a loaded admin.
    pub async fn get(&self, id: &AdminId) -> Option<CommunityAdmin> {
        self.admins
            .read()
            .await
            .iter()
            .find(|admin| &admin.id == id)
            .cloned()
    }

    /// Open an edit session on a loaded admin.
    pub async fn open_session(&self, id: &AdminId) -> AdminResult<RoleEditSession> {
        self.get(id)
            .await
            .map(RoleEditSession::open)
            .ok_or_else(|| AdminError::AdminNotFound(id.clone()))
    }

    /// Check whether a save is currently running for an admin.
    pub async fn is_saving(&self, id: &AdminId) -> bool {
        match self.save_locks.lock().await.get(id) {
            Some(lock) => lock.try_lock().is_err(),
            None => false,
        }
    }

    /// Save a session's edits, one save per admin at a time.
    ///
    /// On success the cached record is replaced with the saved one. An admin
    /// that has left the roster in the meantime is not added back.
    pub async fn save(&self, session: &mut RoleEditSession) -> AdminResult<()> {
        let id = session.admin_id().clone();
        let _guard = {
            let mut locks = self.save_locks.lock().await;
            let lock = locks.entry(id.clone()).or_default().clone();
            lock.try_lock_owned().map_err(|_| {
                warn!(admin_id = %id, "Save rejected, another save is in progress");
                AdminError::SaveInFlight(id.clone())
            })?
        };

        session.save(self.directory.as_ref()).await?;

        let saved = session.admin().clone();
        let mut admins = self.admins.write().await;
        match admins.iter_mut().find(|admin| admin.id == id) {
            Some(admin) => *admin = saved,
            None => debug!(admin_id = %id, "Saved admin is no longer in the roster"),
        }
        Ok(())
    }

    /// Delete an admin upstream and drop it from the roster.
    pub async fn delete(&self, id: &AdminId) -> AdminResult<()> {
        self.directory.delete_admin(id).await?;
        self.admins.write().await.retain(|admin| &admin.id != id);
        self.save_locks.lock().await.remove(id);
        info!(admin_id = %id, "Deleted community admin");
        Ok(())
    }
}

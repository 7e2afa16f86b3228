//! # Directory Admin
//!
//! This crate manages the community administrators of the business directory:
//! loading them from the directory REST API, editing their role permissions,
//! and saving the result back.
//!
//! ## Overview
//!
//! The directory-admin crate handles:
//! - **Records**: Community admin records with a loosely typed `role` field
//! - **Client**: HTTP client for the community admin endpoints
//! - **Sessions**: Local permission edits for one admin
//! - **Roster**: The loaded admin list, with saves serialized per admin
//!
//! Role strings are decoded and edited with `directory-roles`; this crate
//! never inspects the persisted role format itself.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use directory_admin::{AdminId, AdminRoster, CommunityAdminClient, DirectoryConfig};
//! use directory_roles::Action;
//! use std::sync::Arc;
//!
//! async fn grant_view(id: AdminId) -> Result<(), directory_admin::AdminError> {
//!     let client = CommunityAdminClient::new(DirectoryConfig::from_env())?;
//!     let roster = AdminRoster::new(Arc::new(client));
//!     roster.refresh().await?;
//!
//!     let mut session = roster.open_session(&id).await?;
//!     session.toggle("Category", Some(Action::View));
//!     session.toggle("Referral System", None);
//!
//!     if session.is_dirty() {
//!         roster.save(&mut session).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod record;
pub mod roster;
pub mod session;

// Re-export main types
pub use client::{AdminDirectory, CommunityAdminClient};
pub use config::{ConfigError, DirectoryConfig};
pub use error::{AdminError, AdminResult};
pub use record::{AdminId, CommunityAdmin};
pub use roster::AdminRoster;
pub use session::RoleEditSession;

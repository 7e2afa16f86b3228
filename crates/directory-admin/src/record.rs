//! Community admin records as served by the directory API.
//!
//! The `role` column upstream is loosely typed, so it is stored raw and
//! only interpreted through [`directory_roles::decode_role_list`]. All other
//! fields are carried through untouched so an update sends the full record.

use directory_roles::{decode_role_list, encode_role_list, RoleAssignment};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a community admin.
///
/// The API may send either a number or a string; the id is written back in
/// the same form it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdminId {
    /// Numeric id.
    Number(u64),
    /// String id.
    Text(String),
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminId::Number(n) => write!(f, "{}", n),
            AdminId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for AdminId {
    fn from(id: u64) -> Self {
        AdminId::Number(id)
    }
}

impl From<&str> for AdminId {
    fn from(id: &str) -> Self {
        AdminId::Text(id.to_string())
    }
}

impl From<String> for AdminId {
    fn from(id: String) -> Self {
        AdminId::Text(id)
    }
}

/// A community admin record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityAdmin {
    /// Admin id.
    pub id: AdminId,

    /// Raw persisted role field (array, JSON string, bare string, or null).
    #[serde(default)]
    pub role: Value,

    /// Every other field of the record, passed through as-is.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CommunityAdmin {
    /// Create a record with no roles and no extra fields.
    pub fn new(id: impl Into<AdminId>) -> Self {
        Self {
            id: id.into(),
            role: Value::Null,
            fields: Map::new(),
        }
    }

    /// Set an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Display name, if the record carries a string `name` field.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Decode the stored role field.
    pub fn roles(&self) -> Vec<RoleAssignment> {
        decode_role_list(&self.role)
    }

    /// A copy of this record with `role` replaced by the encoded roles.
    pub fn with_roles(&self, roles: &[RoleAssignment]) -> Self {
        let encoded = encode_role_list(roles).into_iter().map(Value::String).collect();
        Self {
            id: self.id.clone(),
            role: Value::Array(encoded),
            fields: self.fields.clone(),
        }
    }
}

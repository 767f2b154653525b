//! User Types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Fixed at creation; drives which views a client loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular student account.
    #[default]
    User,
    /// Administrator (sees the full user list and platform stats).
    Admin,
}

impl Role {
    /// Plain attribute check used for role-gated views.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (login identifier).
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Current level.
    pub level: u32,
    /// Accumulated points.
    pub points: u32,
    /// Longest running habit streak shown on the profile.
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn admin_guard() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }
}

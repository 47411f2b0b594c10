//! Profile record used by the admin access gate.

use crate::model::article::UserId;
use serde::{Deserialize, Serialize};

/// Role value that grants access to the management panel.
pub const ADMIN_ROLE: &str = "admin";

/// One `profiles` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    /// Free-text role label; only [`ADMIN_ROLE`] carries meaning.
    pub role: String,
}

impl Profile {
    pub fn new(user_id: UserId, role: impl Into<String>) -> Self {
        Self {
            user_id,
            role: role.into(),
        }
    }

    pub fn admin(user_id: UserId) -> Self {
        Self::new(user_id, ADMIN_ROLE)
    }

    /// Exact, case-sensitive comparison against the admin marker.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

use serde::{Deserialize, Serialize};

use super::club::Club;
use super::ids::Id;
use super::role::Role;

/// The identity currently using the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id<User>,
    pub name: String,
    pub role: Role,
    /// Set only for club leads.
    pub club_id: Option<Id<Club>>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl User {
    pub fn create(id: Id<User>, name: String, role: Role) -> Self {
        Self {
            id,
            name,
            role,
            club_id: None,
            email: None,
            avatar: None,
        }
    }
}

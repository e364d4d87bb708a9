use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PortalError;

/// Capability tag for whoever is using the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Guest,
    Student,
    Faculty,
    ClubLead,
    Admin,
}

impl Role {
    /// Order shown in the role switcher.
    pub const ALL: &'static [Role] = &[
        Role::Guest,
        Role::Student,
        Role::Faculty,
        Role::ClubLead,
        Role::Admin,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::ClubLead => "Club Lead",
            Role::Admin => "Website Admin",
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Role::Guest)
    }

    /// Roles that may publish events.
    pub fn can_create_event(&self) -> bool {
        matches!(self, Role::Admin | Role::Faculty | Role::ClubLead)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "guest" | "visitor" => Ok(Role::Guest),
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "clublead" | "lead" => Ok(Role::ClubLead),
            "admin" | "websiteadmin" => Ok(Role::Admin),
            _ => Err(PortalError::UnknownRole(s.trim().to_string())),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Club id used by college-wide events that no club owns.
pub const GENERAL_CLUB_ID: &str = "gen";

/// Someone listed on a club's leadership panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubLead {
    pub name: String,
    pub role: String,
    pub image: Option<String>,
}

impl ClubLead {
    pub fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            image: None,
        }
    }
}

/// A student community in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: Id<Club>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// Seeded count; joining does not change it.
    pub member_count: u32,
    pub full_description: Option<String>,
    pub leads: Option<Vec<ClubLead>>,
}

impl Club {
    /// Long description for the detail page, falling back to the short one.
    pub fn about(&self) -> &str {
        self.full_description
            .as_deref()
            .unwrap_or(&self.description)
    }

    pub fn contact_email(&self) -> String {
        format!("contact@{}.pec.edu", self.id)
    }
}

impl Id<Club> {
    pub fn is_general(&self) -> bool {
        self.as_str() == GENERAL_CLUB_ID
    }
}

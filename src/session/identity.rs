use uuid::Uuid;

use crate::model::{Club, Id, Role, User};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Length of a generated avatar seed token.
const SEED_LEN: usize = 6;

/// Source of avatar seeds for identities that have no fixed one.
pub trait SeedSource {
    fn next_seed(&mut self) -> String;
}

/// Fresh short token per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSeeds;

impl SeedSource for RandomSeeds {
    fn next_seed(&mut self) -> String {
        Uuid::new_v4().simple().to_string()[..SEED_LEN].to_string()
    }
}

/// Always hands out the same seed.
#[derive(Debug, Clone)]
pub struct FixedSeeds {
    seed: String,
}

impl FixedSeeds {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self) -> String {
        self.seed.clone()
    }
}

pub fn avatar_url(seed: &str) -> String {
    format!("{}?seed={}", AVATAR_BASE, seed)
}

/// Builds the synthetic identity for a role. Only the admin avatar draws
/// from `seeds`; every other role has a fixed seed.
pub fn identity_for(id: Id<User>, role: Role, seeds: &mut dyn SeedSource) -> User {
    let (name, email, seed, club_id): (&str, &str, String, Option<Id<Club>>) = match role {
        Role::Admin => ("Admin User", "admin@pec.ac.in", seeds.next_seed(), None),
        Role::Faculty => ("Prof. Johnson", "johnson@pec.ac.in", "Prof".into(), None),
        Role::ClubLead => (
            "Alice (Mulearn Lead)",
            "alice@mulearn.org",
            "Alice".into(),
            Some(Id::new("mulearn")),
        ),
        Role::Student => ("John Doe", "john.doe@student.pec.ac.in", "John".into(), None),
        Role::Guest => ("Visitor", "visitor@pec.ac.in", "Visitor".into(), None),
    };

    let mut user = User::create(id, name.to_string(), role);
    user.club_id = club_id;
    user.email = Some(email.to_string());
    user.avatar = Some(avatar_url(&seed));
    user
}

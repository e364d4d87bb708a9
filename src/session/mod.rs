pub mod identity;

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::model::{Club, Event, Id, Role, User};
use identity::SeedSource;

pub use identity::{avatar_url, identity_for, FixedSeeds, RandomSeeds};

/// Id carried by the demo identity across role switches.
pub const DEMO_USER_ID: &str = "guest_123";

/// Who is using the portal and what they have signed up for.
///
/// These are the primitive mutators: they never check policy. Pages go
/// through `ops::session_ops::dispatch`, which does.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    user: User,
    joined_clubs: BTreeSet<Id<Club>>,
    registered_events: BTreeSet<Id<Event>>,
}

impl Session {
    /// Fresh session: the default visitor with nothing joined.
    pub fn new() -> Self {
        let mut user = User::create(Id::new(DEMO_USER_ID), "Visitor".into(), Role::Guest);
        user.email = Some("visitor@pec.ac.in".into());
        user.avatar = Some(avatar_url("Visitor"));
        Self {
            user,
            joined_clubs: BTreeSet::new(),
            registered_events: BTreeSet::new(),
        }
    }

    pub fn current_user(&self) -> &User {
        &self.user
    }

    pub fn joined_clubs(&self) -> &BTreeSet<Id<Club>> {
        &self.joined_clubs
    }

    pub fn registered_events(&self) -> &BTreeSet<Id<Event>> {
        &self.registered_events
    }

    pub fn is_joined(&self, club_id: &Id<Club>) -> bool {
        self.joined_clubs.contains(club_id)
    }

    pub fn is_registered(&self, event_id: &Id<Event>) -> bool {
        self.registered_events.contains(event_id)
    }

    /// Replaces the identity with the synthetic one for `role`.
    /// Membership sets are kept.
    pub fn switch_role(&mut self, role: Role, seeds: &mut dyn SeedSource) -> &User {
        self.user = identity_for(self.user.id.clone(), role, seeds);
        debug!(role = %role, name = %self.user.name, "identity replaced");
        &self.user
    }

    /// Flips registration for `event_id`. Returns true if now registered.
    pub fn toggle_event_registration(&mut self, event_id: Id<Event>) -> bool {
        if self.registered_events.remove(&event_id) {
            false
        } else {
            self.registered_events.insert(event_id);
            true
        }
    }

    /// Adds `club_id` to the joined set. Returns false if already a member.
    /// There is no way to leave a club.
    pub fn join_club(&mut self, club_id: Id<Club>) -> bool {
        self.joined_clubs.insert(club_id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

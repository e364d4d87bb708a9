pub mod seed;

use tracing::debug;

use crate::error::{PortalError, PortalResult};
use crate::model::{Club, Event, Notice};

/// Read-only seed data standing in for a backend. Built once at startup.
#[derive(Debug, Clone)]
pub struct MockStore {
    clubs: Vec<Club>,
    events: Vec<Event>,
    notices: Vec<Notice>,
}

impl MockStore {
    pub fn new(clubs: Vec<Club>, events: Vec<Event>, notices: Vec<Notice>) -> Self {
        Self {
            clubs,
            events,
            notices,
        }
    }

    /// The portal's fixed demo data set.
    pub fn seeded() -> Self {
        let store = Self::new(seed::clubs(), seed::events(), seed::notices());
        debug!(
            clubs = store.clubs.len(),
            events = store.events.len(),
            notices = store.notices.len(),
            "seeded mock store"
        );
        store
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Every event must point at a known club, except college-wide events.
    pub fn check_references(&self) -> PortalResult<()> {
        for event in &self.events {
            if event.club_id.is_general() {
                continue;
            }
            if !self.clubs.iter().any(|c| c.id == event.club_id) {
                return Err(PortalError::NotFound {
                    entity_type: "Club".into(),
                    id: event.club_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}

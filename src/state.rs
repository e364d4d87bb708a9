use crate::session::identity::SeedSource;
use crate::session::{RandomSeeds, Session};
use crate::store::MockStore;

/// Everything the portal knows, owned by the root of the front end and
/// handed down by reference. Mutations go through `ops::session_ops::dispatch`.
pub struct AppState {
    pub store: MockStore,
    pub session: Session,
    pub seeds: Box<dyn SeedSource>,
}

impl AppState {
    pub fn new(store: MockStore, seeds: Box<dyn SeedSource>) -> Self {
        Self {
            store,
            session: Session::new(),
            seeds,
        }
    }

    /// Seeded store, default visitor, random avatar seeds.
    pub fn seeded() -> Self {
        Self::new(MockStore::seeded(), Box::new(RandomSeeds))
    }
}

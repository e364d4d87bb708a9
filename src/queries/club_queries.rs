use crate::model::{Club, Id};
use crate::session::Session;
use crate::store::MockStore;

pub fn all_clubs(store: &MockStore) -> &[Club] {
    store.clubs()
}

/// Linear scan; the directory is small and fixed.
pub fn find_club_by_id<'a>(store: &'a MockStore, club_id: &Id<Club>) -> Option<&'a Club> {
    store.clubs().iter().find(|c| &c.id == club_id)
}

/// Clubs the session has joined, in directory order.
pub fn joined_clubs<'a>(store: &'a MockStore, session: &Session) -> Vec<&'a Club> {
    store
        .clubs()
        .iter()
        .filter(|c| session.is_joined(&c.id))
        .collect()
}

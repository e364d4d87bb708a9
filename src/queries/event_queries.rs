use crate::model::{CategoryFilter, Club, Event, Id};
use crate::session::Session;
use crate::store::MockStore;

pub fn all_events(store: &MockStore) -> &[Event] {
    store.events()
}

pub fn find_event_by_id<'a>(store: &'a MockStore, event_id: &Id<Event>) -> Option<&'a Event> {
    store.events().iter().find(|e| &e.id == event_id)
}

pub fn events_for_club<'a>(store: &'a MockStore, club_id: &Id<Club>) -> Vec<&'a Event> {
    store
        .events()
        .iter()
        .filter(|e| &e.club_id == club_id)
        .collect()
}

/// Events whose title or club name contains `search` (case-insensitive)
/// and whose category passes `category`. Store order is kept.
pub fn filter_events<'a>(
    store: &'a MockStore,
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a Event> {
    let needle = search.to_lowercase();
    store
        .events()
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&needle)
                || e.club_name.to_lowercase().contains(&needle)
        })
        .filter(|e| category.matches(e.category))
        .collect()
}

/// Events the session is registered for, in store order.
pub fn registered_events<'a>(store: &'a MockStore, session: &Session) -> Vec<&'a Event> {
    store
        .events()
        .iter()
        .filter(|e| session.is_registered(&e.id))
        .collect()
}

use std::fmt;

use crate::error::{PortalError, PortalResult};
use crate::model::{Club, Id};

/// A page address. `/club/{id}` carries the club slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Events,
    Clubs,
    Dashboard,
    Club(Id<Club>),
}

impl Route {
    /// Accepts `/events`, `events`, `#/events` and trailing slashes.
    pub fn parse(input: &str) -> PortalResult<Route> {
        let path = input.trim().trim_start_matches('#');
        let path = path.trim_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let route = match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::Home,
            (Some("events"), None, _) => Route::Events,
            (Some("clubs"), None, _) => Route::Clubs,
            (Some("dashboard"), None, _) => Route::Dashboard,
            (Some("club"), Some(id), None) => Route::Club(Id::new(id)),
            _ => return Err(PortalError::UnknownRoute(input.trim().to_string())),
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Events => "/events".into(),
            Route::Clubs => "/clubs".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::Club(id) => format!("/club/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("/events").unwrap(), Route::Events);
        assert_eq!(Route::parse("/clubs").unwrap(), Route::Clubs);
        assert_eq!(Route::parse("/dashboard").unwrap(), Route::Dashboard);
        assert_eq!(
            Route::parse("/club/mulearn").unwrap(),
            Route::Club(Id::new("mulearn"))
        );
    }

    #[test]
    fn tolerates_hash_and_slashes() {
        assert_eq!(Route::parse("#/events/").unwrap(), Route::Events);
        assert_eq!(Route::parse("clubs").unwrap(), Route::Clubs);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Home,
            Route::Events,
            Route::Clubs,
            Route::Dashboard,
            Route::Club(Id::new("ieee")),
        ] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(Route::parse("/settings").is_err());
        assert!(Route::parse("/club").is_err());
        assert!(Route::parse("/club/a/b").is_err());
    }
}

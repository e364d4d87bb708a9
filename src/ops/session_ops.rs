use tracing::{info, warn};

use crate::error::{PortalError, PortalResult};
use crate::model::{Club, Event, Id, Role, User};
use crate::queries::{club_queries, event_queries};
use crate::state::AppState;

/// A mutation request against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchRole(Role),
    ToggleEventRegistration(Id<Event>),
    JoinClub(Id<Club>),
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    RoleSwitched(User),
    Registered(Id<Event>),
    RegistrationCancelled(Id<Event>),
    Joined(Id<Club>),
    AlreadyMember(Id<Club>),
}

/// Applies `command` to the session. The only place pages mutate state.
///
/// Guests may switch roles but nothing else. Membership commands must name
/// an entity that exists in the store. A rejected command leaves the
/// session untouched.
pub fn dispatch(state: &mut AppState, command: Command) -> PortalResult<Outcome> {
    match command {
        Command::SwitchRole(role) => {
            let user = state.session.switch_role(role, &mut *state.seeds).clone();
            info!(role = %role, "switched role");
            Ok(Outcome::RoleSwitched(user))
        }
        Command::ToggleEventRegistration(event_id) => {
            require_member(state, "register for events")?;
            if event_queries::find_event_by_id(&state.store, &event_id).is_none() {
                return Err(PortalError::NotFound {
                    entity_type: "Event".into(),
                    id: event_id.to_string(),
                });
            }
            if state.session.toggle_event_registration(event_id.clone()) {
                info!(%event_id, "registered for event");
                Ok(Outcome::Registered(event_id))
            } else {
                info!(%event_id, "cancelled registration");
                Ok(Outcome::RegistrationCancelled(event_id))
            }
        }
        Command::JoinClub(club_id) => {
            require_member(state, "join clubs")?;
            if club_queries::find_club_by_id(&state.store, &club_id).is_none() {
                return Err(PortalError::NotFound {
                    entity_type: "Club".into(),
                    id: club_id.to_string(),
                });
            }
            if state.session.join_club(club_id.clone()) {
                info!(%club_id, "joined club");
                Ok(Outcome::Joined(club_id))
            } else {
                Ok(Outcome::AlreadyMember(club_id))
            }
        }
    }
}

fn require_member(state: &AppState, action: &str) -> PortalResult<()> {
    if state.session.current_user().role.is_guest() {
        warn!(action, "rejected guest action");
        return Err(PortalError::GuestNotAllowed {
            action: action.to_string(),
        });
    }
    Ok(())
}

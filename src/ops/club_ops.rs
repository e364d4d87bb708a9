use tracing::info;

use crate::error::{PortalError, PortalResult};
use crate::model::{Club, Id, Role, User};
use crate::queries::club_queries;
use crate::store::MockStore;

/// Site admins manage every club; a club lead manages only their own.
pub fn can_manage_club(user: &User, club_id: &Id<Club>) -> bool {
    match user.role {
        Role::Admin => true,
        Role::ClubLead => user.club_id.as_ref() == Some(club_id),
        _ => false,
    }
}

/// Opens the (mock) management dashboard for a club.
pub fn manage_club<'a>(
    store: &'a MockStore,
    user: &User,
    club_id: &Id<Club>,
) -> PortalResult<&'a Club> {
    let club = club_queries::find_club_by_id(store, club_id).ok_or_else(|| PortalError::NotFound {
        entity_type: "Club".into(),
        id: club_id.to_string(),
    })?;

    if !can_manage_club(user, club_id) {
        return Err(PortalError::Forbidden {
            role: user.role.to_string(),
            action: format!("manage {}", club.name),
        });
    }

    info!(%club_id, "opened club management");
    Ok(club)
}

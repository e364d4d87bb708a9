use tracing::info;

use crate::error::{PortalError, PortalResult};
use crate::model::{EventCategory, User};
use crate::validation::{self, trim_optional, DISPLAY_DATE_FORMAT};

/// Raw input from the create-event form.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<EventCategory>,
}

/// A validated draft. Publishing is a mock: nothing is added to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEvent {
    pub title: String,
    /// Normalized to the store's display format.
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: EventCategory,
}

pub fn create_event(user: &User, draft: &EventDraft) -> PortalResult<PublishedEvent> {
    if !user.role.can_create_event() {
        return Err(PortalError::Forbidden {
            role: user.role.to_string(),
            action: "create events".into(),
        });
    }

    let title = validation::non_blank(&draft.title, "title")?;
    let date = validation::form_date(&draft.date, "date")?;

    let published = PublishedEvent {
        title,
        date: date.format(DISPLAY_DATE_FORMAT).to_string(),
        time: trim_optional(draft.time.as_deref()).unwrap_or_default(),
        location: trim_optional(draft.location.as_deref()).unwrap_or_default(),
        description: trim_optional(draft.description.as_deref()).unwrap_or_default(),
        category: draft.category.unwrap_or(EventCategory::Technical),
    };

    info!(title = %published.title, date = %published.date, "mock event published");
    Ok(published)
}

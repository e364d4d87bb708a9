use crate::cli::context::CLIContext;
use crate::cli::route::Route;
use crate::cli::view::Page;
use crate::queries::{club_queries, event_queries};

/// Placeholder until activity tracking exists.
const ACTIVITY_POINTS: u32 = 120;

pub fn render(ctx: &CLIContext) -> String {
    let user = ctx.user();
    let store = &ctx.state.store;
    let session = &ctx.state.session;

    let registered = event_queries::registered_events(store, session);
    let joined = club_queries::joined_clubs(store, session);

    let mut page = Page::new();
    page.heading(&user.name);
    page.line(user.role.display_name().to_uppercase());
    page.line(format!(
        "Email:  {}",
        user.email.as_deref().unwrap_or("No email provided")
    ));
    page.line(format!("ID:     {}", user.id));
    if let Some(avatar) = &user.avatar {
        page.line(format!("Avatar: {}", avatar));
    }

    page.blank();
    page.line(format!(
        "{} Events Registered | {} Clubs Joined | {} Activity Points",
        registered.len(),
        joined.len(),
        ACTIVITY_POINTS
    ));

    page.section("My Schedule");
    if registered.is_empty() {
        page.line("You haven't registered for any events yet.");
        page.line(format!("Browse Events ({})", Route::Events));
    } else {
        for event in registered {
            let (month, day) = event.date_badge();
            page.line(format!("  {:>3} {:>2}  {}", month, day, event.title));
            page.line(format!("          {} | {}", event.time, event.location));
            page.line(format!("          [{}]", event.category));
        }
    }

    page.section("My Communities");
    if joined.is_empty() {
        page.line("You aren't part of any clubs yet.");
        page.line(format!("Explore Clubs ({})", Route::Clubs));
    } else {
        for club in joined {
            page.line(format!(
                "  {}  ({})  -> /club/{}",
                club.name, club.category, club.id
            ));
        }
    }

    page.finish()
}

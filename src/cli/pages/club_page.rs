use crate::cli::context::CLIContext;
use crate::cli::route::Route;
use crate::cli::view::{Page, Toast};
use crate::model::*;
use crate::ops::session_ops::{self, Command};
use crate::queries::{club_queries, event_queries};

pub fn render(ctx: &CLIContext, club_id: &Id<Club>) -> String {
    let club = match club_queries::find_club_by_id(&ctx.state.store, club_id) {
        Some(c) => c,
        None => return render_not_found(),
    };

    let member = ctx.state.session.is_joined(&club.id);
    let mut page = Page::new();
    page.line(format!("<- Back to Directory ({})", Route::Clubs));
    page.blank();
    page.line(club.category.to_uppercase());
    page.heading(&club.name);
    if member {
        page.line("[Member]");
    } else {
        page.line("-> join  (Join Community)");
    }

    page.section("About Us");
    page.line(club.about());

    page.section("Upcoming Events");
    let events = event_queries::events_for_club(&ctx.state.store, &club.id);
    if events.is_empty() {
        page.line("No upcoming events scheduled at the moment.");
    } else {
        for event in events {
            page.line(format!(
                "  [{}] {}  ({})  -> {}",
                event.category,
                event.title,
                event.date,
                Route::Events
            ));
        }
    }

    page.section("Club Leadership");
    match &club.leads {
        Some(leads) => {
            for lead in leads {
                page.line(format!("  {} - {}", lead.name, lead.role));
            }
        }
        None => page.line("Leadership info not available."),
    }
    page.line(format!("Contact: {}", club.contact_email()));

    page.section("Join the Community");
    page.line(format!(
        "Connect with {} other students passionate about {}.",
        club.member_count, club.category
    ));
    page.line(format!("{} Members", club.member_count));

    page.finish()
}

fn render_not_found() -> String {
    let mut page = Page::new();
    page.heading("Club not found");
    page.line(format!("Back to Clubs ({})", Route::Clubs));
    page.finish()
}

/// Join button on the detail page.
pub fn handle_join(ctx: &mut CLIContext, club_id: &Id<Club>) -> Toast {
    if ctx.user().role.is_guest() {
        return Toast::error("Please login to join.");
    }

    let name = match club_queries::find_club_by_id(&ctx.state.store, club_id) {
        Some(c) => c.name.clone(),
        None => return Toast::error("Club not found"),
    };

    match session_ops::dispatch(&mut ctx.state, Command::JoinClub(club_id.clone())) {
        Ok(_) => Toast::success(format!("Welcome to {}!", name)),
        Err(e) => e.into(),
    }
}

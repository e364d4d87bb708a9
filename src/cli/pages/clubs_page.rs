use crate::cli::context::CLIContext;
use crate::cli::view::{Page, Toast};
use crate::model::*;
use crate::ops::club_ops;
use crate::ops::session_ops::{self, Command, Outcome};
use crate::queries::club_queries;

pub fn render(ctx: &CLIContext) -> String {
    let mut page = Page::new();
    page.heading("Student Communities");
    page.line("Find your tribe. Join a club to learn, build, and grow with peers who share your passion.");

    for club in club_queries::all_clubs(&ctx.state.store) {
        let member = ctx.state.session.is_joined(&club.id);
        page.blank();
        page.line(format!("  {}  ({})", club.name, club.category));
        page.line(format!("      {}", club.description));
        page.line(format!("      {} members", club.member_count));

        let mut actions = vec![format!("open /club/{}", club.id)];
        if member {
            actions.push("Member".to_string());
        } else {
            actions.push(format!("join {}", club.id));
        }
        if club_ops::can_manage_club(ctx.user(), &club.id) {
            actions.push(format!("manage {}", club.id));
        }
        page.line(format!("      -> {}", actions.join(" | ")));
    }

    page.finish()
}

/// Join button on a directory card.
pub fn handle_join(ctx: &mut CLIContext, club_id: &Id<Club>) -> Toast {
    if ctx.user().role.is_guest() {
        return Toast::error("Please login to join a club.");
    }

    let name = match club_queries::find_club_by_id(&ctx.state.store, club_id) {
        Some(c) => c.name.clone(),
        None => return Toast::error(format!("No club with id '{}'", club_id)),
    };

    match session_ops::dispatch(&mut ctx.state, Command::JoinClub(club_id.clone())) {
        Ok(Outcome::AlreadyMember(_)) => {
            Toast::success(format!("You are already a member of {}", name))
        }
        Ok(_) => Toast::success(format!("Request to join {} sent!", name)),
        Err(e) => e.into(),
    }
}

/// Manage button, shown to site admins and the club's own lead.
pub fn handle_manage(ctx: &CLIContext, club_id: &Id<Club>) -> Toast {
    match club_ops::manage_club(&ctx.state.store, ctx.user(), club_id) {
        Ok(_) => Toast::info("Club management dashboard would open here."),
        Err(e) => e.into(),
    }
}

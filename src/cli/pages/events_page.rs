use crate::cli::context::CLIContext;
use crate::cli::view::{Page, Toast};
use crate::model::*;
use crate::ops::event_ops::{self, EventDraft};
use crate::ops::session_ops::{self, Command, Outcome};
use crate::queries::event_queries;

pub fn render(ctx: &CLIContext) -> String {
    let mut page = Page::new();
    page.heading("Upcoming Events");
    page.line("Discover and participate in workshops, seminars, and fests.");
    page.blank();

    if ctx.search.is_empty() {
        page.line("Search: (none)   use 'search <text>'");
    } else {
        page.line(format!("Search: \"{}\"", ctx.search));
    }

    let mut chips = vec![CategoryFilter::All];
    chips.extend(EventCategory::FILTERABLE.iter().copied().map(CategoryFilter::Only));
    let chips: Vec<String> = chips
        .iter()
        .map(|c| {
            if *c == ctx.category {
                format!("[{}]", c.label())
            } else {
                c.label().to_string()
            }
        })
        .collect();
    page.line(format!("Categories: {}", chips.join("  ")));

    if ctx.user().role.can_create_event() {
        page.line("You can publish events with 'create-event'.");
    }

    let events = event_queries::filter_events(&ctx.state.store, &ctx.search, ctx.category);
    if events.is_empty() {
        page.blank();
        page.line("No events found matching your search.");
        return page.finish();
    }

    for event in events {
        let registered = ctx.state.session.is_registered(&event.id);
        page.blank();
        page.line(format!(
            "  {}  {}{}",
            event.id,
            event.title,
            if registered { "  [Registered]" } else { "" }
        ));
        page.line(format!(
            "      {} | {}",
            event.club_name.to_uppercase(),
            event.category.display_name().to_uppercase()
        ));
        page.line(format!("      {}", event.description));
        page.line(format!(
            "      {} | {} | {}",
            event.date, event.time, event.location
        ));
        page.line(format!(
            "      -> register {}  ({})",
            event.id,
            if registered { "Cancel Registration" } else { "Register Now" }
        ));
    }

    page.finish()
}

/// Register button: toggles registration for the current user.
pub fn handle_register(ctx: &mut CLIContext, event_id: &Id<Event>) -> Toast {
    if ctx.user().role.is_guest() {
        return Toast::error("Please login (switch role) to register.");
    }

    let title = match event_queries::find_event_by_id(&ctx.state.store, event_id) {
        Some(e) => e.title.clone(),
        None => return Toast::error(format!("No event with id '{}'", event_id)),
    };

    match session_ops::dispatch(
        &mut ctx.state,
        Command::ToggleEventRegistration(event_id.clone()),
    ) {
        Ok(Outcome::Registered(_)) => Toast::success(format!("Registered for {}", title)),
        Ok(_) => Toast::info("Registration cancelled"),
        Err(e) => e.into(),
    }
}

/// Create-event form submission. Validates and confirms; the store is not changed.
pub fn handle_create(ctx: &CLIContext, draft: &EventDraft) -> Toast {
    match event_ops::create_event(ctx.user(), draft) {
        Ok(_) => Toast::success("Event created successfully! (Mock)"),
        Err(e) => e.into(),
    }
}

/// Interactive form behind 'create-event'.
pub fn create_event_form(ctx: &CLIContext) {
    if !ctx.user().role.can_create_event() {
        ctx.print_toast(&Toast::error(format!(
            "{} cannot create events.",
            ctx.user().role
        )));
        return;
    }

    println!("Create New Event");
    let title = match ctx.prompt("Event title: ") {
        Some(s) => s,
        None => return,
    };
    let date = ctx.prompt("Date (YYYY-MM-DD): ").unwrap_or_default();
    let time = ctx.prompt("Time (optional): ");
    let location = ctx.prompt("Location (optional): ");
    let description = ctx.prompt("Description (optional): ");

    let labels: Vec<&str> = EventCategory::FILTERABLE
        .iter()
        .map(|c| c.display_name())
        .collect();
    let category = match ctx.prompt(&format!("Category [{}] (default Technical): ", labels.join("/"))) {
        Some(s) if !s.is_empty() => match s.parse::<EventCategory>() {
            Ok(c) => Some(c),
            Err(e) => {
                ctx.print_error(&e);
                return;
            }
        },
        _ => None,
    };

    let draft = EventDraft {
        title,
        date,
        time,
        location,
        description,
        category,
    };
    ctx.print_toast(&handle_create(ctx, &draft));
}

pub mod context;
pub mod nav;
pub mod pages;
pub mod role_switcher;
pub mod route;
pub mod view;

use tracing::info;

use crate::config::Config;
use crate::error::{PortalError, PortalResult};
use crate::model::*;
use crate::ops::session_ops::{self, Command};
use crate::session::identity::SeedSource;
use crate::session::{FixedSeeds, RandomSeeds};
use crate::state::AppState;
use crate::store::MockStore;
use context::CLIContext;
use pages::{club_page, clubs_page, events_page};
use route::Route;
use view::Toast;

/// Builds the application state described by `config`.
pub fn bootstrap(config: &Config) -> PortalResult<CLIContext> {
    let store = MockStore::seeded();
    store.check_references()?;

    let seeds: Box<dyn SeedSource> = match &config.avatar_seed {
        Some(seed) => Box::new(FixedSeeds::new(seed.clone())),
        None => Box::new(RandomSeeds),
    };

    let mut state = AppState::new(store, seeds);
    if config.role != Role::Guest {
        session_ops::dispatch(&mut state, Command::SwitchRole(config.role))?;
    }

    Ok(CLIContext::new(state, config.start_route.clone()))
}

/// Run the interactive REPL.
pub fn run(config: &Config) -> PortalResult<()> {
    let mut ctx = bootstrap(config)?;
    info!(route = %ctx.route, role = %ctx.user().role, "portal started");

    println!("PEC Portal");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();
    show_page(&ctx);

    repl_loop(&mut ctx);
    Ok(())
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // A bare path navigates, like typing into the address bar.
        if input.starts_with('/') || input.starts_with('#') {
            go(ctx, input);
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Navigation
            "go" | "open" => go(ctx, args),
            "home" => navigate(ctx, Route::Home),
            "events" => navigate(ctx, Route::Events),
            "clubs" => navigate(ctx, Route::Clubs),
            "dashboard" | "me" => navigate(ctx, Route::Dashboard),
            "club" => match Id::parse(args) {
                Some(id) => navigate(ctx, Route::Club(id)),
                None => println!("Usage: club <id>"),
            },
            "show" | "refresh" => show_page(ctx),

            // Events page
            "search" => search(ctx, args),
            "category" => category(ctx, args),
            "register" => match Id::parse(args) {
                Some(id) => {
                    let toast = events_page::handle_register(ctx, &id);
                    ctx.print_toast(&toast);
                }
                None => println!("Usage: register <event-id>"),
            },
            "create-event" => events_page::create_event_form(ctx),

            // Clubs
            "join" => join(ctx, args),
            "manage" => match Id::parse(args) {
                Some(id) => ctx.print_toast(&clubs_page::handle_manage(ctx, &id)),
                None => println!("Usage: manage <club-id>"),
            },

            // Identity
            "roles" => println!("{}", role_switcher::render(ctx)),
            "role" => match args.parse::<Role>() {
                Ok(role) => {
                    let toast = role_switcher::handle_switch(ctx, role);
                    ctx.print_toast(&toast);
                }
                Err(e) => ctx.print_error(&e),
            },
            "whoami" => whoami(ctx),
            "snapshot" => snapshot(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn show_page(ctx: &CLIContext) {
    let mut page = nav::navbar(ctx);
    page.line(pages::render_current(ctx));
    page.append(nav::footer());
    println!("{}", page.finish());
}

fn navigate(ctx: &mut CLIContext, route: Route) {
    ctx.navigate(route);
    show_page(ctx);
}

fn go(ctx: &mut CLIContext, path: &str) {
    match Route::parse(path) {
        Ok(route) => navigate(ctx, route),
        Err(e) => ctx.print_error(&e),
    }
}

fn search(ctx: &mut CLIContext, text: &str) {
    if ctx.route != Route::Events {
        ctx.navigate(Route::Events);
    }
    ctx.search = text.to_string();
    show_page(ctx);
}

fn category(ctx: &mut CLIContext, name: &str) {
    match name.parse::<CategoryFilter>() {
        Ok(filter) => {
            if ctx.route != Route::Events {
                ctx.navigate(Route::Events);
            }
            ctx.category = filter;
            show_page(ctx);
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// On a club's own page 'join' needs no argument and uses the detail
/// page wording; anywhere else it acts like the directory button.
fn join(ctx: &mut CLIContext, args: &str) {
    let current = match &ctx.route {
        Route::Club(id) => Some(id.clone()),
        _ => None,
    };

    let toast: Toast = match (Id::parse(args), current) {
        (None, Some(id)) => club_page::handle_join(ctx, &id),
        (Some(id), Some(current)) if id == current => club_page::handle_join(ctx, &id),
        (Some(id), _) => clubs_page::handle_join(ctx, &id),
        (None, None) => {
            println!("Usage: join <club-id>");
            return;
        }
    };
    ctx.print_toast(&toast);
}

fn whoami(ctx: &CLIContext) {
    let user = ctx.user();
    println!("{} ({})", user.name, user.role);
    println!("  Email: {}", user.email.as_deref().unwrap_or("No email provided"));
    if let Some(club_id) = &user.club_id {
        println!("  Leads: {}", club_id);
    }
    println!(
        "  {} event(s) registered, {} club(s) joined",
        ctx.state.session.registered_events().len(),
        ctx.state.session.joined_clubs().len()
    );
}

fn snapshot(ctx: &CLIContext) {
    match serde_json::to_string_pretty(&ctx.state.session) {
        Ok(json) => println!("{}", json),
        Err(e) => ctx.print_error(&PortalError::from(e)),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Navigation:
    /path, go <path>        Open a page (/, /events, /clubs, /dashboard, /club/<id>)
    home | events | clubs   Shortcuts for the main pages
    dashboard               Your profile, schedule and communities
    club <id>               Club detail page
    show                    Render the current page again

  Events:
    search [text]           Filter by title or club name (empty clears)
    category <name>         All, Technical, Cultural, Workshop, Seminar
    register <event-id>     Register, or cancel an existing registration
    create-event            Publish an event (faculty, club leads, admins)

  Clubs:
    join [club-id]          Join a club (no id needed on its detail page)
    manage <club-id>        Open club management (admins, the club's lead)

  Identity:
    roles                   List demo roles
    role <name>             Switch role (guest, student, faculty, club-lead, admin)
    whoami                  Current identity and memberships
    snapshot                Session as JSON

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Guests can browse but must switch role before joining or registering
  - Nothing is saved; restarting resets the session"#);
}

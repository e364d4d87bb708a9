use portal::cli::bootstrap;
use portal::cli::context::CLIContext;
use portal::cli::pages::{self, club_page, clubs_page, dashboard_page, events_page, home_page};
use portal::cli::role_switcher;
use portal::cli::route::Route;
use portal::cli::view::ToastKind;
use portal::config::Config;
use portal::model::*;
use portal::ops::event_ops::EventDraft;
use portal::session::FixedSeeds;
use portal::state::AppState;
use portal::store::MockStore;

fn setup() -> CLIContext {
    let state = AppState::new(MockStore::seeded(), Box::new(FixedSeeds::new("seed")));
    CLIContext::new(state, Route::Home)
}

fn setup_as(role: Role) -> CLIContext {
    let mut ctx = setup();
    role_switcher::handle_switch(&mut ctx, role);
    ctx
}

// ==========================================================================
// BOOTSTRAP TESTS
// ==========================================================================

#[test]
fn bootstrap_applies_config() {
    let config = Config {
        role: Role::ClubLead,
        avatar_seed: Some("fixed".into()),
        start_route: Route::Club(Id::new("mulearn")),
    };
    let ctx = bootstrap(&config).unwrap();
    assert_eq!(ctx.user().role, Role::ClubLead);
    assert_eq!(ctx.route, Route::Club(Id::new("mulearn")));
}

#[test]
fn bootstrap_defaults_to_guest_home() {
    let ctx = bootstrap(&Config::default()).unwrap();
    assert_eq!(ctx.user().name, "Visitor");
    assert_eq!(ctx.route, Route::Home);
}

// ==========================================================================
// HOME PAGE TESTS
// ==========================================================================

#[test]
fn home_lists_every_notice() {
    let ctx = setup();
    let out = home_page::render(&ctx);
    assert!(out.contains("Digital Noticeboard"));
    assert!(out.contains("[URGENT] Semester Exam Registration"));
    assert!(out.contains("Scholarship Applications Open"));
}

// ==========================================================================
// EVENTS PAGE TESTS
// ==========================================================================

#[test]
fn events_page_lists_all_by_default() {
    let ctx = setup();
    let out = events_page::render(&ctx);
    for title in ["Hack The Future", "IEEE Global Summit", "Startup Pitch Day", "Cultural Night", "Python Bootcamp"] {
        assert!(out.contains(title), "missing {}", title);
    }
    assert!(out.contains("[All]"));
    assert!(!out.contains("create-event"));
}

#[test]
fn events_page_applies_search() {
    let mut ctx = setup();
    ctx.navigate(Route::Events);
    ctx.search = "python".into();
    let out = events_page::render(&ctx);
    assert!(out.contains("Python Bootcamp"));
    assert!(!out.contains("Hack The Future"));
}

#[test]
fn events_page_empty_result() {
    let mut ctx = setup();
    ctx.search = "python".into();
    ctx.category = CategoryFilter::Only(EventCategory::Seminar);
    let out = events_page::render(&ctx);
    assert!(out.contains("No events found matching your search."));
    assert!(out.contains("[Seminar]"));
}

#[test]
fn leaving_events_clears_filters() {
    let mut ctx = setup();
    ctx.navigate(Route::Events);
    ctx.search = "ieee".into();
    ctx.category = CategoryFilter::Only(EventCategory::Seminar);
    ctx.navigate(Route::Clubs);
    assert!(ctx.search.is_empty());
    assert_eq!(ctx.category, CategoryFilter::All);
}

#[test]
fn staff_see_create_hint() {
    let ctx = setup_as(Role::Faculty);
    assert!(events_page::render(&ctx).contains("create-event"));
}

#[test]
fn guest_register_is_rejected() {
    let mut ctx = setup();
    let toast = events_page::handle_register(&mut ctx, &Id::new("e1"));
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please login (switch role) to register.");
    assert!(ctx.state.session.registered_events().is_empty());
}

#[test]
fn student_register_and_cancel_toasts() {
    let mut ctx = setup_as(Role::Student);
    let toast = events_page::handle_register(&mut ctx, &Id::new("e5"));
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Registered for Python Bootcamp");
    assert!(events_page::render(&ctx).contains("[Registered]"));

    let toast = events_page::handle_register(&mut ctx, &Id::new("e5"));
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.message, "Registration cancelled");
}

#[test]
fn register_unknown_event_toast() {
    let mut ctx = setup_as(Role::Student);
    let toast = events_page::handle_register(&mut ctx, &Id::new("e99"));
    assert!(toast.is_error());
}

#[test]
fn create_event_toasts() {
    let ctx = setup_as(Role::Admin);
    let ok = EventDraft {
        title: "Robotics Expo".into(),
        date: "2023-12-05".into(),
        ..EventDraft::default()
    };
    let toast = events_page::handle_create(&ctx, &ok);
    assert_eq!(toast.message, "Event created successfully! (Mock)");

    let blank = EventDraft::default();
    assert!(events_page::handle_create(&ctx, &blank).is_error());
}

// ==========================================================================
// CLUBS PAGE TESTS
// ==========================================================================

#[test]
fn guest_join_is_rejected() {
    let mut ctx = setup();
    let toast = clubs_page::handle_join(&mut ctx, &Id::new("mulearn"));
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please login to join a club.");
    assert!(ctx.state.session.joined_clubs().is_empty());
}

#[test]
fn student_join_from_directory() {
    let mut ctx = setup_as(Role::Student);
    let toast = clubs_page::handle_join(&mut ctx, &Id::new("mulearn"));
    assert_eq!(toast.message, "Request to join Mulearn sent!");

    let again = clubs_page::handle_join(&mut ctx, &Id::new("mulearn"));
    assert_eq!(again.kind, ToastKind::Success);
    assert_eq!(again.message, "You are already a member of Mulearn");
    assert_eq!(ctx.state.session.joined_clubs().len(), 1);
}

#[test]
fn directory_shows_manage_for_lead_only_on_own_club() {
    let ctx = setup_as(Role::ClubLead);
    let out = clubs_page::render(&ctx);
    assert!(out.contains("manage mulearn"));
    assert!(!out.contains("manage ieee"));
}

#[test]
fn manage_toasts() {
    let ctx = setup_as(Role::ClubLead);
    let ok = clubs_page::handle_manage(&ctx, &Id::new("mulearn"));
    assert_eq!(ok.message, "Club management dashboard would open here.");
    assert!(clubs_page::handle_manage(&ctx, &Id::new("ieee")).is_error());
}

// ==========================================================================
// CLUB DETAIL PAGE TESTS
// ==========================================================================

#[test]
fn unknown_club_renders_not_found() {
    let mut ctx = setup();
    ctx.navigate(Route::Club(Id::new("nonexistent")));
    let out = pages::render_current(&ctx);
    assert!(out.contains("Club not found"));
    assert!(out.contains("Back to Clubs (/clubs)"));
}

#[test]
fn club_detail_shows_events_and_leads() {
    let ctx = setup();
    let out = club_page::render(&ctx, &Id::new("mulearn"));
    assert!(out.contains("Mulearn is the campus chapter"));
    assert!(out.contains("Hack The Future"));
    assert!(out.contains("Python Bootcamp"));
    assert!(out.contains("Alice Smith - Campus Lead"));
    assert!(out.contains("contact@mulearn.pec.edu"));
    assert!(out.contains("154 Members"));
}

#[test]
fn club_detail_fallbacks() {
    let ctx = setup();
    let out = club_page::render(&ctx, &Id::new("csi"));
    assert!(out.contains("No upcoming events scheduled at the moment."));
    assert!(out.contains("Leadership info not available."));
}

#[test]
fn detail_join_welcomes() {
    let mut ctx = setup_as(Role::Student);
    let toast = club_page::handle_join(&mut ctx, &Id::new("ieee"));
    assert_eq!(toast.message, "Welcome to IEEE!");
    assert!(club_page::render(&ctx, &Id::new("ieee")).contains("[Member]"));
}

#[test]
fn detail_join_rejects_guest() {
    let mut ctx = setup();
    let toast = club_page::handle_join(&mut ctx, &Id::new("ieee"));
    assert_eq!(toast.message, "Please login to join.");
    assert!(ctx.state.session.joined_clubs().is_empty());
}

// ==========================================================================
// DASHBOARD TESTS
// ==========================================================================

#[test]
fn empty_dashboard() {
    let ctx = setup();
    let out = dashboard_page::render(&ctx);
    assert!(out.contains("Visitor"));
    assert!(out.contains("0 Events Registered | 0 Clubs Joined | 120 Activity Points"));
    assert!(out.contains("You haven't registered for any events yet."));
    assert!(out.contains("Explore Clubs (/clubs)"));
}

#[test]
fn dashboard_lists_schedule_and_communities() {
    let mut ctx = setup_as(Role::Student);
    events_page::handle_register(&mut ctx, &Id::new("e1"));
    clubs_page::handle_join(&mut ctx, &Id::new("iedc"));

    let out = dashboard_page::render(&ctx);
    assert!(out.contains("John Doe"));
    assert!(out.contains("STUDENT"));
    assert!(out.contains("1 Events Registered | 1 Clubs Joined"));
    assert!(out.contains("NOV 12  Hack The Future"));
    assert!(out.contains("IEDC  (Entrepreneurship)  -> /club/iedc"));
}

// ==========================================================================
// ROLE SWITCHER TESTS
// ==========================================================================

#[test]
fn role_switcher_marks_current_role() {
    let ctx = setup_as(Role::Faculty);
    let out = role_switcher::render(&ctx);
    assert!(out.contains("* Faculty"));
    assert!(out.contains("  Guest"));
}

#[test]
fn switch_toast() {
    let mut ctx = setup();
    let toast = role_switcher::handle_switch(&mut ctx, Role::Admin);
    assert_eq!(toast.message, "Switched to Website Admin");
    assert_eq!(ctx.user().name, "Admin User");
}

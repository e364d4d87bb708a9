use crate::cli::context::CLIContext;
use crate::cli::view::Page;
use crate::queries::notice_queries;

pub fn render(ctx: &CLIContext) -> String {
    let mut page = Page::new();

    page.heading("Your campus, connected.");
    page.line("Notices, events and clubs at PEC in one place.");
    page.line("Explore events (/events) or find a club (/clubs).");

    page.section("Digital Noticeboard");
    for notice in notice_queries::all_notices(&ctx.state.store) {
        page.line(format!(
            "  [{}] {}  ({})",
            notice.notice_type.label(),
            notice.title,
            notice.date
        ));
        page.line(format!("      {}", notice.content));
    }

    page.section("Everything you need, all in one place.");
    page.line("  Live Notices        Real-time updates from administration and departments.");
    page.line("  Event Registration  Workshops, hackathons and seminars.  -> /events");
    page.line("  Club Communities    Join technical and cultural clubs.   -> /clubs");

    page.finish()
}

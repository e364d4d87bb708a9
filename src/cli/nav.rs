use crate::cli::context::CLIContext;
use crate::cli::route::Route;
use crate::cli::view::Page;

fn nav_links() -> [(&'static str, Route); 3] {
    [
        ("Home", Route::Home),
        ("Events", Route::Events),
        ("Clubs", Route::Clubs),
    ]
}

pub fn navbar(ctx: &CLIContext) -> Page {
    let links: Vec<String> = nav_links()
        .iter()
        .map(|(name, route)| {
            if *route == ctx.route {
                format!("[{}]", name)
            } else {
                name.to_string()
            }
        })
        .collect();

    let user = ctx.user();
    let mut page = Page::new();
    page.line(format!(
        "PEC Portal | {} | {} ({})",
        links.join("  "),
        user.name,
        user.role
    ));
    page.line("-".repeat(60));
    page
}

pub fn footer() -> Page {
    let mut page = Page::new();
    page.blank();
    page.line("-".repeat(60));
    page.line("PEC Portal - Events, clubs and notices for the campus.");
    page
}

pub mod home_page;
pub mod events_page;
pub mod clubs_page;
pub mod club_page;
pub mod dashboard_page;

use crate::cli::context::CLIContext;
use crate::cli::route::Route;

/// Body of the page for the current route.
pub fn render_current(ctx: &CLIContext) -> String {
    match &ctx.route {
        Route::Home => home_page::render(ctx),
        Route::Events => events_page::render(ctx),
        Route::Clubs => clubs_page::render(ctx),
        Route::Dashboard => dashboard_page::render(ctx),
        Route::Club(id) => club_page::render(ctx, id),
    }
}

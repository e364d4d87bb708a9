use std::io::{self, Write};
use tracing::debug;

use crate::cli::route::Route;
use crate::cli::view::Toast;
use crate::model::*;
use crate::state::AppState;

pub struct CLIContext {
    pub state: AppState,
    pub route: Route,
    /// Events page search box.
    pub search: String,
    /// Events page category chip.
    pub category: CategoryFilter,
}

impl CLIContext {
    pub fn new(state: AppState, route: Route) -> Self {
        Self {
            state,
            route,
            search: String::new(),
            category: CategoryFilter::All,
        }
    }

    pub fn user(&self) -> &User {
        self.state.session.current_user()
    }

    /// Moves to `route`. Leaving the events page drops its filters.
    pub fn navigate(&mut self, route: Route) {
        if self.route == Route::Events && route != Route::Events {
            self.search.clear();
            self.category = CategoryFilter::All;
        }
        debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    pub fn print_toast(&self, toast: &Toast) {
        println!("{}", toast);
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::PortalError) {
        println!("Error: {}", e);
    }
}

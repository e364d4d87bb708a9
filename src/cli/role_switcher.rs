use crate::cli::context::CLIContext;
use crate::cli::view::{Page, Toast};
use crate::model::Role;
use crate::ops::session_ops::{self, Command};

pub fn render(ctx: &CLIContext) -> String {
    let current = ctx.user().role;
    let mut page = Page::new();
    page.line("Demo Roles:");
    for role in Role::ALL {
        let marker = if *role == current { "*" } else { " " };
        page.line(format!("  {} {}", marker, role));
    }
    page.line("Use 'role <name>' to switch.");
    page.finish()
}

pub fn handle_switch(ctx: &mut CLIContext, role: Role) -> Toast {
    match session_ops::dispatch(&mut ctx.state, Command::SwitchRole(role)) {
        Ok(_) => Toast::info(format!("Switched to {}", role)),
        Err(e) => e.into(),
    }
}

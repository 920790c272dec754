use anyhow::Result;
use colored::Colorize;

use rucscope_application::{LogQueryController, RouteGuard};
use rucscope_core::lookup::IdentifierKind;
use rucscope_core::navigation::Route;
use rucscope_core::session::SessionStore;

use super::{auth, logs, lookup};
use crate::context::AppContext;
use crate::navigator::TerminalNavigator;

/// Resolves `path` to a view, runs the route guard, and renders whichever
/// view the user ends up on.
pub async fn run(ctx: &AppContext, path: &str) -> Result<()> {
    let route = Route::from_path(path);
    let navigator = TerminalNavigator::new(route);
    let activation = RouteGuard::new(ctx.session_store.clone()).enter(route, &navigator);
    tracing::debug!("[Open] {} -> {:?}", path, activation.state);

    match navigator.current() {
        Route::Home => {
            println!("{}", "Record lookup".bold());
            lookup::print_mask_hint(IdentifierKind::Ruc, "20100070970");
            lookup::print_mask_hint(IdentifierKind::Dni, "12345678");
            println!("{}", "Run: rucscope lookup <ruc|dni> <identifier>".bright_black());
            Ok(())
        }
        Route::Login => {
            if ctx.session_store.is_authenticated() {
                auth::whoami(ctx)
            } else {
                println!("{}", "Log in with: rucscope login --email <email>".yellow());
                Ok(())
            }
        }
        Route::Dashboard => {
            let controller = LogQueryController::with_limit(
                ctx.backend.clone(),
                ctx.session_store.clone(),
                ctx.config.page_size,
            );
            logs::show_page(&controller, 1, false).await
        }
    }
}

use anyhow::{Result, bail};
use colored::Colorize;

use rucscope_application::{LogQueryController, QueryOutcome, RouteGuard};
use rucscope_core::audit_log::LogFilter;
use rucscope_core::navigation::Route;

use super::render;
use crate::context::AppContext;
use crate::navigator::TerminalNavigator;

/// Shows one page of the audit log. Requires a session.
pub async fn list(ctx: &AppContext, filter: LogFilter, page: u32, json: bool) -> Result<()> {
    let navigator = TerminalNavigator::new(Route::Dashboard);
    let activation = RouteGuard::new(ctx.session_store.clone()).enter(Route::Dashboard, &navigator);
    if !activation.renders_content() {
        bail!("Not logged in. Run `rucscope login --email <email>` first");
    }

    let controller = LogQueryController::with_limit(
        ctx.backend.clone(),
        ctx.session_store.clone(),
        ctx.config.page_size,
    );
    controller.set_filter(filter).await;
    show_page(&controller, page, json).await
}

pub(crate) async fn show_page(controller: &LogQueryController, page: u32, json: bool) -> Result<()> {
    let outcome = controller.go_to_page(page).await;
    let state = controller.snapshot().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    match outcome {
        QueryOutcome::Applied => {}
        QueryOutcome::Failed(e) => {
            if e.is_authentication() {
                eprintln!("{}", "Session rejected, run `rucscope login` again".yellow());
            }
            bail!(e.user_message());
        }
        QueryOutcome::Superseded => return Ok(()),
    }

    if json {
        return Ok(());
    }

    println!("{}", render::log_header().bold());
    for entry in &state.logs {
        let row = render::log_row(entry);
        if entry.success {
            println!("{row}");
        } else {
            println!("{}", row.red());
        }
    }
    println!();
    println!("{}", render::summary(&state).bright_black());
    if state.pagination.total_pages > 1 {
        println!("{}", render::page_picker(&state));
    }
    Ok(())
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use rucscope_application::AuthGateway;
use rucscope_core::navigation::{Navigator, Route};

use crate::context::AppContext;
use crate::navigator::TerminalNavigator;

fn gateway(ctx: &AppContext) -> AuthGateway {
    AuthGateway::new(ctx.backend.clone(), ctx.session_store.clone())
}

fn read_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn login(ctx: &AppContext, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };

    let gateway = gateway(ctx);
    let response = gateway.login(email, &password).await?;
    let user = response.user.clone();
    let navigation = gateway.complete_login(response)?;

    println!(
        "{} {} ({}, {})",
        "Logged in as".green(),
        user.name.bold(),
        user.email,
        user.role
    );
    TerminalNavigator::new(Route::Login).apply(navigation);
    Ok(())
}

/// Never fails: a backend or storage problem is only logged.
pub async fn logout(ctx: &AppContext) {
    let navigation = gateway(ctx).logout().await;
    println!("{}", "Logged out".green());
    TerminalNavigator::new(Route::Dashboard).apply(navigation);
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    let gateway = gateway(ctx);
    match gateway.current_user() {
        Some(user) if gateway.is_authenticated() => {
            println!(
                "[{}] {} <{}> {}",
                user.initial().to_string().bold(),
                user.name,
                user.email,
                user.role.bright_black()
            );
        }
        _ => println!("{}", "Not logged in".yellow()),
    }
    Ok(())
}

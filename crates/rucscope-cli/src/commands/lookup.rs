use anyhow::{Result, bail};
use colored::Colorize;

use rucscope_application::{LookupOutcome, RecordLookupController};
use rucscope_core::lookup::IdentifierKind;

use super::render;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, kind: IdentifierKind, identifier: &str) -> Result<()> {
    // Length is not enforced; the backend decides.
    if identifier.trim().len() != kind.digits() {
        eprintln!(
            "{}",
            format!("note: a {} usually has {} digits", kind.to_string().to_uppercase(), kind.digits())
                .bright_black()
        );
    }

    let controller = RecordLookupController::new(ctx.backend.clone(), ctx.session_store.clone());
    match controller.search(kind, identifier).await {
        LookupOutcome::Found(record) => {
            println!("{}", format!("{} {}", kind.to_string().to_uppercase(), identifier).bold());
            for line in render::record_lines(&record) {
                println!("  {line}");
            }
            Ok(())
        }
        LookupOutcome::Failed(e) => bail!(e.user_message()),
        LookupOutcome::Superseded => Ok(()),
    }
}

/// Prints the masked form of `raw` for `kind`, as an input field would
/// accept it.
pub fn print_mask_hint(kind: IdentifierKind, raw: &str) {
    let mut example = RecordLookupController::mask_input(kind, raw);
    if example.is_empty() {
        example.push('-');
    }
    println!(
        "{} {} digits, e.g. {}",
        kind.to_string().to_uppercase().bold(),
        kind.digits(),
        example.bright_black()
    );
}

//! Command handlers dispatched by the shell loop.

use uuid::Uuid;

use crate::cli::context::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::{forms, output, render};
use crate::currency::format_usd;
use crate::ledger::{DraftField, SubmitOutcome};

pub(crate) const COMMANDS: &[(&str, &str)] = &[
    ("overview", "Category breakdown with relative spend bars"),
    ("list", "Transactions, newest first"),
    ("add", "Record a new expense: add [<description> <amount> [category]]"),
    ("delete", "Delete an expense: delete [<id>]"),
    ("total", "Total spend across all records"),
    ("help", "Show available commands"),
    ("exit", "Leave the shell"),
];

pub(crate) fn overview(context: &ShellContext) {
    let summary = context.ledger().recompute();
    output::section("Portfolio Overview");
    for line in render::breakdown_lines(&summary) {
        println!("{line}");
    }
    println!("\n{}", render::total_line(&summary));
}

pub(crate) fn list(context: &ShellContext) {
    output::section("Recent Transactions");
    if context.ledger().is_empty() {
        output::info("No transactions recorded.");
        return;
    }
    for line in render::transaction_lines(context.ledger().records()) {
        println!("{line}");
    }
}

pub(crate) fn total(context: &ShellContext) {
    let summary = context.ledger().recompute();
    println!("{}", render::total_line(&summary));
}

pub(crate) fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            if context.mode == CliMode::Script {
                return Err(CommandError::Usage("add <description> <amount> [category]"));
            }
            forms::run_entry_wizard(context)
        }
        [description, amount] => one_shot_add(context, description, amount, None),
        [description, amount, category] => one_shot_add(context, description, amount, Some(category)),
        _ => Err(CommandError::Usage("add <description> <amount> [category]")),
    }
}

/// Batch path: fill the draft from arguments and drive the submit gate
/// once. A rejected one-shot is reported and its draft discarded.
fn one_shot_add(
    context: &mut ShellContext,
    description: &str,
    amount: &str,
    category: Option<&str>,
) -> CommandResult {
    let form = context.form_mut();
    form.open();
    form.update_field(DraftField::Description, description);
    form.update_field(DraftField::Amount, amount);
    if let Some(category) = category {
        form.update_field(DraftField::Category, category);
    }

    match context.submit_entry() {
        SubmitOutcome::Committed(_) => {
            let front = &context.ledger().records()[0];
            output::success(format!(
                "Recorded `{}` ({}).",
                front.description,
                format_usd(front.amount)
            ));
        }
        SubmitOutcome::Rejected(reason) => {
            output::warning(format!("{reason}; entry not recorded."));
            context.form_mut().cancel();
        }
    }
    Ok(())
}

pub(crate) fn delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            if context.mode == CliMode::Script {
                return Err(CommandError::Usage("delete <id>"));
            }
            forms::run_delete_picker(context)
        }
        [needle] => {
            match find_record(context, needle) {
                IdMatch::Unique(id) => {
                    if let Some(removed) = context.ledger_mut().remove_record(id) {
                        output::success(format!(
                            "Deleted `{}` ({}).",
                            removed.description,
                            format_usd(removed.amount)
                        ));
                    }
                }
                IdMatch::Ambiguous(count) => {
                    output::warning(format!(
                        "`{needle}` matches {count} entries; use more of the id."
                    ));
                }
                IdMatch::None => {
                    output::info(format!("No entry with id `{needle}`."));
                }
            }
            Ok(())
        }
        _ => Err(CommandError::Usage("delete <id>")),
    }
}

pub(crate) fn help() {
    output::section("Commands");
    let width = COMMANDS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, summary) in COMMANDS {
        println!("  {name:<width$}  {summary}");
    }
}

enum IdMatch {
    Unique(Uuid),
    Ambiguous(usize),
    None,
}

/// Accepts a full id or a unique prefix of its hyphenated form.
fn find_record(context: &ShellContext, needle: &str) -> IdMatch {
    if let Ok(id) = Uuid::parse_str(needle) {
        let known = context.ledger().records().iter().any(|r| r.id == id);
        return if known { IdMatch::Unique(id) } else { IdMatch::None };
    }

    let needle = needle.to_lowercase();
    let matches: Vec<Uuid> = context
        .ledger()
        .records()
        .iter()
        .filter(|record| record.id.to_string().starts_with(&needle))
        .map(|record| record.id)
        .collect();
    match matches.as_slice() {
        [] => IdMatch::None,
        [id] => IdMatch::Unique(*id),
        many => IdMatch::Ambiguous(many.len()),
    }
}

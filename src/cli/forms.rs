//! Interactive prompts that drive the core entry form.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::currency::{format_short_date, format_usd};
use crate::domain::category::CATEGORIES;
use crate::domain::Displayable;
use crate::ledger::{DraftField, SubmitOutcome};

/// Collects the three draft fields, then drives the submit gate. A
/// rejected submission keeps the form open with its draft intact and
/// prompts again; Esc or an interrupt cancels the form.
pub(crate) fn run_entry_wizard(context: &mut ShellContext) -> CommandResult {
    context.form_mut().open();

    loop {
        let draft = context.form().draft().clone();

        let Some(description) = text_field("Description", &draft.description)? else {
            return cancel_entry(context);
        };
        context
            .form_mut()
            .update_field(DraftField::Description, description);

        let Some(amount) = text_field("Amount", &draft.amount)? else {
            return cancel_entry(context);
        };
        context.form_mut().update_field(DraftField::Amount, amount);

        let Some(category) = category_field(&draft.category)? else {
            return cancel_entry(context);
        };
        context.form_mut().update_field(DraftField::Category, category);

        match context.submit_entry() {
            SubmitOutcome::Committed(_) => {
                let front = &context.ledger().records()[0];
                output::success(format!(
                    "Recorded `{}` ({}).",
                    front.description,
                    format_usd(front.amount)
                ));
                return Ok(());
            }
            SubmitOutcome::Rejected(reason) => {
                output::warning(reason.to_string());
            }
        }
    }
}

/// Select-based picker over the current records for interactive deletion.
pub(crate) fn run_delete_picker(context: &mut ShellContext) -> CommandResult {
    if context.ledger().is_empty() {
        output::info("Nothing to delete.");
        return Ok(());
    }

    let labels: Vec<String> = context
        .ledger()
        .records()
        .iter()
        .map(|record| {
            format!(
                "{}  −{}  {}",
                record.display_label(),
                format_usd(record.amount),
                format_short_date(record.date)
            )
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Delete which entry?")
        .items(&labels)
        .default(0)
        .interact_opt();
    let Some(index) = interpret(selection)?.flatten() else {
        output::info("Deletion cancelled.");
        return Ok(());
    };

    let id = context.ledger().records()[index].id;
    if let Some(removed) = context.ledger_mut().remove_record(id) {
        output::success(format!(
            "Deleted `{}` ({}).",
            removed.description,
            format_usd(removed.amount)
        ));
    }
    Ok(())
}

fn cancel_entry(context: &mut ShellContext) -> CommandResult {
    context.form_mut().cancel();
    output::info("Entry cancelled.");
    Ok(())
}

fn text_field(prompt: &str, initial: &str) -> Result<Option<String>, CommandError> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .with_initial_text(initial)
        .interact_text();
    interpret(input)
}

fn category_field(current: &str) -> Result<Option<String>, CommandError> {
    let labels: Vec<String> = CATEGORIES
        .iter()
        .map(|category| format!("{} {}", category.icon, category.name))
        .collect();
    let default = CATEGORIES
        .iter()
        .position(|category| category.name == current)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .items(&labels)
        .default(default)
        .interact_opt();
    Ok(interpret(selection)?
        .flatten()
        .map(|index| CATEGORIES[index].name.to_string()))
}

/// Maps an interrupted prompt to `None` (cancel) and passes other prompt
/// failures through.
fn interpret<T>(result: dialoguer::Result<T>) -> Result<Option<T>, CommandError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}

//! Shell context: the one place owning the ledger and the entry form.

use chrono::Local;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::{commands, output};
use crate::ledger::{EntryForm, ExpenseLedger, SubmitOutcome};

/// How the shell consumes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures surfaced by individual commands. None of them stop the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Mutable state threaded through every command handler by reference.
///
/// Exactly one instance exists per running shell; nothing else holds the
/// ledger or the form.
pub struct ShellContext {
    pub mode: CliMode,
    ledger: ExpenseLedger,
    form: EntryForm,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            ledger: ExpenseLedger::seeded(),
            form: EntryForm::new(),
        }
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ExpenseLedger {
        &mut self.ledger
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    /// Drives the form's submit gate against the owned ledger, stamping
    /// today's calendar date.
    pub fn submit_entry(&mut self) -> SubmitOutcome {
        self.form.submit(&mut self.ledger, Local::now().date_naive())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "overview" => {
                commands::overview(self);
                Ok(LoopControl::Continue)
            }
            "list" => {
                commands::list(self);
                Ok(LoopControl::Continue)
            }
            "total" => {
                commands::total(self);
                Ok(LoopControl::Continue)
            }
            "add" => commands::add(self, args).map(|()| LoopControl::Continue),
            "delete" => commands::delete(self, args).map(|()| LoopControl::Continue),
            "help" => {
                commands::help();
                Ok(LoopControl::Continue)
            }
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    pub(crate) fn command_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            commands::COMMANDS.iter().map(|(name, _)| *name).collect();
        names.push("quit");
        names
    }

    /// Prints the error; unknown commands additionally get a closest-match
    /// suggestion.
    pub(crate) fn report_error(&self, err: &CommandError) {
        output::error(err);
        if let CommandError::Unknown(input) = err {
            self.suggest(input);
        }
    }

    fn suggest(&self, input: &str) {
        let mut suggestions: Vec<(usize, &'static str)> = Self::command_names()
            .into_iter()
            .map(|name| (levenshtein(name, input), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }
}

//! Line-driven session loop

use crate::application::{FormState, ReviewSession, SubmitOutcome};
use crate::cli::commands::SessionCommand;
use crate::cli::output::{
    format_draft, format_entry_card, format_entry_list, format_missing_fields, HELP,
};
use crate::error::Result;
use crate::infrastructure::Config;
use std::io::{BufRead, Write};

/// Streams a session reads from and writes to
pub struct Terminal<R, W, E> {
    pub input: R,
    pub output: W,
    pub errors: E,
    /// Print prompts and the banner
    pub interactive: bool,
}

/// Run commands until `quit` or end of input.
///
/// Command errors are reported on the error stream and the session carries on.
/// Only I/O failures end the loop with an error.
pub fn run<R: BufRead, W: Write, E: Write>(
    session: &mut ReviewSession,
    config: &Config,
    term: &mut Terminal<R, W, E>,
) -> Result<()> {
    if term.interactive {
        writeln!(term.output, "☕ {}", config.title)?;
        writeln!(term.output, "Type 'help' for commands\n")?;
        writeln!(
            term.output,
            "{}",
            format_entry_list(session.entries(), &config.currency)
        )?;
    }

    let mut buf = Vec::new();
    loop {
        if term.interactive {
            let prompt = match session.form_state() {
                FormState::Idle => "brewlog> ",
                FormState::Editing => "brewlog (new)> ",
            };
            write!(term.output, "{}", prompt)?;
            term.output.flush()?;
        }

        buf.clear();
        if term.input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(&buf);

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(term.errors, "Error: {}", e.display_with_suggestions())?;
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }

        if let Err(e) = dispatch(session, config, command, &mut term.output) {
            writeln!(term.errors, "Error: {}", e.display_with_suggestions())?;
        }
    }

    tracing::debug!(entries = session.entries().len(), "session ended");
    Ok(())
}

fn dispatch<W: Write>(
    session: &mut ReviewSession,
    config: &Config,
    command: SessionCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        SessionCommand::Add => {
            let draft = session.open_form();
            writeln!(out, "New entry (place and location are required)")?;
            write!(out, "{}", format_draft(draft, &config.currency))?;
        }
        SessionCommand::Set { field, value } => {
            session.on_field_change(field, &value)?;
        }
        SessionCommand::Vibe(vibe) => {
            if session.on_toggle_vibe(vibe)? {
                writeln!(out, "+ {}", vibe)?;
            } else {
                writeln!(out, "- {}", vibe)?;
            }
        }
        SessionCommand::Save => match session.on_submit()? {
            SubmitOutcome::Committed(entry) => {
                writeln!(out, "Saved")?;
                write!(out, "{}", format_entry_card(&entry, &config.currency))?;
            }
            SubmitOutcome::Incomplete(missing) => {
                writeln!(out, "{}", format_missing_fields(&missing))?;
            }
        },
        SessionCommand::Cancel => {
            if session.on_cancel() {
                writeln!(out, "Discarded entry")?;
            }
        }
        SessionCommand::Delete(id) => {
            if session.on_delete(id) {
                writeln!(out, "Deleted {}", id)?;
            } else {
                writeln!(out, "No entry {}", id)?;
            }
        }
        SessionCommand::Show(id) => match session.entry(id) {
            Some(entry) => write!(out, "{}", format_entry_card(entry, &config.currency))?,
            None => writeln!(out, "No entry {}", id)?,
        },
        SessionCommand::List => {
            writeln!(
                out,
                "{}",
                format_entry_list(session.entries(), &config.currency)
            )?;
        }
        SessionCommand::Draft => match session.form_state() {
            FormState::Editing => {
                write!(out, "{}", format_draft(session.draft(), &config.currency))?
            }
            FormState::Idle => writeln!(out, "No entry in progress")?,
        },
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

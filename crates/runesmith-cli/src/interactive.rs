//! Interactive prompt flow.
//!
//! Prompts for slot, budget, and available runes. Values from the previous
//! session are pre-filled as editable input, so pressing Enter repeats the
//! last query. Ctrl-C or Ctrl-D at any prompt cancels the session.

use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use runesmith_model::{EquipmentSlot, Query};
use runesmith_store::QueryStore;

use crate::batch::{parse_rune_list, DEFAULT_BUDGET};
use crate::error::CliError;

/// Prompt for a complete query, offering the previously saved answers as
/// editable defaults. Returns `None` when the user cancels at a prompt.
pub fn prompt_query(store: &QueryStore) -> Result<Option<Query>, CliError> {
    // Unreadable state should not block the session; start blank instead.
    let previous = store.load().unwrap_or_else(|err| {
        warn!("ignoring unreadable query state: {}", err);
        None
    });
    let mut editor = DefaultEditor::new()?;

    let slot_initial = previous
        .as_ref()
        .map(|q| q.slot.to_string())
        .unwrap_or_default();
    let slot = loop {
        let answer = match prompt(&mut editor, "Type of equipment: ", &slot_initial)? {
            Some(answer) => answer,
            None => return Ok(None),
        };
        if !answer.is_empty() {
            break EquipmentSlot::new(answer);
        }
        println!("Enter an equipment type, e.g. shield.");
    };

    let budget_initial = previous
        .as_ref()
        .map(|q| q.budget.to_string())
        .unwrap_or_else(|| DEFAULT_BUDGET.to_string());
    let budget = loop {
        let answer = match prompt(&mut editor, "Number of rune slots: ", &budget_initial)? {
            Some(answer) => answer,
            None => return Ok(None),
        };
        match answer.parse::<usize>() {
            Ok(value) => break value,
            Err(_) => println!("Enter a whole number of rune slots."),
        }
    };

    let runes_initial = previous
        .as_ref()
        .map(|q| {
            q.available
                .iter()
                .map(|rune| rune.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let runes = loop {
        let answer = match prompt(&mut editor, "Available runes: ", &runes_initial)? {
            Some(answer) => answer,
            None => return Ok(None),
        };
        let parsed = parse_rune_list(&answer);
        if !parsed.is_empty() {
            break parsed;
        }
        println!("Enter at least one rune, comma separated.");
    };

    Ok(Some(Query::new(slot, budget, runes)))
}

fn prompt(
    editor: &mut DefaultEditor,
    text: &str,
    initial: &str,
) -> Result<Option<String>, CliError> {
    let line = if initial.is_empty() {
        editor.readline(text)
    } else {
        editor.readline_with_initial(text, (initial, ""))
    };
    match line {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(err) if is_cancel(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Ctrl-D (end of input) and Ctrl-C both end the session without a query.
fn is_cancel(err: &ReadlineError) -> bool {
    matches!(err, ReadlineError::Eof | ReadlineError::Interrupted)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Cancel detection ===

    #[test]
    fn test_eof_and_interrupt_cancel() {
        assert!(is_cancel(&ReadlineError::Eof));
        assert!(is_cancel(&ReadlineError::Interrupted));
    }

    #[test]
    fn test_io_failure_is_not_a_cancel() {
        let err = ReadlineError::Io(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert!(!is_cancel(&err));
    }
}

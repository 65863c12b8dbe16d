//! Input-file driven batch processing.
//!
//! Input format:
//!
//! ```text
//! Runes: VEN, YUN, WIR
//! shield|6
//! sword
//! ```
//!
//! The first line lists the available runes; every following non-empty line
//! is one query, `slot|budget` or a bare slot (budget defaults to 6). The
//! rune list applies to every query in the file.

use std::fs;
use std::path::Path;

use log::{debug, info};

use runesmith_model::{Catalog, EquipmentSlot, Query, RuneId};
use runesmith_query::{run_batch, Layout};

use crate::error::CliError;
use crate::present;

/// Rune sockets assumed when a query line does not name a budget.
pub const DEFAULT_BUDGET: usize = 6;

/// Contents written to the input file when it does not exist yet.
pub const DEFAULT_INPUT: &str = "Runes: VEN, YUN, WIR, ENO, ITA, VEN, WIR\nshield|6\nsword|5\n";

/// Process one input file into one output file.
///
/// A missing input file is first created with [`DEFAULT_INPUT`] as a
/// template. When nothing matches, the output file is truncated to empty;
/// returns whether anything matched so the caller can say so.
pub fn process(catalog: &Catalog, input_path: &Path, output_path: &Path) -> Result<bool, CliError> {
    if !input_path.exists() {
        debug!("creating template input at {}", input_path.display());
        write_with_parents(input_path, DEFAULT_INPUT)?;
    }

    let text = fs::read_to_string(input_path).map_err(|source| CliError::Io {
        path: input_path.to_path_buf(),
        source,
    })?;
    let queries = parse_input(&text)?;
    let groups = run_batch(catalog, &queries, Layout::SingleLine);

    let output = present::batch_output(&groups);
    write_with_parents(output_path, &output)?;
    if !output.is_empty() {
        let matched = groups.iter().filter(|(_, results)| !results.is_empty()).count();
        info!(
            "wrote matches for {} of {} queries to {}",
            matched,
            groups.len(),
            output_path.display()
        );
    }
    Ok(!output.is_empty())
}

/// Parse batch input text into queries.
pub fn parse_input(text: &str) -> Result<Vec<Query>, CliError> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or("").trim();
    let available = match header.strip_prefix("Runes:") {
        Some(rest) => parse_rune_list(rest),
        None => {
            return Err(CliError::BatchHeader {
                line: header.to_string(),
            })
        }
    };

    let mut queries = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (slot, budget) = match line.split_once('|') {
            Some((slot, budget)) => {
                let budget = budget.trim().parse::<usize>().map_err(|_| CliError::BatchBudget {
                    line: line.to_string(),
                })?;
                (slot.trim(), budget)
            }
            None => (line, DEFAULT_BUDGET),
        };
        queries.push(Query::new(
            EquipmentSlot::new(slot),
            budget,
            available.iter().cloned(),
        ));
    }
    Ok(queries)
}

/// Split a comma or whitespace separated rune list, dropping empty tokens.
pub fn parse_rune_list(text: &str) -> Vec<RuneId> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(RuneId::new)
        .collect()
}

fn write_with_parents(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

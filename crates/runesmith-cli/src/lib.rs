//! Front-end plumbing for the `runesmith` binary.
//!
//! - `commands`: clap argument definitions
//! - `present`: plain-text rendering of results and summaries
//! - `batch`: input-file driven processing
//! - `interactive`: rustyline prompt flow
//! - `error`: the CLI-boundary error type

pub mod batch;
pub mod commands;
pub mod error;
pub mod interactive;
pub mod present;

//! CLI-boundary errors.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("catalog error: {0}")]
    Catalog(#[from] runesmith_catalog::CatalogError),

    #[error("query state error: {0}")]
    Store(#[from] runesmith_store::StoreError),

    #[error("input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("batch input must start with a 'Runes:' line, got: {line:?}")]
    BatchHeader { line: String },

    #[error("invalid rune slot count in batch line: {line:?}")]
    BatchBudget { line: String },

    #[error("no runewords found in catalog at {}", path.display())]
    EmptyCatalog { path: PathBuf },
}

//! runesmith: match runeword crafting recipes against the runes you hold.
//!
//! The workspace splits into focused crates; this root crate re-exports
//! the library surface:
//! - [`model`]: shared data types and normalization rules
//! - [`catalog`]: JSON record ingestion
//! - [`query`]: matching, slot ordering, and stat rendering
//!
//! The `runesmith` binary (interactive, batch, and one-shot front-ends)
//! lives in `runesmith-cli`.

pub use runesmith_catalog as catalog;
pub use runesmith_model as model;
pub use runesmith_query as query;

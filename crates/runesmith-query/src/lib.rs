//! runesmith-query: the query core.
//!
//! Answers one question: given a catalog of runewords and what a player
//! holds, which runewords can be crafted, and how should their bonuses read?
//!
//! - `matcher`: filter a catalog down to the recipes a query can craft
//! - `slots`: canonical display ordering for equipment slots
//! - `format`: render stat modifiers as human-readable text
//! - `engine`: tie the three together into presentable results
//!
//! Everything here is pure and total. No I/O, no shared state, no errors:
//! an unsatisfiable query (unknown slot, zero budget, no runes held)
//! filters down to an empty result instead of failing.
//!
//! # Rune availability is a set
//!
//! [`Query`](runesmith_model::Query) carries rune identity, not rune count.
//! A recipe that requires two copies of `VEN` is matched by a player holding
//! a single `VEN`. This is a known limitation, kept deliberately and pinned
//! by test; switching to a multiset would change match results for recipes
//! with duplicate runes.

mod engine;
mod format;
mod matcher;
mod slots;

pub use engine::{run, run_batch, RenderedRecipe};
pub use format::{render, Layout, RenderedStats};
pub use matcher::find;
pub use slots::{order, rank};

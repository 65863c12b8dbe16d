//! Query execution: match, order, and render in one call.

use log::debug;
use runesmith_model::{Catalog, EquipmentSlot, Query, RecipeDefinition, RuneId};

use crate::format::{self, Layout, RenderedStats};
use crate::matcher;
use crate::slots;

/// One matched recipe, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRecipe {
    /// Display name derived from the recipe id.
    pub name: String,
    /// Required runes, catalog order, duplicates intact.
    pub runes: Vec<RuneId>,
    /// Applicable slots in display order.
    pub slots: Vec<EquipmentSlot>,
    pub stats: RenderedStats,
}

/// Run one query against the catalog.
///
/// Returns the matching recipes in catalog order, each rendered for
/// display. An empty vec means nothing matched; how to phrase that is the
/// caller's concern.
pub fn run(catalog: &Catalog, query: &Query, layout: Layout) -> Vec<RenderedRecipe> {
    let matches = matcher::find(catalog, query);
    debug!(
        "slot {} with budget {} matched {} of {} recipes",
        query.slot,
        query.budget,
        matches.len(),
        catalog.len()
    );
    matches
        .into_iter()
        .map(|recipe| render_recipe(recipe, layout))
        .collect()
}

/// Run several queries in sequence, pairing each with its results.
pub fn run_batch(
    catalog: &Catalog,
    queries: &[Query],
    layout: Layout,
) -> Vec<(Query, Vec<RenderedRecipe>)> {
    queries
        .iter()
        .map(|query| (query.clone(), run(catalog, query, layout)))
        .collect()
}

fn render_recipe(recipe: &RecipeDefinition, layout: Layout) -> RenderedRecipe {
    RenderedRecipe {
        name: recipe.display_name(),
        runes: recipe.runes.clone(),
        slots: slots::order(&recipe.slots),
        stats: format::render(&recipe.stats, layout),
    }
}

//! Recipe matching against a query.

use runesmith_model::{Catalog, Query, RecipeDefinition};

/// Filter `catalog` down to the recipes `query` can craft.
///
/// A recipe matches when all three hold:
/// 1. the queried slot is one of the recipe's slots,
/// 2. the recipe's rune count fits within the query budget,
/// 3. every required rune is in the available set.
///
/// Result order is catalog order. Both sides of the comparisons are
/// canonical by construction, so no re-normalization happens here.
pub fn find<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a RecipeDefinition> {
    catalog
        .iter()
        .filter(|recipe| matches(recipe, query))
        .collect()
}

fn matches(recipe: &RecipeDefinition, query: &Query) -> bool {
    if !recipe.allows_slot(&query.slot) {
        return false;
    }
    if recipe.rune_count() > query.budget {
        return false;
    }
    recipe.runes.iter().all(|rune| query.available.contains(rune))
}

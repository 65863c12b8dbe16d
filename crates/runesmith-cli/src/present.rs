//! Plain-text rendering of query results and catalog summaries.
//!
//! Output framing is part of the tool's contract (the batch output file is
//! consumed by other tooling), so the exact line layout here is pinned by
//! tests: headers, blank-line separation, and the trailing newline.

use std::fmt;

use runesmith_model::{Catalog, Query};
use runesmith_query::{RenderedRecipe, RenderedStats};

/// Printed (or returned) whenever a query matches nothing.
pub const NO_MATCHES: &str = "No matching runewords found.";

/// Equipment categories for the catalog summary, in display order. The
/// names document the grouping; only the member lists are printed.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Weapons",
        &["Sword", "Spear", "Dagger", "Axe", "Hammer", "Staff", "Bow", "Crossbow"],
    ),
    ("Armor", &["Helmet", "Chest", "Boots", "Pants"]),
    ("Jewelry", &["Necklace", "Ring"]),
    ("Miscellaneous", &["Tome", "Totem", "Shield"]),
];

/// The lines for one matched recipe: name, runes, slots, then the stat
/// text when there is any. Ends with a newline.
pub fn recipe_block(recipe: &RenderedRecipe) -> String {
    let mut block = String::new();
    block.push_str(&format!("{}\n", recipe.name));
    block.push_str(&format!("Runes: {}\n", join(&recipe.runes)));
    block.push_str(&format!("Slots: {}\n", join(&recipe.slots)));
    match &recipe.stats {
        RenderedStats::SingleLine(text) if !text.is_empty() => {
            block.push_str(&format!("{}\n", text));
        }
        RenderedStats::MultiLine(lines) => {
            for line in lines {
                block.push_str(&format!("{}\n", line));
            }
        }
        _ => {}
    }
    block
}

/// Terminal output for a one-shot query: a `Runewords:` summary line, then
/// each recipe block preceded by a blank line.
pub fn find_output(results: &[RenderedRecipe]) -> String {
    if results.is_empty() {
        return format!("{}\n", NO_MATCHES);
    }

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    let mut output = String::new();
    output.push_str(&format!("Runewords: {}\n", names.join(", ")));
    for recipe in results {
        output.push('\n');
        output.push_str(&recipe_block(recipe));
    }
    output
}

/// Batch output file contents: per query with at least one match, a
/// `======== <Slot> (<budget>) ========` header followed by its recipe
/// blocks, with a blank line between recipes and between groups. Empty
/// when nothing matched anywhere.
pub fn batch_output(groups: &[(Query, Vec<RenderedRecipe>)]) -> String {
    let mut sections: Vec<String> = Vec::new();
    for (query, results) in groups {
        if results.is_empty() {
            continue;
        }
        sections.push(format!("======== {} ({}) ========", query.slot, query.budget));
        for recipe in results {
            sections.push(recipe_block(recipe));
        }
    }
    sections.join("\n")
}

/// Catalog overview: equipment types grouped by category (one line per
/// non-empty category), any types outside the known categories with a
/// count note, then the largest socket requirement.
pub fn catalog_summary(catalog: &Catalog) -> String {
    let mut remaining = catalog.slots();
    let mut output = String::new();

    for (_, members) in CATEGORIES {
        let found: Vec<&str> = members
            .iter()
            .copied()
            .filter(|member| remaining.iter().any(|slot| slot.as_str() == *member))
            .collect();
        if found.is_empty() {
            continue;
        }
        output.push_str(&format!("{}\n", found.join(", ")));
        remaining.retain(|slot| !found.contains(&slot.as_str()));
    }

    if !remaining.is_empty() {
        let extras: Vec<&str> = remaining.iter().map(|slot| slot.as_str()).collect();
        output.push_str(&format!("{}\n", extras.join(", ")));
        output.push_str(&format!("Found {} extra types!\n", extras.len()));
    }

    output.push_str(&format!("Max slots: {}\n", catalog.max_rune_count()));
    output
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

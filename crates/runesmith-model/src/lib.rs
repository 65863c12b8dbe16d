//! Shared data model for runeword catalogs and queries.
//!
//! Every other crate speaks these types:
//! - [`RuneId`] / [`EquipmentSlot`]: normalized identifier tokens
//! - [`StatModifier`] / [`StatKind`]: a recipe's numeric bonuses
//! - [`RecipeDefinition`]: one runeword as loaded from the catalog
//! - [`Catalog`]: the immutable, order-preserving recipe collection
//! - [`Query`]: one lookup request (slot, rune budget, available runes)
//!
//! Normalization happens in the constructors: rune tokens are uppercased,
//! slot tokens are capitalized. Values deserialized through serde pass
//! through the same constructors, so a held value is always canonical.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identifier for a crafting component ("rune").
///
/// Construction trims surrounding whitespace and uppercases the token, so
/// `"ven"`, `" Ven "` and `"VEN"` all compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct RuneId(String);

impl RuneId {
    pub fn new(token: impl AsRef<str>) -> Self {
        RuneId(token.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RuneId {
    fn from(token: String) -> Self {
        RuneId::new(&token)
    }
}

impl fmt::Display for RuneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical identifier for an equipment slot ("Helmet", "Shield", ...).
///
/// Construction trims and capitalizes the token (first character uppercased,
/// remainder lowercased). The vocabulary is open: unrecognized slots are
/// legal and simply sort last in display ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct EquipmentSlot(String);

impl EquipmentSlot {
    pub fn new(token: impl AsRef<str>) -> Self {
        EquipmentSlot(capitalize(token.as_ref().trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EquipmentSlot {
    fn from(token: String) -> Self {
        EquipmentSlot::new(&token)
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a stat bonus is a percentage or a flat value.
///
/// Wire form is `"PERCENT"` / `"FLAT"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatKind {
    Percent,
    Flat,
}

impl std::str::FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERCENT" => Ok(StatKind::Percent),
            "FLAT" => Ok(StatKind::Flat),
            _ => Err(format!("unrecognized stat kind: {}. Expected: PERCENT or FLAT", s)),
        }
    }
}

/// A named numeric bonus granted by a recipe.
///
/// Invariant (enforced at ingestion): `min <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    /// Internal stat name, e.g. `cold_resistance`.
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub kind: StatKind,
}

impl StatModifier {
    pub fn new(name: impl Into<String>, min: f64, max: f64, kind: StatKind) -> Self {
        StatModifier {
            name: name.into(),
            min,
            max,
            kind,
        }
    }

    /// A modifier counts as negative when its `max` is below zero,
    /// regardless of `kind` and regardless of `min`'s sign. Classifying on
    /// `max` keeps `min == max < 0` modifiers in the negative group.
    pub fn is_negative(&self) -> bool {
        self.max < 0.0
    }

    /// Human-readable name: underscores become spaces, words are title-cased
    /// (`cold_resistance` -> `Cold Resistance`).
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// One runeword definition as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    /// Catalog identifier, e.g. `stealth_ward`.
    pub id: String,
    /// Slots the recipe can be applied to. Non-empty, deduplicated,
    /// preserving first-occurrence order from the catalog record.
    pub slots: Vec<EquipmentSlot>,
    /// Required runes in catalog order. Non-empty; duplicates are meaningful
    /// ("two copies required") and are reproduced verbatim in output.
    pub runes: Vec<RuneId>,
    pub stats: Vec<StatModifier>,
}

impl RecipeDefinition {
    /// Human-readable name derived from the id (`stealth_ward` -> `Stealth Ward`).
    pub fn display_name(&self) -> String {
        display_name(&self.id)
    }

    pub fn allows_slot(&self, slot: &EquipmentSlot) -> bool {
        self.slots.contains(slot)
    }

    pub fn rune_count(&self) -> usize {
        self.runes.len()
    }
}

/// Immutable, order-preserving collection of recipes.
///
/// Iteration order is load order; the matcher reproduces it in results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    recipes: Vec<RecipeDefinition>,
}

impl Catalog {
    pub fn new(recipes: Vec<RecipeDefinition>) -> Self {
        Catalog { recipes }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeDefinition> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Every slot mentioned by any recipe, sorted and deduplicated.
    pub fn slots(&self) -> Vec<EquipmentSlot> {
        let set: BTreeSet<&EquipmentSlot> = self.recipes.iter().flat_map(|r| &r.slots).collect();
        set.into_iter().cloned().collect()
    }

    /// The largest rune count any recipe requires; 0 for an empty catalog.
    pub fn max_rune_count(&self) -> usize {
        self.recipes.iter().map(|r| r.runes.len()).max().unwrap_or(0)
    }
}

/// One lookup request against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub slot: EquipmentSlot,
    /// Max number of rune sockets on the item. A recipe is usable only if
    /// its rune count fits within this.
    pub budget: usize,
    /// The runes the player holds. This is a set, not a multiset: a recipe
    /// requiring two copies of one rune is satisfied by a single copy here.
    /// Known limitation, kept deliberately.
    pub available: BTreeSet<RuneId>,
}

impl Query {
    pub fn new(slot: EquipmentSlot, budget: usize, available: impl IntoIterator<Item = RuneId>) -> Self {
        Query {
            slot,
            budget,
            available: available.into_iter().collect(),
        }
    }
}

/// Display form of an internal identifier: underscores to spaces, then each
/// word title-cased.
fn display_name(raw: &str) -> String {
    title_case(&raw.replace('_', " "))
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

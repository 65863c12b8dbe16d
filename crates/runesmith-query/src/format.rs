//! Stat modifier rendering.
//!
//! Turns a recipe's stat list into display segments in a fixed group order:
//! negative modifiers first, then positive percent modifiers, then positive
//! flat modifiers, each group preserving the order stats appear in the
//! recipe. Value formatting differs between the groups:
//! - negative: the raw `min` value, sign and fraction included, no `+`
//!   (`-10% Curse Strength`, `-2.5 Stamina Drain`)
//! - positive: `+{max}` when the raw range collapses (`min == max`), else
//!   `+{min}-{max}`, both values truncated toward zero to integers

use runesmith_model::{StatKind, StatModifier};

/// How rendered stats are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// All segments joined into one line with `", "`.
    #[default]
    SingleLine,
    /// One segment per line.
    MultiLine,
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "single-line" | "singleline" => Ok(Layout::SingleLine),
            "multi" | "multi-line" | "multiline" => Ok(Layout::MultiLine),
            _ => Err(format!("Unknown layout: {}. Expected: single or multi", s)),
        }
    }
}

/// Rendered stat text in the requested layout.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedStats {
    SingleLine(String),
    MultiLine(Vec<String>),
}

impl RenderedStats {
    pub fn is_empty(&self) -> bool {
        match self {
            RenderedStats::SingleLine(text) => text.is_empty(),
            RenderedStats::MultiLine(lines) => lines.is_empty(),
        }
    }
}

/// Render `stats` into segments of the form `<value> <Display Name>`.
///
/// Empty input renders to an empty result.
pub fn render(stats: &[StatModifier], layout: Layout) -> RenderedStats {
    let segments = render_segments(stats);
    match layout {
        Layout::SingleLine => RenderedStats::SingleLine(segments.join(", ")),
        Layout::MultiLine => RenderedStats::MultiLine(segments),
    }
}

fn render_segments(stats: &[StatModifier]) -> Vec<String> {
    let negatives = stats.iter().filter(|s| s.is_negative());
    let percents = stats
        .iter()
        .filter(|s| !s.is_negative() && s.kind == StatKind::Percent);
    let flats = stats
        .iter()
        .filter(|s| !s.is_negative() && s.kind == StatKind::Flat);

    let mut segments = Vec::with_capacity(stats.len());

    for stat in negatives {
        let value = match stat.kind {
            StatKind::Percent => format!("{}%", stat.min),
            StatKind::Flat => format!("{}", stat.min),
        };
        segments.push(format!("{} {}", value, stat.display_name()));
    }
    for stat in percents {
        segments.push(format!("{} {}", positive_value(stat, "%"), stat.display_name()));
    }
    for stat in flats {
        segments.push(format!("{} {}", positive_value(stat, ""), stat.display_name()));
    }

    segments
}

/// The collapse test runs on the raw values, before truncation, so a range
/// like 5.2..5.9 still renders as the two-ended `+5-5`.
fn positive_value(stat: &StatModifier, suffix: &str) -> String {
    if stat.min == stat.max {
        format!("+{}{}", stat.max as i64, suffix)
    } else {
        format!("+{}-{}{}", stat.min as i64, stat.max as i64, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, min: f64, max: f64, kind: StatKind) -> StatModifier {
        StatModifier::new(name, min, max, kind)
    }

    fn single(stats: &[StatModifier]) -> String {
        match render(stats, Layout::SingleLine) {
            RenderedStats::SingleLine(text) => text,
            RenderedStats::MultiLine(_) => unreachable!(),
        }
    }

    // === Positive values ===

    #[test]
    fn test_collapsed_percent_range() {
        let stats = [stat("cold_resistance", 10.0, 10.0, StatKind::Percent)];
        assert_eq!(single(&stats), "+10% Cold Resistance");
    }

    #[test]
    fn test_open_flat_range() {
        let stats = [stat("armor", 5.0, 10.0, StatKind::Flat)];
        assert_eq!(single(&stats), "+5-10 Armor");
    }

    #[test]
    fn test_values_truncate_toward_zero() {
        let stats = [stat("haste", 5.2, 5.9, StatKind::Percent)];
        // raw min != raw max, so the range stays open even though both
        // ends truncate to the same integer
        assert_eq!(single(&stats), "+5-5% Haste");
    }

    #[test]
    fn test_range_spanning_zero_keeps_plus_prefix() {
        let stats = [stat("gamble", -5.0, 10.0, StatKind::Percent)];
        assert_eq!(single(&stats), "+-5-10% Gamble");
    }

    // === Negative values ===

    #[test]
    fn test_negative_shows_raw_min() {
        let stats = [
            stat("curse_strength", -10.0, -10.0, StatKind::Percent),
            stat("stamina_drain", -2.5, -1.0, StatKind::Flat),
        ];
        assert_eq!(single(&stats), "-10% Curse Strength, -2.5 Stamina Drain");
    }

    // === Group ordering ===

    #[test]
    fn test_negatives_then_percents_then_flats() {
        let stats = [
            stat("armor", 5.0, 5.0, StatKind::Flat),
            stat("curse", -3.0, -3.0, StatKind::Flat),
            stat("haste", 10.0, 10.0, StatKind::Percent),
            stat("life", 20.0, 30.0, StatKind::Flat),
            stat("slow", -8.0, -8.0, StatKind::Percent),
        ];
        assert_eq!(
            single(&stats),
            "-3 Curse, -8% Slow, +10% Haste, +5 Armor, +20-30 Life"
        );
    }

    // === Layouts ===

    #[test]
    fn test_multi_line_layout() {
        let stats = [
            stat("haste", 10.0, 10.0, StatKind::Percent),
            stat("armor", 5.0, 10.0, StatKind::Flat),
        ];
        assert_eq!(
            render(&stats, Layout::MultiLine),
            RenderedStats::MultiLine(vec![
                "+10% Haste".to_string(),
                "+5-10 Armor".to_string(),
            ])
        );
    }

    #[test]
    fn test_empty_stats_render_empty() {
        assert!(render(&[], Layout::SingleLine).is_empty());
        assert!(render(&[], Layout::MultiLine).is_empty());
    }

    #[test]
    fn test_layout_parsing() {
        assert_eq!("single".parse::<Layout>().unwrap(), Layout::SingleLine);
        assert_eq!("single-line".parse::<Layout>().unwrap(), Layout::SingleLine);
        assert_eq!("multi".parse::<Layout>().unwrap(), Layout::MultiLine);
        assert_eq!("MULTI-LINE".parse::<Layout>().unwrap(), Layout::MultiLine);
        assert!("sideways".parse::<Layout>().is_err());
    }
}

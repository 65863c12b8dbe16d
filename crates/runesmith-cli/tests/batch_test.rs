//! Integration tests for batch file processing

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use runesmith_catalog::load_dir;
use runesmith_cli::batch::{self, DEFAULT_INPUT};
use runesmith_cli::error::CliError;
use runesmith_model::Catalog;

/// Build a catalog directory with a few records and load it.
fn setup_catalog(dir: &TempDir) -> Catalog {
    let records = dir.path().join("runewords");
    fs::create_dir_all(&records).unwrap();

    fs::write(
        records.join("stealth_ward.json"),
        r#"{
            "id": "stealth_ward",
            "slots": ["shield"],
            "runes": ["ven", "yun"],
            "stats": [{ "stat": "cold_resistance", "min": 10, "max": 10, "type": "PERCENT" }]
        }"#,
    )
    .unwrap();

    fs::write(
        records.join("frost_edge.json"),
        r#"{
            "id": "frost_edge",
            "slots": ["sword"],
            "runes": ["wir", "eno"],
            "stats": [
                { "stat": "attack_speed", "min": 5, "max": 10, "type": "PERCENT" },
                { "stat": "armor", "min": 3, "max": 3, "type": "FLAT" }
            ]
        }"#,
    )
    .unwrap();

    fs::write(
        records.join("grand_bulwark.json"),
        r#"{
            "id": "grand_bulwark",
            "slots": ["shield"],
            "runes": ["ven", "yun", "wir", "eno", "ita", "ven", "wir"],
            "stats": [{ "stat": "armor", "min": 50, "max": 50, "type": "FLAT" }]
        }"#,
    )
    .unwrap();

    let result = load_dir(&records).unwrap();
    assert!(result.rejected.is_empty());
    result.catalog
}

fn paths(dir: &TempDir) -> (PathBuf, PathBuf) {
    (dir.path().join("input.txt"), dir.path().join("output.txt"))
}

// === End to end ===

#[test]
fn test_batch_end_to_end() {
    let dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&dir);
    let (input, output) = paths(&dir);
    fs::write(&input, "Runes: VEN, YUN, WIR, ENO, ITA\nshield|6\nsword|5\n").unwrap();

    let matched = batch::process(&catalog, &input, &output).unwrap();
    assert!(matched);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "======== Shield (6) ========\n\
         Stealth Ward\n\
         Runes: VEN, YUN\n\
         Slots: Shield\n\
         +10% Cold Resistance\n\
         \n\
         ======== Sword (5) ========\n\
         Frost Edge\n\
         Runes: WIR, ENO\n\
         Slots: Sword\n\
         +5-10% Attack Speed, +3 Armor\n"
    );
}

#[test]
fn test_seven_rune_recipe_needs_seven_sockets() {
    let dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&dir);
    let (input, output) = paths(&dir);

    // grand_bulwark lists seven runes (two repeated); a budget of 6 is not
    // enough even though only five distinct runes are involved
    fs::write(&input, "Runes: VEN, YUN, WIR, ENO, ITA\nshield|7\n").unwrap();
    batch::process(&catalog, &input, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("Grand Bulwark"));
    assert!(written.contains("Runes: VEN, YUN, WIR, ENO, ITA, VEN, WIR\n"));

    fs::write(&input, "Runes: VEN, YUN, WIR, ENO, ITA\nshield|6\n").unwrap();
    batch::process(&catalog, &input, &output).unwrap();
    assert!(!fs::read_to_string(&output).unwrap().contains("Grand Bulwark"));
}

// === Input file handling ===

#[test]
fn test_missing_input_created_with_template() {
    let dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&dir);
    let (input, output) = paths(&dir);

    let matched = batch::process(&catalog, &input, &output).unwrap();
    assert_eq!(fs::read_to_string(&input).unwrap(), DEFAULT_INPUT);

    // the template's rune pool crafts records from the test catalog
    assert!(matched);
    assert!(fs::read_to_string(&output).unwrap().contains("Stealth Ward"));
}

#[test]
fn test_no_matches_truncates_output_file() {
    let dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&dir);
    let (input, output) = paths(&dir);
    fs::write(&input, "Runes: ZZZ\nshield|6\n").unwrap();
    fs::write(&output, "stale contents from an earlier run\n").unwrap();

    let matched = batch::process(&catalog, &input, &output).unwrap();
    assert!(!matched);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_malformed_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&dir);
    let (input, output) = paths(&dir);
    fs::write(&input, "shield|6\n").unwrap();

    let err = batch::process(&catalog, &input, &output).unwrap_err();
    assert!(matches!(err, CliError::BatchHeader { .. }));
}

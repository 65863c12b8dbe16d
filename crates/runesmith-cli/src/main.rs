use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use runesmith_catalog::load_dir;
use runesmith_model::{Catalog, EquipmentSlot, Query};
use runesmith_query::{run, Layout};
use runesmith_store::QueryStore;

use runesmith_cli::commands::{Cli, Commands};
use runesmith_cli::error::{CliError, Result};
use runesmith_cli::{batch, interactive, present};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let Cli {
        command,
        data_dir,
        state_file,
    } = cli;

    // Rejected records are logged by the loader; the rest of the catalog
    // still serves queries.
    let catalog = load_dir(&data_dir)?.catalog;

    match command {
        Commands::Find {
            slot,
            runes,
            budget,
            layout,
        } => cmd_find(&catalog, &slot, &runes, budget, layout),
        Commands::Batch { input, output } => cmd_batch(&catalog, &input, &output),
        Commands::Interactive { layout } => {
            cmd_interactive(&catalog, &data_dir, &state_file, layout)
        }
        Commands::Slots => cmd_slots(&catalog, &data_dir),
    }
}

fn cmd_find(
    catalog: &Catalog,
    slot: &str,
    runes: &[String],
    budget: usize,
    layout: Layout,
) -> Result<()> {
    // clap splits on commas; a quoted token may still hold several
    // whitespace separated runes
    let query = Query::new(
        EquipmentSlot::new(slot),
        budget,
        runes.iter().flat_map(|token| batch::parse_rune_list(token)),
    );
    let results = run(catalog, &query, layout);
    print!("{}", present::find_output(&results));
    Ok(())
}

fn cmd_batch(catalog: &Catalog, input: &Path, output: &Path) -> Result<()> {
    let matched = batch::process(catalog, input, output)?;
    if !matched {
        println!("{}", present::NO_MATCHES);
    }
    Ok(())
}

fn cmd_interactive(
    catalog: &Catalog,
    data_dir: &Path,
    state_file: &Path,
    layout: Layout,
) -> Result<()> {
    ensure_catalog_nonempty(catalog, data_dir)?;
    print!("{}", present::catalog_summary(catalog));
    println!();

    let store = QueryStore::new(state_file);
    let query = match interactive::prompt_query(&store)? {
        Some(query) => query,
        // cancelled at a prompt; not an error
        None => return Ok(()),
    };
    if let Err(err) = store.save(&query) {
        warn!("failed to save query state: {}", err);
    }

    let results = run(catalog, &query, layout);
    print!("{}", present::find_output(&results));
    Ok(())
}

fn cmd_slots(catalog: &Catalog, data_dir: &Path) -> Result<()> {
    ensure_catalog_nonempty(catalog, data_dir)?;
    print!("{}", present::catalog_summary(catalog));
    Ok(())
}

fn ensure_catalog_nonempty(catalog: &Catalog, data_dir: &Path) -> Result<()> {
    if catalog.is_empty() {
        return Err(CliError::EmptyCatalog {
            path: data_dir.to_path_buf(),
        });
    }
    Ok(())
}

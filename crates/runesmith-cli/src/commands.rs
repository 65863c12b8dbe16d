//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use runesmith_query::Layout;

use crate::batch::DEFAULT_BUDGET;

#[derive(Parser)]
#[command(name = "runesmith")]
#[command(author, version, about = "Match runeword recipes against the runes you hold", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory of runeword JSON records
    #[arg(long, global = true, default_value = "data/runewords")]
    pub data_dir: PathBuf,

    /// Location of the saved-query state file
    #[arg(long, global = true, default_value = "data/.runesmith/last_query.json")]
    pub state_file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find craftable runewords for one equipment slot
    Find {
        /// Equipment slot to search, e.g. shield
        slot: String,

        /// Available runes, comma or space separated (case does not matter)
        #[arg(long, value_delimiter = ',', required = true)]
        runes: Vec<String>,

        /// Max rune sockets on the item
        #[arg(long, default_value_t = DEFAULT_BUDGET)]
        budget: usize,

        /// Stat layout: single or multi
        #[arg(long, default_value = "single")]
        layout: Layout,
    },

    /// Process an input file of queries into an output file
    Batch {
        /// Input file; created with a template when missing
        #[arg(long, default_value = "data/input.txt")]
        input: PathBuf,

        /// Output file
        #[arg(long, default_value = "data/output.txt")]
        output: PathBuf,
    },

    /// Prompt for a query, remembering the previous answers
    Interactive {
        /// Stat layout: single or multi
        #[arg(long, default_value = "single")]
        layout: Layout,
    },

    /// Summarize the catalog's equipment types and max sockets
    Slots,
}

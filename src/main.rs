//! Letter Boxed Solver - CLI
//!
//! Solves Letter Boxed boards from the command line using trie pruning and a
//! staged breadth-first search.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letter_boxed::{
    commands::{analyze_puzzle, build_dictionary, solve_puzzle},
    core::Trie,
    dictionary::{WORDS, loader},
    output::{print_analysis_report, print_build_report, print_solve_report},
    solver::SolveMode,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed puzzle solver using trie pruning and a staged breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board given one string of letters per edge
    Solve {
        /// Board edges, e.g. `adr meo bxu its`
        #[arg(required = true)]
        edges: Vec<String>,

        /// Mode: min-letters (default) or two-words
        #[arg(short, long, default_value = "min-letters")]
        mode: String,

        /// Load a prebuilt trie dictionary instead of a word list
        #[arg(long)]
        trie: Option<PathBuf>,

        /// Show dictionary and timing details
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a board without solving it
    Analyze {
        /// Board edges, e.g. `adr meo bxu its`
        #[arg(required = true)]
        edges: Vec<String>,

        /// Load a prebuilt trie dictionary instead of a word list
        #[arg(long)]
        trie: Option<PathBuf>,
    },

    /// Build a trie dictionary file from a word list
    BuildDict {
        /// Word list file, one word per line (default: standard input)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the JSON dictionary
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Load the dictionary trie based on the -w flag and --trie override
fn load_dictionary(wordlist: &str, trie_path: Option<&PathBuf>) -> Result<Trie> {
    if let Some(path) = trie_path {
        return Ok(loader::load_trie(path)?);
    }

    match wordlist {
        "embedded" => Ok(Trie::from_words(WORDS)),
        path => {
            let words = loader::load_from_file(path)?;
            Ok(Trie::from_words(&words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            edges,
            mode,
            trie,
            verbose,
        } => run_solve_command(&cli.wordlist, trie.as_ref(), &edges, &mode, verbose),
        Commands::Analyze { edges, trie } => {
            run_analyze_command(&cli.wordlist, trie.as_ref(), &edges)
        }
        Commands::BuildDict { input, output } => run_build_command(input.as_deref(), &output),
    }
}

fn run_solve_command(
    wordlist: &str,
    trie_path: Option<&PathBuf>,
    edges: &[String],
    mode: &str,
    verbose: bool,
) -> Result<()> {
    let dictionary = load_dictionary(wordlist, trie_path)?;
    let mode = SolveMode::from_name(mode);

    let report = solve_puzzle(&dictionary, edges, mode).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_analyze_command(
    wordlist: &str,
    trie_path: Option<&PathBuf>,
    edges: &[String],
) -> Result<()> {
    let dictionary = load_dictionary(wordlist, trie_path)?;

    let report = analyze_puzzle(&dictionary, edges).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_report(&report);
    Ok(())
}

fn run_build_command(input: Option<&Path>, output: &Path) -> Result<()> {
    let report = build_dictionary(input, output).map_err(|e| anyhow::anyhow!(e))?;
    print_build_report(&report);
    Ok(())
}

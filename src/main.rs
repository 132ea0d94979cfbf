//! Two-Word Anagram Finder - CLI
//!
//! Reports every pair of dictionary words that together spell an anagram of
//! the target word.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use two_word_anagram::{
    commands::{FindConfig, list_candidates, run_benchmark, run_find},
    matcher::ComparisonType,
    output::{ConsoleSink, print_benchmark_result, print_candidates, print_find_result},
};

#[derive(Parser)]
#[command(
    name = "two_word_anagram",
    about = "Find every pair of dictionary words that together form an anagram of a target word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to anagram
    #[arg(short, long, global = true, default_value = "documenting")]
    target: String,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "wordlist.txt")]
    dictionary: PathBuf,

    /// Comparison method: sorted (default) or counts
    #[arg(short, long, global = true, default_value = "sorted")]
    method: String,

    /// Split the pair scan across all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Hide the progress bar
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find and print all two-word anagrams (default)
    Find,

    /// Only filter the dictionary and print the candidates
    Candidates,

    /// Time every comparison method, sequential and parallel
    Benchmark {
        /// Runs per configuration
        #[arg(short = 'n', long, default_value = "3")]
        rounds: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Find if no command given
    let command = cli.command.take().unwrap_or(Commands::Find);

    match command {
        Commands::Find => run_find_command(&cli),
        Commands::Candidates => {
            let result = list_candidates(&cli.target, &cli.dictionary)?;
            print_candidates(&result);
            Ok(())
        }
        Commands::Benchmark { rounds } => {
            println!("Running benchmark with {rounds} rounds per configuration...");
            let result = run_benchmark(&cli.target, &cli.dictionary, rounds)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_find_command(cli: &Cli) -> Result<()> {
    let config = FindConfig {
        target: cli.target.clone(),
        dictionary: cli.dictionary.clone(),
        comparison: ComparisonType::from_name(&cli.method),
        parallel: cli.parallel,
        show_progress: !cli.quiet,
    };

    let result = run_find(&config, &mut ConsoleSink)?;
    print_find_result(&result, cli.verbose > 0);
    Ok(())
}

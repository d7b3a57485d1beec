use anyhow::Context;
use aoc2024::{input, TopologicalSorter};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Word search and precedence ordering over puzzle input")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count WORD in all 8 directions of the grid in FILE
    Search { file: PathBuf, word: String },
    /// Count X-MAS crosses in the grid in FILE
    Cross { file: PathBuf },
    /// Print every node list in FILE sorted by the `x|y` rules above it
    Order { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Args { command } = Args::parse();
    let time = std::time::Instant::now();
    match command {
        Command::Search { file, word } => {
            let grid = input::parse_grid(&file)
                .with_context(|| format!("cannot load grid {}", file.display()))?;
            println!("{}", grid.find_word(word.as_str()));
        }
        Command::Cross { file } => {
            let grid = input::parse_grid(&file)
                .with_context(|| format!("cannot load grid {}", file.display()))?;
            println!("{}", grid.find_cross_pattern());
        }
        Command::Order { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let (edges, lists) = input::parse_precedence(&text)?;
            let sorter: TopologicalSorter<i64> = edges.into_iter().collect();
            for list in lists {
                let sorted = sorter.sort(&list)
                    .with_context(|| format!("cannot order {}", list.iter().join(",")))?;
                println!("{}", sorted.iter().join(","));
            }
        }
    }
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}

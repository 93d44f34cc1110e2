//! Plumbing shared by the daily solutions: locating and reading the puzzle
//! input, logging, timing, and a small 2D grid.

use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;

mod grid;

pub use grid::{Dir, Grid, GridError, Pos};

#[derive(Parser)]
#[command()]
struct Cli {
    /// Puzzle input to solve (defaults to the day's input.txt)
    input: Option<PathBuf>,
}

/// Initializes logging, parses the command line and reads the puzzle input.
///
/// Call with `env!("CARGO_MANIFEST_DIR")`, so that the default input path
/// resolves to `dayNN/input.txt` regardless of the working directory.
pub fn setup(manifest_dir: &str) -> Result<String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let path = cli.input.unwrap_or_else(|| default_input(manifest_dir));
    log::debug!("reading {}", path.display());

    fs::read_to_string(&path).with_context(|| format!("could not read file: {}", path.display()))
}

fn default_input(manifest_dir: &str) -> PathBuf {
    PathBuf::from(manifest_dir).join("..").join("input.txt")
}

pub fn time<T, F>(f: F) -> T
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let res = f();
    log::info!("  took {:?}", t0.elapsed());
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_sits_next_to_the_crate() {
        assert_eq!(
            default_input("/work/day04/rust"),
            PathBuf::from("/work/day04/rust/../input.txt")
        );
    }

    #[test]
    fn time_passes_the_result_through() {
        assert_eq!(time(|| 6 * 7), 42);
    }
}

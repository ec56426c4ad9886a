//! npuzzle-rust: a sliding-tile puzzle solver.
//!
//! ## Usage
//!
//! - `npuzzle-rust solve <FILE>` - Solve a puzzle file
//! - `npuzzle-rust random` - Scramble a random solvable board and solve it
//! - `npuzzle-rust demo` - Show a small worked example (also the default)
//!
//! Puzzle files hold the dimension followed by the tile grid, with 0 for
//! the blank, e.g.:
//!
//! ```text
//! 3
//!  1  0  3
//!  4  2  5
//!  7  8  6
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use npuzzle_rust::board::Board;
use npuzzle_rust::scramble::scrambled;
use npuzzle_rust::solver::Solver;

/// npuzzle-rust: a sliding-tile puzzle solver
#[derive(Parser)]
#[command(name = "npuzzle-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file (dimension line followed by the tile grid)
    Solve {
        /// Path to the puzzle file
        file: PathBuf,
    },
    /// Scramble a random solvable board and solve it
    Random {
        /// Board dimension
        #[arg(long, default_value_t = 3)]
        size: usize,
        /// Number of random slides away from the goal
        #[arg(long, default_value_t = 20)]
        steps: usize,
        /// RNG seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a small demo of the solver
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve { file }) => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let board = parse_board(&text)
                .with_context(|| format!("malformed puzzle file {}", file.display()))?;
            report(&Solver::new(board));
        }
        Some(Commands::Random { size, steps, seed }) => {
            if size == 0 {
                bail!("board dimension must be at least 1");
            }
            if let Some(seed) = seed {
                fastrand::seed(seed);
            }
            let board = scrambled(size, steps);
            println!("Scrambled board:");
            println!("{board}");
            report(&Solver::new(board));
        }
        Some(Commands::Demo) | None => run_demo()?,
    }

    Ok(())
}

/// Parse the puzzle file format: a dimension n, then n*n tile values, all
/// whitespace-separated.
fn parse_board(text: &str) -> Result<Board> {
    let mut tokens = text.split_whitespace();

    let first = tokens.next().context("empty puzzle file")?;
    let size: usize = first
        .parse()
        .with_context(|| format!("invalid dimension {first:?}"))?;
    if size == 0 {
        bail!("dimension must be at least 1");
    }

    let mut rows = Vec::with_capacity(size);
    for row in 0..size {
        let mut values = Vec::with_capacity(size);
        for col in 0..size {
            let token = tokens
                .next()
                .with_context(|| format!("missing tile at row {row}, column {col}"))?;
            let value: u32 = token
                .parse()
                .with_context(|| format!("invalid tile {token:?} at row {row}, column {col}"))?;
            values.push(value);
        }
        rows.push(values);
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected trailing token {extra:?}");
    }

    Ok(Board::new(&rows)?)
}

/// Print the solve outcome in the classic client format.
fn report(solver: &Solver) {
    match solver.solution() {
        None => println!("No solution possible"),
        Some(path) => {
            println!("Minimum number of moves = {}", solver.moves());
            for board in path {
                println!("{board}");
            }
        }
    }
}

fn run_demo() -> Result<()> {
    println!("npuzzle-rust: sliding-tile puzzle solver\n");

    println!("=== Board demo ===");
    let board = Board::new(&[vec![1, 0, 3], vec![4, 2, 5], vec![7, 8, 6]])?;
    println!("{board}");
    println!("hamming   = {}", board.hamming());
    println!("manhattan = {}", board.manhattan());
    println!("\nNeighbors:");
    for neighbor in board.neighbors() {
        println!("{neighbor}");
    }
    println!("Twin:");
    println!("{}", board.twin());

    println!("=== Solver demo ===");
    report(&Solver::new(board));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board = parse_board("3\n1 0 3\n4 2 5\n7 8 6\n").unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.tile(0, 1), 0);
        assert_eq!(board.manhattan(), 3);
    }

    #[test]
    fn test_parse_ignores_layout() {
        // Only token order matters, not line breaks
        let a = parse_board("2 1 2 3 0").unwrap();
        let b = parse_board("2\n1 2\n3 0\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_trivial_board() {
        let board = parse_board("1\n1\n").unwrap();
        assert_eq!(board.dimension(), 1);
        assert!(board.is_goal());
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_board("").is_err());
        assert!(parse_board("   \n  ").is_err());
    }

    #[test]
    fn test_parse_bad_dimension() {
        assert!(parse_board("x\n1 0").is_err());
        assert!(parse_board("0").is_err());
        assert!(parse_board("-3\n1 0").is_err());
    }

    #[test]
    fn test_parse_missing_and_extra_tiles() {
        assert!(parse_board("2\n1 2 3").is_err());
        assert!(parse_board("2\n1 2\n3 0\n9").is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_arrangement() {
        // Tokenizes fine but fails board validation
        assert!(parse_board("2\n1 2\n3 4").is_err());
        assert!(parse_board("2\n0 0\n1 2").is_err());
    }
}

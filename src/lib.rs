//! npuzzle-rust: a sliding-tile puzzle solver.
//!
//! This crate finds minimum-move solutions for the n-by-n sliding-tile
//! puzzle (8-puzzle, 15-puzzle, ...) using best-first search ordered by
//! moves-so-far plus Manhattan distance, and detects unsolvable instances
//! by racing a second search on a "twin" board with two tiles swapped.
//!
//! ## Modules
//!
//! - [`board`] - Immutable puzzle configuration with cached heuristics
//! - [`solver`] - Dual best-first search and solution reconstruction
//! - [`scramble`] - Random solvable instance generation
//!
//! ## Example
//!
//! ```
//! use npuzzle_rust::board::Board;
//! use npuzzle_rust::solver::Solver;
//!
//! let board = Board::new(&[vec![1, 0, 3], vec![4, 2, 5], vec![7, 8, 6]])?;
//! assert_eq!(board.manhattan(), 3);
//!
//! let solver = Solver::new(board);
//! assert!(solver.is_solvable());
//! assert_eq!(solver.moves(), 3);
//! # Ok::<(), npuzzle_rust::board::BoardError>(())
//! ```

pub mod board;
pub mod scramble;
pub mod solver;

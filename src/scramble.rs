//! Random solvable instance generation.
//!
//! Shuffling tiles uniformly produces an unsolvable board half the time, so
//! scrambling instead walks random slides backward from the goal: every
//! board it produces is solvable, and the walk length bounds the optimal
//! solution length. Uses the thread-local `fastrand` generator; call
//! `fastrand::seed` for reproducible scrambles.

use crate::board::Board;

/// A solvable board of the given dimension, produced by `steps` random
/// slides from the goal configuration, never undoing the slide just made.
/// The optimal solution is therefore at most `steps` moves.
///
/// # Panics
///
/// Panics if `size` is 0, as [`Board::goal`] does.
pub fn scrambled(size: usize, steps: usize) -> Board {
    let mut board = Board::goal(size);
    let mut previous: Option<Board> = None;

    for _ in 0..steps {
        let mut candidates = board.neighbors();
        candidates.retain(|neighbor| previous.as_ref() != Some(neighbor));
        if candidates.is_empty() {
            // 1x1: nowhere to slide
            break;
        }
        let next = candidates.swap_remove(fastrand::usize(..candidates.len()));
        previous = Some(std::mem::replace(&mut board, next));
    }

    board
}

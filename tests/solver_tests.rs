//! Integration tests for the solver.
//!
//! Covers the classic scenarios (solvable 3x3, classic unsolvable 3x3,
//! degenerate 1x1), optimality on instances with known move counts, the
//! exactly-one-of-board-and-twin-solvable invariant, and replay of
//! reconstructed solution paths.

use npuzzle_rust::board::Board;
use npuzzle_rust::scramble::scrambled;
use npuzzle_rust::solver::Solver;

// =============================================================================
// Helper functions
// =============================================================================

/// Build a board from row slices, panicking on invalid input.
fn board(rows: &[&[u32]]) -> Board {
    let rows: Vec<Vec<u32>> = rows.iter().map(|row| row.to_vec()).collect();
    Board::new(&rows).expect("valid board")
}

/// Assert that `path` is a legal solution for `initial`: it starts at the
/// initial board, ends at the goal, and every step slides one adjacent
/// tile into the blank.
fn assert_valid_path(initial: &Board, path: &[Board]) {
    assert!(!path.is_empty());
    assert_eq!(&path[0], initial);
    assert!(path[path.len() - 1].is_goal());

    for pair in path.windows(2) {
        let neighbors = pair[0].neighbors();
        assert!(
            neighbors.contains(&pair[1]),
            "step is not a single legal slide"
        );
    }
}

// =============================================================================
// Classic scenarios
// =============================================================================

#[test]
fn test_solvable_classic_instance() {
    let initial = board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]);
    let solver = Solver::new(initial.clone());

    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 3);

    let path = solver.solution().expect("solvable");
    assert_eq!(path.len(), 4);
    assert_valid_path(&initial, path);
}

#[test]
fn test_unsolvable_classic_instance() {
    let initial = board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]);
    let solver = Solver::new(initial);

    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), -1);
    assert!(solver.solution().is_none());
}

#[test]
fn test_trivial_board_is_already_solved() {
    let initial = board(&[&[1]]);
    assert!(initial.is_goal());

    let solver = Solver::new(initial.clone());
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 0);
    assert_eq!(solver.solution(), Some(&[initial][..]));
}

// =============================================================================
// Optimality
// =============================================================================

#[test]
fn test_goal_board_needs_zero_moves() {
    for n in 2..=3 {
        let solver = Solver::new(Board::goal(n));
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 0);
        assert_eq!(solver.solution().map(|p| p.len()), Some(1));
    }
}

#[test]
fn test_single_move_instance() {
    let initial = board(&[&[1, 2], &[0, 3]]);
    let solver = Solver::new(initial.clone());
    assert_eq!(solver.moves(), 1);
    assert_valid_path(&initial, solver.solution().expect("solvable"));
}

#[test]
fn test_four_move_instance() {
    // The Manhattan distance of this instance is 4, so 4 moves is optimal.
    let initial = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
    let solver = Solver::new(initial.clone());
    assert_eq!(solver.moves(), 4);
    assert_valid_path(&initial, solver.solution().expect("solvable"));
}

#[test]
fn test_unsolvable_two_by_two() {
    // The goal's twin: one same-row transposition away from solved
    let solver = Solver::new(Board::goal(2).twin());
    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), -1);
}

// =============================================================================
// Twin invariant
// =============================================================================

#[test]
fn test_exactly_one_of_board_and_twin_is_solvable() {
    let boards = [
        board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]),
        board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]),
        Board::goal(2),
        board(&[&[0, 3], &[2, 1]]),
    ];
    for b in boards {
        let real = Solver::new(b.clone());
        let twin = Solver::new(b.twin());
        assert_ne!(
            real.is_solvable(),
            twin.is_solvable(),
            "board and twin must disagree on solvability"
        );
    }
}

// =============================================================================
// Scrambled instances
// =============================================================================

#[test]
fn test_scrambled_instances_solve_and_replay() {
    fastrand::seed(11);
    for steps in [4, 8, 12] {
        let initial = scrambled(3, steps);
        let solver = Solver::new(initial.clone());

        assert!(solver.is_solvable());
        let moves = solver.moves();
        assert!(moves >= 0);
        assert!(
            moves as usize <= steps,
            "optimal solution cannot exceed the scramble walk"
        );

        let path = solver.solution().expect("solvable");
        assert_eq!(path.len(), moves as usize + 1);
        assert_valid_path(&initial, path);
    }
}

#[test]
fn test_scrambled_two_by_two() {
    fastrand::seed(23);
    let initial = scrambled(2, 9);
    let solver = Solver::new(initial.clone());
    assert!(solver.is_solvable());
    assert_valid_path(&initial, solver.solution().expect("solvable"));
}

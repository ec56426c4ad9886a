//! Best-first puzzle search with twin-race unsolvability detection.
//!
//! The solver runs two searches over [`Board`] successors: one from the
//! real initial board and one from its [`Board::twin`]. Exactly one of a
//! board and its twin is solvable, so whichever search reaches the goal
//! first decides solvability, with no parity computation. Both frontiers
//! are advanced in strict alternation on a single thread, the real one
//! first each round, so neither search can starve the other.
//!
//! Nodes live in an arena ([`Vec`]) and point at their predecessor by
//! index, forming a tree rooted at the initial board. Reconstruction walks
//! parent indices from the goal node back to the root. Expansion skips only
//! the popped node's immediate predecessor board; there is no closed set
//! (the Manhattan heuristic is consistent, so the first goal pop is still
//! an optimal path).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::board::Board;

/// One node in the search tree: a board, its path length from the root,
/// and the arena index of its predecessor (`None` at the root).
struct SearchNode {
    board: Board,
    moves: u32,
    parent: Option<usize>,
}

/// Frontier entry ordering a node by moves-so-far plus Manhattan distance.
///
/// [`BinaryHeap`] is a max-heap, so the comparison is reversed to pop the
/// lowest priority first. Ties go to the lower arena index (the node
/// generated earlier), which keeps the search deterministic.
#[derive(PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One independently-progressing best-first search.
struct Search {
    arena: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
}

impl Search {
    fn seeded(initial: Board) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            priority: initial.manhattan(),
            index: 0,
        });
        let arena = vec![SearchNode {
            board: initial,
            moves: 0,
            parent: None,
        }];
        Self { arena, frontier }
    }

    /// Pop the best frontier node. If it is the goal, return its arena
    /// index; otherwise expand it into the frontier and return `None`.
    fn step(&mut self) -> Option<usize> {
        let entry = self.frontier.pop()?;
        let index = entry.index;
        if self.arena[index].board.is_goal() {
            return Some(index);
        }

        let moves = self.arena[index].moves + 1;
        let parent = self.arena[index].parent;
        for neighbor in self.arena[index].board.neighbors() {
            // Skip exactly the board we just came from; anything else,
            // even if seen before, goes back on the frontier.
            if let Some(p) = parent {
                if self.arena[p].board == neighbor {
                    continue;
                }
            }
            let priority = moves + neighbor.manhattan();
            self.arena.push(SearchNode {
                board: neighbor,
                moves,
                parent: Some(index),
            });
            self.frontier.push(FrontierEntry {
                priority,
                index: self.arena.len() - 1,
            });
        }
        None
    }

    /// Walk parent indices from `goal` back to the root and return the
    /// boards in root-to-goal order.
    fn reconstruct(&self, goal: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.arena[goal].moves as usize + 1);
        let mut current = Some(goal);
        while let Some(index) = current {
            path.push(self.arena[index].board.clone());
            current = self.arena[index].parent;
        }
        path.reverse();
        path
    }
}

/// Solver for one puzzle instance.
///
/// The entire search runs inside [`Solver::new`]; the query methods read
/// the cached outcome.
pub struct Solver {
    solution: Option<Vec<Board>>,
}

impl Solver {
    /// Solve the given board, deciding solvability along the way.
    ///
    /// The real search is polled before the twin search in every round, so
    /// a board that is already at the goal (including the degenerate 1x1
    /// board, whose twin is identical) always resolves as solvable.
    pub fn new(initial: Board) -> Self {
        let twin = initial.twin();
        let mut real_search = Search::seeded(initial);
        let mut twin_search = Search::seeded(twin);

        let solution = loop {
            if let Some(goal) = real_search.step() {
                break Some(real_search.reconstruct(goal));
            }
            if twin_search.step().is_some() {
                break None;
            }
        };

        Self { solution }
    }

    /// Whether the instance has a solution.
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Length of the minimum-move solution, or -1 if unsolvable.
    pub fn moves(&self) -> i32 {
        match &self.solution {
            Some(path) => (path.len() - 1) as i32,
            None => -1,
        }
    }

    /// The boards from the initial configuration to the goal, inclusive and
    /// in order, or `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }
}

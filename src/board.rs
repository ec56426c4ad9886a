//! Sliding-tile puzzle board representation.
//!
//! A [`Board`] is an immutable n-by-n arrangement of the tiles `0..n*n`,
//! where 0 is the blank cell that adjacent tiles slide into. Both search
//! heuristics (Hamming and Manhattan distance) and the blank position are
//! computed once at construction and cached, so the solver's inner loop
//! reads them in O(1).
//!
//! Every board-producing operation ([`Board::twin`], [`Board::neighbors`])
//! copies the tile array rather than aliasing it. Boards are plain values:
//! they compare by content and can be shared freely between search nodes.

use std::fmt;

/// Errors detected while validating a tile arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The arrangement has no rows
    Empty,
    /// A row whose length differs from the number of rows
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A tile value outside `0..n*n`
    OutOfRange { value: u32, limit: u32 },
    /// A tile value that occurs more than once
    Duplicate { value: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Empty => write!(f, "board has no rows"),
            BoardError::Ragged { row, len, expected } => {
                write!(f, "row {row} has {len} tiles, expected {expected}")
            }
            BoardError::OutOfRange { value, limit } => {
                write!(f, "tile value {value} is outside 0..{limit}")
            }
            BoardError::Duplicate { value } => {
                write!(f, "tile value {value} occurs more than once")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// One puzzle configuration.
///
/// Stored as a flat row-major array; `tiles[row * size + col]` is the tile
/// at `(row, col)`. Tile `k` belongs at index `k - 1` in the goal
/// configuration, with the blank in the last cell.
#[derive(Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    /// Index of the blank (tile 0)
    blank: usize,
    hamming: u32,
    manhattan: u32,
}

impl Board {
    /// Validate a tile arrangement and build a board from it.
    ///
    /// The input must be square (as many columns per row as there are rows)
    /// and contain every value in `0..n*n` exactly once. The one exception
    /// is the 1x1 board: the classic puzzle format numbers its single cell
    /// as 1 rather than 0, so either value is accepted and the board is
    /// already solved either way. The tile data is copied, so the board is
    /// independent of the caller's storage.
    pub fn new(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::Ragged {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
        }

        // 1x1: nothing can slide, so the board is solved whichever way its
        // single cell is numbered. Accept 0 and the classic format's 1.
        if size == 1 {
            let value = rows[0][0];
            if value > 1 {
                return Err(BoardError::OutOfRange { value, limit: 2 });
            }
            return Ok(Self::from_tiles(1, vec![value]));
        }

        let limit = (size * size) as u32;
        let mut seen = vec![false; size * size];
        let mut tiles = Vec::with_capacity(size * size);
        for values in rows {
            for &value in values {
                if value >= limit {
                    return Err(BoardError::OutOfRange { value, limit });
                }
                if seen[value as usize] {
                    return Err(BoardError::Duplicate { value });
                }
                seen[value as usize] = true;
                tiles.push(value);
            }
        }

        Ok(Self::from_tiles(size, tiles))
    }

    /// The solved configuration of the given dimension: tiles in ascending
    /// order with the blank in the last cell.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0; there is no 0x0 board.
    pub fn goal(size: usize) -> Self {
        assert!(size >= 1, "board dimension must be at least 1");
        let count = size * size;
        let mut tiles: Vec<u32> = (1..count as u32).collect();
        tiles.push(0);
        Self::from_tiles(size, tiles)
    }

    /// Build a board from an already-validated flat tile array, computing
    /// the cached blank position and distances.
    fn from_tiles(size: usize, tiles: Vec<u32>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);

        let mut blank = 0;
        let mut hamming = 0;
        let mut manhattan = 0;
        for (idx, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                blank = idx;
                continue;
            }
            let goal_idx = (tile - 1) as usize;
            if goal_idx != idx {
                hamming += 1;
            }
            let row_dist = (idx / size).abs_diff(goal_idx / size);
            let col_dist = (idx % size).abs_diff(goal_idx % size);
            manhattan += (row_dist + col_dist) as u32;
        }

        Self {
            size,
            tiles,
            blank,
            hamming,
            manhattan,
        }
    }

    /// Board dimension n.
    pub fn dimension(&self) -> usize {
        self.size
    }

    /// The tile at `(row, col)`; 0 is the blank.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// `(row, col)` of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Number of tiles out of place, ignoring the blank. Cached.
    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    /// Sum of the tiles' horizontal plus vertical distances from their goal
    /// cells, ignoring the blank. Cached.
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    /// Whether every tile sits in its goal position.
    pub fn is_goal(&self) -> bool {
        self.manhattan == 0
    }

    /// A board identical to this one except that the first two tiles of one
    /// row are exchanged: row 0, or row 1 when the blank sits in row 0.
    /// Both swapped cells are non-blank. Exactly one of a board and its twin
    /// is solvable, which is what the solver's second search exploits.
    ///
    /// A 1x1 board has nothing to swap and twins to itself.
    pub fn twin(&self) -> Self {
        if self.size == 1 {
            return self.clone();
        }
        let row = if self.blank / self.size == 0 { 1 } else { 0 };
        let mut tiles = self.tiles.clone();
        tiles.swap(row * self.size, row * self.size + 1);
        Self::from_tiles(self.size, tiles)
    }

    /// All boards reachable by sliding one adjacent tile into the blank.
    ///
    /// Enumerated in a fixed order (blank moves up, down, left, right where
    /// legal): 2 to 4 boards, or none for a 1x1 board.
    pub fn neighbors(&self) -> Vec<Self> {
        let (row, col) = self.blank_position();
        let mut boards = Vec::with_capacity(4);
        if row > 0 {
            boards.push(self.slide(self.blank - self.size));
        }
        if row + 1 < self.size {
            boards.push(self.slide(self.blank + self.size));
        }
        if col > 0 {
            boards.push(self.slide(self.blank - 1));
        }
        if col + 1 < self.size {
            boards.push(self.slide(self.blank + 1));
        }
        boards
    }

    /// A copy of this board with the tile at `from` moved into the blank.
    fn slide(&self, from: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, from);
        Self::from_tiles(self.size, tiles)
    }
}

/// Value equality: same dimension and the same tile arrangement. The cached
/// fields are derived from the tiles, so they never disagree.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    /// Dimension on the first line, then the tile grid, fixed-width cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        let width = if self.size < 11 { 2 } else { 3 };
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{:width$} ", self.tiles[row * self.size + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, {:?})", self.size, self.size, self.tiles)
    }
}

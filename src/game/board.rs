use std::fmt;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned tokens that wins the game.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The side owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn token(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Terminal state of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Player),
    Draw,
}

/// The 6x7 grid. Row 0 is the top; columns fill from the bottom row upward,
/// so per column the occupied cells are a contiguous run from row `ROWS - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    tokens: usize,
}

/// The four scan axes as (row, col) steps: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            tokens: 0,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Total number of tokens on the board.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` if the column is full.
    /// Pure query, no mutation.
    pub fn drop_position(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Columns that can still take a token, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Put `side`'s token at (row, col). The cell must be empty.
    ///
    /// This and [`remove`](Self::remove) are the only mutation primitives;
    /// committed moves go through [`moves::apply`](super::moves::apply).
    pub fn place(&mut self, col: usize, row: usize, side: Player) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty, "cell is occupied");
        self.cells[row][col] = side.to_cell();
        self.tokens += 1;
    }

    /// Clear (row, col), restoring the empty state so that every scan
    /// behaves as if the placement never happened.
    pub fn remove(&mut self, col: usize, row: usize) {
        debug_assert_ne!(self.cells[row][col], Cell::Empty, "cell is empty");
        self.cells[row][col] = Cell::Empty;
        self.tokens -= 1;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.tokens == ROWS * COLS
    }

    /// Scan the whole board for a terminal state: rows, then columns, then
    /// the down-right diagonal, then the down-left diagonal. The first
    /// four-in-a-row found decides the winner; a full board with none is a
    /// draw.
    pub fn winner(&self) -> GameOutcome {
        // No alignment of CONNECT tokens can exist yet; skipping the scan
        // cannot change the result.
        if self.tokens < CONNECT {
            return GameOutcome::Ongoing;
        }

        // Rows
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                if let Some(side) = self.window_owner(row, col, 0, 1) {
                    return GameOutcome::Win(side);
                }
            }
        }

        // Columns
        for col in 0..COLS {
            for row in 0..=ROWS - CONNECT {
                if let Some(side) = self.window_owner(row, col, 1, 0) {
                    return GameOutcome::Win(side);
                }
            }
        }

        // Diagonals, top-left to bottom-right
        for row in 0..=ROWS - CONNECT {
            for col in 0..=COLS - CONNECT {
                if let Some(side) = self.window_owner(row, col, 1, 1) {
                    return GameOutcome::Win(side);
                }
            }
        }

        // Diagonals, top-right to bottom-left
        for row in 0..=ROWS - CONNECT {
            for col in CONNECT - 1..COLS {
                if let Some(side) = self.window_owner(row, col, 1, -1) {
                    return GameOutcome::Win(side);
                }
            }
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }

    /// Check if the last move at (row, col) resulted in a win.
    ///
    /// Counts contiguous runs through the placed cell along all four axes;
    /// cheaper than a full-board rescan, used by the search after every
    /// trial placement.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= CONNECT
        })
    }

    /// All four cells of the window starting at (row, col) along (dr, dc)
    /// share an owner?
    fn window_owner(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Player> {
        let side = self.cells[row][col].owner()?;
        for i in 1..CONNECT as isize {
            let r = (row as isize + i * dr) as usize;
            let c = (col as isize + i * dc) as usize;
            if self.cells[r][c] != side.to_cell() {
                return None;
            }
        }
        Some(side)
    }

    /// Length of the run of `cell` starting one step from (row, col) along
    /// (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && r < ROWS as isize
            && c >= 0
            && c < COLS as isize
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row][col].token())?;
            }
            writeln!(f)?;
        }
        write!(f, "0 1 2 3 4 5 6")
    }
}

#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; ROWS]) -> Board {
    let mut board = Board::new();
    // Place bottom-up so the gravity invariant holds while building.
    for (r, line) in rows.iter().enumerate().rev() {
        for (c, ch) in line.chars().enumerate() {
            match ch {
                'R' => board.place(c, r, Player::Red),
                'Y' => board.place(c, r, Player::Yellow),
                '.' => {}
                other => panic!("bad cell char {other:?}"),
            }
        }
    }
    board
}

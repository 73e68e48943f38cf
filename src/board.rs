//! Game board (the well) and collision detection

use crate::piece::Piece;
use crate::position::Position;
use crate::tetromino::PieceKind;

/// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board - either empty or filled by a locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Read-only view of the grid, indexed [row][col] with row 0 at the bottom
pub type Well = [[Cell; BOARD_WIDTH]; BOARD_HEIGHT];

/// The game board
#[derive(Debug, Clone)]
pub struct Board {
    cells: Well,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Map a position to grid indices, None if out of bounds
    fn index(row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return None;
        }
        Some((row, col))
    }

    /// Get the cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|(r, c)| self.cells[r][c])
    }

    /// Set a cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some((r, c)) => {
                self.cells[r][c] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_some_and(|cell| cell.is_filled())
    }

    /// True if the piece overlaps a wall, the floor, the ceiling or a filled cell
    pub fn collides(&self, piece: &Piece) -> bool {
        self.collides_at(&piece.shape(), piece.position())
    }

    /// True if `shape` anchored at `position` is out of bounds or overlaps a filled cell
    pub fn collides_at(&self, shape: &[(i32, i32)], position: Position) -> bool {
        shape.iter().any(|&(dr, dc)| {
            let cell = position.add(dr, dc);
            match self.get(cell.row, cell.col) {
                Some(cell) => cell.is_filled(),
                None => true,
            }
        })
    }

    /// Merge a piece into the well
    pub fn add_to_well(&mut self, piece: &Piece) {
        for cell in piece.layout() {
            let placed = self.set(cell.row, cell.col, Cell::Filled(piece.kind()));
            debug_assert!(placed, "locked cell {} is outside the well", cell);
        }
    }

    /// Indices of every completely filled row, bottom to top
    pub fn completed_rows(&self) -> Vec<usize> {
        (0..BOARD_HEIGHT)
            .filter(|&row| self.is_line_full(row))
            .collect()
    }

    /// Remove the given rows, shift everything above them down and
    /// refill the top with empty rows
    pub fn delete_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let mut write_row = 0;
        for read_row in 0..BOARD_HEIGHT {
            if !rows.contains(&read_row) {
                if write_row != read_row {
                    self.cells[write_row] = self.cells[read_row];
                }
                write_row += 1;
            }
        }

        for row in write_row..BOARD_HEIGHT {
            self.cells[row] = [Cell::Empty; BOARD_WIDTH];
        }
    }

    /// Check if a line is completely filled
    fn is_line_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.is_filled())
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Snapshot of the grid for rendering
    pub fn well(&self) -> &Well {
        &self.cells
    }
}

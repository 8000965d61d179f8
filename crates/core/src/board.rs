//! Board module - manages the playfield grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! locked piece. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the top (y < 0) are open headroom: they are never stored and
//! never collide.

use arrayvec::ArrayVec;

use crate::types::{Cell, Rgb, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Number of rows, as a capacity for cleared-row lists
pub const BOARD_ROWS: usize = GRID_HEIGHT as usize;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a piece cell may sit at (x, y).
    ///
    /// The column must be on the board and the row above the floor. Rows
    /// above the top are always free; rows on the board must be empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        y < 0 || matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_none())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top).
    ///
    /// Rows above each cleared row move down; empty rows fill in at the top.
    /// Uses a two-pointer pass with zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the vacated rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Lock cells onto the board with the given color.
    ///
    /// Returns true if successful, false if any cell is outside the grid or
    /// already occupied. Nothing is written on failure. Rows above the top
    /// count as outside; the game never locks there, so that case only
    /// guards against a bad caller.
    pub fn lock_cells<I>(&mut self, cells: I, color: Rgb) -> bool
    where
        I: IntoIterator<Item = (i8, i8)> + Clone,
    {
        // First check if all positions are valid
        let all_open = cells
            .clone()
            .into_iter()
            .all(|(x, y)| matches!(self.get(x, y), Some(None)));
        if !all_open {
            return false;
        }

        for (x, y) in cells {
            self.set(x, y, Some(color));
        }

        true
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array (renderer snapshot format)
    pub fn write_grid(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        let width = GRID_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(RED));
        board.set(5, 10, Some(RED));

        assert_eq!(board.get(0, 0), Some(Some(RED)));
        assert_eq!(board.cells[0], Some(RED));
        assert_eq!(board.cells[10 * 10 + 5], Some(RED));
    }

    #[test]
    fn test_is_free_allows_headroom_above_top() {
        let board = Board::new();
        assert!(board.is_free(0, -1));
        assert!(board.is_free(9, -4));
        // Columns are still bounded above the top
        assert!(!board.is_free(-1, -1));
        assert!(!board.is_free(10, -1));
        // The floor is solid
        assert!(!board.is_free(0, 20));
    }

    #[test]
    fn test_clear_full_rows_compacts_non_adjacent_rows() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, Some(RED));
            board.set(x, 17, Some(RED));
        }
        board.set(2, 18, Some(RED));
        board.set(4, 16, Some(RED));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert!(board.is_occupied(2, 19));
        assert!(board.is_occupied(4, 18));
        assert_eq!(board.filled_count(), 2);
        assert!(board.is_row_empty(0));
    }

    #[test]
    fn test_write_grid_matches_cells() {
        let mut board = Board::new();
        board.set(3, 7, Some(RED));
        let mut grid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        board.write_grid(&mut grid);
        assert_eq!(grid[7][3], Some(RED));
        assert_eq!(grid[0][0], None);
    }
}

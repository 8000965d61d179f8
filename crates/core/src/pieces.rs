//! Pieces module - Tetromino catalog and matrix rotation
//!
//! Each kind is stored once, in its spawn orientation, as a square boolean
//! matrix. Every other orientation is derived at runtime by rotating the
//! matrix clockwise. There are no wall kicks: a rotation either fits where the
//! piece is or it is rejected.

use crate::types::{PieceKind, Rgb, MAX_MATRIX};

/// Square boolean matrix describing a piece orientation.
///
/// Storage is fixed at `MAX_MATRIX x MAX_MATRIX`; only the top-left
/// `size x size` block is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: u8,
    cells: [[bool; MAX_MATRIX]; MAX_MATRIX],
}

impl Matrix {
    /// Build a matrix from `N x N` rows of 0/1 values.
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_MATRIX]; MAX_MATRIX];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at (row, col) is filled. Out of range reads as empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Rotate 90° clockwise: `out[j][n-1-i] = in[i][j]`.
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_MATRIX]; MAX_MATRIX];
        for i in 0..n {
            for j in 0..n {
                cells[j][n - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Filled cells as `(col, row)` offsets, row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |row| {
            (0..n)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.filled().count()
    }
}

const I_MATRIX: Matrix = Matrix::from_rows([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const O_MATRIX: Matrix = Matrix::from_rows([
    [1, 1],
    [1, 1],
]);

const T_MATRIX: Matrix = Matrix::from_rows([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const S_MATRIX: Matrix = Matrix::from_rows([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const Z_MATRIX: Matrix = Matrix::from_rows([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

const J_MATRIX: Matrix = Matrix::from_rows([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_MATRIX: Matrix = Matrix::from_rows([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

/// Spawn-orientation matrix and display color for a piece kind
pub fn shape_for(kind: PieceKind) -> (Matrix, Rgb) {
    (spawn_matrix(kind), piece_color(kind))
}

/// Spawn-orientation matrix for a piece kind
pub fn spawn_matrix(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => I_MATRIX,
        PieceKind::O => O_MATRIX,
        PieceKind::T => T_MATRIX,
        PieceKind::S => S_MATRIX,
        PieceKind::Z => Z_MATRIX,
        PieceKind::J => J_MATRIX,
        PieceKind::L => L_MATRIX,
    }
}

/// Display color for a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(255, 0, 255),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_size_and_cells() {
        let m = T_MATRIX;
        assert_eq!(m.size(), 3);
        assert!(m.get(0, 1));
        assert!(!m.get(0, 0));
        assert!(m.get(1, 0) && m.get(1, 1) && m.get(1, 2));
        // Outside the 3x3 block
        assert!(!m.get(3, 0));
    }

    #[test]
    fn rotate_cw_t_piece() {
        let east = T_MATRIX.rotate_cw();
        let expected = Matrix::from_rows([
            [0, 1, 0],
            [0, 1, 1],
            [0, 1, 0],
        ]);
        assert_eq!(east, expected);
    }

    #[test]
    fn rotate_cw_i_piece_is_vertical_in_column_two() {
        let east = I_MATRIX.rotate_cw();
        let cells: Vec<_> = east.filled().collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn filled_yields_col_row_offsets() {
        let cells: Vec<_> = J_MATRIX.filled().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    }
}

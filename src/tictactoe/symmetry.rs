//! D4 symmetry group operations for board canonicalization

use serde::{Deserialize, Serialize};

use super::board::{Board, CELLS, Cell, Move, SIDE};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [D4Transform::identity(); 8];
        for (i, rotation) in [0, 90, 180, 270].into_iter().enumerate() {
            transforms[2 * i] = D4Transform {
                rotation,
                reflection: false,
            };
            transforms[2 * i + 1] = D4Transform {
                rotation,
                reflection: true,
            };
        }
        transforms
    }

    /// Apply transform to a row-major position (0-8)
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / SIDE, pos % SIDE);

        // Reflect across the vertical axis first, then rotate clockwise
        if self.reflection {
            col = SIDE - 1 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = SIDE - 1 - row;
            row = new_row;
            col = new_col;
        }

        row * SIDE + col
    }

    /// Apply transform to a move
    pub fn transform_move(&self, mv: Move) -> Option<Move> {
        mv.index()
            .map(|idx| Move::from_index(self.transform_position(idx)))
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // reflect-then-rotate is an involution for every rotation
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl Board {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (i, &cell) in self.cells().iter().enumerate() {
            cells[t.transform_position(i)] = cell;
        }
        Board::from_cells(cells)
    }

    /// Smallest board among the 8 symmetric images.
    ///
    /// Symmetric positions share their game-theoretic value, so this is the
    /// key the search uses for its transposition cache.
    pub fn canonical(&self) -> Self {
        D4Transform::all()
            .iter()
            .map(|t| self.transform(t))
            .min()
            .unwrap_or(*self)
    }
}

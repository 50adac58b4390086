//! Pieces module - tetromino templates and rotation
//!
//! The catalog is a fixed, ordered list of shapes built once per engine and
//! never mutated. Rotation is a pure transform on masks; legality of the
//! rotated mask is decided by the board, not here. There is no wall-kick table.

use crate::error::ConfigError;
use crate::grid::Mask;
use crate::types::PieceKind;

/// A piece template: occupancy mask plus its color/identity token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub mask: Mask,
}

impl Shape {
    pub fn new(kind: PieceKind, mask: Mask) -> Self {
        Self { kind, mask }
    }
}

/// Mask rows for each kind, in spawn orientation.
fn spawn_bits(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
    }
}

/// Spawn-orientation mask for a piece kind.
pub fn spawn_mask(kind: PieceKind) -> Mask {
    let bits = spawn_bits(kind);
    let mut mask = Mask::new(bits[0].len(), bits.len(), false);
    for (y, row) in bits.iter().enumerate() {
        for (x, &bit) in row.iter().enumerate() {
            mask.set(x, y, bit != 0);
        }
    }
    mask
}

/// Rotate a mask 90° clockwise, returning a new mask.
///
/// An `R x C` mask becomes `C x R`. The input is not modified.
pub fn rotate(mask: &Mask) -> Mask {
    mask.rotate_cw()
}

/// Ordered, immutable set of shapes a game draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Build a catalog from arbitrary shapes.
    ///
    /// Fails if the list is empty, any mask has no occupied cell, or any mask
    /// has a row with no occupied cell.
    pub fn new(shapes: Vec<Shape>) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for shape in &shapes {
            if shape.mask.count() == 0 {
                return Err(ConfigError::EmptyShape(shape.kind.letter()));
            }
            if let Some(row) = shape.mask.rows().position(|r| !r.iter().any(|&c| c)) {
                return Err(ConfigError::BlankRow {
                    shape: shape.kind.letter(),
                    row,
                });
            }
        }
        Ok(Self { shapes })
    }

    /// The seven standard tetrominoes in I, O, T, S, Z, J, L order.
    pub fn standard() -> Self {
        Self {
            shapes: PieceKind::ALL
                .iter()
                .map(|&kind| Shape::new(kind, spawn_mask(kind)))
                .collect(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard catalog as an owned list.
pub fn all_shapes() -> Vec<Shape> {
    ShapeCatalog::standard().shapes
}

//! Active falling piece
//!
//! A piece only knows its own geometry. Legality is always checked against
//! the board by the caller before a move or rotation is kept.

use crate::position::Position;
use crate::tetromino::{PieceKind, Rotation, RotationDirection};

/// A movable instance of a piece kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    /// Anchor: top-left corner of the kind's bounding box
    position: Position,
    rotation: Rotation,
}

impl Piece {
    /// Create a piece in its spawn rotation
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            position,
            rotation: Rotation::North,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Offsets of the 4 blocks relative to the anchor
    pub fn shape(&self) -> [(i32, i32); 4] {
        self.kind.shape(self.rotation)
    }

    /// Absolute board cells of the 4 blocks
    pub fn layout(&self) -> [Position; 4] {
        self.shape().map(|(dr, dc)| self.position.add(dr, dc))
    }

    /// Replace the anchor position (no collision check)
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Step to the next or previous rotation state (no collision check)
    pub fn rotate(&mut self, direction: RotationDirection) {
        self.rotation = match direction {
            RotationDirection::Clockwise => self.rotation.cw(),
            RotationDirection::CounterClockwise => self.rotation.ccw(),
        };
    }
}

//! Piece kind catalog
//!
//! The 7 standard shapes and their four rotation layouts. Every layout lives
//! inside a 4x4 bounding box whose top-left corner is the piece anchor, so
//! offsets run downward (row 0 to -3) and rightward (col 0 to 3).

/// The 7 piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, // long bar
    O, // square
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-character label, used for text dumps of the well
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Get the 4 (row, col) offsets of this kind at a given rotation,
    /// relative to the anchor (top-left of the bounding box)
    pub fn shape(&self, rotation: Rotation) -> [(i32, i32); 4] {
        match self {
            // North: ....   East: ..I.
            //        IIII         ..I.
            //        ....         ..I.
            //        ....         ..I.
            PieceKind::I => match rotation {
                Rotation::North => [(-1, 0), (-1, 1), (-1, 2), (-1, 3)],
                Rotation::East => [(0, 2), (-1, 2), (-2, 2), (-3, 2)],
                Rotation::South => [(-2, 0), (-2, 1), (-2, 2), (-2, 3)],
                Rotation::West => [(0, 1), (-1, 1), (-2, 1), (-3, 1)],
            },
            // O looks the same in every state
            PieceKind::O => [(0, 1), (0, 2), (-1, 1), (-1, 2)],
            PieceKind::T => match rotation {
                Rotation::North => [(0, 1), (-1, 0), (-1, 1), (-1, 2)],
                Rotation::East => [(0, 1), (-1, 1), (-1, 2), (-2, 1)],
                Rotation::South => [(-1, 0), (-1, 1), (-1, 2), (-2, 1)],
                Rotation::West => [(0, 1), (-1, 0), (-1, 1), (-2, 1)],
            },
            // North: .SS    East: .S.
            //        SS.          .SS
            //                     ..S
            PieceKind::S => match rotation {
                Rotation::North => [(0, 1), (0, 2), (-1, 0), (-1, 1)],
                Rotation::East => [(0, 1), (-1, 1), (-1, 2), (-2, 2)],
                Rotation::South => [(-1, 1), (-1, 2), (-2, 0), (-2, 1)],
                Rotation::West => [(0, 0), (-1, 0), (-1, 1), (-2, 1)],
            },
            // North: ZZ.    East: ..Z
            //        .ZZ          .ZZ
            //                     .Z.
            PieceKind::Z => match rotation {
                Rotation::North => [(0, 0), (0, 1), (-1, 1), (-1, 2)],
                Rotation::East => [(0, 2), (-1, 1), (-1, 2), (-2, 1)],
                Rotation::South => [(-1, 0), (-1, 1), (-2, 1), (-2, 2)],
                Rotation::West => [(0, 1), (-1, 0), (-1, 1), (-2, 0)],
            },
            PieceKind::J => match rotation {
                Rotation::North => [(0, 0), (-1, 0), (-1, 1), (-1, 2)],
                Rotation::East => [(0, 1), (0, 2), (-1, 1), (-2, 1)],
                Rotation::South => [(-1, 0), (-1, 1), (-1, 2), (-2, 2)],
                Rotation::West => [(0, 1), (-1, 1), (-2, 0), (-2, 1)],
            },
            PieceKind::L => match rotation {
                Rotation::North => [(0, 2), (-1, 0), (-1, 1), (-1, 2)],
                Rotation::East => [(0, 1), (-1, 1), (-2, 1), (-2, 2)],
                Rotation::South => [(-1, 0), (-1, 1), (-1, 2), (-2, 0)],
                Rotation::West => [(0, 0), (0, 1), (-1, 1), (-2, 1)],
            },
        }
    }
}

/// Rotation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    North, // Spawn state
    East,  // Clockwise from North
    South, // 180 from North
    West,  // Counter-clockwise from North
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise: North → East → South → West → North
    pub fn cw(&self) -> Rotation {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise: North → West → South → East → North
    pub fn ccw(&self) -> Rotation {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Direction for rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub fn opposite(&self) -> RotationDirection {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// `true` means clockwise
impl From<bool> for RotationDirection {
    fn from(clockwise: bool) -> Self {
        if clockwise {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_fit_bounding_box() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                for (dr, dc) in kind.shape(rotation) {
                    assert!((-3..=0).contains(&dr), "{:?} {:?} row {}", kind, rotation, dr);
                    assert!((0..=3).contains(&dc), "{:?} {:?} col {}", kind, rotation, dc);
                }
            }
        }
    }

    #[test]
    fn test_layouts_have_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let cells: HashSet<_> = kind.shape(rotation).into_iter().collect();
                assert_eq!(cells.len(), 4, "{:?} {:?}", kind, rotation);
            }
        }
    }

    #[test]
    fn test_rotation_cycles() {
        for rotation in Rotation::ALL {
            assert_eq!(rotation.cw().ccw(), rotation);
            assert_eq!(rotation.cw().cw().cw().cw(), rotation);
        }
    }

    #[test]
    fn test_bool_maps_to_direction() {
        assert_eq!(RotationDirection::from(true), RotationDirection::Clockwise);
        assert_eq!(
            RotationDirection::from(false),
            RotationDirection::CounterClockwise
        );
        assert_eq!(
            RotationDirection::Clockwise.opposite(),
            RotationDirection::CounterClockwise
        );
    }
}

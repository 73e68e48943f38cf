//! Blocky - a falling-block puzzle engine
//!
//! The engine owns the well, the active piece and the piece sequence. A
//! driver calls [`Game::step`] once per tick and forwards input through
//! [`Game::set_direction`] and [`Game::rotate_piece`].

pub mod bag;
pub mod board;
pub mod game;
pub mod piece;
pub mod position;
pub mod tetromino;

pub use bag::Bag;
pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, Well};
pub use game::{Direction, Game, GameState, LOCK_DELAY_LIMIT, SPAWN_POSITION};
pub use piece::Piece;
pub use position::Position;
pub use tetromino::{PieceKind, Rotation, RotationDirection};

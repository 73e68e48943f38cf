//! Core game state and logic
//!
//! The engine advances one discrete tick per `step()`. The caller owns the
//! clock and translates raw input into `set_direction` / `rotate_piece`.

use crate::bag::Bag;
use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Well};
use crate::piece::Piece;
use crate::position::Position;
use crate::tetromino::RotationDirection;
use tracing::{debug, info, trace};

/// Ticks a piece may stay blocked before it locks into the well
pub const LOCK_DELAY_LIMIT: u32 = 30;

/// Anchor of a freshly spawned piece: top row, centered 4-wide box
pub const SPAWN_POSITION: Position =
    Position::new(BOARD_HEIGHT as i32 - 1, BOARD_WIDTH as i32 / 2 - 2);

/// Offsets tried after a rotation: in place, then one row up
const ROTATION_KICKS: [(i32, i32); 2] = [(0, 0), (1, 0)];

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// A new piece had no room to spawn
    GameOver,
}

/// Horizontal movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

/// The game engine
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Current falling piece, None between a lock and the next spawn
    active_piece: Option<Piece>,
    /// Consecutive ticks gravity has been blocked
    lock_counter: u32,
    bag: Bag,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a new game with a random piece sequence
    pub fn new() -> Self {
        Self::with_bag(Bag::new())
    }

    /// Create a new game with a reproducible piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_bag(Bag::with_seed(seed))
    }

    fn with_bag(bag: Bag) -> Self {
        let mut game = Self {
            board: Board::new(),
            active_piece: None,
            lock_counter: 0,
            bag,
            state: GameState::Playing,
        };
        game.try_spawn_block();
        game
    }

    /// Advance one tick: spawn, gravity, then line clears
    pub fn step(&mut self) -> GameState {
        if self.state == GameState::GameOver {
            return self.state;
        }

        self.try_spawn_block();
        if self.state == GameState::Playing {
            self.process_gravity();
            self.process_cleared_lines();
        }
        self.state
    }

    /// Shift the active piece one column, or not at all for `Direction::None`
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state == GameState::Playing {
            self.process_movement(direction);
        }
    }

    /// Rotate the active piece, kicking it up one row if the rotation
    /// collides in place. Fully reverted if neither position fits.
    pub fn rotate_piece(&mut self, direction: impl Into<RotationDirection>) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(piece) = &mut self.active_piece else {
            return;
        };
        let direction = direction.into();
        let original = piece.position();

        piece.rotate(direction);
        for (kick_row, kick_col) in ROTATION_KICKS {
            let candidate = original.add(kick_row, kick_col);
            if !self.board.collides_at(&piece.shape(), candidate) {
                piece.move_to(candidate);
                return;
            }
        }

        trace!("rotation {:?} rejected at {}", direction, original);
        piece.rotate(direction.opposite());
        piece.move_to(original);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Grid snapshot for rendering
    pub fn well(&self) -> &Well {
        self.board.well()
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.active_piece.as_ref()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn lock_counter(&self) -> u32 {
        self.lock_counter
    }

    fn try_spawn_block(&mut self) {
        if self.active_piece.is_some() {
            return;
        }

        let kind = self.bag.next();
        let piece = Piece::new(kind, SPAWN_POSITION);
        if self.board.collides(&piece) {
            info!("no room to spawn {:?}, game over", kind);
            self.state = GameState::GameOver;
            return;
        }

        debug!("spawned {:?} at {}", kind, SPAWN_POSITION);
        self.active_piece = Some(piece);
        self.lock_counter = 0;
    }

    fn process_movement(&mut self, direction: Direction) {
        let Some(piece) = &mut self.active_piece else {
            return;
        };

        let position = piece.position();
        let next = match direction {
            Direction::None => position,
            Direction::Left => position.add(0, -1),
            Direction::Right => position.add(0, 1),
        };

        if self.board.collides_at(&piece.shape(), next) {
            trace!("move {:?} rejected at {}", direction, position);
        } else {
            piece.move_to(next);
        }
    }

    fn process_gravity(&mut self) {
        let Some(piece) = &mut self.active_piece else {
            return;
        };

        let next = piece.position().add(-1, 0);
        if !self.board.collides_at(&piece.shape(), next) {
            piece.move_to(next);
            self.lock_counter = 0;
            return;
        }

        self.lock_counter += 1;
        if self.lock_counter >= LOCK_DELAY_LIMIT {
            debug!("locking {:?} at {}", piece.kind(), piece.position());
            self.board.add_to_well(piece);
            self.lock_counter = 0;
            self.active_piece = None;
        }
    }

    fn process_cleared_lines(&mut self) {
        let rows = self.board.completed_rows();
        if !rows.is_empty() {
            debug!("clearing rows {:?}", rows);
            self.board.delete_rows(&rows);
        }
    }
}

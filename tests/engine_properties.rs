//! Property and scenario tests against the public engine API

use blocky::{
    BOARD_HEIGHT, BOARD_WIDTH, Bag, Board, Cell, Direction, Game, GameState, LOCK_DELAY_LIMIT,
    Piece, PieceKind, Position, Rotation, RotationDirection,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn apply(game: &mut Game, op: u8) {
    match op {
        0 => {
            game.step();
        }
        1 => game.set_direction(Direction::Left),
        2 => game.set_direction(Direction::Right),
        3 => game.set_direction(Direction::None),
        4 => game.rotate_piece(RotationDirection::Clockwise),
        _ => game.rotate_piece(RotationDirection::CounterClockwise),
    }
}

fn in_bounds(cell: Position) -> bool {
    (0..BOARD_HEIGHT as i32).contains(&cell.row) && (0..BOARD_WIDTH as i32).contains(&cell.col)
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    prop::sample::select(Rotation::ALL.to_vec())
}

proptest! {
    #[test]
    fn out_of_bounds_always_collides(
        kind in kind_strategy(),
        rotation in rotation_strategy(),
        row in -5i32..(BOARD_HEIGHT as i32 + 5),
        col in -5i32..(BOARD_WIDTH as i32 + 5),
        filled in prop::collection::vec((0i32..BOARD_HEIGHT as i32, 0i32..BOARD_WIDTH as i32), 0..40),
    ) {
        let mut board = Board::new();
        for (r, c) in filled {
            board.set(r, c, Cell::Filled(PieceKind::Z));
        }

        let shape = kind.shape(rotation);
        let position = Position::new(row, col);
        let escapes = shape.iter().any(|&(dr, dc)| !in_bounds(position.add(dr, dc)));
        if escapes {
            prop_assert!(board.collides_at(&shape, position));
        }
    }

    #[test]
    fn active_piece_never_collides(
        seed in any::<u64>(),
        ops in prop::collection::vec(0u8..6, 1..600),
    ) {
        let mut game = Game::with_seed(seed);
        for op in ops {
            apply(&mut game, op);
            if let Some(piece) = game.active_piece() {
                prop_assert!(!game.board().collides(piece));
            }
            prop_assert!(game.lock_counter() < LOCK_DELAY_LIMIT);
            if game.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn every_bag_cycle_deals_each_kind_once(seed in any::<u64>(), cycles in 1usize..20) {
        let mut bag = Bag::with_seed(seed);
        for _ in 0..cycles {
            let cycle: HashSet<_> = (0..PieceKind::ALL.len()).map(|_| bag.next()).collect();
            prop_assert_eq!(cycle.len(), PieceKind::ALL.len());
        }
    }
}

#[test]
fn piece_locks_on_the_limit_th_blocked_step() {
    let mut game = Game::with_seed(11);

    // Fall until gravity is blocked for the first time
    while game.lock_counter() == 0 {
        assert_eq!(game.step(), GameState::Playing);
    }
    let resting = game.active_piece().cloned().expect("piece resting on the floor");

    for blocked in 2..LOCK_DELAY_LIMIT {
        game.step();
        assert_eq!(game.lock_counter(), blocked);
        assert_eq!(game.active_piece(), Some(&resting));
    }

    game.step();
    assert!(game.active_piece().is_none());
    for cell in resting.layout() {
        assert!(game.board().is_filled(cell.row, cell.col));
    }
}

#[test]
fn filled_cells_only_come_from_locked_pieces() {
    let mut game = Game::with_seed(5);
    let mut locked = 0;
    let mut had_piece = game.active_piece().is_some();

    for _ in 0..2_000 {
        if game.step() == GameState::GameOver {
            break;
        }
        let has_piece = game.active_piece().is_some();
        if had_piece && !has_piece {
            locked += 1;
        }
        had_piece = has_piece;
    }

    // No input: pieces stack in the middle and never complete a row
    let filled = game.well().iter().flatten().filter(|c| c.is_filled()).count();
    assert_eq!(filled, locked * 4);
    assert!(game.is_game_over());
}

#[test]
fn kick_from_top_row_leaves_the_board() {
    // Anchor on the top row: the one-row kick always leaves the board
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I, Position::new(BOARD_HEIGHT as i32 - 1, 0));
    piece.rotate(RotationDirection::Clockwise);
    assert!(!board.collides(&piece));
    assert!(board.collides_at(&piece.shape(), piece.position().add(1, 0)));
}

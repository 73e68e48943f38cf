//! Headless driver for the Blocky engine
//!
//! Runs a single game with random input at a fixed tick count, logs to a file
//! in the temp dir and prints the final well.

mod settings;

use blocky::{BOARD_HEIGHT, BOARD_WIDTH, Cell, Direction, Game, GameState, RotationDirection};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use settings::Settings;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Inputs the driver can send, picked uniformly
const INPUTS: usize = 5;

/// Get the blocky temp directory (for logs)
fn blocky_temp_dir() -> io::Result<std::path::PathBuf> {
    let dir = std::env::temp_dir().join("blocky");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Send one randomly chosen input to the engine
fn random_input(game: &mut Game, rng: &mut impl Rng) {
    match rng.gen_range(0..INPUTS) {
        0 => game.set_direction(Direction::Left),
        1 => game.set_direction(Direction::Right),
        2 => game.set_direction(Direction::None),
        3 => game.rotate_piece(RotationDirection::Clockwise),
        _ => game.rotate_piece(RotationDirection::CounterClockwise),
    }
}

/// Render the well and active piece as text, top row first
fn render(game: &Game) -> String {
    let mut grid = [['.'; BOARD_WIDTH]; BOARD_HEIGHT];
    for (row, cells) in game.well().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Cell::Filled(kind) = cell {
                grid[row][col] = kind.symbol();
            }
        }
    }
    if let Some(piece) = game.active_piece() {
        for cell in piece.layout() {
            grid[cell.row as usize][cell.col as usize] = '#';
        }
    }

    let mut out = String::with_capacity((BOARD_WIDTH + 3) * BOARD_HEIGHT);
    for row in grid.iter().rev() {
        out.push('|');
        out.extend(row.iter());
        out.push_str("|\n");
    }
    out
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    let mut settings = Settings::load();
    if Settings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            eprintln!("Warning: Could not save settings: {}", e);
        }
    }

    // Setup tracing to log file
    let log_dir = blocky_temp_dir()?;
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.filter)),
        )
        .with_ansi(false)
        .init();

    let seed = *settings.simulation.seed.get_or_insert_with(rand::random);
    tracing::info!(
        "Blocky starting, session={:08x}, seed={}, log={}",
        session_id,
        seed,
        log_dir.join(&log_file).display()
    );

    let mut game = Game::with_seed(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let interval = settings.simulation.input_interval;

    let mut ticks = 0;
    while ticks < settings.simulation.max_ticks && game.state() == GameState::Playing {
        if interval > 0 && ticks % interval == 0 {
            random_input(&mut game, &mut rng);
        }
        game.step();
        ticks += 1;
    }

    let outcome = match game.state() {
        GameState::Playing => "still playing",
        GameState::GameOver => "game over",
    };
    tracing::info!("Finished after {} ticks: {}", ticks, outcome);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render(&game))?;
    writeln!(stdout, "Seed: {} | Ticks: {} | {}", seed, ticks, outcome)?;
    Ok(())
}

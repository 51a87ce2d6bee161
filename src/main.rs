//! Interactive console game.
//!
//! The human picks a color, sees the engine's suggestion for their own move,
//! then types a move such as `e2e4`. The engine answers for the other side.
//!
//! `cargo run --release -- --depth 3 --color white`

use std::env;
use std::io::{self, BufRead, Write};

use tulip_chess::game_state::chess_types::Color;
use tulip_chess::interface::game_api::{new_game, side_to_move, suggest_move, try_move};
use tulip_chess::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use tulip_chess::utils::render_game_state::render_game_state;

const DEFAULT_DEPTH: u8 = 3;

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_color(text: &str) -> Option<Color> {
    match text.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Color::Light),
        "black" | "b" => Some(Color::Dark),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let depth = flag_value(&args, "--depth")
        .and_then(|d| d.parse::<u8>().ok())
        .filter(|d| *d > 0)
        .unwrap_or(DEFAULT_DEPTH);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    let human = match flag_value(&args, "--color").and_then(parse_color) {
        Some(color) => color,
        None => {
            write!(stdout, "Play as white or black? (white/black): ")?;
            stdout.flush()?;
            let answer = lines.next().transpose()?.unwrap_or_default();
            parse_color(&answer).unwrap_or_else(|| {
                println!("Unrecognized color, defaulting to white.");
                Color::Light
            })
        }
    };

    let mut game = new_game();
    println!("{}", render_game_state(&game));

    loop {
        let mover = side_to_move(&game);
        if mover == human {
            match suggest_move(&game, human, depth) {
                Ok(mv) => println!(
                    "\nSuggested move for {}: {}",
                    human.name(),
                    move_to_long_algebraic(mv).unwrap_or_default()
                ),
                Err(e) => {
                    println!("\n{e}. Game over.");
                    return Ok(());
                }
            }

            write!(stdout, "{} to move, enter a move (e.g. e2e4): ", mover.name())?;
            stdout.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            if matches!(line.trim(), "quit" | "exit") {
                return Ok(());
            }

            let mv = match long_algebraic_to_move(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            if !try_move(&mut game, mv.from, mv.to, mover) {
                println!("Illegal move!");
                continue;
            }
        } else {
            println!("\nEngine is thinking for {}...", mover.name());
            let mv = match suggest_move(&game, mover, depth) {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{e}. Game over.");
                    return Ok(());
                }
            };
            if !try_move(&mut game, mv.from, mv.to, mover) {
                println!("Engine move rejected. Game over.");
                return Ok(());
            }
            println!(
                "Engine plays {}",
                move_to_long_algebraic(mv).unwrap_or_default()
            );
        }
        println!("{}", render_game_state(&game));
    }
}

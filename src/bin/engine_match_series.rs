//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --games 6 --depth 2`

use tulip_chess::engines::engine_minimax::MinimaxEngine;
use tulip_chess::engines::engine_random::RandomEngine;
use tulip_chess::engines::engine_trait::Engine;
use tulip_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games: u16 = flag_value(&args, "--games", 4);
    let depth: u8 = flag_value(&args, "--depth", 2u8).max(1);
    let base_seed: u64 = flag_value(&args, "--seed", 1234);

    let player1 = move || Box::new(MinimaxEngine::new(depth)) as Box<dyn Engine>;
    let player2 = move || Box::new(RandomEngine::seeded(base_seed)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed,
            per_game: MatchConfig {
                max_plies: 120,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

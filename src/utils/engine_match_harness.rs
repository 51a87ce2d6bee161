//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with an optional
//! seeded random opening prefix. Without check detection a game ends when a
//! king is captured, when the side to move has no moves, or at the ply limit.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinKingCapture,
    BlackWinKingCapture,
    /// The given side was to move with nothing to play.
    NoMovesAvailable(Color),
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinKingCapture { player: PlayerId, color: Color },
    NoMovesAvailable,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms(),
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard start.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let (mut state, opening_moves_lan) = apply_seeded_random_opening(
        &GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state.clone(),
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(outcome) = finished(&state) {
            result.outcome = outcome;
            break;
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_white.choose_move(&state, &config.go_params)?,
            Color::Dark => engine_black.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move else {
            result.outcome = MatchOutcome::NoMovesAvailable(mover);
            break;
        };
        if !apply_move_in_place(&mut state, chosen, mover) {
            return Err(format!(
                "engine returned illegal move {}",
                move_to_long_algebraic(chosen).unwrap_or_else(|_| format!("{chosen:?}"))
            ));
        }
        result.played_moves_lan.push(move_to_long_algebraic(chosen)?);
    }

    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(outcome) = finished(&state) {
            result.outcome = outcome;
        }
    }
    result.final_state = state;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        if config.verbose {
            let (white, black) = if player1_is_white {
                (player1.name().to_owned(), player2.name().to_owned())
            } else {
                (player2.name().to_owned(), player1.name().to_owned())
            };
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_color = match result.outcome {
            MatchOutcome::WhiteWinKingCapture => Some(Color::Light),
            MatchOutcome::BlackWinKingCapture => Some(Color::Dark),
            _ => None,
        };
        let mapped = match winner_color {
            Some(color) => {
                let player1_won = (color == Color::Light) == player1_is_white;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinKingCapture { player, color }
            }
            None => {
                stats.draws += 1;
                match result.outcome {
                    MatchOutcome::NoMovesAvailable(_) => SeriesOutcome::NoMovesAvailable,
                    _ => SeriesOutcome::DrawMaxPlies,
                }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    Ok(stats)
}

fn finished(state: &GameState) -> Option<MatchOutcome> {
    if state.king_square(Color::Light).is_none() {
        return Some(MatchOutcome::BlackWinKingCapture);
    }
    if state.king_square(Color::Dark).is_none() {
        return Some(MatchOutcome::WhiteWinKingCapture);
    }
    None
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<String>), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let mover = state.side_to_move;
        let moves = PseudoLegalMoveGenerator.generate_moves(&state, mover);
        if moves.is_empty() {
            break;
        }

        let chosen = moves[rng.random_range(0..moves.len())];
        opening_moves_lan.push(move_to_long_algebraic(chosen)?);
        if !apply_move_in_place(&mut state, chosen, mover) {
            return Err("generated opening move was rejected".to_owned());
        }
    }

    Ok((state, opening_moves_lan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn seeded_openings_are_reproducible() {
        let game = GameState::new_game();
        let (a, lan_a) = apply_seeded_random_opening(&game, 99, 3, 3).expect("opening should apply");
        let (b, lan_b) = apply_seeded_random_opening(&game, 99, 3, 3).expect("opening should apply");
        assert_eq!(lan_a.len(), 3);
        assert_eq!(lan_a, lan_b);
        assert_eq!(a, b);
        assert_eq!(a.side_to_move, Color::Dark);
    }

    #[test]
    fn random_vs_minimax_runs_to_completion() {
        let mut white = RandomEngine::seeded(5);
        let mut black = MinimaxEngine::new(1);
        let result = play_engine_match(
            &mut white,
            &mut black,
            42,
            MatchConfig {
                max_plies: 30,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!(!result.opening_moves_lan.is_empty());
        assert!(result.white_move_count + result.black_move_count > 0);
        assert_eq!(
            result.played_moves_lan.len() as u32,
            result.white_move_count + result.black_move_count
                - u32::from(matches!(result.outcome, MatchOutcome::NoMovesAvailable(_)))
        );
    }

    #[test]
    fn king_capture_ends_the_game() {
        let mut state = GameState::new_empty();
        state.put(Square::new(4, 7), Piece::new(Color::Light, PieceKind::King));
        assert_eq!(finished(&state), Some(MatchOutcome::WhiteWinKingCapture));
        state.put(Square::new(4, 0), Piece::new(Color::Dark, PieceKind::King));
        assert_eq!(finished(&state), None);
    }

    #[test]
    fn series_aggregates_every_game() {
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::new(1)),
            || Box::new(RandomEngine::seeded(3)),
            MatchSeriesConfig {
                games: 2,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 12,
                    opening_min_plies: 2,
                    opening_max_plies: 4,
                    ..MatchConfig::default()
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 2);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 2);
        assert!(stats.player1_avg_move_time_ms() >= 0.0);
        assert!(stats.report().starts_with("games=2"));
    }
}

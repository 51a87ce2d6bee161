//! Fixed-depth exhaustive minimax search.
//!
//! Every branch works on its own copy of the position. There is no pruning,
//! move ordering, or caching; the result is fully determined by the move
//! generator's order and the scorer.

use std::error::Error;
use std::fmt;
use std::thread;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

pub type SearchOutcome<T> = Result<T, SearchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The searching side has nothing to play at the root.
    NoLegalMoves(Color),
    ZeroDepth,
    /// The generator produced a move the rules then rejected.
    InvalidGeneratedMove(ChessMove),
    WorkerPanicked,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves(color) => write!(f, "no legal moves for {}", color.name()),
            SearchError::ZeroDepth => write!(f, "search depth must be at least 1"),
            SearchError::InvalidGeneratedMove(mv) => {
                write!(f, "generated move {mv:?} was rejected when applied")
            }
            SearchError::WorkerPanicked => write!(f, "search worker thread panicked"),
        }
    }
}

impl Error for SearchError {}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
    /// Worker threads for root moves. `0` and `1` both mean single-threaded.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3, threads: 1 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root, leaves included.
    pub nodes: u64,
    /// Non-root positions whose side to move had no moves; scored as leaves.
    pub exhausted_nodes: u64,
}

impl SearchStats {
    fn merge(&mut self, rhs: SearchStats) {
        self.nodes += rhs.nodes;
        self.exhausted_nodes += rhs.exhausted_nodes;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: ChessMove,
    pub best_score: i32,
    pub root_moves: usize,
    pub stats: SearchStats,
}

/// Picks the root move for `player` with the greatest minimax score. Ties go
/// to the move generated first.
pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    player: Color,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchOutcome<SearchResult> {
    if config.depth == 0 {
        return Err(SearchError::ZeroDepth);
    }

    let root_moves = generator.generate_moves(game_state, player);
    if root_moves.is_empty() {
        return Err(SearchError::NoLegalMoves(player));
    }

    let mut stats = SearchStats::default();
    let scores = if config.threads > 1 && root_moves.len() > 1 {
        score_root_moves_parallel(game_state, player, &root_moves, generator, scorer, config, &mut stats)?
    } else {
        score_root_moves(game_state, player, &root_moves, generator, scorer, config.depth, &mut stats)?
    };

    let mut best: Option<(ChessMove, i32)> = None;
    for (mv, score) in root_moves.iter().copied().zip(scores) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    let (best_move, best_score) = best.ok_or(SearchError::NoLegalMoves(player))?;

    Ok(SearchResult {
        best_move,
        best_score,
        root_moves: root_moves.len(),
        stats,
    })
}

/// Convenience entry point with the material scorer and pseudo-legal moves.
pub fn best_move(game_state: &GameState, player: Color, depth: u8) -> SearchOutcome<ChessMove> {
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
    use crate::search::board_scoring::MaterialScorer;

    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    minimax_search(game_state, player, &PseudoLegalMoveGenerator, &MaterialScorer, config)
        .map(|result| result.best_move)
}

fn score_root_moves<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    player: Color,
    moves: &[ChessMove],
    generator: &G,
    scorer: &S,
    depth: u8,
    stats: &mut SearchStats,
) -> SearchOutcome<Vec<i32>> {
    moves
        .iter()
        .map(|mv| {
            let next = apply_move(game_state, *mv, player)
                .ok_or(SearchError::InvalidGeneratedMove(*mv))?;
            minimax(&next, depth - 1, false, player, generator, scorer, stats)
        })
        .collect()
}

/// Splits the root moves into contiguous chunks, one per worker. Scores come
/// back in generation order so the tie-break matches the sequential search.
fn score_root_moves_parallel<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    player: Color,
    moves: &[ChessMove],
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    stats: &mut SearchStats,
) -> SearchOutcome<Vec<i32>> {
    let workers = config.threads.min(moves.len());
    let chunk_size = moves.len().div_ceil(workers);

    let chunk_results = thread::scope(|scope| {
        let handles: Vec<_> = moves
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut local = SearchStats::default();
                    let scores = score_root_moves(
                        game_state,
                        player,
                        chunk,
                        generator,
                        scorer,
                        config.depth,
                        &mut local,
                    );
                    scores.map(|s| (s, local))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(Err(SearchError::WorkerPanicked)))
            .collect::<SearchOutcome<Vec<_>>>()
    })?;

    let mut scores = Vec::with_capacity(moves.len());
    for (chunk_scores, local) in chunk_results {
        scores.extend(chunk_scores);
        stats.merge(local);
    }
    Ok(scores)
}

fn minimax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    depth: u8,
    maximizing: bool,
    player: Color,
    generator: &G,
    scorer: &S,
    stats: &mut SearchStats,
) -> SearchOutcome<i32> {
    stats.nodes += 1;

    if depth == 0 {
        return Ok(scorer.score(game_state, player));
    }

    let current = if maximizing { player } else { player.opposite() };
    let moves = generator.generate_moves(game_state, current);
    if moves.is_empty() {
        stats.exhausted_nodes += 1;
        return Ok(scorer.score(game_state, player));
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let next =
            apply_move(game_state, mv, current).ok_or(SearchError::InvalidGeneratedMove(mv))?;
        let score = minimax(&next, depth - 1, !maximizing, player, generator, scorer, stats)?;
        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    Ok(best)
}

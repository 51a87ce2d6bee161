use std::sync::Arc;
use std::thread;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_shared::{enemy_piece_on, is_en_passant_capture};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn record_leaf(&mut self, game_state: &GameState, mv: ChessMove, mover: Color) {
        self.nodes += 1;
        let Some(piece) = game_state.piece_at(mv.from) else {
            return;
        };

        match piece.kind {
            PieceKind::Pawn => {
                if is_en_passant_capture(game_state, mv.to, mover) {
                    self.en_passant += 1;
                    self.captures += 1;
                } else if enemy_piece_on(game_state, mv.to, mover).is_some() {
                    self.captures += 1;
                }
                if mv.to.rank == mover.promotion_rank() {
                    self.promotions += 1;
                }
            }
            _ => {
                if enemy_piece_on(game_state, mv.to, mover).is_some() {
                    self.captures += 1;
                }
                if piece.kind == PieceKind::King && mv.d_file().abs() == 2 {
                    self.castles += 1;
                }
            }
        }
    }
}

/// Counts leaf moves `depth` plies deep, alternating from `side_to_move`.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(generator, game_state, depth, &mut total);
    total
}

/// One worker per root move; results are summed.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, String> {
    if depth <= 1 {
        return Ok(perft(generator.as_ref(), game_state, depth));
    }

    let mover = game_state.side_to_move;
    let root_moves = generator.generate_moves(game_state, mover);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let Some(next) = apply_move(game_state, mv, mover) else {
            continue;
        };
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &next, depth - 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| "perft worker thread panicked".to_owned())?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let mover = game_state.side_to_move;
    let moves = generator.generate_moves(game_state, mover);

    if depth == 1 {
        for mv in moves {
            counts.record_leaf(game_state, mv, mover);
        }
        return;
    }

    for mv in moves {
        if let Some(next) = apply_move(game_state, mv, mover) {
            perft_recurse(generator, &next, depth - 1, counts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&PseudoLegalMoveGenerator, &GameState::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_startpos_shallow_depths() {
        let game = GameState::new_game();
        assert_eq!(perft(&PseudoLegalMoveGenerator, &game, 1).nodes, 20);
        let depth_two = perft(&PseudoLegalMoveGenerator, &game, 2);
        assert_eq!(depth_two.nodes, 400);
        assert_eq!(depth_two.captures, 0);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let game = GameState::new_game();
        let single = perft(&PseudoLegalMoveGenerator, &game, 2);
        let multi = perft_multi_threaded(Arc::new(PseudoLegalMoveGenerator), &game, 2)
            .expect("perft workers should finish");
        assert_eq!(single, multi);
    }

    #[test]
    fn leaf_metrics_cover_special_moves() {
        let mut game = GameState::new_empty();
        game.put(Square::new(4, 7), Piece::new(Color::Light, PieceKind::King));
        game.put(Square::new(7, 7), Piece::new(Color::Light, PieceKind::Rook));
        game.put(Square::new(1, 1), Piece::new(Color::Light, PieceKind::Pawn));
        game.put(Square::new(4, 3), Piece::new(Color::Light, PieceKind::Pawn));
        game.put(Square::new(3, 3), Piece::new(Color::Dark, PieceKind::Pawn));
        game.put(Square::new(0, 0), Piece::new(Color::Dark, PieceKind::Rook));
        game.en_passant_square = Some(Square::new(3, 3));

        let counts = perft(&PseudoLegalMoveGenerator, &game, 1);
        assert_eq!(counts.castles, 1);
        assert_eq!(counts.en_passant, 1);
        // b7-b8, b7xa8
        assert_eq!(counts.promotions, 2);
        assert_eq!(counts.captures, 2);
    }
}

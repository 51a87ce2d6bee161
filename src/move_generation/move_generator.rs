//! Move enumeration.
//!
//! Generators probe the pseudo-legal oracle over every origin/destination
//! pair. Output order is rank-major over origins, then rank-major over
//! destinations; search tie-breaks depend on it.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_pseudo_legal};

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState, color: Color) -> Vec<ChessMove>;
}

/// Every move the geometry rules allow, king safety ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::with_capacity(64);
        for (from, piece) in game_state.pieces() {
            if piece.color != color {
                continue;
            }
            for to in Square::all() {
                let mv = ChessMove::new(from, to);
                if is_pseudo_legal(game_state, mv, color) {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

/// Pseudo-legal moves filtered to those that do not leave the mover's king
/// attackable on the very next ply. Opt-in; the default search does not use it.
#[derive(Debug, Clone, Copy, Default)]
pub struct KingSafeMoveGenerator;

impl MoveGenerator for KingSafeMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, color: Color) -> Vec<ChessMove> {
        PseudoLegalMoveGenerator
            .generate_moves(game_state, color)
            .into_iter()
            .filter(|mv| {
                apply_move(game_state, *mv, color).is_some_and(|next| !is_king_in_check(&next, color))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_has_twenty_moves_for_each_side() {
        let game = GameState::new_game();
        let light = PseudoLegalMoveGenerator.generate_moves(&game, Color::Light);
        assert_eq!(light.len(), 20);
        let pawn_moves = light
            .iter()
            .filter(|mv| game.piece_at(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn))
            .count();
        assert_eq!(pawn_moves, 16);

        assert_eq!(PseudoLegalMoveGenerator.generate_moves(&game, Color::Dark).len(), 20);
    }

    #[test]
    fn order_is_rank_major_by_origin_then_destination() {
        let game = GameState::new_game();
        let light = PseudoLegalMoveGenerator.generate_moves(&game, Color::Light);
        assert_eq!(light[0], ChessMove::new(Square::new(0, 6), Square::new(0, 4)));
        assert_eq!(light[1], ChessMove::new(Square::new(0, 6), Square::new(0, 5)));
        assert_eq!(
            *light.last().expect("moves exist"),
            ChessMove::new(Square::new(6, 7), Square::new(7, 5))
        );
    }

    #[test]
    fn color_without_pieces_has_no_moves() {
        let mut game = GameState::new_empty();
        game.put(Square::new(4, 4), Piece::new(Color::Light, PieceKind::King));
        assert!(PseudoLegalMoveGenerator.generate_moves(&game, Color::Dark).is_empty());
        assert_eq!(PseudoLegalMoveGenerator.generate_moves(&game, Color::Light).len(), 8);
    }

    #[test]
    fn king_safe_filter_drops_self_exposing_moves() {
        let mut game = GameState::new_empty();
        game.put(Square::new(4, 7), Piece::new(Color::Light, PieceKind::King));
        game.put(Square::new(4, 6), Piece::new(Color::Light, PieceKind::Rook));
        game.put(Square::new(4, 0), Piece::new(Color::Dark, PieceKind::Rook));

        let pseudo = PseudoLegalMoveGenerator.generate_moves(&game, Color::Light);
        let safe = KingSafeMoveGenerator.generate_moves(&game, Color::Light);
        let rook_sideways = ChessMove::new(Square::new(4, 6), Square::new(0, 6));

        assert!(pseudo.contains(&rook_sideways));
        assert!(!safe.contains(&rook_sideways));
        assert!(safe.len() < pseudo.len());
    }
}

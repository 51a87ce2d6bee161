use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_pseudo_legal;
use crate::move_generation::legal_move_shared::{en_passant_victim_square, is_en_passant_capture};
use crate::move_generation::legal_moves_king::castling_rook_file;

/// Validates and plays `mv` for `mover`. Returns `false` and leaves the state
/// untouched when the move is rejected.
///
/// Turn order is not enforced here; the side to move simply flips.
pub fn apply_move_in_place(game_state: &mut GameState, mv: ChessMove, mover: Color) -> bool {
    if !is_pseudo_legal(game_state, mv, mover) {
        return false;
    }
    let Some(moved) = game_state.piece_at(mv.from) else {
        return false;
    };

    let is_pawn = moved.kind == PieceKind::Pawn;
    let en_passant_capture = is_pawn && is_en_passant_capture(game_state, mv.to, mover);

    game_state.en_passant_square = if is_pawn && mv.d_rank().abs() == 2 {
        Some(mv.to)
    } else {
        None
    };

    if en_passant_capture {
        game_state.clear(en_passant_victim_square(mv.to, mover));
    }

    if moved.kind == PieceKind::King && mv.d_file().abs() == 2 {
        let rook_from = Square::new(castling_rook_file(mv), mv.from.rank);
        let rook_to = mv.to.offset(-mv.d_file().signum(), 0);
        if let Some(rook) = game_state.contents(rook_from).copied() {
            game_state.clear(rook_from);
            if let Some(cell) = game_state.contents_mut(rook_to) {
                *cell = SquareContents {
                    has_moved: true,
                    ..rook
                };
            }
        }
    }

    let placed = if is_pawn && mv.to.rank == mover.promotion_rank() {
        Piece::new(mover, PROMOTION_PIECE)
    } else {
        moved
    };

    game_state.clear(mv.from);
    if let Some(cell) = game_state.contents_mut(mv.to) {
        *cell = SquareContents {
            occupant: Some(placed),
            has_moved: true,
        };
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    true
}

/// Successor state after `mv`, leaving `game_state` untouched.
pub fn apply_move(game_state: &GameState, mv: ChessMove, mover: Color) -> Option<GameState> {
    let mut next = game_state.clone();
    apply_move_in_place(&mut next, mv, mover).then_some(next)
}

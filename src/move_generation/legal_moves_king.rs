use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_path_clear;

pub fn is_king_move_pseudo_legal(game_state: &GameState, mv: ChessMove, _mover: Color) -> bool {
    if mv.d_file().abs() <= 1 && mv.d_rank().abs() <= 1 {
        return true;
    }
    is_castling_pseudo_legal(game_state, mv)
}

/// Corner file of the rook a two-file king move castles with.
#[inline]
pub fn castling_rook_file(mv: ChessMove) -> i8 {
    if mv.d_file() > 0 {
        KINGSIDE_ROOK_FILE
    } else {
        QUEENSIDE_ROOK_FILE
    }
}

/// Castling ignores attacked squares and the corner rook's color; only
/// never-moved and empty-path conditions apply.
fn is_castling_pseudo_legal(game_state: &GameState, mv: ChessMove) -> bool {
    if game_state.has_moved_at(mv.from) || mv.d_rank() != 0 || mv.d_file().abs() != 2 {
        return false;
    }

    let rook_square = Square::new(castling_rook_file(mv), mv.from.rank);
    let Some(rook) = game_state.contents(rook_square) else {
        return false;
    };
    if rook.kind() != Some(PieceKind::Rook) || rook.has_moved {
        return false;
    }

    is_path_clear(game_state, mv.from, rook_square)
}

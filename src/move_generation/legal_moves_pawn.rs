use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{enemy_piece_on, is_en_passant_capture};

/// Pawn geometry: single push, double push from an unmoved pawn, diagonal
/// capture, and en-passant capture.
pub fn is_pawn_move_pseudo_legal(game_state: &GameState, mv: ChessMove, mover: Color) -> bool {
    let forward = mover.forward();
    let d_file = mv.d_file();
    let d_rank = mv.d_rank();

    if d_file == 0 {
        if d_rank == forward {
            return game_state.is_empty_at(mv.to);
        }
        if d_rank == 2 * forward {
            let passed_over = mv.from.offset(0, forward);
            return !game_state.has_moved_at(mv.from)
                && game_state.is_empty_at(passed_over)
                && game_state.is_empty_at(mv.to);
        }
        return false;
    }

    if d_file.abs() == 1 && d_rank == forward {
        return enemy_piece_on(game_state, mv.to, mover).is_some()
            || is_en_passant_capture(game_state, mv.to, mover);
    }

    false
}

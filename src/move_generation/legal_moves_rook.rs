use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_path_clear, is_straight_line};

pub fn is_rook_move_pseudo_legal(game_state: &GameState, mv: ChessMove, _mover: Color) -> bool {
    is_straight_line(mv) && is_path_clear(game_state, mv.from, mv.to)
}

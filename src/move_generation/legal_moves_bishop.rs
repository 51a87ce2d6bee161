use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_diagonal_line, is_path_clear};

pub fn is_bishop_move_pseudo_legal(game_state: &GameState, mv: ChessMove, _mover: Color) -> bool {
    is_diagonal_line(mv) && is_path_clear(game_state, mv.from, mv.to)
}

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::is_bishop_move_pseudo_legal;
use crate::move_generation::legal_moves_rook::is_rook_move_pseudo_legal;

pub fn is_queen_move_pseudo_legal(game_state: &GameState, mv: ChessMove, mover: Color) -> bool {
    is_rook_move_pseudo_legal(game_state, mv, mover)
        || is_bishop_move_pseudo_legal(game_state, mv, mover)
}

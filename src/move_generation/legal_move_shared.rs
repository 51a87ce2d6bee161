use crate::game_state::{chess_types::*, game_state::GameState};

/// True when every square strictly between `from` and `to` is empty.
///
/// Callers must pass an aligned pair (same rank, same file, or same diagonal).
pub fn is_path_clear(game_state: &GameState, from: Square, to: Square) -> bool {
    let step_file = (to.file - from.file).signum();
    let step_rank = (to.rank - from.rank).signum();

    let mut cursor = from.offset(step_file, step_rank);
    while cursor != to {
        if !cursor.is_on_board() || !game_state.is_empty_at(cursor) {
            return false;
        }
        cursor = cursor.offset(step_file, step_rank);
    }
    true
}

#[inline]
pub fn is_straight_line(mv: ChessMove) -> bool {
    (mv.d_file() == 0) != (mv.d_rank() == 0)
}

#[inline]
pub fn is_diagonal_line(mv: ChessMove) -> bool {
    mv.d_file() != 0 && mv.d_file().abs() == mv.d_rank().abs()
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square, mover: Color) -> Option<PieceKind> {
    game_state
        .piece_at(square)
        .filter(|p| p.color == mover.opposite())
        .map(|p| p.kind)
}

/// Square of the pawn an en-passant capture landing on `to` would remove:
/// one rank behind the destination relative to the mover's advance.
#[inline]
pub fn en_passant_victim_square(to: Square, mover: Color) -> Square {
    to.offset(0, -mover.forward())
}

/// True when a pawn of `mover` landing diagonally on `to` captures en passant.
pub fn is_en_passant_capture(game_state: &GameState, to: Square, mover: Color) -> bool {
    let Some(target) = game_state.en_passant_square else {
        return false;
    };
    if !game_state.is_empty_at(to) {
        return false;
    }
    let victim = en_passant_victim_square(to, mover);
    victim == target && enemy_piece_on(game_state, victim, mover) == Some(PieceKind::Pawn)
}

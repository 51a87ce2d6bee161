//! Pseudo-legal move validation.
//!
//! `validate_move` is the single rules oracle: it checks the shared
//! preconditions (bounds, ownership, no self-capture) and then dispatches to
//! the per-piece geometry rules. It never looks at king safety; the attack
//! helpers below build on it for the optional king-safe filter.

use std::error::Error;
use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::is_bishop_move_pseudo_legal;
use crate::move_generation::legal_moves_king::is_king_move_pseudo_legal;
use crate::move_generation::legal_moves_knight::is_knight_move_pseudo_legal;
use crate::move_generation::legal_moves_pawn::is_pawn_move_pseudo_legal;
use crate::move_generation::legal_moves_queen::is_queen_move_pseudo_legal;
use crate::move_generation::legal_moves_rook::is_rook_move_pseudo_legal;

/// Why a candidate move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    NotMoversPiece,
    SelfCapture,
    RuleViolation(PieceKind),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "square is off the board"),
            MoveRejection::NotMoversPiece => {
                write!(f, "origin square does not hold one of the mover's pieces")
            }
            MoveRejection::SelfCapture => write!(f, "destination holds one of the mover's pieces"),
            MoveRejection::RuleViolation(kind) => write!(f, "{kind:?} cannot move that way"),
        }
    }
}

impl Error for MoveRejection {}

pub fn validate_move(game_state: &GameState, mv: ChessMove, mover: Color) -> Result<(), MoveRejection> {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return Err(MoveRejection::OutOfBounds);
    }

    let piece = game_state
        .piece_at(mv.from)
        .filter(|p| p.color == mover)
        .ok_or(MoveRejection::NotMoversPiece)?;

    if game_state.color_at(mv.to) == Some(mover) {
        return Err(MoveRejection::SelfCapture);
    }

    let geometry_ok = match piece.kind {
        PieceKind::Pawn => is_pawn_move_pseudo_legal(game_state, mv, mover),
        PieceKind::Knight => is_knight_move_pseudo_legal(game_state, mv, mover),
        PieceKind::Bishop => is_bishop_move_pseudo_legal(game_state, mv, mover),
        PieceKind::Rook => is_rook_move_pseudo_legal(game_state, mv, mover),
        PieceKind::Queen => is_queen_move_pseudo_legal(game_state, mv, mover),
        PieceKind::King => is_king_move_pseudo_legal(game_state, mv, mover),
    };

    if geometry_ok {
        Ok(())
    } else {
        Err(MoveRejection::RuleViolation(piece.kind))
    }
}

#[inline]
pub fn is_pseudo_legal(game_state: &GameState, mv: ChessMove, mover: Color) -> bool {
    validate_move(game_state, mv, mover).is_ok()
}

/// True when some piece of `attacker_color` has a pseudo-legal move onto `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    game_state
        .pieces()
        .filter(|(_, p)| p.color == attacker_color)
        .any(|(from, _)| is_pseudo_legal(game_state, ChessMove::new(from, square), attacker_color))
}

/// A side with no king on the board is never "in check".
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

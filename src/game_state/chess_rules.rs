//! Canonical chess-rule constants.
//!
//! Stores the standard back-rank layout used to set up a new game and the
//! fixed promotion piece.

use crate::game_state::chess_types::PieceKind;

/// Back-rank order from the `a` file to the `h` file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pawns always promote to the highest-value piece.
pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;

pub const KINGSIDE_ROOK_FILE: i8 = 7;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;

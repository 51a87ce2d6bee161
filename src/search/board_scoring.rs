//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search delegates static position scoring to this trait so alternate
//! heuristics can be swapped in without touching search code.

use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `perspective`, regardless of side to move.
    fn score(&self, game_state: &GameState, perspective: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        game_state
            .pieces()
            .map(|(_, piece)| {
                let value = Self::piece_value(piece.kind);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

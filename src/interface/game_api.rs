//! Entry points for the game-loop collaborator.
//!
//! The console front end (and any other caller) only needs these: set up a
//! game, try a move, ask for a suggestion, and read squares back for display.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::search::minimax::{best_move, SearchOutcome};

#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Validates and plays the move. `false` leaves the game untouched.
#[inline]
pub fn try_move(game_state: &mut GameState, from: Square, to: Square, color: Color) -> bool {
    apply_move_in_place(game_state, ChessMove::new(from, to), color)
}

#[inline]
pub fn suggest_move(game_state: &GameState, color: Color, depth: u8) -> SearchOutcome<ChessMove> {
    best_move(game_state, color, depth)
}

#[inline]
pub fn piece_at(game_state: &GameState, square: Square) -> Option<Piece> {
    game_state.piece_at(square)
}

#[inline]
pub fn side_to_move(game_state: &GameState) -> Color {
    game_state.side_to_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax::SearchError;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank)
    }

    #[test]
    fn opening_double_push_flow() {
        let mut game = new_game();
        assert!(try_move(&mut game, sq(4, 6), sq(4, 4), Color::Light));
        assert_eq!(game.en_passant_square, Some(sq(4, 4)));
        assert_eq!(side_to_move(&game), Color::Dark);

        assert!(try_move(&mut game, sq(3, 1), sq(3, 3), Color::Dark));
        assert_eq!(game.en_passant_square, Some(sq(3, 3)));

        assert!(try_move(&mut game, sq(4, 4), sq(3, 3), Color::Light));
        assert_eq!(
            piece_at(&game, sq(3, 3)),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );
        assert_eq!(piece_at(&game, sq(3, 4)), None);
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn rejected_moves_do_not_flip_the_turn() {
        let mut game = new_game();
        assert!(!try_move(&mut game, sq(4, 6), sq(4, 3), Color::Light));
        assert!(!try_move(&mut game, sq(4, 1), sq(4, 3), Color::Light));
        assert_eq!(game, new_game());
    }

    #[test]
    fn suggestion_is_playable() {
        let mut game = new_game();
        let mv = suggest_move(&game, Color::Light, 2).expect("start position has moves");
        assert!(try_move(&mut game, mv.from, mv.to, Color::Light));
    }

    #[test]
    fn suggestion_without_moves_is_an_error() {
        let game = GameState::new_empty();
        assert_eq!(
            suggest_move(&game, Color::Light, 1),
            Err(SearchError::NoLegalMoves(Color::Light))
        );
    }
}

//! Core board state representation.
//!
//! `GameState` is the central model for the engine: an 8x8 grid of square
//! contents, the side to move, and the live en-passant target. It is a plain
//! value; search clones it for every hypothetical branch.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// `[rank][file]`, rank 0 at the top.
    pub grid: [[SquareContents; 8]; 8],
    pub side_to_move: Color,
    /// Destination of the double pawn push made on the previous ply, if any.
    pub en_passant_square: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: [[SquareContents::EMPTY; 8]; 8],
            side_to_move: Color::Light,
            en_passant_square: None,
        }
    }
}

impl GameState {
    /// Empty board with Light to move. Mostly useful for setting up test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut state = Self::default();
        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let file = file as i8;
            state.put(Square::new(file, 0), Piece::new(Color::Dark, *kind));
            state.put(Square::new(file, 1), Piece::new(Color::Dark, PieceKind::Pawn));
            state.put(Square::new(file, 6), Piece::new(Color::Light, PieceKind::Pawn));
            state.put(Square::new(file, 7), Piece::new(Color::Light, *kind));
        }
        state
    }

    /// Contents of `square`, or `None` when the coordinate is off the board.
    #[inline]
    pub fn contents(&self, square: Square) -> Option<&SquareContents> {
        if !square.is_on_board() {
            return None;
        }
        Some(&self.grid[square.rank as usize][square.file as usize])
    }

    #[inline]
    pub fn contents_mut(&mut self, square: Square) -> Option<&mut SquareContents> {
        if !square.is_on_board() {
            return None;
        }
        Some(&mut self.grid[square.rank as usize][square.file as usize])
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.contents(square).and_then(|c| c.occupant)
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.contents(square).and_then(SquareContents::color)
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.contents(square).map_or(true, SquareContents::is_empty)
    }

    #[inline]
    pub fn has_moved_at(&self, square: Square) -> bool {
        self.contents(square).is_some_and(|c| c.has_moved)
    }

    /// Places an unmoved piece. Off-board squares are ignored.
    pub fn put(&mut self, square: Square, piece: Piece) {
        if let Some(cell) = self.contents_mut(square) {
            *cell = SquareContents::with_piece(piece);
        }
    }

    pub fn clear(&mut self, square: Square) {
        if let Some(cell) = self.contents_mut(square) {
            *cell = SquareContents::EMPTY;
        }
    }

    pub fn set_has_moved(&mut self, square: Square, has_moved: bool) {
        if let Some(cell) = self.contents_mut(square) {
            cell.has_moved = has_moved;
        }
    }

    /// Occupied squares with their pieces, rank-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_standard_layout() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.pieces().count(), 32);

        assert_eq!(
            game.piece_at(Square::new(4, 7)),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game.piece_at(Square::new(3, 0)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        for file in 0..8 {
            assert_eq!(
                game.piece_at(Square::new(file, 6)),
                Some(Piece::new(Color::Light, PieceKind::Pawn))
            );
            assert_eq!(
                game.piece_at(Square::new(file, 1)),
                Some(Piece::new(Color::Dark, PieceKind::Pawn))
            );
        }
        assert!(game.pieces().all(|(sq, _)| !game.has_moved_at(sq)));
    }

    #[test]
    fn off_board_lookups_return_none() {
        let game = GameState::new_game();
        assert!(game.contents(Square::new(-1, 3)).is_none());
        assert!(game.piece_at(Square::new(3, 8)).is_none());
    }

    #[test]
    fn clones_are_independent() {
        let game = GameState::new_game();
        let mut branch = game.clone();
        branch.clear(Square::new(4, 6));
        assert!(branch.is_empty_at(Square::new(4, 6)));
        assert!(!game.is_empty_at(Square::new(4, 6)));
    }

    #[test]
    fn king_square_finds_each_king() {
        let game = GameState::new_game();
        assert_eq!(game.king_square(Color::Light), Some(Square::new(4, 7)));
        assert_eq!(game.king_square(Color::Dark), Some(Square::new(4, 0)));
        assert_eq!(GameState::new_empty().king_square(Color::Light), None);
    }
}

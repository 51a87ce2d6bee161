//! Terminal-oriented board renderer.
//!
//! Light pieces print uppercase, Dark pieces lowercase, empty squares as `.`.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8i8 {
        let label = char::from(b'8' - rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..8i8 {
            let ch = game_state
                .piece_at(Square::new(file, rank))
                .map_or('.', piece_to_char);
            out.push(ch);
            out.push(' ');
        }

        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

pub fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}

//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! coordinates. Rank index `0` is the top row, printed as `8`.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e2") to a board coordinate.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let file_index = (file - b'a') as i8;
    let rank_index = (b'8' - rank) as i8;
    Ok(Square::new(file_index, rank_index))
}

/// Convert a board coordinate to algebraic notation (for example: "e2").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !square.is_on_board() {
        return Err(format!(
            "Square out of bounds: file {} rank {}",
            square.file, square.rank
        ));
    }

    let file_char = char::from(b'a' + square.file as u8);
    let rank_char = char::from(b'8' - square.rank as u8);
    Ok(format!("{file_char}{rank_char}"))
}

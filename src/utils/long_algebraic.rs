use crate::game_state::chess_types::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Format a move as coordinate notation, e.g. `e2e4`.
pub fn move_to_long_algebraic(mv: ChessMove) -> Result<String, String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

/// Parse coordinate notation such as `e2e4`. A trailing promotion letter is
/// accepted and ignored because promotion is always to a queen.
pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, String> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }
    if text.len() == 5 && !matches!(text.as_bytes()[4].to_ascii_lowercase(), b'q' | b'r' | b'b' | b'n') {
        return Err(format!("Invalid promotion suffix in move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(ChessMove::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    #[test]
    fn parses_and_formats_coordinate_moves() {
        let mv = long_algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv, ChessMove::new(Square::new(4, 6), Square::new(4, 4)));
        assert_eq!(move_to_long_algebraic(mv).expect("move should format"), "e2e4");

        let promo = long_algebraic_to_move("a7a8q").expect("promotion suffix should parse");
        assert_eq!(promo.to, Square::new(0, 0));
    }

    #[test]
    fn rejects_short_or_garbled_input() {
        assert!(long_algebraic_to_move("e2").is_err());
        assert!(long_algebraic_to_move("e2e9").is_err());
        assert!(long_algebraic_to_move("e7e8k").is_err());
        assert!(long_algebraic_to_move("é2e4").is_err());
    }
}

/// Core value types shared by the board model, rules, and search.
///
/// Board coordinates follow display order: rank `0` is the top row (Dark's
/// back rank, printed as `8`) and file `0` is the `a` file.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank step of a single pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "white",
            Color::Dark => "black",
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Contents of one board cell. `has_moved` only matters for pawns
/// (double-push eligibility) and for kings and rooks (castling).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareContents {
    pub occupant: Option<Piece>,
    pub has_moved: bool,
}

impl SquareContents {
    pub const EMPTY: SquareContents = SquareContents {
        occupant: None,
        has_moved: false,
    };

    #[inline]
    pub const fn with_piece(piece: Piece) -> Self {
        Self {
            occupant: Some(piece),
            has_moved: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.occupant.map(|p| p.color)
    }

    #[inline]
    pub fn kind(&self) -> Option<PieceKind> {
        self.occupant.map(|p| p.kind)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// A board coordinate. Values outside `0..=7` are representable so callers can
/// hand arbitrary input to the rules, which reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file.wrapping_add(d_file),
            rank: self.rank.wrapping_add(d_rank),
        }
    }

    /// All 64 squares, rank-major from the top-left corner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|rank| (0..8i8).map(move |file| Square::new(file, rank)))
    }
}

/// A from/to coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn d_file(self) -> i8 {
        self.to.file.wrapping_sub(self.from.file)
    }

    #[inline]
    pub const fn d_rank(self) -> i8 {
        self.to.rank.wrapping_sub(self.from.rank)
    }
}

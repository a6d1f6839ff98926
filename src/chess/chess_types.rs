//! Owner tokens and piece kinds for international chess.

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Chess piece archetype. Each kind maps to one `MovementRule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Unicode chess symbol used as the piece's display name.
    pub const fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::King) => '♔',
            (Color::Dark, PieceKind::Pawn) => '♟',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::King) => '♚',
        }
    }
}

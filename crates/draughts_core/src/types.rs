use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Single-letter tag used by the board diagram.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Diagram letter: lowercase for men, uppercase for kings.
    pub fn letter(self) -> char {
        let c = self.color.letter();
        match self.kind {
            PieceKind::Man => c,
            PieceKind::King => c.to_ascii_uppercase(),
        }
    }

    pub fn from_letter(ch: char) -> Option<Piece> {
        let color = match ch.to_ascii_lowercase() {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return None,
        };
        let kind = if ch.is_ascii_uppercase() {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece { color, kind })
    }
}

/// Move kind bitmask. A quiet move has no bit set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveFlags(pub u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1);
    pub const PROMOTION: MoveFlags = MoveFlags(2);

    pub const fn is_capture(self) -> bool {
        self.0 & Self::CAPTURE.0 != 0
    }
    pub const fn is_promotion(self) -> bool {
        self.0 & Self::PROMOTION.0 != 0
    }
    pub const fn is_quiet(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for MoveFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        MoveFlags(self.0 | rhs.0)
    }
}

/// A single diagonal step or single jump. Multi-jumps are a sequence of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub flags: MoveFlags,
}

impl Move {
    pub fn new(from: u8, to: u8, flags: MoveFlags) -> Self {
        Self { from, to, flags }
    }
    pub fn quiet(from: u8, to: u8) -> Self {
        Self::new(from, to, MoveFlags::QUIET)
    }
    pub fn capture(from: u8, to: u8) -> Self {
        Self::new(from, to, MoveFlags::CAPTURE)
    }
    pub fn is_capture(&self) -> bool {
        self.flags.is_capture()
    }
    pub fn is_promotion(&self) -> bool {
        self.flags.is_promotion()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", sq_to_coord(self.from), sep, sq_to_coord(self.to))?;
        if self.is_promotion() {
            write!(f, "=K")?;
        }
        Ok(())
    }
}

// Helpers
pub const fn square(row: u8, file: u8) -> u8 {
    row * 8 + file
}
pub fn file_of(sq: u8) -> u8 {
    sq % 8
}
pub fn row_of(sq: u8) -> u8 {
    sq / 8
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some(square(r - b'1', f - b'a'))
}

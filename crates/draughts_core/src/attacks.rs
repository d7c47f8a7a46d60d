//! Pre-computed diagonal geometry for move generation.
//!
//! This module contains:
//! - One-step tables per direction (constant)
//! - Two-step jump tables per direction (constant)
//! - Reach tables per forward color: white, black, or both (constant)
//!
//! Every table is built in `const` context and never changes afterwards.

use crate::bitboard::Bitboard;
use crate::types::{Color, Piece, PieceKind};

/// The four diagonal directions. Rows grow north, files grow east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    const WHITE_FORWARD: [Direction; 2] = [Direction::NorthEast, Direction::NorthWest];
    const BLACK_FORWARD: [Direction; 2] = [Direction::SouthEast, Direction::SouthWest];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        match self {
            Direction::NorthEast => 0,
            Direction::NorthWest => 1,
            Direction::SouthEast => 2,
            Direction::SouthWest => 3,
        }
    }

    /// Shift a whole set one step in this direction without edge wrap.
    #[inline(always)]
    pub const fn shift(self, bb: Bitboard) -> Bitboard {
        match self {
            Direction::NorthEast => bb.north_east(),
            Direction::NorthWest => bb.north_west(),
            Direction::SouthEast => bb.south_east(),
            Direction::SouthWest => bb.south_west(),
        }
    }

    /// The two directions a man of `color` moves and captures in.
    pub fn forward(color: Color) -> &'static [Direction] {
        match color {
            Color::White => &Self::WHITE_FORWARD,
            Color::Black => &Self::BLACK_FORWARD,
        }
    }

    /// Directions available to a piece: forward only for men, all four for kings.
    pub fn of_piece(piece: Piece) -> &'static [Direction] {
        match piece.kind {
            PieceKind::Man => Self::forward(piece.color),
            PieceKind::King => &Self::ALL,
        }
    }
}

/// Reach table index for white's forward directions.
pub const WHITE: usize = 0;
/// Reach table index for black's forward directions.
pub const BLACK: usize = 1;
/// Reach table index for the union of both, used by kings.
pub const BOTH: usize = 2;

/// STEPS[direction][square]: the square one diagonal step away, if any.
pub static STEPS: [[Bitboard; 64]; 4] = {
    let mut steps = [[Bitboard::EMPTY; 64]; 4];
    let mut d = 0;
    while d < 4 {
        let mut sq = 0u8;
        while sq < 64 {
            steps[d][sq as usize] = Direction::ALL[d].shift(Bitboard::from_square(sq));
            sq += 1;
        }
        d += 1;
    }
    steps
};

/// JUMPS[direction][square]: the landing square two diagonal steps away, if any.
pub static JUMPS: [[Bitboard; 64]; 4] = {
    let mut jumps = [[Bitboard::EMPTY; 64]; 4];
    let mut d = 0;
    while d < 4 {
        let dir = Direction::ALL[d];
        let mut sq = 0u8;
        while sq < 64 {
            jumps[d][sq as usize] = dir.shift(dir.shift(Bitboard::from_square(sq)));
            sq += 1;
        }
        d += 1;
    }
    jumps
};

/// REACH[forward_color][square]: one-step squares in the allowed directions.
/// Indexed by WHITE, BLACK or BOTH.
pub static REACH: [[Bitboard; 64]; 3] = {
    let mut reach = [[Bitboard::EMPTY; 64]; 3];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq);
        let white = bb.north_east().0 | bb.north_west().0;
        let black = bb.south_east().0 | bb.south_west().0;

        reach[WHITE][sq as usize] = Bitboard(white);
        reach[BLACK][sq as usize] = Bitboard(black);
        reach[BOTH][sq as usize] = Bitboard(white | black);
        sq += 1;
    }
    reach
};

#[inline(always)]
pub fn step(dir: Direction, sq: u8) -> Bitboard {
    STEPS[dir.idx()][sq as usize]
}

#[inline(always)]
pub fn jump(dir: Direction, sq: u8) -> Bitboard {
    JUMPS[dir.idx()][sq as usize]
}

/// One-step squares for a man of the given color.
#[inline(always)]
pub fn man_reach(sq: u8, color: Color) -> Bitboard {
    REACH[color.idx()][sq as usize]
}

/// One-step squares for a king.
#[inline(always)]
pub fn king_reach(sq: u8) -> Bitboard {
    REACH[BOTH][sq as usize]
}

/// One-step squares for `piece` standing on `sq`.
#[inline]
pub fn piece_reach(sq: u8, piece: Piece) -> Bitboard {
    match piece.kind {
        PieceKind::Man => man_reach(sq, piece.color),
        PieceKind::King => king_reach(sq),
    }
}

/// The direction leading from `from` to `to` in exactly two diagonal steps.
pub fn jump_direction(from: u8, to: u8) -> Option<Direction> {
    if from >= 64 || to >= 64 {
        return None;
    }
    Direction::ALL
        .into_iter()
        .find(|&dir| jump(dir, from).contains(to))
}

/// The square strictly between two squares that are one jump apart.
pub fn jumped_square(from: u8, to: u8) -> Option<u8> {
    jump_direction(from, to).and_then(|dir| step(dir, from).lsb())
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

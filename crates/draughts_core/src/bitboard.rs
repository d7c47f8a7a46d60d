//! Bitboard representation of square sets.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the board.
//! Bit 0 = a1 (row 0, file 0), bit 7 = h1, bit 63 = h8.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

/// A set of squares on the 8x8 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    // Files
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    // Ranks
    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const NOT_FILE_A: Bitboard = Bitboard(!0x0101010101010101);
    pub const NOT_FILE_H: Bitboard = Bitboard(!0x8080808080808080);

    /// The playable squares: a1 and every square of its color.
    pub const DARK_SQUARES: Bitboard = Bitboard(0xAA55AA55AA55AA55);

    /// Create a bitboard with a single square set.
    #[inline(always)]
    pub const fn from_square(sq: u8) -> Self {
        Bitboard(1u64 << sq)
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a specific square is set.
    #[inline(always)]
    pub const fn contains(self, sq: u8) -> bool {
        (self.0 & (1u64 << sq)) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, sq: u8) {
        self.0 |= 1u64 << sq;
    }

    #[inline(always)]
    pub fn clear(&mut self, sq: u8) {
        self.0 &= !(1u64 << sq);
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get the index of the least significant bit (0-63), or None if empty.
    #[inline(always)]
    pub const fn lsb(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// Get and remove the least significant bit. Returns the square index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }

    /// Shift north-east, dropping anything that would wrap onto file A.
    #[inline(always)]
    pub const fn north_east(self) -> Bitboard {
        Bitboard((self.0 << 9) & Self::NOT_FILE_A.0)
    }

    /// Shift north-west, dropping anything that would wrap onto file H.
    #[inline(always)]
    pub const fn north_west(self) -> Bitboard {
        Bitboard((self.0 << 7) & Self::NOT_FILE_H.0)
    }

    /// Shift south-east, dropping anything that would wrap onto file A.
    #[inline(always)]
    pub const fn south_east(self) -> Bitboard {
        Bitboard((self.0 >> 7) & Self::NOT_FILE_A.0)
    }

    /// Shift south-west, dropping anything that would wrap onto file H.
    #[inline(always)]
    pub const fn south_west(self) -> Bitboard {
        Bitboard((self.0 >> 9) & Self::NOT_FILE_H.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

/// Iterator over set bits in a bitboard, lowest square first.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;

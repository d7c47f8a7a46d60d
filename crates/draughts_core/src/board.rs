use std::fmt;

use thiserror::Error;

use crate::attacks::jumped_square;
use crate::bitboard::Bitboard;
use crate::movegen::jump_targets;
use crate::types::*;

/// Errors raised while building a position from a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("expected 8 ranks in diagram, found {0}")]
    RankCount(usize),
    #[error("rank {rank} has {found} squares, expected 8")]
    FileCount { rank: u8, found: usize },
    #[error("invalid piece character '{0}' in diagram")]
    InvalidPiece(char),
    #[error("piece on light square {0}")]
    LightSquare(String),
}

/// Board state: per-color occupancy, a king overlay and the side to move.
///
/// `kings` is always a subset of the union of both occupancies, and the two
/// occupancies never intersect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub pieces: [Bitboard; 2],
    pub kings: Bitboard,
    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Twelve men per side on the dark squares of the three nearest rows,
    /// white to move.
    pub fn startpos() -> Self {
        Position {
            pieces: [Bitboard(0x0000_0000_0055_AA55), Bitboard(0xAA55_AA00_0000_0000)],
            kings: Bitboard::EMPTY,
            side_to_move: Color::White,
        }
    }

    pub fn empty(side_to_move: Color) -> Self {
        Position {
            pieces: [Bitboard::EMPTY; 2],
            kings: Bitboard::EMPTY,
            side_to_move,
        }
    }

    /// Parse the grid part of the diagram printed by `Display`.
    ///
    /// Rows are read top (rank 8) to bottom (rank 1). Rank digits, file
    /// letters and whitespace are ignored, so the output of `to_string()`
    /// parses back. Cells are `.`, `w`, `b`, `W` or `B`.
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, PositionError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace() && !c.is_ascii_digit())
                    .collect::<Vec<char>>()
            })
            .filter(|cells| !cells.is_empty() && !is_label_row(cells))
            .take_while(|cells| !cells.starts_with(&['s', 'i', 'd', 'e']))
            .collect();

        if rows.len() != 8 {
            return Err(PositionError::RankCount(rows.len()));
        }

        let mut pos = Position::empty(side_to_move);
        for (rank_idx, cells) in rows.iter().enumerate() {
            let row = 7 - rank_idx as u8;
            if cells.len() != 8 {
                return Err(PositionError::FileCount {
                    rank: row + 1,
                    found: cells.len(),
                });
            }
            for (file, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_letter(ch).ok_or(PositionError::InvalidPiece(ch))?;
                let sq = square(row, file as u8);
                if !Bitboard::DARK_SQUARES.contains(sq) {
                    return Err(PositionError::LightSquare(sq_to_coord(sq)));
                }
                pos.put(sq, piece);
            }
        }
        Ok(pos)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.pieces[0] | self.pieces[1]
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline]
    pub fn pieces_of(&self, c: Color) -> Bitboard {
        self.pieces[c.idx()]
    }

    pub fn men_of(&self, c: Color) -> Bitboard {
        self.pieces[c.idx()] & !self.kings
    }

    pub fn kings_of(&self, c: Color) -> Bitboard {
        self.pieces[c.idx()] & self.kings
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        let color = if self.pieces[0].contains(sq) {
            Color::White
        } else if self.pieces[1].contains(sq) {
            Color::Black
        } else {
            return None;
        };
        let kind = if self.kings.contains(sq) {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece { color, kind })
    }

    /// Place a piece, replacing whatever stood on the square.
    pub fn put(&mut self, sq: u8, pc: Piece) {
        self.remove(sq);
        self.pieces[pc.color.idx()].set(sq);
        if pc.kind == PieceKind::King {
            self.kings.set(sq);
        }
    }

    pub fn remove(&mut self, sq: u8) {
        self.pieces[0].clear(sq);
        self.pieces[1].clear(sq);
        self.kings.clear(sq);
    }

    /// Every occupied square with its piece: white men, white kings, black
    /// men, black kings, each group in increasing square order.
    pub fn board(&self) -> Vec<(Piece, u8)> {
        let mut out = Vec::with_capacity(self.occupied().popcount() as usize);
        for color in [Color::White, Color::Black] {
            for (kind, set) in [
                (PieceKind::Man, self.men_of(color)),
                (PieceKind::King, self.kings_of(color)),
            ] {
                out.extend(set.map(|sq| (Piece { color, kind }, sq)));
            }
        }
        out
    }

    /// Apply a move for the side to move. The move is assumed legal.
    ///
    /// Returns `true` when the move was a capture and the piece that landed
    /// still has a capture available; the side to move is then kept so the
    /// same piece continues the jump. Otherwise the turn passes.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let us = self.side_to_move.idx();
        let them = self.side_to_move.other().idx();
        let from = Bitboard::from_square(mv.from);
        let to = Bitboard::from_square(mv.to);

        let was_king = !(self.kings & from).is_empty();
        self.pieces[us] |= to;
        if was_king || mv.flags.is_promotion() {
            self.kings |= to;
        }
        self.pieces[us] &= !from;
        self.kings &= !from;

        if mv.flags.is_capture() {
            match jumped_square(mv.from, mv.to) {
                Some(mid) => {
                    self.pieces[them].clear(mid);
                    self.kings.clear(mid);
                }
                None => debug_assert!(false, "capture {mv} does not span a jump"),
            }
            if !jump_targets(self, mv.to).is_empty() {
                return true;
            }
        }

        self.side_to_move = self.side_to_move.other();
        false
    }
}

fn is_label_row(cells: &[char]) -> bool {
    cells.len() == 8 && cells.iter().copied().eq('a'..='h')
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{}  ", row + 1)?;
            for file in 0..8u8 {
                let c = self.piece_at(square(row, file)).map_or('.', Piece::letter);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f)?;
        write!(f, "side: {}", self.side_to_move.letter())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

//! The game-session facade: the operations a front end drives.
//!
//! An `Engine` owns one `Position` and remembers which piece, if any, is in
//! the middle of a multi-jump. Callers reset it, ask for legal moves, apply
//! one with `act`, and ask again.

use log::{debug, trace};
use thiserror::Error;

use crate::board::Position;
use crate::movegen::{captures_from_into, is_pseudo_legal, legal_moves_into};
use crate::types::{Color, Move, Piece, sq_to_coord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not in the current legal move list. State is unchanged.
    #[error("illegal move {0}")]
    Illegal(Move),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Engine {
    position: Position,
    /// Square of the piece that must continue jumping this turn.
    jumper: Option<u8>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine at the starting position, white to move.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// An engine at an arbitrary position with no jump in progress.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            jumper: None,
        }
    }

    pub fn reset(&mut self) {
        self.position = Position::startpos();
        self.jumper = None;
    }

    /// Apply `mv` if it is a member of `legal_moves()`.
    ///
    /// After a capture that leaves the landing piece with another capture,
    /// the side to move is kept and only that piece's captures are legal
    /// until the chain ends.
    pub fn act(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves().contains(&mv) {
            debug!("rejected {mv}: not in legal move list");
            return Err(MoveError::Illegal(mv));
        }

        let mover = self.position.side_to_move;
        let continues = self.position.make_move(mv);
        trace!("{mover:?} played {mv}");

        self.jumper = if continues {
            debug!("{mover:?} must continue jumping from {}", sq_to_coord(mv.to));
            Some(mv.to)
        } else {
            None
        };
        Ok(())
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(32);
        self.legal_moves_into(&mut out);
        out
    }

    /// Fill `out` with the legal moves, reusing its allocation.
    pub fn legal_moves_into(&self, out: &mut Vec<Move>) {
        match self.jumper {
            Some(sq) => captures_from_into(&self.position, sq, out),
            None => legal_moves_into(&self.position, out),
        }
    }

    /// Advisory check that `mv.to` is reachable by the piece on `mv.from`.
    ///
    /// Does not enforce forced capture or an ongoing jump; `act` does.
    pub fn legal(&self, mv: Move) -> bool {
        is_pseudo_legal(&self.position, mv)
    }

    pub fn board(&self) -> Vec<(Piece, u8)> {
        self.position.board()
    }

    pub fn turn(&self) -> Color {
        self.position.side_to_move
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn jumper(&self) -> Option<u8> {
        self.jumper
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;

use crate::{
    attacks::{Direction, jump, piece_reach, step},
    bitboard::Bitboard,
    board::Position,
    types::*,
};

/// Squares a man of `color` promotes on.
#[inline]
pub fn promotion_rank(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANK_8,
        Color::Black => Bitboard::RANK_1,
    }
}

/// Landing squares of every single jump available to the side to move,
/// computed set-wise over all of its pieces at once. Non-empty means a
/// capture is forced.
pub fn capture_landings(pos: &Position) -> Bitboard {
    let us = pos.side_to_move;
    let opp = pos.pieces_of(us.other());
    let empty = pos.empty_squares();
    let kings = pos.kings_of(us);
    let men = pos.men_of(us);

    let mut landings = Bitboard::EMPTY;
    for dir in Direction::ALL {
        landings |= dir.shift(dir.shift(kings) & opp) & empty;
    }
    for &dir in Direction::forward(us) {
        landings |= dir.shift(dir.shift(men) & opp) & empty;
    }
    landings
}

/// Landing squares of the single jumps open to the piece on `sq`, judged by
/// that piece's own color and kind. Empty if the square is vacant.
pub fn jump_targets(pos: &Position, sq: u8) -> Bitboard {
    let Some(piece) = pos.piece_at(sq) else {
        return Bitboard::EMPTY;
    };
    let opp = pos.pieces_of(piece.color.other());
    let empty = pos.empty_squares();

    let mut targets = Bitboard::EMPTY;
    for &dir in Direction::of_piece(piece) {
        if !(step(dir, sq) & opp).is_empty() {
            targets |= jump(dir, sq) & empty;
        }
    }
    targets
}

/// Empty squares one diagonal step away in the piece's allowed directions.
pub fn step_targets(pos: &Position, sq: u8) -> Bitboard {
    match pos.piece_at(sq) {
        Some(piece) => piece_reach(sq, piece) & pos.empty_squares(),
        None => Bitboard::EMPTY,
    }
}

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// If any capture exists only captures are produced. Kings are enumerated
/// before men, and squares in increasing order.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    let us = pos.side_to_move;
    let promo = promotion_rank(us);

    if !capture_landings(pos).is_empty() {
        for from in pos.kings_of(us) {
            push_captures(pos, from, promo, out);
        }
        for from in pos.men_of(us) {
            push_captures(pos, from, promo, out);
        }
        return;
    }

    for from in pos.kings_of(us) {
        for to in step_targets(pos, from) {
            out.push(Move::quiet(from, to));
        }
    }
    for from in pos.men_of(us) {
        for to in step_targets(pos, from) {
            let flags = if promo.contains(to) {
                MoveFlags::PROMOTION
            } else {
                MoveFlags::QUIET
            };
            out.push(Move::new(from, to, flags));
        }
    }
}

/// Captures available to the single piece on `sq`, used to continue a jump.
pub fn captures_from_into(pos: &Position, sq: u8, out: &mut Vec<Move>) {
    out.clear();
    push_captures(pos, sq, promotion_rank(pos.side_to_move), out);
}

fn push_captures(pos: &Position, from: u8, promo: Bitboard, out: &mut Vec<Move>) {
    let is_man = !pos.kings.contains(from);
    for to in jump_targets(pos, from) {
        let flags = if is_man && promo.contains(to) {
            MoveFlags::CAPTURE | MoveFlags::PROMOTION
        } else {
            MoveFlags::CAPTURE
        };
        out.push(Move::new(from, to, flags));
    }
}

/// Whether `mv.to` is a step or jump square of the side to move's piece on
/// `mv.from`.
///
/// This does not apply the forced-capture rule and ignores the move flags:
/// a quiet step passes even while a capture is pending elsewhere. Only
/// membership in `legal_moves` is authoritative.
pub fn is_pseudo_legal(pos: &Position, mv: Move) -> bool {
    if mv.from >= 64 || mv.to >= 64 || !pos.pieces_of(pos.side_to_move).contains(mv.from) {
        return false;
    }
    (step_targets(pos, mv.from) | jump_targets(pos, mv.from)).contains(mv.to)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

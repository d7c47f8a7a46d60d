//! Rules engine for 8x8 draughts.
//!
//! Men step and jump diagonally forward, kings one square in all four
//! diagonal directions. Captures are forced, and a jump that can continue
//! keeps the turn with the same piece until the chain ends.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod engine;
pub mod movegen;
pub mod perft;
pub mod types;

pub use attacks::{Direction, jumped_square};
pub use bitboard::*;
pub use board::*;
pub use engine::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use types::*;

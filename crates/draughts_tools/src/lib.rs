//! Diagnostics that drive the draughts rules engine from the outside.
//!
//! Nothing here knows the rules; every move comes from `Engine::legal_moves`
//! and goes back through `Engine::act`.

mod config;
mod playout;

pub use config::*;
pub use playout::*;

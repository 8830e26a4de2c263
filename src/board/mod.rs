//! Shared board state and its locking discipline.
//!
//! Every slot has its own lock. Single-slot operations hold exactly one;
//! anything touching several slots goes through [`Hold`], which locks in
//! ascending slot order. Per-player [`Markers`] and the card index are
//! leaf locks, always taken after slot locks and never held across an
//! await.
mod board;
mod cell;
mod hold;
mod mark;
mod markers;
mod snapshot;

pub use board::*;
pub use cell::*;
pub use hold::*;
pub use mark::*;
pub use markers::*;
pub use snapshot::*;

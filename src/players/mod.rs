//! Participants and their input.
//!
//! - [`Agent`]: one task per player: selections in, marks and claims out
//! - [`Seat`]: handle to a running agent
//! - [`Generator`]: random key presses for computer players
//! - [`Keyboard`]: routes terminal keys to human players
//! - [`Tally`]: what an agent submitted and heard back
mod agent;
mod generator;
mod keyboard;
mod seat;
mod tally;

pub use agent::*;
pub use generator::*;
pub use keyboard::*;
pub use seat::*;
pub use tally::*;

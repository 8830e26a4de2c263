//! The referee task: deals, waits, judges claims, resets, and ends the game.
//!
//! - [`Referee`]: the round loop
//! - [`Phase`]: where in the loop the referee is
//! - [`Pile`]: undealt cards, owned by the referee alone
//! - [`Timer`]: turn deadline and countdown
//! - [`Summary`]: final scores and winners
mod phase;
mod pile;
mod referee;
mod summary;
mod timer;

pub use phase::*;
pub use pile::*;
pub use referee::*;
pub use summary::*;
pub use timer::*;

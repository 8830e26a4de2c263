//! Fire-and-forget notifications to whatever renders the game.
//!
//! - [`Event`]: everything the core tells the outside world
//! - [`Screen`]: sink trait; must never block the caller
//! - [`Console`]: terminal rendering through `log`
//! - [`Recorder`]: in-memory sink for assertions
mod console;
mod event;
mod recorder;
mod screen;

pub use console::*;
pub use event::*;
pub use recorder::*;
pub use screen::*;

mod room;
mod session;

pub use room::*;
pub use session::*;

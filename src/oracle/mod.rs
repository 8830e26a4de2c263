mod features;
mod oracle;

pub use features::*;
pub use oracle::*;

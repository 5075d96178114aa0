mod error;
mod peer;
mod typed;

pub use error::*;
pub use peer::*;

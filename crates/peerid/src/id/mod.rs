mod interface;
mod peer;
mod typed;

pub use interface::*;
pub use peer::*;
pub use typed::*;

pub mod enums;
pub mod filter;
pub mod season;

pub use enums::*;
pub use filter::*;
pub use season::*;

pub mod detection;
pub mod table;

pub use detection::*;
pub use table::*;

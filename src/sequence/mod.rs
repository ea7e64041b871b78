pub mod analysis;
pub mod conversion;
pub mod validation;

pub use analysis::*;
pub use conversion::*;
pub use validation::*;

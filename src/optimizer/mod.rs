pub mod constraints;
pub mod search;
pub mod types;

pub use constraints::*;
pub use search::*;
pub use types::*;

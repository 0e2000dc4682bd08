pub mod panel;
pub mod types;

pub use panel::*;
pub use types::*;

//! Panel network construction: grouping, merging, evaluation.

pub mod evaluate;
pub mod grouping;
pub mod merge;

pub use evaluate::*;
pub use grouping::*;
pub use merge::*;

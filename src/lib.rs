//! Series/parallel wiring planner for arrays of identical solar panels.
//!
//! Panels are grouped into equal chunks, merged within each chunk, then the
//! chunk equivalents are merged with the other connection type. Every chunk
//! size and merge order is tried; the highest-power layout that stays within
//! the voltage and current limits wins.
//!
//! ```
//! use pv_array_planner::domain::{Electrical, Panel};
//! use pv_array_planner::optimizer::optimize;
//!
//! let panels = Panel::new(18.0, 8.0).uniform_array(6);
//! let best = optimize(&panels, 50.0, 30.0, 500.0).expect("feasible");
//! assert_eq!((best.num_series, best.num_parallel), (2, 3));
//! assert_eq!(best.total_power().as_watts(), 864.0);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod network;
pub mod optimizer;
pub mod report;
pub mod telemetry;

pub use error::PlanError;

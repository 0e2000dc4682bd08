use thiserror::Error;

use crate::network::Connection;

/// Errors raised by the planning core.
///
/// None of these describe an infeasible search; that outcome is `None` from
/// the optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("cannot merge an empty panel group")]
    EmptyGroup,

    #[error("chunk size must be at least 1, got {0}")]
    InvalidChunkSize(usize),

    #[error("{quantity} must not be negative, got {value}")]
    NegativeQuantity { quantity: &'static str, value: f64 },

    #[error("{quantity} is not finite: {value}")]
    NonFiniteQuantity { quantity: &'static str, value: f64 },

    #[error(
        "{connection} merge needs uniform panels: panel {index} carries {found}, expected {expected}"
    )]
    NonUniform {
        connection: Connection,
        index: usize,
        expected: f64,
        found: f64,
    },
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{group_panels, merge, Connection, Homogeneity};
use crate::domain::{Current, Electrical, MergedPanel, Panel, Voltage};
use crate::error::PlanError;

/// Order in which the two network levels are built.
///
/// Declaration order is the search order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MergeMethod {
    /// Strings of `chunk_size` panels in series, strings joined in parallel.
    SeriesFirst,
    /// Banks of `chunk_size` panels in parallel, banks joined in series.
    ParallelFirst,
}

impl MergeMethod {
    fn levels(self) -> (Connection, Connection) {
        match self {
            MergeMethod::SeriesFirst => (Connection::Series, Connection::Parallel),
            MergeMethod::ParallelFirst => (Connection::Parallel, Connection::Series),
        }
    }
}

/// One fully merged system candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub voltage: Voltage,
    pub current: Current,
    pub num_series: usize,
    pub num_parallel: usize,
    pub method: MergeMethod,
}

impl Output {
    /// True when the nominal layout does not account for every panel, which
    /// happens when the last group was shorter than the chunk size.
    pub fn is_ragged(&self, panel_count: usize) -> bool {
        self.num_series * self.num_parallel != panel_count
    }
}

impl Electrical for Output {
    fn voltage(&self) -> Voltage {
        self.voltage
    }

    fn current(&self) -> Current {
        self.current
    }
}

/// Build the two-level network for `chunk_size` and `method`.
///
/// No feasibility filtering happens here.
pub fn evaluate(
    panels: &[Panel],
    chunk_size: usize,
    method: MergeMethod,
) -> Result<Output, PlanError> {
    evaluate_with(panels, chunk_size, method, Homogeneity::Assumed)
}

pub fn evaluate_with(
    panels: &[Panel],
    chunk_size: usize,
    method: MergeMethod,
    homogeneity: Homogeneity,
) -> Result<Output, PlanError> {
    let groups = group_panels(panels, chunk_size)?;
    let (inner, outer) = method.levels();

    let equivalents = groups
        .iter()
        .map(|group| merge(group, inner, homogeneity))
        .collect::<Result<Vec<MergedPanel>, _>>()?;
    let result = merge(&equivalents, outer, homogeneity)?;

    let (num_series, num_parallel) = match method {
        MergeMethod::SeriesFirst => (chunk_size, equivalents.len()),
        MergeMethod::ParallelFirst => (equivalents.len(), chunk_size),
    };

    Ok(Output {
        voltage: result.voltage,
        current: result.current,
        num_series,
        num_parallel,
        method,
    })
}

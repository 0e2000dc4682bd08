use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::{Current, Electrical, Power, Voltage};
use crate::network::{MergeMethod, Output};

/// Which merge methods the optimizer tries for each chunk size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodSearch {
    /// Series-first, then parallel-first.
    #[default]
    Both,
    /// Series-first only. The result carries no method.
    SeriesOnly,
}

impl MethodSearch {
    /// Methods in search order.
    pub fn methods(self) -> Vec<MergeMethod> {
        match self {
            MethodSearch::Both => MergeMethod::iter().collect(),
            MethodSearch::SeriesOnly => vec![MergeMethod::SeriesFirst],
        }
    }
}

/// One evaluated point of the search space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub chunk_size: usize,
    pub output: Output,
    pub feasible: bool,
}

/// The winning configuration plus its power shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Optimized {
    pub voltage: Voltage,
    pub current: Current,
    pub num_series: usize,
    pub num_parallel: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<MergeMethod>,
    /// `max_power - total_power`, may be negative.
    pub loss_power: Power,
}

impl Optimized {
    pub(crate) fn from_output(
        output: &Output,
        method: Option<MergeMethod>,
        loss_power: Power,
    ) -> Self {
        Self {
            voltage: output.voltage,
            current: output.current,
            num_series: output.num_series,
            num_parallel: output.num_parallel,
            method,
            loss_power,
        }
    }
}

impl Electrical for Optimized {
    fn voltage(&self) -> Voltage {
        self.voltage
    }

    fn current(&self) -> Current {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_order() {
        assert_eq!(
            MethodSearch::Both.methods(),
            vec![MergeMethod::SeriesFirst, MergeMethod::ParallelFirst]
        );
        assert_eq!(MethodSearch::SeriesOnly.methods(), vec![MergeMethod::SeriesFirst]);
    }

    #[test]
    fn test_optimized_omits_missing_method() {
        let opt = Optimized {
            voltage: Voltage::volts(36.0),
            current: Current::amperes(24.0),
            num_series: 2,
            num_parallel: 3,
            method: None,
            loss_power: Power::watts(-364.0),
        };
        let json = serde_json::to_value(opt).unwrap();
        assert!(json.get("method").is_none());
        assert_eq!(json["loss_power"], -364.0);
        assert_eq!(opt.total_power(), Power::watts(864.0));
    }
}

use itertools::iproduct;
use tracing::debug;

use super::{Candidate, Limits, MethodSearch, Optimized};
use crate::domain::{Electrical, Panel};
use crate::network::{evaluate_with, Homogeneity};

/// Brute-force wiring search.
///
/// Every chunk size from 1 to N is combined with every configured merge
/// method. The feasible candidate with the strictly greatest power wins, so
/// on a tie the one met first (smaller chunk size, series-first before
/// parallel-first) is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayOptimizer {
    pub methods: MethodSearch,
    pub homogeneity: Homogeneity,
}

impl ArrayOptimizer {
    pub fn new(methods: MethodSearch, homogeneity: Homogeneity) -> Self {
        Self {
            methods,
            homogeneity,
        }
    }

    /// Every successfully evaluated candidate, in search order.
    ///
    /// Layouts rejected by [`Homogeneity::Enforced`] produce no output and are
    /// left out.
    pub fn scan(&self, panels: &[Panel], limits: &Limits) -> Vec<Candidate> {
        self.candidates(panels, limits).collect()
    }

    /// Best feasible configuration, or `None` when every candidate breaks a limit.
    pub fn optimize(&self, panels: &[Panel], limits: &Limits) -> Option<Optimized> {
        let best = self
            .candidates(panels, limits)
            .filter(|c| {
                if !c.feasible {
                    debug!(
                        chunk_size = c.chunk_size,
                        method = %c.output.method,
                        voltage = c.output.voltage.as_volts(),
                        current = c.output.current.as_amperes(),
                        "candidate exceeds limits"
                    );
                }
                c.feasible
            })
            // Seeded by the first feasible candidate rather than 0 W, so a
            // feasible space of zero-power layouts still yields a result.
            .reduce(|best, candidate| {
                if candidate.output.total_power() > best.output.total_power() {
                    candidate
                } else {
                    best
                }
            })?;

        let method = match self.methods {
            MethodSearch::Both => Some(best.output.method),
            MethodSearch::SeriesOnly => None,
        };

        debug!(
            chunk_size = best.chunk_size,
            method = %best.output.method,
            power_w = best.output.total_power().as_watts(),
            "selected configuration"
        );

        Some(Optimized::from_output(
            &best.output,
            method,
            limits.shortfall(&best.output),
        ))
    }

    fn candidates<'a>(
        &'a self,
        panels: &'a [Panel],
        limits: &'a Limits,
    ) -> impl Iterator<Item = Candidate> + 'a {
        iproduct!(1..=panels.len(), self.methods.methods()).filter_map(
            move |(chunk_size, method)| {
                match evaluate_with(panels, chunk_size, method, self.homogeneity) {
                    Ok(output) => Some(Candidate {
                        chunk_size,
                        output,
                        feasible: limits.admits(&output),
                    }),
                    Err(err) => {
                        debug!(chunk_size, %method, error = %err, "skipping candidate");
                        None
                    }
                }
            },
        )
    }
}

/// Search both merge methods with unchecked homogeneity.
pub fn optimize(
    panels: &[Panel],
    max_voltage: f64,
    max_current: f64,
    max_power: f64,
) -> Option<Optimized> {
    ArrayOptimizer::default().optimize(panels, &Limits::new(max_voltage, max_current, max_power))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Current, Power, Voltage};
    use crate::network::MergeMethod;

    fn six() -> Vec<Panel> {
        Panel::new(18.0, 8.0).uniform_array(6)
    }

    #[test]
    fn test_reference_example() {
        let best = optimize(&six(), 50.0, 30.0, 500.0).unwrap();
        assert_eq!(best.method, Some(MergeMethod::SeriesFirst));
        assert_eq!((best.num_series, best.num_parallel), (2, 3));
        assert_eq!(best.voltage, Voltage::volts(36.0));
        assert_eq!(best.current, Current::amperes(24.0));
        assert_eq!(best.total_power(), Power::watts(864.0));
        assert_eq!(best.loss_power, Power::watts(-364.0));
    }

    #[test]
    fn test_infeasible_returns_none() {
        assert!(optimize(&six(), 1.0, 1.0, 500.0).is_none());
    }

    #[test]
    fn test_empty_panels_returns_none() {
        assert!(optimize(&[], 50.0, 30.0, 500.0).is_none());
    }

    #[test]
    fn test_series_only_has_no_method() {
        let optimizer = ArrayOptimizer::new(MethodSearch::SeriesOnly, Homogeneity::Assumed);
        let best = optimizer.optimize(&six(), &Limits::default()).unwrap();
        assert_eq!(best.method, None);
        assert_eq!((best.num_series, best.num_parallel), (2, 3));
    }

    #[test]
    fn test_scan_order_and_size() {
        let scan = ArrayOptimizer::default().scan(&six(), &Limits::default());
        assert_eq!(scan.len(), 12);
        assert_eq!(scan[0].chunk_size, 1);
        assert_eq!(scan[0].output.method, MergeMethod::SeriesFirst);
        assert_eq!(scan[1].output.method, MergeMethod::ParallelFirst);
        assert_eq!(scan[11].chunk_size, 6);
        assert_eq!(scan.iter().filter(|c| c.feasible).count(), 2);
    }

    #[test]
    fn test_zero_power_candidate_still_selected() {
        let panels = Panel::new(0.0, 8.0).uniform_array(2);
        let best = optimize(&panels, 50.0, 30.0, 500.0).unwrap();
        assert_eq!(best.total_power(), Power::watts(0.0));
        assert_eq!(best.loss_power, Power::watts(500.0));
        assert_eq!((best.num_series, best.num_parallel), (1, 2));
    }
}

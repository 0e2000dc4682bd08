//! Series and parallel combination of panels.
//!
//! Series stacking adds voltage and carries the current of the first panel.
//! Parallel stacking adds current and carries the voltage of the first panel.
//! Both rules are only physically sound for uniform inputs; whether that is
//! checked is decided by [`Homogeneity`].

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::{approx_eq, Current, MergedPanel, Panel, Voltage};
use crate::error::PlanError;

/// How two or more sources are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Connection {
    Series,
    Parallel,
}

/// Whether merge operators verify that the carried quantity is uniform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Homogeneity {
    /// Take the carried quantity from the first panel without checking.
    #[default]
    Assumed,
    /// Fail with [`PlanError::NonUniform`] when any panel disagrees with the first.
    Enforced,
}

/// Merge in series: voltages add, current comes from the first panel.
pub fn series_panels(panels: &[Panel]) -> Result<MergedPanel, PlanError> {
    merge(panels, Connection::Series, Homogeneity::Assumed)
}

/// Merge in parallel: currents add, voltage comes from the first panel.
pub fn parallel_panels(panels: &[Panel]) -> Result<MergedPanel, PlanError> {
    merge(panels, Connection::Parallel, Homogeneity::Assumed)
}

pub fn merge(
    panels: &[Panel],
    connection: Connection,
    homogeneity: Homogeneity,
) -> Result<MergedPanel, PlanError> {
    let first = panels.first().ok_or(PlanError::EmptyGroup)?;

    if homogeneity == Homogeneity::Enforced {
        check_uniform(panels, connection)?;
    }

    let merged = match connection {
        Connection::Series => Panel {
            voltage: panels.iter().map(|p| p.voltage).sum::<Voltage>(),
            current: first.current,
        },
        Connection::Parallel => Panel {
            voltage: first.voltage,
            current: panels.iter().map(|p| p.current).sum::<Current>(),
        },
    };

    Ok(merged)
}

fn check_uniform(panels: &[Panel], connection: Connection) -> Result<(), PlanError> {
    let carried = |p: &Panel| match connection {
        Connection::Series => p.current.as_amperes(),
        Connection::Parallel => p.voltage.as_volts(),
    };

    let Some(first) = panels.first() else {
        return Ok(());
    };
    let expected = carried(first);

    match panels
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, p)| !approx_eq(carried(p), expected))
    {
        Some((index, p)) => Err(PlanError::NonUniform {
            connection,
            index,
            expected,
            found: carried(p),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_adds_voltage() {
        let panels = Panel::new(18.0, 8.0).uniform_array(3);
        let merged = series_panels(&panels).unwrap();
        assert_eq!(merged, Panel::new(54.0, 8.0));
    }

    #[test]
    fn test_parallel_adds_current() {
        let panels = Panel::new(18.0, 8.0).uniform_array(3);
        let merged = parallel_panels(&panels).unwrap();
        assert_eq!(merged, Panel::new(18.0, 24.0));
    }

    #[test]
    fn test_single_panel_is_identity() {
        let panel = Panel::new(18.0, 8.0);
        assert_eq!(series_panels(&[panel]).unwrap(), panel);
        assert_eq!(parallel_panels(&[panel]).unwrap(), panel);
    }

    #[test]
    fn test_empty_group_is_rejected() {
        assert_eq!(series_panels(&[]), Err(PlanError::EmptyGroup));
        assert_eq!(parallel_panels(&[]), Err(PlanError::EmptyGroup));
    }

    #[test]
    fn test_assumed_homogeneity_uses_first_panel() {
        // Mismatched currents: the first one wins, nothing is reconciled.
        let panels = [Panel::new(36.0, 8.0), Panel::new(18.0, 4.0)];
        let merged = series_panels(&panels).unwrap();
        assert_eq!(merged, Panel::new(54.0, 8.0));

        let merged = parallel_panels(&panels).unwrap();
        assert_eq!(merged, Panel::new(36.0, 12.0));
    }

    #[test]
    fn test_enforced_homogeneity_reports_mismatch() {
        let panels = [
            Panel::new(36.0, 8.0),
            Panel::new(36.0, 8.0),
            Panel::new(18.0, 8.0),
        ];

        // Series only cares about current, which is uniform here.
        assert!(merge(&panels, Connection::Series, Homogeneity::Enforced).is_ok());

        let err = merge(&panels, Connection::Parallel, Homogeneity::Enforced).unwrap_err();
        assert_eq!(
            err,
            PlanError::NonUniform {
                connection: Connection::Parallel,
                index: 2,
                expected: 36.0,
                found: 18.0,
            }
        );
    }

    #[test]
    fn test_connection_display() {
        assert_eq!(Connection::Series.to_string(), "series");
        assert_eq!(Connection::Parallel.to_string(), "parallel");
    }
}

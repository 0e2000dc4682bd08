use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

// ============================================================================
// Physical Unit Newtypes
// ============================================================================

/// Power in Watts (W)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Power(pub f64);

impl Power {
    pub fn watts(w: f64) -> Self {
        Self(w)
    }

    pub fn as_watts(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W", self.0)
    }
}

impl Sub for Power {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Voltage in Volts (V)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Voltage(pub f64);

impl Voltage {
    pub fn volts(v: f64) -> Self {
        Self(v)
    }

    pub fn as_volts(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V", self.0)
    }
}

impl Add for Voltage {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Voltage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0.0), Add::add)
    }
}

/// Current in Amperes (A)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Current(pub f64);

impl Current {
    pub fn amperes(a: f64) -> Self {
        Self(a)
    }

    pub fn as_amperes(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Current {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} A", self.0)
    }
}

impl Add for Current {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Current {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0.0), Add::add)
    }
}

/// P = V * I
impl Mul<Current> for Voltage {
    type Output = Power;
    fn mul(self, current: Current) -> Self::Output {
        Power(self.0 * current.0)
    }
}

// ============================================================================
// Shared electrical behaviour
// ============================================================================

/// Anything that presents a terminal voltage and current to the outside.
///
/// Power is always derived, never stored.
pub trait Electrical {
    fn voltage(&self) -> Voltage;
    fn current(&self) -> Current;

    fn total_power(&self) -> Power {
        self.voltage() * self.current()
    }
}

/// Equality with a relative tolerance, used when comparing quantities that
/// went through summation.
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    const REL_TOLERANCE: f64 = 1e-9;
    (a - b).abs() <= REL_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_arithmetic() {
        let diff = Power::watts(500.0) - Power::watts(864.0);
        assert_eq!(diff.as_watts(), -364.0);
    }

    #[test]
    fn test_voltage_times_current() {
        let p = Voltage::volts(36.0) * Current::amperes(24.0);
        assert_eq!(p, Power::watts(864.0));
    }

    #[test]
    fn test_sums() {
        let v: Voltage = [18.0, 18.0, 18.0].into_iter().map(Voltage::volts).sum();
        assert_eq!(v.as_volts(), 54.0);

        let i: Current = std::iter::empty().sum();
        assert_eq!(i.as_amperes(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Voltage::volts(36.0)), "36 V");
        assert_eq!(format!("{}", Current::amperes(7.5)), "7.5 A");
        assert_eq!(format!("{}", Power::watts(-364.0)), "-364 W");
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(8.0, 8.0));
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(8.0, 8.1));
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&Voltage::volts(18.0)).unwrap();
        assert_eq!(json, "18.0");
        let back: Voltage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Voltage::volts(18.0));
    }
}

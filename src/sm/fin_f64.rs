//! Finite binary64 definition, used for tempo and offset values.

use thiserror::Error;

/// `f64` but it has only finite value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
#[repr(transparent)]
pub struct FinF64(f64);

impl Eq for FinF64 {}
impl PartialOrd for FinF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FinF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<FinF64> for f64 {
    fn from(value: FinF64) -> Self {
        value.as_f64()
    }
}

/// Error type for `FinF64::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("finite number expected: {0}")]
pub struct TryFromFloatError(pub(crate) f64);

impl TryFrom<f64> for FinF64 {
    type Error = TryFromFloatError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        value
            .is_finite()
            .then_some(Self(value))
            .ok_or(TryFromFloatError(value))
    }
}

impl std::hash::Hash for FinF64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // `-0.0` equals `0.0`, so both must hash the same.
        (self.0 + 0.0).to_bits().hash(state);
    }
}

impl AsRef<f64> for FinF64 {
    fn as_ref(&self) -> &f64 {
        &self.0
    }
}

impl std::fmt::Display for FinF64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for FinF64 {
    type Err = ();

    /// Parses a trimmed decimal literal. `inf` and `NaN` spellings are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let float: f64 = s.trim().parse().map_err(|_| ())?;
        Self::new(float).ok_or(())
    }
}

impl FinF64 {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `FinF64` from `f64` if `float` is finite, otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn new(float: f64) -> Option<Self> {
        Self::try_from(float).ok()
    }

    /// Gets the internal value.
    #[inline]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert!(FinF64::new(f64::NAN).is_none());
        assert!(FinF64::new(f64::INFINITY).is_none());
        assert_eq!(FinF64::new(-0.5).map(FinF64::as_f64), Some(-0.5));
    }

    #[test]
    fn parses_trimmed_literals() {
        assert_eq!("  120.000 ".parse::<FinF64>().map(FinF64::as_f64), Ok(120.0));
        assert_eq!("-0.009".parse::<FinF64>().map(FinF64::as_f64), Ok(-0.009));
        assert!("inf".parse::<FinF64>().is_err());
        assert!("".parse::<FinF64>().is_err());
        assert!("12abc".parse::<FinF64>().is_err());
    }
}

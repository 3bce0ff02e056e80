//! Validated seeds for reproducible measurement sampling.

use super::error::QubitError;
use std::fmt;
use std::str::FromStr;

/// A non-negative integer seed.
///
/// Seeds coming from untyped sources (signed integers, floats, CLI text)
/// go through `TryFrom`/`FromStr`, which reject negative, fractional and
/// non-finite values with `QubitError::InvalidSeed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(u64);

impl Seed {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Seed {
    type Error = QubitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value).map(Seed).map_err(|_| {
            QubitError::invalid_seed(format!("seed must be non-negative, got {}", value))
        })
    }
}

impl TryFrom<f64> for Seed {
    type Error = QubitError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(QubitError::invalid_seed(format!("seed must be finite, got {}", value)));
        }
        if value < 0.0 {
            return Err(QubitError::invalid_seed(format!(
                "seed must be non-negative, got {}",
                value
            )));
        }
        if value.fract() != 0.0 {
            return Err(QubitError::invalid_seed(format!("seed must be an integer, got {}", value)));
        }
        // 2^64 is the first float that no longer fits.
        if value >= 18_446_744_073_709_551_616.0 {
            return Err(QubitError::invalid_seed(format!("seed {} exceeds u64 range", value)));
        }
        Ok(Seed(value as u64))
    }
}

impl FromStr for Seed {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(Seed(value));
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Seed::try_from(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Seed::try_from(value),
            Err(_) => Err(QubitError::invalid_seed(format!("cannot parse '{}' as a seed", s))),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid_seed<T: fmt::Debug>(result: Result<T, QubitError>) -> bool {
        matches!(result, Err(QubitError::InvalidSeed { .. }))
    }

    #[test]
    fn test_accepts_non_negative_integers() -> Result<(), QubitError> {
        assert_eq!(Seed::try_from(42i64)?, Seed::new(42));
        assert_eq!(Seed::try_from(7.0f64)?, Seed::new(7));
        assert_eq!("42".parse::<Seed>()?, Seed::new(42));
        assert_eq!(" 3.0 ".parse::<Seed>()?, Seed::new(3));
        assert_eq!(u64::MAX.to_string().parse::<Seed>()?.value(), u64::MAX);
        Ok(())
    }

    #[test]
    fn test_rejects_negative_seeds() {
        assert!(is_invalid_seed(Seed::try_from(-1i64)));
        assert!(is_invalid_seed(Seed::try_from(-0.5f64)));
        assert!(is_invalid_seed("-1".parse::<Seed>()));
    }

    #[test]
    fn test_rejects_non_finite_and_fractional_seeds() {
        assert!(is_invalid_seed(Seed::try_from(f64::NAN)));
        assert!(is_invalid_seed(Seed::try_from(f64::INFINITY)));
        assert!(is_invalid_seed(Seed::try_from(1.5f64)));
        assert!(is_invalid_seed(Seed::try_from(1e20f64)));
        assert!(is_invalid_seed("NaN".parse::<Seed>()));
        assert!(is_invalid_seed("inf".parse::<Seed>()));
        assert!(is_invalid_seed("forty-two".parse::<Seed>()));
    }
}

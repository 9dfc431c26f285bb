//! The deliberately failing calculation behind a "failed" run.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Checked integer division.
pub fn divide(numerator: i64, denominator: i64) -> Result<i64, CalcError> {
    numerator
        .checked_div(denominator)
        .ok_or(CalcError::DivisionByZero)
}

/// Computes `1 / 0` and hands back the caught error.
pub fn simulate_failure() -> CalcError {
    divide(1, 0).err().unwrap_or(CalcError::DivisionByZero)
}

#[cfg(test)]
mod tests {
    use super::{divide, simulate_failure, CalcError};

    #[test]
    fn divide_by_nonzero_succeeds() {
        assert_eq!(divide(12, 4), Ok(3));
        assert_eq!(divide(-9, 3), Ok(-3));
    }

    #[test]
    fn divide_by_zero_is_caught() {
        assert_eq!(divide(1, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn simulated_failure_reads_as_division_by_zero() {
        assert_eq!(simulate_failure().to_string(), "division by zero");
    }

    #[test]
    fn simulated_failure_is_the_caught_division_error() {
        assert_eq!(divide(1, 0).err(), Some(simulate_failure()));
    }
}

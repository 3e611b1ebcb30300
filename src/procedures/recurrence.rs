//! f(n) = n for n < 3, f(n) = f(n-1) + 2f(n-2) + 3f(n-3) otherwise.

use crate::error::{AppError, Result};

fn step(f1: u128, f2: u128, f3: u128) -> Option<u128> {
    f2.checked_mul(2)?
        .checked_add(f3.checked_mul(3)?)?
        .checked_add(f1)
}

/// Direct transcription of the rule; tree recursive with three branches.
pub fn fun1(n: u32) -> Result<u128> {
    if n < 3 {
        return Ok(n as u128);
    }
    let (f1, f2, f3) = (fun1(n - 1)?, fun1(n - 2)?, fun1(n - 3)?);
    step(f1, f2, f3).ok_or_else(|| AppError::overflow("fun1", n))
}

/// Carries `(f(k-1), f(k-2), f(k-3))` forward from k = 3 up to n.
pub fn fun2(n: u32) -> Result<u128> {
    if n < 3 {
        return Ok(n as u128);
    }
    let (mut f1, mut f2, mut f3): (u128, u128, u128) = (2, 1, 0);
    for _ in 3..=n {
        let next = step(f1, f2, f3).ok_or_else(|| AppError::overflow("fun2", n))?;
        (f1, f2, f3) = (next, f1, f2);
    }
    Ok(f1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let expected = [0u128, 1, 2, 4, 11, 25, 59, 142, 335, 796, 1892];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fun1(n as u32).unwrap(), *want, "fun1({n})");
            assert_eq!(fun2(n as u32).unwrap(), *want, "fun2({n})");
        }
    }

    #[test]
    fn iterative_reports_overflow() {
        assert!(fun2(60).is_ok());
        assert!(matches!(fun2(200), Err(AppError::Overflow { .. })));
    }
}

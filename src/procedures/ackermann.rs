//! The two-argument function of exercise 1.10:
//!
//! ```text
//! A(x, y) = 0                   if y = 0
//!         = 2y                  if x = 0
//!         = 2                   if y = 1
//!         = A(x-1, A(x, y-1))   otherwise
//! ```
//!
//! `A(1, y) = 2^y` and `A(2, y)` is a tower of `y` twos, so the value leaves
//! `u128` quickly. Both variants reject those regions up front rather than
//! unwinding a deep chain of calls first.

use crate::error::{AppError, Result};

fn input(x: u64, y: u128) -> String {
    format!("{x}, {y}")
}

/// Returns true when `A(x, y)` is known to exceed `u128::MAX`.
///
/// For x >= 1 the value is at least `2^y`; for x >= 2 it is at least a
/// tower of y twos, and `2^2^2^2^2` is already past 128 bits. For x >= 4,
/// `A(x, 3) = A(x-1, 4)` is at least `A(3, 4) = A(2, 65536)`.
fn surely_overflows(x: u64, y: u128) -> bool {
    (x >= 1 && y >= 128) || (x >= 2 && y >= 5) || (x >= 4 && y >= 3)
}

/// Applies the rule set directly, recursing on both arguments.
pub fn ackermann(x: u64, y: u128) -> Result<u128> {
    if y == 0 {
        return Ok(0);
    }
    if x == 0 {
        return y
            .checked_mul(2)
            .ok_or_else(|| AppError::overflow("ackermann", input(x, y)));
    }
    if y == 1 {
        return Ok(2);
    }
    if surely_overflows(x, y) {
        return Err(AppError::overflow("ackermann", input(x, y)));
    }
    let inner = ackermann(x, y - 1)?;
    ackermann(x - 1, inner)
}

/// Evaluates the same rules with an explicit stack of pending outer `x`
/// values, so the native call stack stays flat.
pub fn ackermann_iter(x: u64, y: u128) -> Result<u128> {
    let mut pending = vec![x];
    let mut y = y;

    while let Some(x) = pending.pop() {
        y = if y == 0 {
            0
        } else if x == 0 {
            y.checked_mul(2)
                .ok_or_else(|| AppError::overflow("ackermann_iter", input(x, y)))?
        } else if y == 1 {
            2
        } else if y == 2 {
            // A(x, 2) = A(x-1, 2) = ... = A(0, 2)
            4
        } else if surely_overflows(x, y) {
            return Err(AppError::overflow("ackermann_iter", input(x, y)));
        } else {
            // A(x, y) = A(x-1, A(x, y-1)): evaluate the inner call first.
            pending.push(x - 1);
            pending.push(x);
            y - 1
        };
    }

    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_from_the_exercise() {
        assert_eq!(ackermann(1, 10).unwrap(), 1024);
        assert_eq!(ackermann(2, 4).unwrap(), 65536);
        assert_eq!(ackermann(3, 3).unwrap(), 65536);
    }

    #[test]
    fn base_cases() {
        assert_eq!(ackermann(5, 0).unwrap(), 0);
        assert_eq!(ackermann(0, 21).unwrap(), 42);
        assert_eq!(ackermann(9, 1).unwrap(), 2);
        assert_eq!(ackermann_iter(5, 0).unwrap(), 0);
        assert_eq!(ackermann_iter(0, 21).unwrap(), 42);
        assert_eq!(ackermann_iter(9, 1).unwrap(), 2);
    }

    #[test]
    fn first_row_is_powers_of_two() {
        for y in 1..128u32 {
            assert_eq!(ackermann(1, y as u128).unwrap(), 1u128 << y);
        }
    }

    #[test]
    fn second_argument_two_is_always_four() {
        for x in 0..50 {
            assert_eq!(ackermann(x, 2).unwrap(), 4);
            assert_eq!(ackermann_iter(x, 2).unwrap(), 4);
        }
    }

    #[test]
    fn stack_machine_is_flat_for_huge_x() {
        assert_eq!(ackermann_iter(u64::MAX, 2).unwrap(), 4);
        assert!(matches!(ackermann_iter(u64::MAX, 3), Err(AppError::Overflow { .. })));
        assert!(matches!(ackermann(u64::MAX, 3), Err(AppError::Overflow { .. })));
        assert!(matches!(ackermann(4, 3), Err(AppError::Overflow { .. })));
    }

    #[test]
    fn stack_machine_agrees_with_recursion() {
        for x in 0..6u64 {
            for y in 0..5u128 {
                let rec = ackermann(x, y).ok();
                let iter = ackermann_iter(x, y).ok();
                assert_eq!(rec, iter, "A({x}, {y})");
            }
        }
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(ackermann(1, 128), Err(AppError::Overflow { .. })));
        assert!(matches!(ackermann(2, 5), Err(AppError::Overflow { .. })));
        assert!(matches!(ackermann(3, 4), Err(AppError::Overflow { .. })));
        assert!(matches!(ackermann_iter(3, 4), Err(AppError::Overflow { .. })));
        assert!(matches!(ackermann(0, u128::MAX), Err(AppError::Overflow { .. })));
    }
}

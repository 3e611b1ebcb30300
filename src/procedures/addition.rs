//! Adds two non-negative integers using only increment and decrement.
//!
//! Operands are `u64` and the sum is `u128`, so neither variant can overflow.

pub fn inc(x: u128) -> u128 {
    x + 1
}

pub fn dec(x: u64) -> u64 {
    x - 1
}

/// Recursive process: the increments are deferred until `a` reaches zero.
/// Stack depth is `a`.
pub fn add1(a: u64, b: u64) -> u128 {
    if a == 0 { b as u128 } else { inc(add1(dec(a), b)) }
}

/// Iterative process: `(a, b) -> (dec(a), inc(b))` until `a` is zero.
pub fn add2(a: u64, b: u64) -> u128 {
    let (mut a, mut b) = (a, b as u128);
    while a != 0 {
        a = dec(a);
        b = inc(b);
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_sums() {
        assert_eq!(add1(13, 44), 57);
        assert_eq!(add2(33, 11), 44);
    }

    #[test]
    fn zero_operands() {
        assert_eq!(add1(0, 0), 0);
        assert_eq!(add2(0, 7), 7);
        assert_eq!(add1(7, 0), 7);
    }

    #[test]
    fn iterative_handles_wide_operands() {
        assert_eq!(add2(3, u64::MAX), u64::MAX as u128 + 3);
    }
}

//! Fibonacci terms indexed so that fib(1) = 1 and fib(2) = 2.

use memoize::memoize;

use crate::error::{AppError, Result};

/// Largest n whose term fits in a `u128`.
pub const MAX_INPUT: u32 = 185;

fn check_domain(procedure: &'static str, n: u32) -> Result<()> {
    if n == 0 {
        return Err(AppError::domain(procedure, n, "n >= 1"));
    }
    if n > MAX_INPUT {
        return Err(AppError::overflow(procedure, n));
    }
    Ok(())
}

/// Tree recursion: each term is the sum of the two preceding ones.
/// The number of calls grows exponentially with n.
pub fn fib_rec(n: u32) -> Result<u128> {
    check_domain("fib_rec", n)?;
    Ok(tree(n))
}

fn tree(n: u32) -> u128 {
    if n <= 2 { n as u128 } else { tree(n - 1) + tree(n - 2) }
}

/// Iterative process over the pair `(a, b) -> (a + b, a)`, applied n + 1
/// times starting from `(0, 1)`.
///
/// fib_iter(0) is 1, the first value the pair produces.
pub fn fib_iter(n: u32) -> Result<u128> {
    let (mut a, mut b): (u128, u128) = (0, 1);
    for _ in 0..=n {
        let next = a
            .checked_add(b)
            .ok_or_else(|| AppError::overflow("fib_iter", n))?;
        b = a;
        a = next;
    }
    Ok(a)
}

/// The tree recursion with each term cached after its first evaluation.
pub fn fib_memo(n: u32) -> Result<u128> {
    check_domain("fib_memo", n)?;
    Ok(cached(n))
}

/// Drops every cached term.
pub fn clear_cache() {
    memoized_flush_cached();
}

// Room for every representable term.
#[memoize(Capacity: 256)]
fn cached(n: u32) -> u128 {
    if n <= 2 { n as u128 } else { cached(n - 1) + cached(n - 2) }
}

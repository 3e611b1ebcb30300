use crate::error::{AppError, Result};

/// Largest n whose factorial fits in a `u128`.
pub const MAX_INPUT: u32 = 34;

fn check_domain(procedure: &'static str, n: u32) -> Result<()> {
    if n == 0 {
        return Err(AppError::domain(procedure, n, "n >= 1"));
    }
    if n > MAX_INPUT {
        return Err(AppError::overflow(procedure, n));
    }
    Ok(())
}

/// n! as n * (n-1)!, with 1! = 1.
pub fn fact_rec(n: u32) -> Result<u128> {
    check_domain("fact_rec", n)?;
    Ok(product_down(n))
}

fn product_down(n: u32) -> u128 {
    if n == 1 { 1 } else { n as u128 * product_down(n - 1) }
}

/// n! as the running product 1 * 2 * ... * n.
pub fn fact_rec2(n: u32) -> Result<u128> {
    if n == 0 {
        return Err(AppError::domain("fact_rec2", n, "n >= 1"));
    }
    let mut product: u128 = 1;
    for counter in 1..=n {
        product = product
            .checked_mul(counter as u128)
            .ok_or_else(|| AppError::overflow("fact_rec2", n))?;
    }
    Ok(product)
}

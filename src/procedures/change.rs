//! Counting the ways to change an amount with a fixed set of coin kinds.

use memoize::memoize;

use crate::error::{AppError, Result};

/// Coin denominations, cheapest first. Kind `k` (1-based) is `DENOMINATIONS[k - 1]`.
pub const DENOMINATIONS: [u64; 6] = [1, 5, 10, 25, 50, 100];

pub const DEFAULT_COIN_TYPES: usize = DENOMINATIONS.len();

/// Denomination of the costliest of the first `coin_types` kinds.
pub fn first_denomination(coin_types: usize) -> Option<u64> {
    coin_types
        .checked_sub(1)
        .and_then(|i| DENOMINATIONS.get(i))
        .copied()
}

fn check_domain(procedure: &'static str, amount: i64, coin_types: usize) -> Result<()> {
    if coin_types > DENOMINATIONS.len() {
        return Err(AppError::domain(
            procedure,
            format!("{amount}, {coin_types}"),
            "coin_types in 0..=6",
        ));
    }
    Ok(())
}

/// Tree recursion: the ways without the costliest remaining kind plus the
/// ways that use at least one coin of that kind.
pub fn count_change(amount: i64, coin_types: usize) -> Result<u128> {
    check_domain("count_change", amount, coin_types)?;
    Ok(tree(amount, coin_types))
}

fn tree(amount: i64, coin_types: usize) -> u128 {
    if amount < 0 {
        return 0;
    }
    let Some(coin) = first_denomination(coin_types) else {
        return 0;
    };
    if amount == 0 {
        return 1;
    }
    tree(amount, coin_types - 1) + tree(amount - coin as i64, coin_types)
}

/// The same tree recursion with results cached by `(amount, coin_types)`.
pub fn count_change_memo(amount: i64, coin_types: usize) -> Result<u128> {
    check_domain("count_change_memo", amount, coin_types)?;
    Ok(cached(amount, coin_types))
}

/// Drops every cached `(amount, coin_types)` entry.
pub fn clear_cache() {
    memoized_flush_cached();
}

#[memoize(Capacity: 65536)]
fn cached(amount: i64, coin_types: usize) -> u128 {
    if amount < 0 || coin_types == 0 {
        return 0;
    }
    if amount == 0 {
        return 1;
    }
    let coin = DENOMINATIONS[coin_types - 1] as i64;
    cached(amount, coin_types - 1) + cached(amount - coin, coin_types)
}

/// Bottom-up: `ways[a]` holds the ways to make `a` with the kinds folded in
/// so far, adding one kind at a time.
pub fn count_change_iter(amount: i64, coin_types: usize) -> Result<u128> {
    check_domain("count_change_iter", amount, coin_types)?;
    if amount < 0 || coin_types == 0 {
        return Ok(0);
    }

    let amount = amount as usize;
    let mut ways: Vec<u128> = Vec::new();
    ways.try_reserve_exact(amount + 1).map_err(|_| {
        AppError::domain("count_change_iter", amount, "an amount small enough to tabulate")
    })?;
    ways.resize(amount + 1, 0);
    ways[0] = 1;
    for &coin in &DENOMINATIONS[..coin_types] {
        let coin = coin as usize;
        for a in coin..=amount {
            ways[a] = ways[a]
                .checked_add(ways[a - coin])
                .ok_or_else(|| AppError::overflow("count_change_iter", amount))?;
        }
    }
    Ok(ways[amount])
}

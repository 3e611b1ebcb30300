//! Pascal's triangle: edges are 1, each interior entry is the sum of the two
//! entries above it.

use crate::error::{AppError, Result};

pub type Row = Vec<u128>;

fn check_domain(procedure: &'static str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(AppError::domain(procedure, n, "n >= 1"));
    }
    Ok(())
}

/// Builds the row following `prev`.
fn next_row(prev: &[u128], procedure: &'static str, n: usize) -> Result<Row> {
    let mut row = Vec::with_capacity(prev.len() + 1);
    row.push(1);
    for pair in prev.windows(2) {
        let cell = pair[0]
            .checked_add(pair[1])
            .ok_or_else(|| AppError::overflow(procedure, n))?;
        row.push(cell);
    }
    row.push(1);
    Ok(row)
}

/// Returns all rows 1..=n.
pub fn pascal_triangle(n: usize) -> Result<Vec<Row>> {
    check_domain("pascal_triangle", n)?;
    let mut rows: Vec<Row> = vec![vec![1]];
    for _ in 1..n {
        let row = next_row(&rows[rows.len() - 1], "pascal_triangle", n)?;
        rows.push(row);
    }
    Ok(rows)
}

/// Returns only row n, keeping a single previous row while building it.
pub fn pascal_triangle2(n: usize) -> Result<Row> {
    check_domain("pascal_triangle2", n)?;
    let mut row = vec![1];
    for _ in 1..n {
        row = next_row(&row, "pascal_triangle2", n)?;
    }
    Ok(row)
}

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::procedures::Exercise;
use crate::runner::check::CheckReport;
use crate::runner::{Evaluation, Value};

fn render_row(row: &[u128]) -> String {
    let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
    format!("[{}]", cells.join(", "))
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

pub fn evaluations(evals: &[Evaluation], format: OutputFormat) -> Result<String> {
    if let OutputFormat::Json = format {
        return json(evals);
    }

    let mut out = String::new();
    for e in evals {
        match &e.value {
            Value::Number(v) => {
                let _ = writeln!(out, "{}({}) = {}  [{}]", e.procedure, e.input, v, e.shape);
            }
            Value::Row(row) => {
                let _ = writeln!(out, "{}({}) = {}", e.procedure, e.input, render_row(row));
            }
            Value::Rows(rows) => {
                let _ = writeln!(out, "{}({}):", e.procedure, e.input);
                for row in rows {
                    let _ = writeln!(out, "  {}", render_row(row));
                }
            }
        }
    }
    Ok(out)
}

pub fn checks(reports: &[CheckReport], format: OutputFormat) -> Result<String> {
    if let OutputFormat::Json = format {
        return json(reports);
    }

    let mut out = String::new();
    for r in reports {
        let status = if r.passed() { "ok" } else { "MISMATCH" };
        let _ = writeln!(
            out,
            "{:<10} {:<9} {:>5} inputs  ({})",
            r.exercise, status, r.inputs, r.range
        );
        for m in &r.mismatches {
            let _ = writeln!(out, "    {m}");
        }
    }
    Ok(out)
}

pub fn catalog(entries: &[Exercise], format: OutputFormat) -> Result<String> {
    if let OutputFormat::Json = format {
        return json(entries);
    }

    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "{:<10} {:<18} {:<17} {}",
            e.command,
            e.procedure,
            e.shape.to_string(),
            e.summary
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::{CATALOG, Shape};

    fn eval(procedure: &'static str, value: Value) -> Evaluation {
        Evaluation {
            procedure,
            shape: Shape::Iterative,
            input: "3".into(),
            value,
            elapsed_micros: 1,
        }
    }

    #[test]
    fn text_lines_per_value_kind() {
        let evals = vec![
            eval("fun2", Value::Number(4)),
            eval("pascal_triangle2", Value::Row(vec![1, 2, 1])),
            eval("pascal_triangle", Value::Rows(vec![vec![1], vec![1, 1]])),
        ];
        let text = evaluations(&evals, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "fun2(3) = 4  [iterative]");
        assert_eq!(lines[1], "pascal_triangle2(3) = [1, 2, 1]");
        assert_eq!(lines[2], "pascal_triangle(3):");
        assert_eq!(lines[3], "  [1]");
        assert_eq!(lines[4], "  [1, 1]");
    }

    #[test]
    fn json_keeps_wide_integers_exact() {
        let evals = vec![eval("fib_iter", Value::Number(u128::MAX))];
        let text = evaluations(&evals, OutputFormat::Json).unwrap();
        assert!(text.contains(&u128::MAX.to_string()));
        assert!(text.contains("\"shape\": \"iterative\""));
    }

    #[test]
    fn catalog_lists_every_entry() {
        let text = catalog(CATALOG, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), CATALOG.len());
        assert!(text.contains("tree recursive"));
    }
}

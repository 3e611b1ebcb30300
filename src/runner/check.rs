use serde::Serialize;

use crate::cli::Variant;
use crate::error::{AppError, Result};
use crate::procedures::{change, fibonacci};
use crate::runner::{Evaluation, Runner};

/// Agreement summary for one exercise swept over a range of inputs.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub exercise: &'static str,
    pub range: String,
    pub inputs: usize,
    pub mismatches: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl<'a> Runner<'a> {
    /// The evaluations printed by the exercise walkthrough, one variant each.
    pub fn demo(&self) -> Result<Vec<Evaluation>> {
        let mut out = Vec::new();
        out.extend(self.fact(10, Variant::Rec)?);
        out.extend(self.fact(10, Variant::Iter)?);
        out.extend(self.add(13, 44, Variant::Rec)?);
        out.extend(self.add(33, 11, Variant::Iter)?);
        out.extend(self.ackermann(1, 10, Variant::Rec)?);
        out.extend(self.ackermann(2, 4, Variant::Rec)?);
        out.extend(self.ackermann(3, 3, Variant::Rec)?);
        out.extend(self.fib(5, Variant::Rec)?);
        out.extend(self.fib(100, Variant::Iter)?);
        out.extend(self.change(100, Some(6), Variant::Rec)?);
        out.extend(self.fun(10, Variant::Rec)?);
        out.extend(self.fun(10, Variant::Iter)?);
        out.extend(self.pascal(Some(10), None)?);
        Ok(out)
    }

    /// Evaluates every variant of every exercise over the ranges where the
    /// recursive forms are cheap, collecting disagreements instead of stopping.
    pub fn check(&self) -> Result<Vec<CheckReport>> {
        let ackermann_pairs: Vec<(u64, u128)> = (0..=3u64)
            .flat_map(|x| (0..=3u128).map(move |y| (x, y)))
            .chain([(1, 10), (2, 4)])
            .collect();

        let change_inputs: Vec<(i64, usize)> = (0..=6usize)
            .flat_map(|k| (-2..=100i64).map(move |a| (a, k)))
            .collect();

        let add_pairs: Vec<(u64, u64)> = (0..=50u64)
            .flat_map(|a| (0..=50u64).map(move |b| (a, b)))
            .collect();

        let reports = vec![
            sweep("fact", "n in 1..=10", 1..=10u32, |n: u32| self.fact(n, Variant::All))?,
            sweep("add", "a, b in 0..=50", add_pairs, |(a, b): (u64, u64)| {
                self.add(a, b, Variant::All)
            })?,
            sweep("ackermann", "x, y in 0..=3; (1, 10); (2, 4)", ackermann_pairs, |(x, y): (u64, u128)| {
                self.ackermann(x, y, Variant::All)
            })?,
            sweep("fib", "n in 1..=20", 1..=20u32, |n: u32| self.fib(n, Variant::All))?,
            sweep("change", "amount in -2..=100, kinds in 0..=6", change_inputs, |(a, k): (i64, usize)| {
                self.change(a, Some(k), Variant::All)
            })?,
            sweep("fun", "n in 0..=15", 0..=15u32, |n: u32| self.fun(n, Variant::All))?,
            sweep("pascal", "n in 1..=10", 1..=10usize, |n: usize| self.pascal_final_rows(n))?,
        ];

        fibonacci::clear_cache();
        change::clear_cache();

        for report in &reports {
            if report.passed() {
                tracing::info!("{}: {} inputs agree", report.exercise, report.inputs);
            } else {
                tracing::warn!(
                    "{}: {} of {} inputs disagree",
                    report.exercise,
                    report.mismatches.len(),
                    report.inputs
                );
            }
        }

        Ok(reports)
    }
}

fn sweep<I, T>(
    exercise: &'static str,
    range: &str,
    inputs: I,
    mut eval: impl FnMut(T) -> Result<Vec<Evaluation>>,
) -> Result<CheckReport>
where
    I: IntoIterator<Item = T>,
{
    let mut count = 0;
    let mut mismatches = Vec::new();
    for input in inputs {
        count += 1;
        match eval(input) {
            Ok(_) => {}
            Err(e @ AppError::Mismatch { .. }) => mismatches.push(e.to_string()),
            Err(e) => return Err(e),
        }
    }
    Ok(CheckReport {
        exercise,
        range: range.to_string(),
        inputs: count,
        mismatches,
    })
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::runner::{Runner, Value};

    #[test]
    fn every_exercise_agrees_over_its_range() {
        let cfg = AppConfig::default();
        let reports = Runner::new(&cfg).check().unwrap();
        assert_eq!(reports.len(), 7);
        for report in &reports {
            assert!(report.passed(), "{}: {:?}", report.exercise, report.mismatches);
            assert!(report.inputs > 0);
        }
        let add = reports.iter().find(|r| r.exercise == "add").unwrap();
        assert_eq!(add.inputs, 51 * 51);
    }

    #[test]
    fn demo_reproduces_walkthrough_values() {
        let cfg = AppConfig::default();
        let evals = Runner::new(&cfg).demo().unwrap();
        let values: Vec<(&str, &Value)> = evals.iter().map(|e| (e.procedure, &e.value)).collect();
        assert_eq!(values[0], ("fact_rec", &Value::Number(3_628_800)));
        assert_eq!(values[2], ("add1", &Value::Number(57)));
        assert_eq!(values[3], ("add2", &Value::Number(44)));
        assert_eq!(values[4], ("ackermann", &Value::Number(1024)));
        assert_eq!(values[7], ("fib_rec", &Value::Number(8)));
        assert_eq!(values[9], ("count_change", &Value::Number(293)));
        assert_eq!(values[11], ("fun2", &Value::Number(1892)));
        assert_eq!(
            values[12],
            (
                "pascal_triangle2",
                &Value::Row(vec![1, 9, 36, 84, 126, 126, 84, 36, 9, 1])
            )
        );
    }
}

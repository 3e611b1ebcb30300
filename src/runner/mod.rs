pub mod check;
pub mod report;

use std::time::Instant;

use serde::Serialize;

use crate::cli::Variant;
use crate::config::{AppConfig, PascalView};
use crate::error::{AppError, Result};
use crate::procedures::{
    self, Shape, ackermann, addition, change, factorial, fibonacci, pascal, recurrence,
};

/// The result of one procedure variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(u128),
    Row(Vec<u128>),
    Rows(Vec<Vec<u128>>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub procedure: &'static str,
    pub shape: Shape,
    pub input: String,
    pub value: Value,
    pub elapsed_micros: u64,
}

/// Which configured limit, if any, protects a variant.
#[derive(Debug, Clone, Copy)]
enum Guard {
    None,
    /// Linear recursion whose depth tracks the input.
    Depth(u64),
    /// Naive tree recursion whose running time explodes with the input.
    Tree(u64),
    /// Naive change counting, guarded by the amount.
    ChangeAmount(i64),
}

struct Candidate<'f> {
    procedure: &'static str,
    variant: Variant,
    guard: Guard,
    run: Box<dyn FnOnce() -> Result<Value> + 'f>,
}

impl<'f> Candidate<'f> {
    fn new(
        procedure: &'static str,
        variant: Variant,
        guard: Guard,
        run: impl FnOnce() -> Result<Value> + 'f,
    ) -> Self {
        Self {
            procedure,
            variant,
            guard,
            run: Box::new(run),
        }
    }
}

pub struct Runner<'a> {
    config: &'a AppConfig,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    fn check_guard(&self, procedure: &'static str, input: &str, guard: Guard) -> Result<()> {
        let limits = &self.config.limits;
        let (value, limit) = match guard {
            Guard::None => return Ok(()),
            Guard::Depth(v) => (v, limits.max_recursion_depth),
            Guard::Tree(v) => (v, limits.max_tree_input),
            Guard::ChangeAmount(amount) => {
                (amount.max(0) as u64, limits.max_change_amount)
            }
        };
        if value > limit {
            return Err(AppError::DepthLimit {
                procedure,
                input: input.to_string(),
                limit,
            });
        }
        Ok(())
    }

    /// Runs one variant and times it.
    fn evaluate(&self, candidate: Candidate<'_>, input: &str) -> Result<Evaluation> {
        self.check_guard(candidate.procedure, input, candidate.guard)?;

        let shape = procedures::lookup(candidate.procedure)
            .map(|e| e.shape)
            .unwrap_or(Shape::Iterative);

        let started = Instant::now();
        let value = (candidate.run)()?;
        let elapsed_micros = started.elapsed().as_micros() as u64;

        tracing::debug!(
            procedure = candidate.procedure,
            %shape,
            grows_stack = shape.grows_stack(),
            input,
            elapsed_micros,
            "evaluated"
        );

        Ok(Evaluation {
            procedure: candidate.procedure,
            shape,
            input: input.to_string(),
            value,
            elapsed_micros,
        })
    }

    /// Evaluates the candidates picked by `selected` and, when more than one
    /// ran, requires them to agree.
    ///
    /// With [`Variant::All`], variants refused by a configured limit are
    /// skipped with a warning; a specific variant that is refused is an error.
    fn run(
        &self,
        exercise: &'static str,
        input: String,
        selected: Variant,
        candidates: Vec<Candidate<'_>>,
    ) -> Result<Vec<Evaluation>> {
        let picked: Vec<Candidate<'_>> = candidates
            .into_iter()
            .filter(|c| selected == Variant::All || c.variant == selected)
            .collect();

        if picked.is_empty() {
            return Err(anyhow::anyhow!("{exercise} has no {selected:?} variant").into());
        }

        let mut evaluations = Vec::with_capacity(picked.len());
        for candidate in picked {
            match self.evaluate(candidate, &input) {
                Ok(evaluation) => evaluations.push(evaluation),
                Err(e @ AppError::DepthLimit { .. }) if selected == Variant::All => {
                    tracing::warn!("skipping: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        if let Some((first, rest)) = evaluations.split_first() {
            if let Some(other) = rest.iter().find(|e| e.value != first.value) {
                return Err(AppError::Mismatch {
                    procedure: other.procedure,
                    input,
                    detail: format!(
                        "{} gave {:?}, {} gave {:?}",
                        first.procedure, first.value, other.procedure, other.value
                    ),
                });
            }
        }

        Ok(evaluations)
    }

    pub fn fact(&self, n: u32, variant: Variant) -> Result<Vec<Evaluation>> {
        self.run(
            "fact",
            n.to_string(),
            variant,
            vec![
                Candidate::new("fact_rec", Variant::Rec, Guard::Depth(n as u64), move || {
                    factorial::fact_rec(n).map(Value::Number)
                }),
                Candidate::new("fact_rec2", Variant::Iter, Guard::None, move || {
                    factorial::fact_rec2(n).map(Value::Number)
                }),
            ],
        )
    }

    pub fn add(&self, a: u64, b: u64, variant: Variant) -> Result<Vec<Evaluation>> {
        self.run(
            "add",
            format!("{a}, {b}"),
            variant,
            vec![
                Candidate::new("add1", Variant::Rec, Guard::Depth(a), move || {
                    Ok(Value::Number(addition::add1(a, b)))
                }),
                Candidate::new("add2", Variant::Iter, Guard::None, move || {
                    Ok(Value::Number(addition::add2(a, b)))
                }),
            ],
        )
    }

    pub fn ackermann(&self, x: u64, y: u128, variant: Variant) -> Result<Vec<Evaluation>> {
        self.run(
            "ackermann",
            format!("{x}, {y}"),
            variant,
            vec![
                Candidate::new("ackermann", Variant::Rec, Guard::Depth(x), move || {
                    ackermann::ackermann(x, y).map(Value::Number)
                }),
                Candidate::new("ackermann_iter", Variant::Iter, Guard::None, move || {
                    ackermann::ackermann_iter(x, y).map(Value::Number)
                }),
            ],
        )
    }

    pub fn fib(&self, n: u32, variant: Variant) -> Result<Vec<Evaluation>> {
        self.run(
            "fib",
            n.to_string(),
            variant,
            vec![
                Candidate::new("fib_rec", Variant::Rec, Guard::Tree(n as u64), move || {
                    fibonacci::fib_rec(n).map(Value::Number)
                }),
                Candidate::new("fib_iter", Variant::Iter, Guard::None, move || {
                    fibonacci::fib_iter(n).map(Value::Number)
                }),
                Candidate::new("fib_memo", Variant::Memo, Guard::Depth(n as u64), move || {
                    fibonacci::fib_memo(n).map(Value::Number)
                }),
            ],
        )
    }

    pub fn change(
        &self,
        amount: i64,
        coin_types: Option<usize>,
        variant: Variant,
    ) -> Result<Vec<Evaluation>> {
        let kinds = coin_types.unwrap_or(self.config.change.coin_types);
        let depth = (amount.max(0) as u64).saturating_add(kinds as u64);
        self.run(
            "change",
            format!("{amount}, {kinds}"),
            variant,
            vec![
                Candidate::new(
                    "count_change",
                    Variant::Rec,
                    Guard::ChangeAmount(amount),
                    move || change::count_change(amount, kinds).map(Value::Number),
                ),
                Candidate::new("count_change_iter", Variant::Iter, Guard::None, move || {
                    change::count_change_iter(amount, kinds).map(Value::Number)
                }),
                Candidate::new("count_change_memo", Variant::Memo, Guard::Depth(depth), move || {
                    change::count_change_memo(amount, kinds).map(Value::Number)
                }),
            ],
        )
    }

    pub fn fun(&self, n: u32, variant: Variant) -> Result<Vec<Evaluation>> {
        self.run(
            "fun",
            n.to_string(),
            variant,
            vec![
                Candidate::new("fun1", Variant::Rec, Guard::Tree(n as u64), move || {
                    recurrence::fun1(n).map(Value::Number)
                }),
                Candidate::new("fun2", Variant::Iter, Guard::None, move || {
                    recurrence::fun2(n).map(Value::Number)
                }),
            ],
        )
    }

    pub fn pascal(&self, n: Option<usize>, view: Option<PascalView>) -> Result<Vec<Evaluation>> {
        let n = n.unwrap_or(self.config.pascal.rows);
        let candidate = match view.unwrap_or(self.config.pascal.view) {
            PascalView::All => Candidate::new("pascal_triangle", Variant::Iter, Guard::None, move || {
                pascal::pascal_triangle(n).map(Value::Rows)
            }),
            PascalView::Last => Candidate::new("pascal_triangle2", Variant::Iter, Guard::None, move || {
                pascal::pascal_triangle2(n).map(Value::Row)
            }),
        };
        self.run("pascal", n.to_string(), Variant::Iter, vec![candidate])
    }

    /// Final rows of both triangle builders, for agreement checks.
    fn pascal_final_rows(&self, n: usize) -> Result<Vec<Evaluation>> {
        self.run(
            "pascal",
            n.to_string(),
            Variant::All,
            vec![
                Candidate::new("pascal_triangle", Variant::Iter, Guard::None, move || {
                    let mut rows = pascal::pascal_triangle(n)?;
                    Ok(Value::Row(rows.pop().unwrap_or_default()))
                }),
                Candidate::new("pascal_triangle2", Variant::Iter, Guard::None, move || {
                    pascal::pascal_triangle2(n).map(Value::Row)
                }),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(evals: &[Evaluation]) -> Vec<(&'static str, u128)> {
        evals
            .iter()
            .map(|e| match e.value {
                Value::Number(v) => (e.procedure, v),
                ref other => panic!("expected a number, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn all_variants_run_and_agree() {
        let cfg = AppConfig::default();
        let runner = Runner::new(&cfg);
        let evals = runner.fib(10, Variant::All).unwrap();
        assert_eq!(
            numbers(&evals),
            vec![("fib_rec", 89), ("fib_iter", 89), ("fib_memo", 89)]
        );
    }

    #[test]
    fn single_variant_selection() {
        let cfg = AppConfig::default();
        let runner = Runner::new(&cfg);
        let evals = runner.change(100, None, Variant::Iter).unwrap();
        assert_eq!(numbers(&evals), vec![("count_change_iter", 293)]);
        assert_eq!(evals[0].shape, Shape::Iterative);
    }

    #[test]
    fn configured_coin_types_are_the_default() {
        let mut cfg = AppConfig::default();
        cfg.change.coin_types = 5;
        let runner = Runner::new(&cfg);
        let evals = runner.change(100, None, Variant::Memo).unwrap();
        assert_eq!(numbers(&evals), vec![("count_change_memo", 292)]);
        assert_eq!(evals[0].input, "100, 5");
    }

    #[test]
    fn missing_variant_is_an_error() {
        let cfg = AppConfig::default();
        let runner = Runner::new(&cfg);
        assert!(matches!(runner.fact(5, Variant::Memo), Err(AppError::Other(_))));
    }

    #[test]
    fn explicit_recursive_variant_respects_limit() {
        let mut cfg = AppConfig::default();
        cfg.limits.max_tree_input = 20;
        let runner = Runner::new(&cfg);
        let err = runner.fib(25, Variant::Rec).unwrap_err();
        assert!(matches!(err, AppError::DepthLimit { limit: 20, .. }));
    }

    #[test]
    fn all_skips_refused_variants() {
        let mut cfg = AppConfig::default();
        cfg.limits.max_recursion_depth = 100;
        let runner = Runner::new(&cfg);
        let evals = runner.add(5_000, 1, Variant::All).unwrap();
        assert_eq!(numbers(&evals), vec![("add2", 5_001)]);
    }

    #[test]
    fn pascal_view_defaults_from_config() {
        let mut cfg = AppConfig::default();
        cfg.pascal.rows = 4;
        let runner = Runner::new(&cfg);
        let evals = runner.pascal(None, None).unwrap();
        assert_eq!(evals[0].value, Value::Row(vec![1, 3, 3, 1]));

        let evals = runner.pascal(Some(3), Some(PascalView::All)).unwrap();
        assert_eq!(
            evals[0].value,
            Value::Rows(vec![vec![1], vec![1, 1], vec![1, 2, 1]])
        );
    }

    #[test]
    fn domain_errors_propagate() {
        let cfg = AppConfig::default();
        let runner = Runner::new(&cfg);
        assert!(matches!(runner.fact(0, Variant::All), Err(AppError::Domain { .. })));
        assert!(matches!(runner.change(10, Some(9), Variant::Iter), Err(AppError::Domain { .. })));
    }

    #[test]
    fn huge_coin_type_count_is_a_domain_error() {
        let cfg = AppConfig::default();
        let runner = Runner::new(&cfg);
        for variant in [Variant::All, Variant::Rec, Variant::Iter] {
            assert!(matches!(
                runner.change(5, Some(usize::MAX), variant),
                Err(AppError::Domain { .. })
            ));
        }
        assert!(matches!(
            runner.change(i64::MAX, Some(usize::MAX), Variant::Memo),
            Err(AppError::DepthLimit { .. })
        ));
    }

    #[test]
    fn stack_machine_answers_where_recursion_is_refused() {
        let cfg = AppConfig::default();
        let runner = Runner::new(&cfg);
        let evals = runner.ackermann(u64::MAX, 2, Variant::All).unwrap();
        assert_eq!(numbers(&evals), vec![("ackermann_iter", 4)]);
        assert!(matches!(
            runner.ackermann(u64::MAX, 3, Variant::Iter),
            Err(AppError::Overflow { .. })
        ));
    }
}

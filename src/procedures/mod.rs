//! Recursive and iterative formulations of small numeric exercises.
//!
//! Every procedure is a pure function of its arguments. Results are `u128`
//! and arithmetic that can leave that range is checked, surfacing as
//! [`AppError::Overflow`](crate::error::AppError::Overflow).

pub mod ackermann;
pub mod addition;
pub mod change;
pub mod factorial;
pub mod fibonacci;
pub mod pascal;
pub mod recurrence;


use serde::Serialize;

/// The shape of the process a procedure generates when evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// One pending operation per call; stack depth grows with the input.
    LinearRecursive,
    /// Each call branches into two or more calls.
    TreeRecursive,
    /// A fixed set of state variables updated in a loop.
    Iterative,
    /// Tree recursion with results cached by argument tuple.
    Memoized,
    /// Recursion replaced by an explicit stack of pending work.
    StackMachine,
}

impl Shape {
    /// Whether evaluating this shape grows the native call stack with the input.
    pub fn grows_stack(self) -> bool {
        matches!(
            self,
            Shape::LinearRecursive | Shape::TreeRecursive | Shape::Memoized
        )
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Shape::LinearRecursive => "linear recursive",
            Shape::TreeRecursive => "tree recursive",
            Shape::Iterative => "iterative",
            Shape::Memoized => "memoized",
            Shape::StackMachine => "stack machine",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub command: &'static str,
    pub procedure: &'static str,
    pub shape: Shape,
    pub summary: &'static str,
}

const fn exercise(
    command: &'static str,
    procedure: &'static str,
    shape: Shape,
    summary: &'static str,
) -> Exercise {
    Exercise {
        command,
        procedure,
        shape,
        summary,
    }
}

/// Every procedure variant, grouped by the subcommand that evaluates it.
pub const CATALOG: &[Exercise] = &[
    exercise("fact", "fact_rec", Shape::LinearRecursive, "n * (n-1)!, with 1! = 1"),
    exercise("fact", "fact_rec2", Shape::Iterative, "running product from 1 up to n"),
    exercise("add", "add1", Shape::LinearRecursive, "inc(add1(dec(a), b))"),
    exercise("add", "add2", Shape::Iterative, "(a, b) -> (dec(a), inc(b)) until a = 0"),
    exercise("ackermann", "ackermann", Shape::TreeRecursive, "A(x-1, A(x, y-1)) with y=0 -> 0, x=0 -> 2y, y=1 -> 2"),
    exercise("ackermann", "ackermann_iter", Shape::StackMachine, "the same rules over an explicit stack of pending x"),
    exercise("fib", "fib_rec", Shape::TreeRecursive, "fib(n-1) + fib(n-2), with fib(1)=1, fib(2)=2"),
    exercise("fib", "fib_iter", Shape::Iterative, "rolling pair (a, b) -> (a + b, a)"),
    exercise("fib", "fib_memo", Shape::Memoized, "tree recursion with cached terms"),
    exercise("change", "count_change", Shape::TreeRecursive, "ways without the costliest coin + ways using it"),
    exercise("change", "count_change_memo", Shape::Memoized, "tree recursion with cached (amount, kinds)"),
    exercise("change", "count_change_iter", Shape::Iterative, "bottom-up table of ways per amount"),
    exercise("fun", "fun1", Shape::TreeRecursive, "f(n-1) + 2f(n-2) + 3f(n-3), f(n) = n for n < 3"),
    exercise("fun", "fun2", Shape::Iterative, "last three values carried forward"),
    exercise("pascal", "pascal_triangle", Shape::Iterative, "every row up to n"),
    exercise("pascal", "pascal_triangle2", Shape::Iterative, "only the most recent row"),
];

/// Looks up a catalog entry by procedure name.
pub fn lookup(procedure: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.procedure == procedure)
}

#[macro_use]
extern crate lazy_static;

pub mod cmdline;
mod core;
pub mod environment;
pub mod evaluator;
pub mod interpreter;
pub mod printer;
pub mod reader;
pub mod tokens;
pub mod types;

pub use environment::Environment;
pub use types::Expr;

/// Tokenize and read one complete form from `input`.
pub fn parse(input: &str) -> Result<Expr, reader::Error> {
    reader::read_str(input)
}

/// Evaluate `expr` against `env`. The environment is always passed
/// explicitly; build one with [`standard_environment`] and reuse it.
pub fn evaluate(expr: &Expr, env: &Environment) -> evaluator::Result {
    evaluator::eval(expr, env)
}

/// Build the table of built-in procedures (`+` and `-`).
pub fn standard_environment() -> Environment {
    Environment::default()
}

use crate::{environment, evaluator, printer, reader, Expr};
use std::fmt;

pub type Result = std::result::Result<Expr, Error>;

#[derive(Debug)]
pub enum Error {
    Read(reader::Error),
    Eval(evaluator::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(e) => write!(f, "read error: {}", e),
            Error::Eval(e) => write!(f, "eval error: {}", e),
        }
    }
}

pub fn read(line: &str) -> Result {
    reader::read_str(line).map_err(Error::Read)
}

pub fn eval(expr: &Expr, env: &environment::Environment) -> Result {
    evaluator::eval(expr, env).map_err(Error::Eval)
}

/// read-eval-print one line, rendering either the value or the error.
pub fn rep(line: &str, env: &environment::Environment) -> String {
    match read(line).and_then(|expr| eval(&expr, env)) {
        Ok(value) => printer::pr_str(&value),
        Err(e) => e.to_string(),
    }
}

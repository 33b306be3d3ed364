extern crate derive_more;
use crate::evaluator;
use crate::printer;
use derive_more::Deref;
use std::fmt;
use std::fmt::Formatter;

pub type Number = f64;

#[derive(Deref, Debug, PartialEq, Eq, Hash, Clone)]
pub struct Symbol(pub String);

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A built-in procedure. Only the operation table mints these; source
/// text can never parse into one.
pub struct PrimitiveFn {
    pub name: &'static str,
    pub fn_ptr: fn(&[Expr]) -> evaluator::Result,
}

impl fmt::Debug for PrimitiveFn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "primitive function #<{}>", self.name)
    }
}

/// The one recursive value type: everything read from source or produced
/// by evaluation is an `Expr`.
#[derive(Debug, Clone)]
pub enum Expr {
    Number(Number),
    Symbol(Symbol),
    List(Vec<Expr>),
    Primitive(&'static PrimitiveFn),
}

#[derive(Debug, PartialEq)]
pub enum TypeMismatch {
    NotANumber,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeMismatch::NotANumber => write!(f, "expected a number"),
        }
    }
}

impl Expr {
    pub(crate) fn as_number(&self) -> Result<Number, TypeMismatch> {
        match self {
            Expr::Number(x) => Ok(*x),
            _ => Err(TypeMismatch::NotANumber),
        }
    }

    pub(crate) fn new_symbol(name: &str) -> Self {
        Self::Symbol(Symbol(name.into()))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printer::pr_str(self))
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        use Expr::*;
        match (self, other) {
            (Number(x), Number(y)) => x == y,
            (Symbol(x), Symbol(y)) => x == y,
            (List(xs), List(ys)) => xs == ys,
            (Primitive(f), Primitive(g)) => std::ptr::eq(*f, *g),
            (_, _) => false,
        }
    }
}

use crate::environment::{Environment, UnknownSymbol};
use crate::types::{Expr, PrimitiveFn, TypeMismatch};
use itertools::Itertools;
use std::fmt;

pub type Result<T = Expr> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnknownSymbol(UnknownSymbol),
    /// A call form with nothing in operator position.
    EmptyCallForm,
    /// A procedure value handed to eval as a standalone form.
    BareProcedure,
    NotCallable,
    TypeMismatch(TypeMismatch),
    /// `-` called with no arguments: there is no first element to
    /// subtract from.
    MissingMinuend,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSymbol(e) => write!(f, "{}", e),
            Error::EmptyCallForm => write!(f, "expected non-empty list"),
            Error::BareProcedure => write!(f, "unexpected form"),
            Error::NotCallable => write!(f, "first form must be a procedure"),
            Error::TypeMismatch(e) => write!(f, "{}", e),
            Error::MissingMinuend => {
                write!(f, "expected a first element in list to be number")
            }
        }
    }
}

impl From<TypeMismatch> for Error {
    fn from(t: TypeMismatch) -> Self {
        Self::TypeMismatch(t)
    }
}

/// Walk one expression tree against `env`. Strictly eager and
/// left-to-right; every non-empty list is a procedure call, there are no
/// special forms.
pub fn eval(expr: &Expr, env: &Environment) -> Result {
    log::trace!("eval {:?}", expr);
    match expr {
        Expr::Symbol(s) => env.fetch(s).map_err(Error::UnknownSymbol),
        Expr::Number(_) => Ok(expr.clone()),
        Expr::Primitive(_) => Err(Error::BareProcedure),
        Expr::List(forms) => {
            let (operator, arg_forms) = forms.split_first().ok_or(Error::EmptyCallForm)?;
            match eval(operator, env)? {
                Expr::Primitive(func) => {
                    let args = evaluate_sequence_elementwise(arg_forms, env)?;
                    call_primitive(func, &args)
                }
                _ => Err(Error::NotCallable),
            }
        }
    }
}

pub fn evaluate_sequence_elementwise(
    forms: &[Expr],
    env: &Environment,
) -> std::result::Result<Vec<Expr>, Error> {
    forms.iter().map(|form| eval(form, env)).collect()
}

fn call_primitive(func: &'static PrimitiveFn, args: &[Expr]) -> Result {
    log::trace!("call {} with ({})", func.name, args.iter().join(" "));
    let result = (func.fn_ptr)(args);
    match &result {
        Ok(value) => log::trace!("call to {} resulted in {}", func.name, value),
        Err(e) => log::trace!("call to {} failed: {}", func.name, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::parse;

    fn run(src: &str) -> Result {
        let env = Environment::default();
        eval(&parse(src).unwrap(), &env)
    }

    #[test]
    fn numbers_are_self_evaluating() {
        assert_eq!(run("7"), Ok(Expr::Number(7.0)));
    }

    #[test]
    fn lookup_yields_the_callable_uninvoked() {
        match run("+").unwrap() {
            Expr::Primitive(func) => assert_eq!(func.name, "+"),
            other => panic!("lookup of + produced {:?}", other),
        }
    }

    #[test]
    fn bare_procedure_is_not_a_form() {
        let env = Environment::default();
        let plus = run("+").unwrap();
        assert_eq!(eval(&plus, &env), Err(Error::BareProcedure));
    }

    #[test]
    fn nested_arithmetic() {
        assert_eq!(run("(+ 10 5 (- 10 3 3))"), Ok(Expr::Number(19.0)));
        assert_eq!(run("(- 10 3 3)"), Ok(Expr::Number(4.0)));
    }

    #[test]
    fn unbound_operator_fails_lookup() {
        assert_eq!(
            run("(foo 1 2)"),
            Err(Error::UnknownSymbol(UnknownSymbol("foo".into())))
        );
    }

    #[test]
    fn unbound_argument_fails_before_coercion() {
        // foo never reaches + as a value: its lookup fails first.
        assert_eq!(
            run("(+ 1 foo)"),
            Err(Error::UnknownSymbol(UnknownSymbol("foo".into())))
        );
    }

    #[test]
    fn procedure_argument_is_a_type_error() {
        assert_eq!(
            run("(+ 1 -)"),
            Err(Error::TypeMismatch(TypeMismatch::NotANumber))
        );
    }

    #[test]
    fn empty_call_form_is_malformed() {
        assert_eq!(run("()"), Err(Error::EmptyCallForm));
    }

    #[test]
    fn number_in_operator_position_is_not_callable() {
        assert_eq!(run("(1 2 3)"), Err(Error::NotCallable));
    }

    #[test]
    fn calls_in_argument_position_evaluate_first() {
        assert_eq!(
            run("(+ 1 (- 2))"),
            Ok(Expr::Number(3.0)),
            "a call in argument position evaluates first"
        );
        assert_eq!(
            run("(- (+) 1)"),
            Ok(Expr::Number(-1.0)),
            "even the unspecified zero-argument sum folds to the identity"
        );
    }
}

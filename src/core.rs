use crate::evaluator;
use crate::types::{Expr, Number, PrimitiveFn};
use std::collections::HashMap;

fn grab_numbers(args: &[Expr]) -> evaluator::Result<Vec<Number>> {
    let coerced: Result<Vec<_>, _> = args.iter().map(|arg| arg.as_number()).collect();
    coerced.map_err(evaluator::Error::TypeMismatch)
}

const SUM: PrimitiveFn = PrimitiveFn {
    name: "+",
    fn_ptr: sum_,
};

fn sum_(args: &[Expr]) -> evaluator::Result {
    let value = grab_numbers(args)?.iter().fold(0.0, |acc, x| acc + x);
    Ok(Expr::Number(value))
}

const SUB: PrimitiveFn = PrimitiveFn {
    name: "-",
    fn_ptr: sub_,
};

fn sub_(args: &[Expr]) -> evaluator::Result {
    let numbers = grab_numbers(args)?;
    // A lone minuend subtracts nothing: the rest sums to zero.
    let (first, rest) = numbers
        .split_first()
        .ok_or(evaluator::Error::MissingMinuend)?;
    let value = first - rest.iter().sum::<Number>();
    Ok(Expr::Number(value))
}

static BUILTINS: [PrimitiveFn; 2] = [SUM, SUB];

pub(crate) type Namespace = HashMap<&'static str, &'static PrimitiveFn>;

lazy_static! {
    pub(crate) static ref CORE: Namespace = {
        let mut map = Namespace::new();
        for func in BUILTINS.iter() {
            map.insert(func.name, func);
        }
        map
    };
}

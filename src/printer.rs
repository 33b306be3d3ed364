use crate::types::Expr;
use itertools::Itertools;

pub fn pr_str(expr: &Expr) -> String {
    match expr {
        Expr::List(elements) => format!("({})", elements.iter().map(pr_str).join(" ")),
        Expr::Number(value) => value.to_string(),
        Expr::Symbol(name) => name.to_string(),
        Expr::Primitive(func) => format!("#<{}>", func.name),
    }
}

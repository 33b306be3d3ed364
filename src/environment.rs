use crate::core;
use crate::types::{Expr, Symbol};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected symbol '{}'", self.0)
    }
}

/// One flat table from symbol to value. Built once with the built-in
/// procedures and read-only from then on: this language has no binding
/// forms, so nothing is ever inserted after construction.
pub struct Environment {
    bindings: HashMap<Symbol, Expr>,
}

impl Environment {
    pub fn get(&self, key: &Symbol) -> Option<&Expr> {
        self.bindings.get(key)
    }

    pub fn fetch(&self, key: &Symbol) -> Result<Expr, UnknownSymbol> {
        self.get(key)
            .cloned()
            .ok_or_else(|| UnknownSymbol(key.0.clone()))
    }
}

impl Default for Environment {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for (&name, &func) in core::CORE.iter() {
            bindings.insert(Symbol(name.into()), Expr::Primitive(func));
        }
        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_bound() {
        let env = Environment::default();
        for name in &["+", "-"] {
            assert!(env.get(&Symbol((*name).into())).is_some(), "{}", name);
        }
    }

    #[test]
    fn missing_names_report_the_symbol() {
        let env = Environment::default();
        let err = env.fetch(&Symbol("frobnicate".into())).unwrap_err();
        assert_eq!(err, UnknownSymbol("frobnicate".into()));
    }
}

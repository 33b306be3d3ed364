use crate::tokens::{tokenize, Token};
use crate::types::Expr;
use std::fmt;
use std::iter::Peekable;
use std::slice;

type Reader<'a> = Peekable<slice::Iter<'a, Token<'a>>>;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// The token sequence ran out: either the input was empty or a list
    /// was still open.
    NoMoreTokens,
    /// A `)` turned up where a new form should begin.
    UnexpectedClose,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoMoreTokens => write!(f, "unexpected EOF"),
            Error::UnexpectedClose => write!(f, "unexpected ')'"),
        }
    }
}

/// Tokenize `input` and read the first complete form from the front.
pub fn read_str(input: &str) -> Result<Expr, Error> {
    let tokens = tokenize(input);
    let mut reader = tokens.iter().peekable();
    read_form(&mut reader)
}

fn read_form(reader: &mut Reader) -> Result<Expr, Error> {
    match reader.next() {
        Some(Token::OpenParen) => read_list(reader),
        Some(Token::CloseParen) => Err(Error::UnexpectedClose),
        Some(Token::Atom(chars)) => Ok(read_atom(chars)),
        None => Err(Error::NoMoreTokens),
    }
}

fn read_list(reader: &mut Reader) -> Result<Expr, Error> {
    let mut elements = Vec::new();
    loop {
        match reader.peek() {
            Some(Token::CloseParen) => {
                reader.next();
                return Ok(Expr::List(elements));
            }
            // An unterminated list surfaces as NoMoreTokens from the
            // recursive call, not as a separate error kind.
            Some(_) => elements.push(read_form(reader)?),
            None => return Err(Error::NoMoreTokens),
        }
    }
}

/// Classify one atom token: the host's numeric conversion decides, and
/// anything it rejects is a symbol, verbatim.
fn read_atom(chars: &str) -> Expr {
    match chars.parse::<f64>() {
        Ok(value) => Expr::Number(value),
        Err(_) => Expr::new_symbol(chars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn classifies_numbers_and_symbols() {
        assert_eq!(read_atom("1"), Expr::Number(1.0));
        assert_eq!(read_atom("-3.5"), Expr::Number(-3.5));
        assert_eq!(read_atom("+"), Expr::new_symbol("+"));
        assert_eq!(read_atom("foo"), Expr::new_symbol("foo"));
        assert_eq!(read_atom("12abc"), Expr::new_symbol("12abc"));
    }

    #[test]
    fn symbol_survives_round_trip() {
        let expr = read_str("foo-bar!?").unwrap();
        match &expr {
            Expr::Symbol(Symbol(name)) => assert_eq!(name, "foo-bar!?"),
            other => panic!("expected a symbol, read {:?}", other),
        }
        assert_eq!(expr.to_string(), "foo-bar!?");
    }

    #[test]
    fn bare_atom_is_a_valid_form() {
        assert_eq!(read_str("42"), Ok(Expr::Number(42.0)));
    }

    #[test]
    fn reads_nested_lists() {
        let expr = read_str("(+ 10 5 (- 10 3 3))").unwrap();
        assert_eq!(
            expr,
            Expr::List(vec![
                Expr::new_symbol("+"),
                Expr::Number(10.0),
                Expr::Number(5.0),
                Expr::List(vec![
                    Expr::new_symbol("-"),
                    Expr::Number(10.0),
                    Expr::Number(3.0),
                    Expr::Number(3.0),
                ]),
            ])
        );
    }

    #[test]
    fn empty_input_is_end_of_input() {
        assert_eq!(read_str(""), Err(Error::NoMoreTokens));
        assert_eq!(read_str("   "), Err(Error::NoMoreTokens));
    }

    #[test]
    fn unterminated_list_is_end_of_input() {
        assert_eq!(read_str("("), Err(Error::NoMoreTokens));
        assert_eq!(read_str("(+ 1 (2 3)"), Err(Error::NoMoreTokens));
    }

    #[test]
    fn stray_close_paren_is_rejected() {
        assert_eq!(read_str(")"), Err(Error::UnexpectedClose));
    }

    #[test]
    fn empty_list_parses() {
        assert_eq!(read_str("()"), Ok(Expr::List(Vec::new())));
    }
}

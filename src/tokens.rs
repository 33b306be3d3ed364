use regex::Regex;

#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    OpenParen,
    CloseParen,
    Atom(&'a str),
}

/// Split a line of source into tokens. Parentheses delimit themselves;
/// any other run of non-whitespace characters is one atom, verbatim.
/// There is no quoting, escaping or comment syntax, so this cannot fail.
pub fn tokenize(input: &str) -> Vec<Token> {
    lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(
            r#"(?x)
                [()]          # parens are tokens even with no space around them
                |[^\s()]+     # anything else: one or more plain characters
            "#
        )
        .unwrap();
    }
    TOKEN_RE
        .find_iter(input)
        .map(|m| match m.as_str() {
            "(" => Token::OpenParen,
            ")" => Token::CloseParen,
            chars => Token::Atom(chars),
        })
        .collect()
}

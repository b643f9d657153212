//! Implements a parser for formula lines.
//!
//! The module provides a parser for expressions by implementing [`FromStr`] for [`Expr`].
//! The parser is often used implicitly through [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into an [`Expr`]:
//! ```rust
//! use normalizer_fol::syntax::Expr;
//!
//! let expr: Expr = "equivalent(p, not q) and r".parse().unwrap();
//!
//! assert_eq!("(equivalent(p, (not q)) and r)", expr.to_string());
//! ```
//!
//! Infix and call-form implications parse to the same tree:
//! ```rust
//! use normalizer_fol::syntax::Expr;
//!
//! let infix: Expr = "p implies q".parse().unwrap();
//! let call: Expr = "implies(p, q)".parse().unwrap();
//!
//! assert_eq!(infix, call);
//! ```
//!
//! [`Expr`]: crate::syntax::Expr
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::Expr;
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Comma,
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Ident,
    Number,
    Str,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        match s.as_ref() {
            "_COMMA_" => Self::Comma,
            "_LPAREN_" => Self::LParen,
            "_RPAREN_" => Self::RParen,
            "_NOT_" => Self::Not,
            "_AND_" => Self::And,
            "_OR_" => Self::Or,
            "_IMPLIES_" => Self::Implies,
            "_IDENT_" => Self::Ident,
            "_NUMBER_" => Self::Number,
            "_STRING_" => Self::Str,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::Comma => "`,`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Not => "`not`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::Implies => "`implies`",
            Self::Ident => "`identifier`",
            Self::Number => "`number`",
            Self::Str => "`quoted string`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }

    /// Returns the position in the source where the receiver was detected.
    pub fn position(&self) -> &Position {
        match self {
            Self::UnrecognizedToken { position, .. }
            | Self::InvalidToken { position }
            | Self::UnrecognizedEOF { position, .. }
            | Self::ExtraToken { position, .. } => position,
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let line = self
            .lines
            .iter()
            .position(|l| location < *l)
            .unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString>(&self, error: ParseError<usize, T, Error>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => error,
        }
    }
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::ExprParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, c, f,
        syntax::{BoolKind, Expr},
        v,
    };

    fn parse(s: &str) -> Expr {
        s.parse().unwrap()
    }

    #[test]
    fn var() {
        assert_eq!(grammar::VarParser::new().parse("p").unwrap(), v!(p));
        assert_eq!(grammar::VarParser::new().parse("   p").unwrap(), v!(p));
        assert_eq!(grammar::VarParser::new().parse("_p1").unwrap(), v!(_p1));
        assert_eq!(grammar::VarParser::new().parse("P_q").unwrap(), v!(P_q));
        assert_eq!(
            grammar::VarParser::new().parse("nothing").unwrap(),
            v!(nothing)
        );
        assert_eq!(grammar::VarParser::new().parse("android").unwrap(), v!(android));

        assert!(grammar::VarParser::new().parse("not").is_err());
        assert!(grammar::VarParser::new().parse("and").is_err());
        assert!(grammar::VarParser::new().parse("implies").is_err());
        assert!(grammar::VarParser::new().parse("1p").is_err());
        assert!(grammar::VarParser::new().parse("p!").is_err());
    }

    #[test]
    fn func() {
        assert_eq!(grammar::FuncParser::new().parse("f").unwrap(), f!(f));
        assert_eq!(grammar::FuncParser::new().parse("implies").unwrap(), f!(implies));
        assert_eq!(
            grammar::FuncParser::new().parse("equivalent").unwrap(),
            f!(equivalent)
        );

        assert!(grammar::FuncParser::new().parse("or").is_err());
        assert!(grammar::FuncParser::new().parse("'f'").is_err());
    }

    #[test]
    fn r#const() {
        assert_eq!(grammar::ConstParser::new().parse("42").unwrap(), c!("42"));
        assert_eq!(grammar::ConstParser::new().parse("'a'").unwrap(), c!("'a'"));
        assert_eq!(
            grammar::ConstParser::new().parse(r#""a b""#).unwrap(),
            c!(r#""a b""#)
        );

        assert!(grammar::ConstParser::new().parse("a").is_err());
        assert!(grammar::ConstParser::new().parse("'a").is_err());
    }

    #[test]
    fn atoms() {
        assert_debug_string!("p", parse("p"));
        assert_debug_string!("p", parse("((p))"));
        assert_debug_string!("7", parse("7"));
        assert_debug_string!("f()", parse("f()"));
        assert_debug_string!("f()", parse("f(   )"));
        assert_debug_string!("f(p, q)", parse("f(p,q)"));
        assert_debug_string!("f(p, q)", parse("f(p, q,)"));
        assert_debug_string!("f(p, g(q, 'c'))", parse("f (p , g(q,'c'))"));
        assert_debug_string!("equivalent(p, q)", parse("equivalent(p, q)"));
    }

    #[test]
    fn precedence() {
        assert_debug_string!("((not p) and q)", parse("not p and q"));
        assert_debug_string!("(not (p and q))", parse("not (p and q)"));
        assert_debug_string!("(p or (q and r))", parse("p or q and r"));
        assert_debug_string!("((p or q) and r)", parse("(p or q) and r"));
        assert_debug_string!("(not (not p))", parse("not not p"));
        assert_debug_string!("implies((p and q), r)", parse("p and q implies r"));
        assert_debug_string!("implies(p, (q or r))", parse("p implies q or r"));
    }

    #[test]
    fn associativity() {
        {
            let expr = parse("p and q and r");
            assert_debug_string!("(p and q and r)", expr);
            match expr {
                Expr::BoolOp(op) => {
                    assert_eq!(BoolKind::And, op.kind());
                    assert_eq!(3, op.operands().len());
                }
                _ => panic!("expecting a conjunction"),
            }
        }
        assert_debug_string!("((p and q) and r)", parse("(p and q) and r"));
        assert_debug_string!("(p or q or (not r))", parse("p or q or not r"));
        assert_debug_string!("implies(implies(p, q), r)", parse("p implies q implies r"));
        assert_debug_string!("implies(p, implies(q, r))", parse("p implies (q implies r)"));
    }

    #[test]
    fn implications() {
        assert_eq!(parse("p implies q"), parse("implies(p, q)"));
        assert_eq!(parse("(p implies q)"), parse("implies(p,q)"));
        assert_debug_string!(
            "implies(implies(p, q), r)",
            parse("implies(implies(p, q), r)")
        );
        assert_debug_string!("(not implies(p, q))", parse("not (p implies q)"));
    }

    #[test]
    fn failures() {
        assert!("".parse::<Expr>().is_err());
        assert!("(p and q".parse::<Expr>().is_err());
        assert!("p and q)".parse::<Expr>().is_err());
        assert!("p and".parse::<Expr>().is_err());
        assert!("p q".parse::<Expr>().is_err());
        assert!("axiom p or q".parse::<Expr>().is_err());
        assert!("p & q".parse::<Expr>().is_err());
        assert!("f(,)".parse::<Expr>().is_err());
        assert!("implies p".parse::<Expr>().is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::UnrecognizedEOF {
                position: Position { line: 1, column: 6 },
                expected: vec![
                    TokenType::LParen,
                    TokenType::Not,
                    TokenType::Implies,
                    TokenType::Ident,
                    TokenType::Number,
                    TokenType::Str,
                ],
            }
            .to_string(),
            "unexpected end of input at line 1, column 6; expecting `(`, `not`, `implies`, `identifier`, `number`, or `quoted string`"
        );
        {
            let err = "p q".parse::<Expr>().unwrap_err();
            assert_eq!(&Position { line: 1, column: 3 }, err.position());
            match err {
                Error::UnrecognizedToken { found, .. } => assert_eq!("q", found),
                _ => panic!("expecting an unrecognized token"),
            }
        }
        {
            let err = "p and ?".parse::<Expr>().unwrap_err();
            assert_eq!(&Position { line: 1, column: 7 }, err.position());
        }
    }
}

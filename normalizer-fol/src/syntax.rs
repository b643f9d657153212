/*! Defines an abstract syntax tree (AST) for formula lines: variables, literal constants,
negations, n-ary conjunctions and disjunctions, and call-style applications. */

mod expr;
mod macros;
mod symbol;

pub use expr::{BoolKind, BoolOp, Call, Expr, Not};
pub use symbol::{Const, Func, Var};

/// Is the name of the call that the equivalence expansion rewrites.
pub const EQUIVALENT: &str = "equivalent";

/// Is the name of the call (and the infix keyword) for implications.
pub const IMPLIES: &str = "implies";

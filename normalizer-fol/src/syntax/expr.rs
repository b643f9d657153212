/*! Defines the expression tree and its connectives. */
use super::{Const, Func, Var, IMPLIES};
use itertools::Itertools;
use std::fmt;

/// Represents the negation of an expression.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Not {
    operand: Expr,
}

impl Not {
    /// Wraps `operand` in a new instance of [`Not`].
    pub fn new(operand: Expr) -> Self {
        Self { operand }
    }

    /// Returns the expression wrapped in the receiver.
    #[inline(always)]
    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

/// Is the kind of an n-ary boolean connective.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BoolKind {
    And,
    Or,
}

impl BoolKind {
    /// Returns the keyword of the connective.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for BoolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Represents a conjunction or a disjunction of two or more expressions.
///
/// **Note**: the order of operands is preserved; it has no meaning for the connective but
/// it is visible in the rendered text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoolOp {
    kind: BoolKind,
    operands: Vec<Expr>,
}

impl BoolOp {
    /// Returns the connective of the receiver.
    #[inline(always)]
    pub fn kind(&self) -> BoolKind {
        self.kind
    }

    /// Returns the operands of the receiver, at least two.
    #[inline(always)]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    /// Returns a connective of the same kind over the images of the receiver's operands
    /// under `f`, or the first error that `f` returns.
    pub fn try_map<E, F>(&self, f: F) -> Result<Self, E>
    where
        F: FnMut(&Expr) -> Result<Expr, E>,
    {
        Ok(Self {
            kind: self.kind,
            operands: self.operands.iter().map(f).collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Represents a call-style application of a named function on a list of arguments.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Call {
    function: Func,
    args: Vec<Expr>,
}

impl Call {
    /// Applies `function` on `args`.
    pub fn new(function: Func, args: Vec<Expr>) -> Self {
        Self { function, args }
    }

    /// Returns the function name of the receiver.
    #[inline(always)]
    pub fn function(&self) -> &Func {
        &self.function
    }

    /// Returns the arguments of the receiver.
    #[inline(always)]
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

/// Is an abstract syntax tree (AST) for a single formula line.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Is a bare identifier, wrapping a [`Var`].
    Var(Var),

    /// Is a literal, wrapping a [`Const`].
    Const(Const),

    /// Is the negation of an expression, wrapping a [`Not`].
    Not(Box<Not>),

    /// Is an n-ary conjunction or disjunction, wrapping a [`BoolOp`].
    BoolOp(BoolOp),

    /// Is a call-style application, wrapping a [`Call`].
    ///
    /// **Note**: infix implications are parsed as calls to `implies`.
    Call(Call),
}

impl From<Var> for Expr {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Const> for Expr {
    fn from(value: Const) -> Self {
        Self::Const(value)
    }
}

impl From<Not> for Expr {
    fn from(value: Not) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<BoolOp> for Expr {
    fn from(value: BoolOp) -> Self {
        Self::BoolOp(value)
    }
}

impl From<Call> for Expr {
    fn from(value: Call) -> Self {
        Self::Call(value)
    }
}

impl Expr {
    /// Returns the negation of `operand`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `expr.not()` intentionally:
    #[inline(always)]
    pub fn not(operand: Self) -> Self {
        Not::new(operand).into()
    }

    /// Returns `first` if `rest` is empty; otherwise, returns a single connective of `kind`
    /// over `first` followed by `rest`.
    pub fn join(kind: BoolKind, first: Self, rest: Vec<Self>) -> Self {
        if rest.is_empty() {
            first
        } else {
            let mut operands = Vec::with_capacity(rest.len() + 1);
            operands.push(first);
            operands.extend(rest);
            BoolOp { kind, operands }.into()
        }
    }

    /// Returns a conjunction of the receiver and `expr`.
    #[inline(always)]
    pub fn and(self, expr: Self) -> Self {
        Self::join(BoolKind::And, self, vec![expr])
    }

    /// Returns a disjunction of the receiver and `expr`.
    #[inline(always)]
    pub fn or(self, expr: Self) -> Self {
        Self::join(BoolKind::Or, self, vec![expr])
    }

    /// Returns an implication with the receiver as premise and `expr` as consequence.
    #[inline(always)]
    pub fn implies(self, expr: Self) -> Self {
        Call::new(Func::from(IMPLIES), vec![self, expr]).into()
    }

    /// Returns an application of `function` on `args`.
    #[inline(always)]
    pub fn call<F: Into<Func>>(function: F, args: Vec<Self>) -> Self {
        Call::new(function.into(), args).into()
    }
}

// Renders every call, `implies` and `equivalent` included, in call form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var(this) => this.fmt(f),
            Self::Const(this) => this.fmt(f),
            Self::Not(this) => write!(f, "(not {})", this.operand),
            Self::BoolOp(this) => {
                let sep = format!(" {} ", this.kind);
                write!(f, "({})", this.operands.iter().join(&sep))
            }
            Self::Call(this) => write!(f, "{}({})", this.function, this.args.iter().join(", ")),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, f, v};

    fn p() -> Expr {
        v!(p).into()
    }

    fn q() -> Expr {
        v!(q).into()
    }

    fn r() -> Expr {
        v!(r).into()
    }

    #[test]
    fn test_join() {
        assert_eq!(p(), Expr::join(BoolKind::And, p(), vec![]));
        {
            let expr = Expr::join(BoolKind::Or, p(), vec![q(), r()]);
            match &expr {
                Expr::BoolOp(op) => {
                    assert_eq!(BoolKind::Or, op.kind());
                    assert_eq!(&[p(), q(), r()], op.operands());
                }
                _ => panic!("expecting a disjunction"),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_debug_string!("p", p());
        assert_debug_string!("'p'", Expr::from(Const::from("'p'")));
        assert_debug_string!("42", Expr::from(Const::from("42")));
        assert_debug_string!("(not p)", Expr::not(p()));
        assert_eq!(Expr::from(Not::new(p())), Expr::not(p()));
        assert_debug_string!("(not (not p))", Expr::not(Expr::not(p())));
        assert_debug_string!("(p and q)", p().and(q()));
        assert_debug_string!("((p or q) and r)", p().or(q()).and(r()));
        assert_debug_string!(
            "(p and q and r)",
            Expr::join(BoolKind::And, p(), vec![q(), r()])
        );
        assert_debug_string!("implies(p, q)", p().implies(q()));
        assert_debug_string!("f()", Expr::call(f!(f), vec![]));
        assert_debug_string!(
            "equivalent(p, (not q))",
            Expr::call("equivalent", vec![p(), Expr::not(q())])
        );
    }
}

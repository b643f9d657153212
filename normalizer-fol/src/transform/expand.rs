/*! Implements the expansion of `equivalent(a, b)` calls into
`((a implies b) and (b implies a))`. */
use super::Error;
use crate::syntax::{Call, Expr, EQUIVALENT, IMPLIES};

/// Is the trait of trees whose `equivalent` calls can be expanded.
pub trait Expand {
    /// Returns a new tree where every call to `equivalent` is replaced by the conjunction of
    /// the two implications between its arguments. The arguments are expanded before the
    /// call that contains them, so nested equivalences are resolved inside-out.
    ///
    /// **Example**:
    /// ```rust
    /// # use normalizer_fol::syntax::Expr;
    /// use normalizer_fol::transform::Expand;
    ///
    /// let expr: Expr = "not equivalent(p, q)".parse().unwrap();
    /// assert_eq!(
    ///     "(not (implies(p, q) and implies(q, p)))",
    ///     expr.expand().unwrap().to_string(),
    /// );
    /// ```
    fn expand(&self) -> Result<Expr, Error>;
}

impl Expand for Expr {
    fn expand(&self) -> Result<Expr, Error> {
        expand(self)
    }
}

fn expand(expr: &Expr) -> Result<Expr, Error> {
    match expr {
        Expr::Var(_) | Expr::Const(_) => Ok(expr.clone()),
        Expr::Not(this) => Ok(Expr::not(expand(this.operand())?)),
        Expr::BoolOp(this) => Ok(this.try_map(expand)?.into()),
        Expr::Call(this) => {
            let args = this
                .args()
                .iter()
                .map(expand)
                .collect::<Result<Vec<_>, _>>()?;
            let function = this.function();

            if function.is(EQUIVALENT) {
                let (left, right) = binary(this, args)?;
                Ok(left.clone().implies(right.clone()).and(right.implies(left)))
            } else if function.is(IMPLIES) {
                let (premise, consequence) = binary(this, args)?;
                Ok(premise.implies(consequence))
            } else {
                Ok(Expr::call(function.clone(), args))
            }
        }
    }
}

// `args` are the expanded arguments of `call`.
fn binary(call: &Call, args: Vec<Expr>) -> Result<(Expr, Expr), Error> {
    let found = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        _ => Err(Error::Arity {
            function: call.function().to_string(),
            found,
        }),
    }
}

/*! Implements the canonical rendering of expanded trees: fully parenthesized, with word
operators and infix implications. */
use super::Error;
use crate::syntax::{Expr, EQUIVALENT, IMPLIES};
use itertools::Itertools;

/// Is the trait of trees that can be rendered in canonical form.
pub trait ToCanonical {
    /// Renders the receiver in canonical form. Negations and connectives are always wrapped
    /// in parentheses, calls to `implies` are rendered infix and other calls are rendered
    /// in call form.
    ///
    /// **Note**: the receiver is expected to be expanded; a remaining `equivalent` call, or
    /// an `implies` call with other than two arguments, is an error.
    ///
    /// **Example**:
    /// ```rust
    /// # use normalizer_fol::syntax::Expr;
    /// use normalizer_fol::transform::{Expand, ToCanonical};
    ///
    /// let expr: Expr = "equivalent(p, q)".parse().unwrap();
    /// assert_eq!(
    ///     "((p implies q) and (q implies p))",
    ///     expr.expand().unwrap().canonical().unwrap(),
    /// );
    /// ```
    fn canonical(&self) -> Result<String, Error>;
}

impl ToCanonical for Expr {
    fn canonical(&self) -> Result<String, Error> {
        canonical(self)
    }
}

fn canonical(expr: &Expr) -> Result<String, Error> {
    match expr {
        Expr::Var(this) => Ok(this.to_string()),
        Expr::Const(this) => Ok(this.to_string()),
        Expr::Not(this) => Ok(format!("(not {})", canonical(this.operand())?)),
        Expr::BoolOp(this) => {
            let operands = this
                .operands()
                .iter()
                .map(canonical)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("({})", operands.join(format!(" {} ", this.kind()).as_str())))
        }
        Expr::Call(this) => {
            let function = this.function();
            if function.is(EQUIVALENT) {
                return Err(Error::Serialization {
                    node: expr.to_string(),
                    reason: "equivalence is not expanded".into(),
                });
            }

            let args = this
                .args()
                .iter()
                .map(canonical)
                .collect::<Result<Vec<_>, _>>()?;
            if function.is(IMPLIES) {
                match args.as_slice() {
                    [premise, consequence] => Ok(format!("({} implies {})", premise, consequence)),
                    _ => Err(Error::Serialization {
                        node: expr.to_string(),
                        reason: format!("implication with {} arguments", args.len()),
                    }),
                }
            } else {
                Ok(format!("{}({})", function, args.iter().join(", ")))
            }
        }
    }
}

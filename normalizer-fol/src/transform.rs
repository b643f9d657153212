/*! Implements the tree transformations of the pipeline: expanding `equivalent` calls and
rendering an expanded tree into canonical text. */
mod canonical;
mod expand;

pub use canonical::ToCanonical;
pub use expand::Expand;

use thiserror::Error;

/// Is the type of errors arising from malformed trees when transforming them.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when `equivalent` or `implies` is applied on other than two arguments.
    #[error("`{function}` expects 2 arguments, found {found}")]
    Arity { function: String, found: usize },

    /// Is returned when a tree cannot be rendered in canonical form.
    #[error("cannot serialize `{node}`: {reason}")]
    Serialization { node: String, reason: String },
}

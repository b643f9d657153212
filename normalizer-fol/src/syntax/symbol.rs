/*! Defines the symbols ['Var'], ['Func'] and ['Const'] for making expressions.

['Var']: crate::syntax::Var
['Func']: crate::syntax::Func
['Const']: crate::syntax::Const
*/
use std::fmt;

/// Represents a variable, that is a bare identifier in a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub String);

impl<S: Into<String>> From<S> for Var {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents the name of a function in a call-style application.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Func(pub String);

impl Func {
    /// Returns true if the receiver is named `name`.
    #[inline(always)]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl<S: Into<String>> From<S> for Func {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a literal constant, a number or a quoted string.
///
/// **Note**: the constant keeps its source text, quotes included, so that rendering it
/// and parsing it again yields the same constant.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Const(pub String);

impl<S: Into<String>> From<S> for Const {
    fn from(text: S) -> Self {
        Self(text.into())
    }
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Const {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

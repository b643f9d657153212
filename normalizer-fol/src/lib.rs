/*! Provides a set of tools for parsing formula lines into expression trees, expanding their
`equivalent` calls and rendering them back into a canonical word-operator form. */
#[macro_use]
extern crate lalrpop_util;

pub mod parser;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod transform;

/*! Implements the passes of the pipeline that work on plain text rather than on trees. */
mod implies;
mod stopwords;
mod symbols;

pub use implies::Flattener;
pub use stopwords::Stopwords;
pub use symbols::translate_symbols;

/// Removes every `.` from `line`.
pub fn strip_dots(line: &str) -> String {
    line.replace('.', "")
}

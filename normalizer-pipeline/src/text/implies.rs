use regex::Regex;

/// Matches `implies(<arg1>, <arg2>)` where the first argument runs up to the first comma
/// and the second up to the first closing parenthesis.
const IMPLIES_CALL: &str = r"implies\(([^,]+),\s*([^)]+)\)";

/// Rewrites call-form implications into infix form.
///
/// **Note**: arguments are delimited textually, not by nesting depth. An argument that
/// contains a comma or a closing parenthesis of its own (for example, a call with two
/// arguments in the premise) is split at that character, and the result is not
/// well-formed. Such inputs should go through the tree stage, which renders implications
/// infix.
pub struct Flattener {
    pattern: Regex,
}

impl Flattener {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(IMPLIES_CALL)?,
        })
    }

    /// Rewrites `implies(a, b)` into `(a implies b)` until no call-form implication is
    /// left in `line`.
    ///
    /// **Example**:
    /// ```rust
    /// use normalizer_pipeline::text::Flattener;
    ///
    /// let flattener = Flattener::new().unwrap();
    /// assert_eq!(
    ///     "((a implies b) implies c)",
    ///     flattener.flatten("implies(implies(a, b), c)"),
    /// );
    /// ```
    pub fn flatten(&self, line: &str) -> String {
        let mut result = line.to_owned();
        // every rewrite removes one `implies(`
        while self.pattern.is_match(&result) {
            result = self
                .pattern
                .replace_all(&result, "(${1} implies ${2})")
                .into_owned();
        }
        result
    }
}

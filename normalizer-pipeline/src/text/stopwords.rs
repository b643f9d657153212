use itertools::Itertools;
use regex::Regex;

/// Removes configured words from text, matching whole words without regard to case.
#[derive(Clone, Debug)]
pub struct Stopwords {
    pattern: Option<Regex>,
}

impl Stopwords {
    /// Compiles `words` into a single pattern. Empty words are ignored.
    pub fn new<I, S>(words: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives = words
            .into_iter()
            .filter(|w| !w.as_ref().is_empty())
            .map(|w| regex::escape(w.as_ref()))
            .join("|");

        let pattern = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives))?)
        };
        Ok(Self { pattern })
    }

    /// Deletes every whole-word occurrence of a stopword in `line`, then deletes every `.`
    /// and `,`. Whitespace around deleted words is left as it is.
    ///
    /// **Example**:
    /// ```rust
    /// use normalizer_pipeline::text::Stopwords;
    ///
    /// let stopwords = Stopwords::new(vec!["axiom"]).unwrap();
    /// assert_eq!(" p or q", stopwords.strip("axiom. p or q."));
    /// ```
    pub fn strip(&self, line: &str) -> String {
        let stripped = match &self.pattern {
            Some(pattern) => pattern.replace_all(line, ""),
            None => line.into(),
        };
        stripped.replace(|c: char| c == '.' || c == ',', "")
    }
}

/*! Defines the configuration of the pipeline and the jobs it runs on. */
use crate::pipeline::Error;
use serde_derive::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Is the list of stopwords when none is configured.
pub const DEFAULT_STOPWORDS: [&str; 5] = [
    "cnf",
    "is_a_theorem",
    "condensed_detachment",
    "axiom",
    "xcb",
];

/// Is the prefix of derived output file names when none is configured.
pub const DEFAULT_OUTPUT_PREFIX: &str = "output_";

/// Is the extension of the files picked up in directories when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Determines how a line whose tree is not changed by the expansion is written.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rendering {
    /// Keep the line's text as it was before parsing.
    Preserve,
    /// Render every line in canonical form.
    Canonical,
}

impl Default for Rendering {
    fn default() -> Self {
        Self::Preserve
    }
}

/// Is the configuration of a [`Pipeline`].
///
/// Every field is optional when the configuration is read from JSON:
/// ```rust
/// use normalizer_pipeline::config::{Config, Rendering};
///
/// let config: Config = serde_json::from_str(r#"{ "rendering": "canonical" }"#).unwrap();
/// assert_eq!(Rendering::Canonical, config.rendering);
/// assert_eq!("output_", config.output_prefix);
/// ```
///
/// [`Pipeline`]: crate::pipeline::Pipeline
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Words deleted from the output, matched whole and without regard to case.
    pub stopwords: Vec<String>,

    /// Prefix of the output file name derived for an input file.
    pub output_prefix: String,

    /// Extension of the files normalized when walking a directory.
    pub extension: String,

    /// Rendering of lines without equivalences.
    pub rendering: Rendering,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.into(),
            extension: DEFAULT_EXTENSION.into(),
            rendering: Rendering::default(),
        }
    }
}

impl Config {
    /// Reads a configuration from the JSON file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }

    /// Returns the output path for `input`: a file next to it whose name is the input's
    /// name with the configured prefix.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}{}", self.output_prefix, name))
    }

    /// Returns true if `path` has the configured extension.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map_or(false, |e| e.to_string_lossy() == self.extension.as_str())
    }

    /// Returns a job for every input, with output paths derived by [`Config::output_path`].
    pub fn jobs<I: IntoIterator<Item = PathBuf>>(&self, inputs: I) -> Vec<Job> {
        inputs
            .into_iter()
            .map(|input| {
                let output = self.output_path(&input);
                Job::new(input, output)
            })
            .collect()
    }
}

/// Pairs an input file with the file its normalized lines are written to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Job {
    input: PathBuf,
    output: PathBuf,
}

impl Job {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    #[inline(always)]
    pub fn input(&self) -> &Path {
        &self.input
    }

    #[inline(always)]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(
            vec!["cnf", "is_a_theorem", "condensed_detachment", "axiom", "xcb"],
            config.stopwords
        );
        assert_eq!("output_", config.output_prefix);
        assert_eq!("txt", config.extension);
        assert_eq!(Rendering::Preserve, config.rendering);
    }

    #[test]
    fn test_deserialize() {
        {
            let config: Config = serde_json::from_str("{}").unwrap();
            assert_eq!(Config::default(), config);
        }
        {
            let config: Config = serde_json::from_str(
                r#"{ "stopwords": ["lemma"], "output_prefix": "norm_", "extension": "p" }"#,
            )
            .unwrap();
            assert_eq!(vec!["lemma"], config.stopwords);
            assert_eq!("norm_", config.output_prefix);
            assert_eq!("p", config.extension);
            assert_eq!(Rendering::Preserve, config.rendering);
        }
        assert!(serde_json::from_str::<Config>(r#"{ "rendering": "pretty" }"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "normalizer-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "stopwords": [], "rendering": "canonical" }"#).unwrap();
        let config = Config::from_file(&path).unwrap();
        assert!(config.stopwords.is_empty());
        assert_eq!(Rendering::Canonical, config.rendering);

        fs::write(&path, "stopwords = []").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(Error::Config { .. })
        ));
        fs::remove_file(&path).unwrap();

        assert!(matches!(Config::from_file(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn test_output_path() {
        let config = Config::default();
        assert_eq!(
            PathBuf::from("data/output_input_file.txt"),
            config.output_path(Path::new("data/input_file.txt"))
        );
        assert_eq!(
            PathBuf::from("output_a.txt"),
            config.output_path(Path::new("a.txt"))
        );
    }

    #[test]
    fn test_jobs() {
        let config = Config {
            output_prefix: "x_".into(),
            ..Config::default()
        };
        assert_eq!(
            vec![
                Job::new("a.txt".into(), "x_a.txt".into()),
                Job::new("d/b.txt".into(), "d/x_b.txt".into()),
            ],
            config.jobs(vec![PathBuf::from("a.txt"), PathBuf::from("d/b.txt")])
        );
    }

    #[test]
    fn test_accepts() {
        let config = Config::default();
        assert!(config.accepts(Path::new("d/a.txt")));
        assert!(!config.accepts(Path::new("d/a.p")));
        assert!(!config.accepts(Path::new("d/txt")));
    }
}

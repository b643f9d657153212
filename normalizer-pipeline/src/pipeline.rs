/*! Implements the line, file and directory drivers of the normalization pipeline.

Every line goes through the same stages, in order: symbol translation, removal of `.`,
parsing, expansion of `equivalent` calls, rendering, flattening of call-form implications
and stopword stripping. Lines are independent of each other; a line that fails is reported
and left out of the output while the remaining lines are processed. */
use crate::{
    config::{Config, Job, Rendering},
    text::{strip_dots, translate_symbols, Flattener, Stopwords},
    trace::*,
};
use itertools::Itertools;
use normalizer_fol::{
    parser,
    syntax::Expr,
    transform::{self, Expand, ToCanonical},
};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Is the type of errors that make the pipeline give up on a file or on a configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a file or a directory cannot be read or written.
    #[error("cannot access `{}`: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Is returned when a configuration file is not valid.
    #[error("invalid configuration in `{}`: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Is returned when the stopwords, or the implication pattern, cannot be compiled.
    #[error("invalid pattern: {source}")]
    Pattern { source: regex::Error },

    /// Is returned when explicit output paths do not match the input paths one to one.
    #[error("{outputs} output paths are given for {inputs} input paths")]
    OutputCount { inputs: usize, outputs: usize },
}

/// Is the deepest expression tree, as estimated by [`nesting_bound`], that the tree stages
/// accept. The tree stages recurse once per level.
pub const MAX_NESTING: usize = 512;

/// Is the type of errors that make the pipeline skip a line.
#[derive(Error, PartialEq, Debug)]
pub enum LineError {
    #[error("nesting may reach {bound} levels; the limit is {limit}")]
    Nesting { bound: usize, limit: usize },
    #[error("{}", .source.to_string())]
    Parse {
        #[from]
        source: parser::Error,
    },
    #[error("{}", .source.to_string())]
    Transform {
        #[from]
        source: transform::Error,
    },
}

/// Records a line that was left out of the output.
#[derive(PartialEq, Debug)]
pub struct LineFailure {
    /// Is the 1-based number of the line in its source.
    pub line: usize,
    /// Is the text of the line as it was read.
    pub text: String,
    pub error: LineError,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: `{}`: {}", self.line, self.text, self.error)
    }
}

/// Is the result of normalizing a text.
#[derive(PartialEq, Debug, Default)]
pub struct Normalized {
    /// Is the number of non-blank lines in the text.
    pub read: usize,
    /// Are the normalized lines, in input order.
    pub lines: Vec<String>,
    pub failures: Vec<LineFailure>,
}

/// Reports the outcome of normalizing a file.
#[derive(Debug)]
pub struct FileReport {
    pub job: Job,
    pub read: usize,
    pub written: usize,
    pub failures: Vec<LineFailure>,
}

/// Runs the stages of the pipeline with a given configuration.
pub struct Pipeline {
    flattener: Flattener,
    stopwords: Stopwords,
    config: Config,
}

impl Pipeline {
    /// Creates a pipeline for `config`. Fails if the configured stopwords do not compile.
    pub fn new(config: Config) -> Result<Self, Error> {
        let stopwords =
            Stopwords::new(&config.stopwords).map_err(|source| Error::Pattern { source })?;
        let flattener = Flattener::new().map_err(|source| Error::Pattern { source })?;
        Ok(Self {
            flattener,
            stopwords,
            config,
        })
    }

    /// Returns the configuration of the receiver.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalizes a single formula line.
    pub fn normalize_line(&self, line: &str) -> Result<String, LineError> {
        let translated = translate_symbols(line);
        let rendered = self.rewrite(&strip_dots(translated.trim()))?;
        let flattened = self.flattener.flatten(&rendered);
        Ok(self.stopwords.strip(&flattened))
    }

    // Runs the tree stages on `line`.
    fn rewrite(&self, line: &str) -> Result<String, LineError> {
        let bound = nesting_bound(line);
        if bound > MAX_NESTING {
            return Err(LineError::Nesting {
                bound,
                limit: MAX_NESTING,
            });
        }

        let expr: Expr = line.parse()?;
        let expanded = expr.expand()?;
        if self.config.rendering == Rendering::Preserve && expanded == expr {
            Ok(line.to_owned())
        } else {
            Ok(expanded.canonical()?)
        }
    }

    /// Normalizes every non-blank line of `text`. `source` names the text in log events.
    pub fn normalize_text(&self, source: &str, text: &str) -> Normalized {
        let mut result = Normalized::default();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            result.read += 1;

            let number = index + 1;
            match self.normalize_line(line) {
                Ok(output) => {
                    debug!(
                        event = NORMALIZE,
                        path = source,
                        line = number as u64,
                        text = line,
                        output = output.as_str()
                    );
                    result.lines.push(output);
                }
                Err(error) => {
                    warn!(
                        event = SKIP,
                        path = source,
                        line = number as u64,
                        text = line,
                        error = %error
                    );
                    result.failures.push(LineFailure {
                        line: number,
                        text: line.to_owned(),
                        error,
                    });
                }
            }
        }
        result
    }

    /// Normalizes the input file of `job` and overwrites its output file with the result,
    /// one line per normalized formula.
    pub fn normalize_file(&self, job: &Job) -> Result<FileReport, Error> {
        let source = job.input().display().to_string();
        let text = fs::read_to_string(job.input()).map_err(|e| io_error(job.input(), e))?;
        info!(event = READ, path = source.as_str());

        let normalized = self.normalize_text(&source, &text);
        let contents: String = normalized
            .lines
            .iter()
            .map(|line| format!("{}\n", line))
            .collect();
        fs::write(job.output(), contents).map_err(|e| io_error(job.output(), e))?;
        info!(event = WRITE, path = %job.output().display());

        Ok(FileReport {
            job: job.clone(),
            read: normalized.read,
            written: normalized.lines.len(),
            failures: normalized.failures,
        })
    }

    /// Normalizes the files of `jobs` in order; a failing file does not stop the others.
    pub fn normalize_files(&self, jobs: &[Job]) -> Vec<Result<FileReport, Error>> {
        jobs.iter().map(|job| self.normalize_file(job)).collect()
    }

    /// Normalizes every file with the configured extension in every sub-directory of
    /// `input_dir` into the sub-directory of the same name under `output_dir`. Directories
    /// are visited in name order and missing output directories are created.
    ///
    /// Fails only if `input_dir` cannot be listed or `output_dir` cannot be created; every
    /// other failure is reported among the results.
    pub fn normalize_dir(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<Vec<Result<FileReport, Error>>, Error> {
        let subdirs = entries(input_dir)?;
        fs::create_dir_all(output_dir).map_err(|e| io_error(output_dir, e))?;

        let mut results = Vec::new();
        for subdir in subdirs.into_iter().filter(|p| p.is_dir()) {
            let output_subdir = match subdir.file_name() {
                Some(name) => output_dir.join(name),
                None => continue,
            };
            if let Err(e) = fs::create_dir_all(&output_subdir) {
                results.push(Err(io_error(&output_subdir, e)));
                continue;
            }

            let files = match entries(&subdir) {
                Ok(files) => files,
                Err(e) => {
                    results.push(Err(e));
                    continue;
                }
            };
            for file in files
                .into_iter()
                .filter(|p| p.is_file() && self.config.accepts(p))
            {
                let output = match file.file_name() {
                    Some(name) => output_subdir.join(name),
                    None => continue,
                };
                results.push(self.normalize_file(&Job::new(file, output)));
            }
        }
        Ok(results)
    }
}

/// Pairs `inputs` with `outputs`; when `outputs` is empty, output paths are derived from
/// the input paths by `config`.
pub fn jobs(config: &Config, inputs: Vec<PathBuf>, outputs: Vec<PathBuf>) -> Result<Vec<Job>, Error> {
    if outputs.is_empty() {
        Ok(config.jobs(inputs))
    } else if outputs.len() == inputs.len() {
        Ok(inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| Job::new(input, output))
            .collect())
    } else {
        Err(Error::OutputCount {
            inputs: inputs.len(),
            outputs: outputs.len(),
        })
    }
}

/// Returns an upper bound of the depth of the tree parsed from `line`: every parenthesis
/// level holds at most a disjunction, a conjunction and an atom, and every `not` and
/// infix `implies` adds one more level.
pub fn nesting_bound(line: &str) -> usize {
    let (_, deepest) = line.chars().fold((0usize, 0usize), |(depth, deepest), c| match c {
        '(' => (depth + 1, deepest.max(depth + 1)),
        ')' => (depth.saturating_sub(1), deepest),
        _ => (depth, deepest),
    });
    let keywords = line
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| *word == "not" || *word == "implies")
        .count();
    3 * (deepest + 1) + keywords
}

fn io_error(path: &Path, source: io::Error) -> Error {
    error!(event = FAIL, path = %path.display(), error = %source);
    Error::Io {
        path: path.to_owned(),
        source,
    }
}

// Returns the entries of `dir`, sorted by path.
fn entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(dir).map_err(|e| io_error(dir, e))?;
    entries
        .map(|entry| entry.map(|e| e.path()).map_err(|e| io_error(dir, e)))
        .collect::<Result<Vec<_>, _>>()
        .map(|paths| paths.into_iter().sorted().collect())
}

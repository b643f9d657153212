use crate::{constants::*, terminal::Stylus, utils::*};
use anyhow::{anyhow, Error};
use normalizer_pipeline::{
    config::{Config, Rendering},
    pipeline::{self, Pipeline},
    trace::subscriber::JsonLogger,
};
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    #[structopt(
        short = "c",
        long = "config",
        parse(from_os_str),
        help = "Path to a JSON configuration file"
    )]
    config: Option<PathBuf>,
    #[structopt(long = "prefix", help = "Prefix of derived output file names")]
    prefix: Option<String>,
    #[structopt(
        short = "w",
        long = "stopword",
        number_of_values = 1,
        help = "Word to strip from the output; replaces the configured stopwords"
    )]
    stopwords: Vec<String>,
    #[structopt(long = "no-stopwords", help = "Strip no words from the output")]
    no_stopwords: bool,
    #[structopt(long = "canonical", help = "Render every line in canonical form")]
    canonical: bool,
}

impl Options {
    fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .map_err(|e| Error::new(e).context("failed to load the configuration"))?,
            None => Config::default(),
        };

        if let Some(prefix) = &self.prefix {
            config.output_prefix = prefix.clone();
        }
        if self.no_stopwords {
            config.stopwords.clear();
        } else if !self.stopwords.is_empty() {
            config.stopwords = self.stopwords.clone();
        }
        if self.canonical {
            config.rendering = Rendering::Canonical;
        }
        Ok(config)
    }

    fn pipeline(&self) -> Result<Pipeline, Error> {
        Pipeline::new(self.config()?)
            .map_err(|e| Error::new(e).context("failed to set up the pipeline"))
    }
}

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(
        name = "files",
        about = "Normalize formula files; reads standard input when no input is given"
    )]
    Files {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            number_of_values = 1,
            help = "Path to an input file"
        )]
        inputs: Vec<PathBuf>,
        #[structopt(
            short = "o",
            long = "output",
            parse(from_os_str),
            number_of_values = 1,
            help = "Path to the output file of the input at the same position; requires `-i`"
        )]
        outputs: Vec<PathBuf>,
        #[structopt(flatten)]
        options: Options,
    },
    #[structopt(
        name = "dir",
        about = "Normalize the files in every sub-directory of a directory"
    )]
    Dir {
        #[structopt(long = "input-dir", parse(from_os_str), help = "Input directory")]
        input_dir: PathBuf,
        #[structopt(long = "output-dir", parse(from_os_str), help = "Output directory")]
        output_dir: PathBuf,
        #[structopt(flatten)]
        options: Options,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Files {
                inputs,
                outputs,
                options,
            } => {
                if inputs.is_empty() && !outputs.is_empty() {
                    return Err(anyhow!(
                        "output paths are given without input paths; `-o` requires `-i`"
                    ));
                }

                let pipeline = options.pipeline()?;
                if inputs.is_empty() {
                    let text = read_text_from_stdin()?;
                    let normalized = pipeline.normalize_text("<stdin>", &text);
                    normalized.lines.iter().for_each(|l| println!("{}", l));
                    normalized
                        .failures
                        .iter()
                        .for_each(|f| eprintln!("skipped {}", f));
                    return Ok(());
                }

                let jobs = pipeline::jobs(pipeline.config(), inputs, outputs)?;
                stylus.set(STYLE_INFO);
                println!("Normalizing {} files:", jobs.len());
                println!();

                let results = pipeline.normalize_files(&jobs);
                finish(print_results(&results, stylus))
            }
            ProcessCommand::Dir {
                input_dir,
                output_dir,
                options,
            } => {
                let pipeline = options.pipeline()?;
                stylus.set(STYLE_INFO);
                println!(
                    "Normalizing `*.{}` files under {}:",
                    pipeline.config().extension,
                    input_dir.display()
                );
                println!();

                let results = pipeline
                    .normalize_dir(&input_dir, &output_dir)
                    .map_err(|e| Error::new(e).context("failed to walk the input directory"))?;
                finish(print_results(&results, stylus))
            }
        }
    }

    fn is_interactive(&self) -> bool {
        match self {
            ProcessCommand::Files { inputs, .. } => !inputs.is_empty(),
            ProcessCommand::Dir { .. } => true,
        }
    }
}

fn finish(failed: usize) -> Result<(), Error> {
    if failed == 0 {
        Ok(())
    } else {
        Err(anyhow!("{} files could not be normalized", failed))
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "normalizer",
    about = "A tool for rewriting formula files into word-operator form"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        // standard output carries the formulas when reading standard input
        let color = !self.no_color && process.is_interactive();
        let stylus = stylus(color);

        if color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = self.log {
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("cannot create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Options {
        let args: Vec<&str> = ["normalizer", "files"]
            .iter()
            .chain(args.iter())
            .cloned()
            .collect();
        let command = Command::from_iter(args);
        match command.command {
            ProcessCommand::Files { options, .. } => options,
            _ => panic!("expecting the files command"),
        }
    }

    #[test]
    fn test_files_command() {
        let command = Command::from_iter(&[
            "normalizer", "--no-color", "files", "-i", "a.txt", "-i", "b.txt", "-o", "x.txt",
        ]);
        assert!(command.no_color);
        match command.command {
            ProcessCommand::Files {
                inputs, outputs, ..
            } => {
                assert_eq!(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")], inputs);
                assert_eq!(vec![PathBuf::from("x.txt")], outputs);
            }
            _ => panic!("expecting the files command"),
        }
    }

    #[test]
    fn test_dir_command() {
        let command = Command::from_iter(&[
            "normalizer",
            "-l",
            "run.json",
            "dir",
            "--input-dir",
            "in",
            "--output-dir",
            "out",
        ]);
        assert_eq!(Some(PathBuf::from("run.json")), command.log);
        assert!(command.command.is_interactive());
        match command.command {
            ProcessCommand::Dir {
                input_dir,
                output_dir,
                ..
            } => {
                assert_eq!(PathBuf::from("in"), input_dir);
                assert_eq!(PathBuf::from("out"), output_dir);
            }
            _ => panic!("expecting the dir command"),
        }
    }

    #[test]
    fn test_outputs_without_inputs() {
        let command = Command::from_iter(&["normalizer", "files", "-o", "x.txt"]);
        let error = command.command.run(&stylus(false)).unwrap_err();
        assert!(error.to_string().contains("`-o` requires `-i`"));
    }

    #[test]
    fn test_finish() {
        assert!(finish(0).is_ok());
        assert_eq!(
            "1 files could not be normalized",
            finish(1).unwrap_err().to_string()
        );

        let command = Command::from_iter(&[
            "normalizer",
            "files",
            "-i",
            "/nonexistent/normalizer/a.txt",
        ]);
        assert!(command.command.run(&stylus(false)).is_err());
    }

    #[test]
    fn test_options_config() {
        assert_eq!(Config::default(), options(&[]).config().unwrap());
        {
            let config = options(&["--prefix", "norm_", "-w", "lemma", "-w", "Axiom", "--canonical"])
                .config()
                .unwrap();
            assert_eq!("norm_", config.output_prefix);
            assert_eq!(vec!["lemma", "Axiom"], config.stopwords);
            assert_eq!(Rendering::Canonical, config.rendering);
        }
        {
            let config = options(&["--no-stopwords", "-w", "lemma"]).config().unwrap();
            assert!(config.stopwords.is_empty());
        }
        assert!(options(&["-c", "/nonexistent/normalizer.json"])
            .config()
            .is_err());
    }
}

mod error;

use std::path::PathBuf;

use bslsonar_core::{OutputTarget, ResolutionConfig, parse_prefixes};
use clap::Parser;
pub(crate) use error::ArgsError;
use eyre::{Context, Result};

use crate::{
    logging, ops,
    reports::{Report, TerminalOutput},
};

/// Minimum length of the raw prefixes argument, in characters.
const MIN_PREFIXES_CHARS: usize = 3;

/// Extension trait for exiting on argument errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, ArgsError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bslsonar")]
#[command(version)]
#[command(about = "Collect the 1C modules owned by a set of subsystems for SonarQube analysis")]
pub(crate) struct Cli {
    /// Root of the configuration source dump
    #[arg(value_name = "SRCDIR")]
    source_dir: PathBuf,

    /// Subsystem name prefixes separated by spaces, e.g. "рн_ пс_"
    #[arg(value_name = "PREFIXES")]
    prefixes: String,

    /// sonar-project.properties to update, or to create with --generate
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print absolute module paths
    #[arg(short, long)]
    absolute: bool,

    /// Escape non-ASCII characters as \uXXXX
    #[arg(short, long)]
    unicode: bool,

    /// Render --file from a template instead of replacing $inclusions_line
    #[arg(short, long)]
    generate: bool,

    /// Template to render instead of the built-in one
    #[arg(short, long, value_name = "PATH", requires = "generate")]
    template: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    logging: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.validate().unwrap_or_exit();

        if self.logging {
            logging::init();
        }

        let config = self.config()?;
        let report = ops::find(config, self.logging, &mut std::io::stdout().lock())?;
        report.render(&mut TerminalOutput::new());

        report
            .emitted
            .map(|_| ())
            .wrap_err("Failed to write module list")
    }

    /// Check argument combinations the parser cannot express.
    fn validate(&self) -> std::result::Result<(), ArgsError> {
        if !self.source_dir.exists() {
            return Err(ArgsError::SourceMissing(self.source_dir.clone()));
        }
        if !self.source_dir.is_dir() {
            return Err(ArgsError::SourceNotDirectory(self.source_dir.clone()));
        }
        if self.prefixes.chars().count() < MIN_PREFIXES_CHARS {
            return Err(ArgsError::PrefixesTooShort);
        }

        match (&self.file, self.generate) {
            (None, true) => Err(ArgsError::GenerateWithoutFile),
            (Some(file), false) if !file.is_file() => Err(ArgsError::FileNotFound(file.clone())),
            _ => Ok(()),
        }
    }

    fn config(&self) -> Result<ResolutionConfig> {
        let source_root = if self.absolute {
            std::path::absolute(&self.source_dir).wrap_err_with(|| {
                format!("Failed to resolve '{}'", self.source_dir.display())
            })?
        } else {
            self.source_dir.clone()
        };

        let output = match (&self.file, self.generate) {
            (Some(path), true) => OutputTarget::Generate {
                path: path.clone(),
                template: self.template.clone(),
            },
            (Some(path), false) => OutputTarget::Substitute { path: path.clone() },
            (None, _) => OutputTarget::Stdout,
        };

        Ok(ResolutionConfig::new(source_root, parse_prefixes(&self.prefixes))
            .with_output(output)
            .with_absolute_paths(self.absolute)
            .with_transliterate(self.unicode))
    }
}

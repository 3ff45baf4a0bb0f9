//! Command-line interface for the parser.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{OlxError, ParseFailure, Result};
use crate::output::{render, save, OutputFormat};
use crate::parser::OlxParser;

/// OLX Parser - Turn assessment-problem XML into the editor model.
#[derive(Parser)]
#[command(name = "olx-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one problem file and print the result.
    Parse {
        /// OLX file to parse
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse many problem files and report their types.
    Check {
        /// OLX files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            output,
        } => parse_command(&file, format, output.as_deref()),
        Commands::Check { files } => check_command(&files),
    }
}

/// Execute the parse command.
fn parse_command(file: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let olx = fs::read_to_string(file)?;
    let parsed = OlxParser::new().parse(&olx)?;

    match output {
        Some(path) => {
            save(&parsed, format, path)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render(&parsed, format)?),
    }

    Ok(())
}

/// Execute the check command.
fn check_command(files: &[PathBuf]) -> Result<()> {
    let parser = OlxParser::new();

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut failures: Vec<(&Path, ParseFailure)> = Vec::new();

    for file in files {
        pb.set_message(file.display().to_string());

        let result = fs::read_to_string(file)
            .map_err(OlxError::from)
            .and_then(|olx| parser.parse(&olx));

        match result {
            Ok(parsed) => {
                let label = parsed.problem_type().map_or("unset", |t| t.label());
                *counts.entry(label).or_default() += 1;
                pb.println(format!("{} {}", style(label).cyan(), file.display()));
            }
            Err(err) => {
                tracing::debug!(file = %file.display(), error = %err, "Failed to parse");
                pb.println(format!("{} {}", style("error").red().bold(), file.display()));
                failures.push((file.as_path(), ParseFailure::from(&err)));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!();
    for (label, count) in &counts {
        println!("  {}: {}", label, style(count).green());
    }

    if failures.is_empty() {
        return Ok(());
    }

    println!();
    for (file, failure) in &failures {
        println!("{} {}", style("Failed:").red().bold(), file.display());
        println!("  {}", failure.message);
        if let Some(fragment) = &failure.fragment {
            println!("  at: {}", style(fragment).yellow());
        }
    }

    Err(OlxError::CheckFailed {
        failed: failures.len(),
        total: files.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["olx-parser", "parse", "problem.xml"]);

        let Commands::Parse {
            file,
            format,
            output,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("problem.xml"));
        assert_eq!(format, OutputFormat::Json);
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_with_format() {
        let cli = Cli::parse_from(["olx-parser", "parse", "p.xml", "--format", "yaml"]);

        let Commands::Parse { format, .. } = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn test_cli_check_requires_files() {
        assert!(Cli::try_parse_from(["olx-parser", "check"]).is_err());

        let cli = Cli::parse_from(["olx-parser", "check", "a.xml", "b.xml"]);
        let Commands::Check { files } = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(files.len(), 2);
    }
}

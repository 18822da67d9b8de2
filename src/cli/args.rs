// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! The three positionals are collected loosely and counted by
//! [`CopyRequest::from_args`] so a wrong count prints the historical usage
//! line instead of clap's own error.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{CopyTaskError, Result};

/// Copy a stat from one task-results file into another
#[derive(Parser, Debug)]
#[command(name = "copy-task")]
#[command(version, about = "Copy a named stat between task-result files")]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// sourceFile stat targetFile
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A validated copy invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source: PathBuf,
    pub stat: String,
    pub target: PathBuf,
}

impl CopyRequest {
    /// Build a request from exactly three positionals.
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [source, stat, target] => Ok(Self {
                source: PathBuf::from(source),
                stat: stat.clone(),
                target: PathBuf::from(target),
            }),
            _ => Err(CopyTaskError::Usage),
        }
    }

    /// Line printed after a successful copy
    pub fn confirmation(&self) -> String {
        format!(
            "Copied {} from {} into {}",
            self.stat,
            self.source.display(),
            self.target.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_args_three() {
        let request =
            CopyRequest::from_args(&strings(&["results.csv", "meanFitness", "out.csv"])).unwrap();
        assert_eq!(request.source, PathBuf::from("results.csv"));
        assert_eq!(request.stat, "meanFitness");
        assert_eq!(request.target, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_from_args_wrong_counts() {
        for count in [0, 1, 2, 4, 5] {
            let args: Vec<String> = (0..count).map(|i| format!("arg{}", i)).collect();
            let err = CopyRequest::from_args(&args).unwrap_err();
            assert!(matches!(err, CopyTaskError::Usage), "count {}", count);
        }
    }

    #[test]
    fn test_confirmation() {
        let request =
            CopyRequest::from_args(&strings(&["results.csv", "meanFitness", "out.csv"])).unwrap();
        assert_eq!(
            request.confirmation(),
            "Copied meanFitness from results.csv into out.csv"
        );
    }

    #[test]
    fn test_cli_collects_positionals() {
        let cli = Cli::try_parse_from(["copy-task", "-v", "a.json", "fit", "b.json"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.args, strings(&["a.json", "fit", "b.json"]));
    }

    #[test]
    fn test_cli_keeps_hyphen_values_as_positionals() {
        let cli = Cli::try_parse_from(["copy-task", "-v", "a.json", "-x", "b.json"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.args, strings(&["a.json", "-x", "b.json"]));
    }

    #[test]
    fn test_cli_accepts_no_positionals() {
        let cli = Cli::try_parse_from(["copy-task"]).unwrap();
        assert!(cli.args.is_empty());
        assert!(cli.config.is_none());
    }
}

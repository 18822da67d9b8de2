// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for copytask
//!
//! This module defines all error types used throughout the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Usage line printed when the positional arguments are wrong
pub const USAGE: &str = "Usage: CopyTask sourceFile stat targetFile";

/// Main error type for copytask operations
#[derive(Error, Debug)]
pub enum CopyTaskError {
    /// Wrong number of positional arguments
    #[error("{}", USAGE)]
    Usage,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// No task in the source file carries the requested stat
    #[error("Stat '{stat}' not found in {}", path.display())]
    StatNotFound { stat: String, path: PathBuf },

    /// The same task id appears twice in one file
    #[error("Duplicate task '{task}' in {}", path.display())]
    DuplicateTask { task: String, path: PathBuf },

    /// The file parsed but does not have the shape of a task-results file
    #[error("Invalid task file: {0}")]
    InvalidTaskFile(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for copytask operations
pub type Result<T> = std::result::Result<T, CopyTaskError>;

impl From<csv::Error> for CopyTaskError {
    fn from(err: csv::Error) -> Self {
        CopyTaskError::Csv(err.to_string())
    }
}

impl CopyTaskError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CopyTaskError::Usage => 2,
            _ => 1,
        }
    }
}

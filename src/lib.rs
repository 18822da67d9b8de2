// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! copytask - copy a named statistic between task-results files.
//!
//! This crate exposes the runtime used by the `copy-task` CLI
//! (`src/main.rs`):
//! - `cli`: clap arguments and the validated [`cli::CopyRequest`]
//! - `commands`: the copy command (usage check, delegation, confirmation)
//! - `rewrites`: the [`rewrites::TaskCopier`] seam and the file-backed
//!   [`rewrites::TaskRewrites`] for JSON and CSV task files
//! - `config`: settings loaded from `~/.copytask/settings.json`

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod rewrites;

pub use error::{CopyTaskError, Result};

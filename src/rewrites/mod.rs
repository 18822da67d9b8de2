// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Task rewriting
//!
//! Copies a named stat from the tasks of one results file onto the
//! matching tasks of another. Tasks are matched by id (see
//! [`Settings::task_key`]); files may be JSON or CSV.

pub mod csv_tasks;
pub mod document;
pub mod json_tasks;

use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::config::Settings;
use crate::error::{CopyTaskError, Result};

pub use document::{TaskDocument, TaskFormat};

/// Outcome of a stat copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Target tasks that received the stat
    pub copied: usize,
    /// Target tasks left alone because they already had the stat
    pub skipped: usize,
    /// Target tasks with no counterpart in the source
    pub unmatched: usize,
}

/// Something that can copy a stat between task-results files
#[cfg_attr(test, mockall::automock)]
pub trait TaskCopier {
    fn copy_task(&self, source: &Path, stat: &str, target: &Path) -> Result<CopySummary>;
}

/// File-backed [`TaskCopier`]
#[derive(Debug, Clone, Default)]
pub struct TaskRewrites {
    settings: Settings,
}

impl TaskRewrites {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl TaskCopier for TaskRewrites {
    fn copy_task(&self, source: &Path, stat: &str, target: &Path) -> Result<CopySummary> {
        let task_key = self.settings.task_key.as_str();

        let source_doc = TaskDocument::load(source, task_key)?;
        let values: HashMap<&str, Value> = source_doc
            .task_ids()
            .iter()
            .filter_map(|id| source_doc.stat(id, stat).map(|value| (id.as_str(), value)))
            .collect();
        if values.is_empty() {
            return Err(CopyTaskError::StatNotFound {
                stat: stat.to_string(),
                path: source.to_path_buf(),
            });
        }
        tracing::debug!(
            "Found '{}' on {} of {} source tasks",
            stat,
            values.len(),
            source_doc.task_ids().len()
        );

        let mut target_doc = TaskDocument::load(target, task_key)?;
        let mut summary = CopySummary::default();
        for id in target_doc.task_ids().to_vec() {
            let Some(value) = values.get(id.as_str()) else {
                tracing::trace!("No source task for '{}'", id);
                summary.unmatched += 1;
                continue;
            };

            if !self.settings.overwrite && target_doc.stat(&id, stat).is_some() {
                tracing::trace!("Keeping existing '{}' on '{}'", stat, id);
                summary.skipped += 1;
                continue;
            }

            if target_doc.set_stat(&id, stat, value.clone()) {
                summary.copied += 1;
            }
        }

        if summary.copied > 0 {
            target_doc.save(target)?;
        }

        tracing::info!(
            copied = summary.copied,
            skipped = summary.skipped,
            unmatched = summary.unmatched,
            "Copied '{}' from {} into {}",
            stat,
            source.display(),
            target.display()
        );
        Ok(summary)
    }
}

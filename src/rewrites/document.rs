// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Format-independent access to task-results files

use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::csv_tasks::CsvTasks;
use super::json_tasks::JsonTasks;
use crate::error::Result;

/// On-disk format of a task-results file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormat {
    Json,
    Csv,
}

impl TaskFormat {
    /// `.csv` (any case) is CSV, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => TaskFormat::Csv,
            _ => TaskFormat::Json,
        }
    }
}

/// A loaded task-results file of either format
#[derive(Debug, Clone)]
pub enum TaskDocument {
    Json(JsonTasks),
    Csv(CsvTasks),
}

impl TaskDocument {
    /// Load a task-results file, picking the format from its extension.
    pub fn load(path: &Path, task_key: &str) -> Result<Self> {
        let format = TaskFormat::from_path(path);
        tracing::debug!("Loading {:?} task file {}", format, path.display());

        let document = match format {
            TaskFormat::Json => {
                let content = std::fs::read_to_string(path)?;
                TaskDocument::Json(JsonTasks::parse(&content, path, task_key)?)
            }
            TaskFormat::Csv => {
                let file = File::open(path)?;
                TaskDocument::Csv(CsvTasks::read(file, path, task_key)?)
            }
        };

        tracing::trace!(
            "Loaded {} tasks from {}",
            document.task_ids().len(),
            path.display()
        );
        Ok(document)
    }

    /// Write the document back in its own format.
    pub fn save(&self, path: &Path) -> Result<()> {
        match self {
            TaskDocument::Json(doc) => std::fs::write(path, doc.to_pretty_string()?)?,
            TaskDocument::Csv(table) => table.write(BufWriter::new(File::create(path)?))?,
        }
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    pub fn task_ids(&self) -> &[String] {
        match self {
            TaskDocument::Json(doc) => doc.task_ids(),
            TaskDocument::Csv(table) => table.task_ids(),
        }
    }

    pub fn stat(&self, task: &str, stat: &str) -> Option<Value> {
        match self {
            TaskDocument::Json(doc) => doc.stat(task, stat).cloned(),
            TaskDocument::Csv(table) => table.stat(task, stat),
        }
    }

    pub fn set_stat(&mut self, task: &str, stat: &str, value: Value) -> bool {
        match self {
            TaskDocument::Json(doc) => doc.set_stat(task, stat, value),
            TaskDocument::Csv(table) => table.set_stat(task, stat, &value),
        }
    }
}

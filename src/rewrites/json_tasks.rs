// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! JSON task-results documents
//!
//! A document is either a bare array of task objects or an object with a
//! `tasks` array. Each task carries its id under the task key and its
//! statistics in a nested `stats` object. Everything else is kept as-is.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{CopyTaskError, Result};

const TASKS_FIELD: &str = "tasks";
const STATS_FIELD: &str = "stats";

/// A parsed JSON task-results document
#[derive(Debug, Clone)]
pub struct JsonTasks {
    /// Whole document, rewritten in place
    root: Value,
    /// Task ids in document order
    ids: Vec<String>,
    /// Task id -> position in the tasks array
    index: HashMap<String, usize>,
}

impl JsonTasks {
    /// Parse a document and index its tasks by `task_key`.
    pub fn parse(content: &str, path: &Path, task_key: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let records = records(&root).ok_or_else(|| {
            CopyTaskError::InvalidTaskFile(format!(
                "{}: expected an array of tasks or an object with a '{}' array",
                path.display(),
                TASKS_FIELD
            ))
        })?;

        let mut ids = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or_else(|| {
                CopyTaskError::InvalidTaskFile(format!(
                    "{}: task #{} is not an object",
                    path.display(),
                    position
                ))
            })?;

            let id = object
                .get(task_key)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    CopyTaskError::InvalidTaskFile(format!(
                        "{}: task #{} has no string '{}' field",
                        path.display(),
                        position,
                        task_key
                    ))
                })?;

            if let Some(stats) = object.get(STATS_FIELD) {
                if !stats.is_object() {
                    return Err(CopyTaskError::InvalidTaskFile(format!(
                        "{}: '{}' of task '{}' is not an object",
                        path.display(),
                        STATS_FIELD,
                        id
                    )));
                }
            }

            if index.insert(id.to_string(), position).is_some() {
                return Err(CopyTaskError::DuplicateTask {
                    task: id.to_string(),
                    path: path.to_path_buf(),
                });
            }
            ids.push(id.to_string());
        }

        Ok(Self { root, ids, index })
    }

    /// Task ids in document order
    pub fn task_ids(&self) -> &[String] {
        &self.ids
    }

    /// Look up a stat on a task. Null values count as absent.
    pub fn stat(&self, task: &str, stat: &str) -> Option<&Value> {
        let position = *self.index.get(task)?;
        records(&self.root)?
            .get(position)?
            .get(STATS_FIELD)?
            .get(stat)
            .filter(|value| !value.is_null())
    }

    /// Set a stat on a task, creating the `stats` object if needed.
    /// Returns false when the task does not exist.
    pub fn set_stat(&mut self, task: &str, stat: &str, value: Value) -> bool {
        let Some(&position) = self.index.get(task) else {
            return false;
        };
        let Some(object) = records_mut(&mut self.root)
            .and_then(|records| records.get_mut(position))
            .and_then(Value::as_object_mut)
        else {
            return false;
        };

        let stats = object
            .entry(STATS_FIELD)
            .or_insert_with(|| Value::Object(Map::new()));
        match stats.as_object_mut() {
            Some(stats) => {
                stats.insert(stat.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Render the document for writing back to disk.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.root)?;
        content.push('\n');
        Ok(content)
    }
}

fn records(root: &Value) -> Option<&Vec<Value>> {
    match root {
        Value::Array(records) => Some(records),
        Value::Object(object) => object.get(TASKS_FIELD)?.as_array(),
        _ => None,
    }
}

fn records_mut(root: &mut Value) -> Option<&mut Vec<Value>> {
    match root {
        Value::Array(records) => Some(records),
        Value::Object(object) => object.get_mut(TASKS_FIELD)?.as_array_mut(),
        _ => None,
    }
}

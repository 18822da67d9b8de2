// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CSV task-results tables
//!
//! One row per task. The task-key column holds the id and every other
//! column is a stat. Empty cells are absent stats.

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{CopyTaskError, Result};

/// A parsed CSV task table
#[derive(Debug, Clone)]
pub struct CsvTasks {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    key_column: usize,
    ids: Vec<String>,
    index: HashMap<String, usize>,
}

impl CsvTasks {
    /// Read a table and index its rows by the `task_key` column.
    pub fn read<R: Read>(reader: R, path: &Path, task_key: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let key_column = headers
            .iter()
            .position(|header| header == task_key)
            .ok_or_else(|| {
                CopyTaskError::InvalidTaskFile(format!(
                    "{}: no '{}' column",
                    path.display(),
                    task_key
                ))
            })?;

        let mut rows = Vec::new();
        let mut ids = Vec::new();
        let mut index = HashMap::new();
        for record in reader.records() {
            let row: Vec<String> = record?.iter().map(str::to_string).collect();
            let id = row[key_column].trim().to_string();
            if id.is_empty() {
                return Err(CopyTaskError::InvalidTaskFile(format!(
                    "{}: row {} has an empty '{}'",
                    path.display(),
                    rows.len() + 1,
                    task_key
                )));
            }
            if index.insert(id.clone(), rows.len()).is_some() {
                return Err(CopyTaskError::DuplicateTask {
                    task: id,
                    path: path.to_path_buf(),
                });
            }
            ids.push(id);
            rows.push(row);
        }

        Ok(Self {
            headers,
            rows,
            key_column,
            ids,
            index,
        })
    }

    /// Task ids in row order
    pub fn task_ids(&self) -> &[String] {
        &self.ids
    }

    fn stat_column(&self, stat: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header == stat)
            .filter(|&column| column != self.key_column)
    }

    /// Look up a stat on a task
    pub fn stat(&self, task: &str, stat: &str) -> Option<Value> {
        let row = *self.index.get(task)?;
        let column = self.stat_column(stat)?;
        cell_to_value(&self.rows[row][column])
    }

    /// Set a stat on a task, appending the column if the table lacks it.
    /// Returns false when the task does not exist or `stat` is the key column.
    pub fn set_stat(&mut self, task: &str, stat: &str, value: &Value) -> bool {
        let Some(&row) = self.index.get(task) else {
            return false;
        };
        if stat == self.headers[self.key_column] {
            return false;
        }

        let column = match self.stat_column(stat) {
            Some(column) => column,
            None => {
                self.headers.push(stat.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        };
        self.rows[row][column] = value_to_cell(value);
        true
    }

    /// Write the table, header first.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// A cell becomes a number only when the number prints back as the same
/// text, so copying never rewrites digits. Anything else stays a string.
fn cell_to_value(cell: &str) -> Option<Value> {
    if cell.trim().is_empty() {
        return None;
    }
    let number = cell
        .parse::<i64>()
        .ok()
        .map(Value::from)
        .or_else(|| {
            cell.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
        })
        .filter(|number| number.to_string() == cell);
    Some(number.unwrap_or_else(|| Value::String(cell.to_string())))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read(content: &str) -> Result<CsvTasks> {
        CsvTasks::read(content.as_bytes(), Path::new("results.csv"), "task")
    }

    fn render(table: &CsvTasks) -> String {
        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_read_and_lookup() {
        let table = read("task,meanFitness,label\nr1,0.75,alpha\nr2,3,\n").unwrap();
        assert_eq!(table.task_ids(), ["r1", "r2"]);
        assert_eq!(table.stat("r1", "meanFitness"), Some(json!(0.75)));
        assert_eq!(table.stat("r2", "meanFitness"), Some(json!(3)));
        assert_eq!(table.stat("r1", "label"), Some(json!("alpha")));
        assert_eq!(table.stat("r2", "label"), None);
        assert_eq!(table.stat("r1", "missing"), None);
        assert_eq!(table.stat("r9", "meanFitness"), None);
    }

    #[test]
    fn test_key_column_is_not_a_stat() {
        let table = read("task,x\nr1,1\n").unwrap();
        assert_eq!(table.stat("r1", "task"), None);
    }

    #[test]
    fn test_read_requires_key_column() {
        let err = read("run,x\nr1,1\n").unwrap_err();
        assert!(err.to_string().contains("no 'task' column"));
    }

    #[test]
    fn test_read_trims_headers() {
        let table = read(" task , x \nr1,1\n").unwrap();
        assert_eq!(table.stat("r1", "x"), Some(json!(1)));
    }

    #[test]
    fn test_read_rejects_duplicate_ids() {
        let err = read("task,x\nr1,1\nr1,2\n").unwrap_err();
        assert!(matches!(err, CopyTaskError::DuplicateTask { .. }));
    }

    #[test]
    fn test_read_rejects_empty_id() {
        let err = read("task,x\n,1\n").unwrap_err();
        assert!(matches!(err, CopyTaskError::InvalidTaskFile(_)));
    }

    #[test]
    fn test_read_rejects_ragged_rows() {
        let err = read("task,x\nr1,1,extra\n").unwrap_err();
        assert!(matches!(err, CopyTaskError::Csv(_)));
    }

    #[test]
    fn test_non_finite_cells_stay_strings() {
        let table = read("task,x\nr1,NaN\n").unwrap();
        assert_eq!(table.stat("r1", "x"), Some(json!("NaN")));
    }

    #[test]
    fn test_cells_keep_their_text() {
        let table = read("task,code\nr1,007\nr2,1e3\nr3,0.10\nr4,12345678901234567890\nr5,42\n")
            .unwrap();
        assert_eq!(table.stat("r1", "code"), Some(json!("007")));
        assert_eq!(table.stat("r2", "code"), Some(json!("1e3")));
        assert_eq!(table.stat("r3", "code"), Some(json!("0.10")));
        assert_eq!(
            table.stat("r4", "code"),
            Some(json!("12345678901234567890"))
        );
        assert_eq!(table.stat("r5", "code"), Some(json!(42)));
    }

    #[test]
    fn test_set_existing_column() {
        let mut table = read("task,x,y\nr1,1,a\nr2,2,b\n").unwrap();
        assert!(table.set_stat("r2", "x", &json!(0.5)));
        assert_eq!(render(&table), "task,x,y\nr1,1,a\nr2,0.5,b\n");
    }

    #[test]
    fn test_set_appends_column() {
        let mut table = read("task,x\nr1,1\nr2,2\n").unwrap();
        assert!(table.set_stat("r1", "meanFitness", &json!("high")));
        assert_eq!(render(&table), "task,x,meanFitness\nr1,1,high\nr2,2,\n");
    }

    #[test]
    fn test_set_refuses_key_column() {
        let mut table = read("task,x\nr1,1\n").unwrap();
        assert!(!table.set_stat("r1", "task", &json!("r2")));
        assert!(!table.set_stat("missing", "x", &json!(1)));
    }
}

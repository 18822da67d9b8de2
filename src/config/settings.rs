// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for copytask
//!
//! Handles loading settings from ~/.copytask/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod validation;

/// Default name of the field/column holding a task's id
pub const DEFAULT_TASK_KEY: &str = "task";

/// Main settings structure, stored in ~/.copytask/settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Field (JSON) or column (CSV) that identifies a task
    #[serde(default = "default_task_key")]
    pub task_key: String,

    /// Replace a stat the target task already has
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_task_key() -> String {
    DEFAULT_TASK_KEY.to_string()
}

fn default_overwrite() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            task_key: default_task_key(),
            overwrite: default_overwrite(),
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{CopyTaskError, Result};

use super::Settings;

impl Settings {
    /// Check that loaded settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.task_key.trim().is_empty() {
            return Err(CopyTaskError::Config(
                "task_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

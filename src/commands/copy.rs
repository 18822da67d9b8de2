// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Copy command
//!
//! Validates the positionals, hands the copy to a [`TaskCopier`] and
//! prints the confirmation line.

use std::io::Write;

use crate::cli::CopyRequest;
use crate::error::{Result, USAGE};
use crate::rewrites::{CopySummary, TaskCopier};

/// Execute the copy command, writing user-facing lines to `out`.
///
/// A wrong argument count prints the usage line and returns
/// [`CopyTaskError::Usage`](crate::error::CopyTaskError::Usage) without
/// calling the copier.
pub fn execute(
    args: &[String],
    copier: &dyn TaskCopier,
    out: &mut dyn Write,
) -> Result<CopySummary> {
    let request = parse_request(args, out)?;
    run(&request, copier, out)
}

/// Validate the positionals, printing the usage line when the count is wrong.
pub fn parse_request(args: &[String], out: &mut dyn Write) -> Result<CopyRequest> {
    match CopyRequest::from_args(args) {
        Ok(request) => Ok(request),
        Err(err) => {
            tracing::debug!("Rejected {} positional arguments", args.len());
            writeln!(out, "{}", USAGE)?;
            Err(err)
        }
    }
}

/// Hand a validated request to the copier and print the confirmation.
pub fn run(
    request: &CopyRequest,
    copier: &dyn TaskCopier,
    out: &mut dyn Write,
) -> Result<CopySummary> {
    let summary = copier.copy_task(&request.source, &request.stat, &request.target)?;
    writeln!(out, "{}", request.confirmation())?;
    Ok(summary)
}

// Vizb - Benchmark Visualization Toolkit
//
// Copyright (c) 2025 Goptics and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command implementations

mod generate;
mod merge;

pub use generate::generate;
pub use merge::merge;

use crate::error::CliError;
use crate::render::OutputFormat;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Append the format extension to `output` unless it already ends with it
/// (case-insensitively).
///
/// # Examples
///
/// ```
/// use vizb_cli::commands::resolve_output_path;
/// use vizb_cli::render::OutputFormat;
///
/// assert_eq!(resolve_output_path("report", OutputFormat::Html).to_str(), Some("report.html"));
/// assert_eq!(resolve_output_path("out.JSON", OutputFormat::Json).to_str(), Some("out.JSON"));
/// ```
pub fn resolve_output_path(output: &str, format: OutputFormat) -> PathBuf {
    let suffix = format!(".{}", format.extension());
    if output.to_ascii_lowercase().ends_with(&suffix) {
        PathBuf::from(output)
    } else {
        PathBuf::from(format!("{}{}", output, suffix))
    }
}

/// Write `content` to `output` (with the format extension enforced) or to stdout.
///
/// A status line naming the file goes to stderr so stdout stays clean.
pub fn write_output(
    content: &str,
    output: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match output.filter(|o| !o.is_empty()) {
        Some(output) => {
            let path = resolve_output_path(output, format);
            fs::write(&path, content).map_err(|e| CliError::io_error(&path, e))?;
            eprintln!("{} {}", "Output file:".green().bold(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(content.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))?;
        }
    }
    Ok(())
}

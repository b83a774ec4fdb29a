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

//! Error types for the vizb CLI.
//!
//! All commands return `Result<T, CliError>`. Only `main` turns an error into an exit
//! code and a message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use vizb_core::VizbError;

/// Errors raised by CLI commands.
///
/// # Examples
///
/// ```rust,no_run
/// use vizb_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or writing a file (or stdin/stdout) failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path involved, `<stdin>` or `<stdout>` for the standard streams
        path: PathBuf,
        /// Underlying message
        message: String,
    },

    /// Parsing or grouping failed.
    #[error(transparent)]
    Core(#[from] VizbError),

    /// Serializing a report failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// Serializer message
        message: String,
    },

    /// No target was given and stdin is a terminal.
    #[error("no target provided and no piped input detected")]
    NoInput,

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `merge` found no readable report.
    #[error("no valid benchmark files to merge")]
    NothingToMerge,
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a JSON format error.
    pub fn json_format(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

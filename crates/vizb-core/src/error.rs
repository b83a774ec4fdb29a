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

//! Error types for benchmark parsing and grouping.
//!
//! Errors fall into three groups:
//!
//! - **Configuration errors**: an invalid grouping pattern, grouping regex or name
//!   filter. These abort a run before any result is produced.
//! - **Input errors**: unreadable files, undecodable JSON in strict mode, or a
//!   benchmark name that a grouping regex does not match.
//! - **Whole-run errors**: the input contained no usable benchmark results.
//!
//! Lines that simply are not benchmark results are never errors; the parser skips
//! them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for vizb core operations.
pub type Result<T> = std::result::Result<T, VizbError>;

/// Errors produced by the vizb core.
///
/// # Examples
///
/// ```rust
/// use vizb_core::VizbError;
///
/// let err = VizbError::invalid_pattern("n/q", "unknown part 'q'");
/// assert!(err.is_config_error());
/// assert!(err.to_string().contains("n/q"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VizbError {
    /// Grouping pattern failed validation.
    #[error("invalid group pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// Grouping regex could not be compiled or names no usable group.
    #[error("invalid group regex '{regex}': {reason}")]
    InvalidGroupRegex {
        /// The offending regex source
        regex: String,
        /// Compiler message or validation reason
        reason: String,
    },

    /// A benchmark name did not match the grouping regex.
    #[error("benchmark name '{name}' does not match group regex '{regex}'")]
    GroupMismatch {
        /// The benchmark identifier
        name: String,
        /// The grouping regex source
        regex: String,
    },

    /// Benchmark name filter could not be compiled.
    #[error("invalid filter regex '{regex}': {reason}")]
    InvalidFilter {
        /// The offending regex source
        regex: String,
        /// Compiler message
        reason: String,
    },

    /// A flag value (unit, sort order, chart type) is not one of the accepted values.
    #[error("invalid {kind} '{value}', expected one of: {expected}")]
    InvalidUnit {
        /// What was being parsed, e.g. `time unit`
        kind: &'static str,
        /// The rejected value
        value: String,
        /// Accepted spellings
        expected: &'static str,
    },

    /// Reading the input failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path of the input (or `<stdin>` / `<reader>`)
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// A line could not be decoded as a JSON test event in strict JSON mode.
    #[error("invalid JSON event at line {line}: {message}")]
    Json {
        /// 1-based line number
        line: usize,
        /// Decoder message
        message: String,
    },

    /// The input contained no benchmark results.
    #[error("no benchmark results found")]
    NoResults,
}

impl VizbError {
    /// Create an invalid-pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-group-regex error.
    pub fn invalid_group_regex(regex: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGroupRegex {
            regex: regex.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-filter error.
    pub fn invalid_filter(regex: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilter {
            regex: regex.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Returns `true` for errors caused by user configuration rather than input.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. }
                | Self::InvalidGroupRegex { .. }
                | Self::InvalidFilter { .. }
                | Self::InvalidUnit { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = VizbError::io_error(
            "bench.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.txt"));
        assert!(msg.contains("file not found"));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_no_results_display() {
        assert_eq!(VizbError::NoResults.to_string(), "no benchmark results found");
    }

    #[test]
    fn test_config_errors_are_classified() {
        assert!(VizbError::invalid_pattern("", "pattern cannot be empty").is_config_error());
        assert!(VizbError::invalid_group_regex("(", "unclosed group").is_config_error());
        assert!(VizbError::invalid_filter("[", "unclosed class").is_config_error());

        let mismatch = VizbError::GroupMismatch {
            name: "Foo".to_string(),
            regex: "^Bar$".to_string(),
        };
        assert!(!mismatch.is_config_error());
    }

    #[test]
    fn test_json_error_display() {
        let err = VizbError::Json {
            line: 3,
            message: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "invalid JSON event at line 3: expected value");
    }
}

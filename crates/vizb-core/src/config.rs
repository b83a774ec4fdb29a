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

//! Parser configuration.
//!
//! [`ParseConfig`] carries everything the parser needs: display units, the grouping
//! strategy, an optional name filter and the input encoding. It can be built field by
//! field or through [`ParseConfig::builder`].
//!
//! # Examples
//!
//! ```rust
//! use vizb_core::config::{InputFormat, ParseConfig};
//! use vizb_core::units::TimeUnit;
//!
//! let config = ParseConfig::builder()
//!     .time_unit(TimeUnit::Milliseconds)
//!     .group_pattern("n/x/y")
//!     .filter("^Encode")
//!     .input_format(InputFormat::Text)
//!     .build();
//!
//! assert_eq!(config.group_pattern, "n/x/y");
//! assert_eq!(config.filter.as_deref(), Some("^Encode"));
//! ```

use crate::error::VizbError;
use crate::grouping::DEFAULT_PATTERN;
use crate::units::{CountUnit, MemoryUnit, TimeUnit};
use std::str::FromStr;

/// How input lines are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Detect from the first non-blank line. When it is a test event with an
    /// `Action`, the input is read as [`InputFormat::Json`]. Otherwise each line
    /// starting with `{` that decodes as an event is an event and everything else
    /// is raw text.
    #[default]
    Auto,
    /// Every line is raw text.
    Text,
    /// Every non-blank line must be a JSON test event.
    Json,
}

impl FromStr for InputFormat {
    type Err = VizbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(InputFormat::Auto),
            "text" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            _ => Err(VizbError::InvalidUnit {
                kind: "input format",
                value: s.to_string(),
                expected: "auto, text, json",
            }),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Auto => f.write_str("auto"),
            InputFormat::Text => f.write_str("text"),
            InputFormat::Json => f.write_str("json"),
        }
    }
}

/// Configuration for [`BenchParser`](crate::parser::BenchParser).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseConfig {
    /// Unit for `Execution Time`
    pub time_unit: TimeUnit,
    /// Unit for `Memory Usage`
    pub mem_unit: MemoryUnit,
    /// Scale for `Allocations` and `Iterations`
    pub count_unit: CountUnit,
    /// Positional grouping pattern
    pub group_pattern: String,
    /// Grouping regex; wins over `group_pattern` when set
    pub group_regex: Option<String>,
    /// Separator for last-three grouping; wins over `group_pattern` when set
    pub separator: Option<String>,
    /// Only benchmarks whose identifier matches are kept
    pub filter: Option<String>,
    /// Input encoding
    pub input_format: InputFormat,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            time_unit: TimeUnit::default(),
            mem_unit: MemoryUnit::default(),
            count_unit: CountUnit::default(),
            group_pattern: DEFAULT_PATTERN.to_string(),
            group_regex: None,
            separator: None,
            filter: None,
            input_format: InputFormat::default(),
        }
    }
}

impl ParseConfig {
    /// Start a builder with default settings.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::new()
    }
}

/// Fluent builder for [`ParseConfig`].
#[derive(Debug, Clone, Default)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution time unit.
    pub fn time_unit(mut self, unit: TimeUnit) -> Self {
        self.config.time_unit = unit;
        self
    }

    /// Set the memory unit.
    pub fn mem_unit(mut self, unit: MemoryUnit) -> Self {
        self.config.mem_unit = unit;
        self
    }

    /// Set the count scale.
    pub fn count_unit(mut self, unit: CountUnit) -> Self {
        self.config.count_unit = unit;
        self
    }

    /// Set the grouping pattern.
    pub fn group_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.group_pattern = pattern.into();
        self
    }

    /// Set the grouping regex. An empty string clears it.
    pub fn group_regex(mut self, regex: impl Into<String>) -> Self {
        self.config.group_regex = Some(regex.into()).filter(|r: &String| !r.is_empty());
        self
    }

    /// Set the grouping separator. An empty string clears it.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = Some(separator.into()).filter(|s: &String| !s.is_empty());
        self
    }

    /// Set the name filter. An empty string clears it.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.config.filter = Some(filter.into()).filter(|f: &String| !f.is_empty());
        self
    }

    /// Set the input encoding.
    pub fn input_format(mut self, format: InputFormat) -> Self {
        self.config.input_format = format;
        self
    }

    /// Finish building.
    pub fn build(self) -> ParseConfig {
        self.config
    }
}

/// Parse a unit flag, falling back to the default with a warning when invalid.
///
/// ```rust
/// use vizb_core::config::unit_or_default;
/// use vizb_core::units::{MemoryUnit, TimeUnit};
///
/// assert_eq!(unit_or_default::<MemoryUnit>("kb"), MemoryUnit::Kilobytes);
/// assert_eq!(unit_or_default::<TimeUnit>("fortnights"), TimeUnit::Nanoseconds);
/// ```
pub fn unit_or_default<U>(value: &str) -> U
where
    U: FromStr<Err = VizbError> + Default + std::fmt::Display,
{
    match value.parse::<U>() {
        Ok(unit) => unit,
        Err(err) => {
            let fallback = U::default();
            tracing::warn!("{}; using default '{}'", err, fallback);
            fallback
        }
    }
}

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

//! Benchmark name grouping.
//!
//! A benchmark identifier such as `Encode/Small/Json` is split into three parts:
//!
//! - **name**: the chart the result belongs to
//! - **xAxis**: the category (workload) within the chart
//! - **yAxis**: the series (subject)
//!
//! Three strategies are available. [`PatternGrouper`] assigns separator-delimited
//! pieces by position and tolerates missing pieces. [`RegexGrouper`] uses named
//! captures and rejects names it cannot match. [`SeparatorGrouper`] splits on one
//! separator and keeps the last three pieces.
//!
//! Precedence is regex, then separator, then pattern.

mod capture;
mod pattern;
mod separator;

pub use capture::RegexGrouper;
pub use pattern::PatternGrouper;
pub use separator::SeparatorGrouper;

use crate::config::ParseConfig;
use crate::error::Result;
use crate::model::NameGroups;

/// Pattern used when nothing else is configured: the whole identifier is the subject.
pub const DEFAULT_PATTERN: &str = "y";

/// A compiled grouping strategy.
#[derive(Debug, Clone)]
pub enum NameGrouper {
    /// Positional pattern
    Pattern(PatternGrouper),
    /// Named-capture regex
    Regex(RegexGrouper),
    /// Single separator, last three pieces
    Separator(SeparatorGrouper),
}

impl NameGrouper {
    /// Compile a grouper. A regex, when given, takes precedence over the pattern.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selected pattern or regex is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vizb_core::grouping::NameGrouper;
    ///
    /// let grouper = NameGrouper::new("n/y", None).unwrap();
    /// assert_eq!(grouper.group("Parallel/SubjectA").unwrap().y_axis, "SubjectA");
    ///
    /// let grouper = NameGrouper::new("n/y", Some(r"(?P<y>.+)")).unwrap();
    /// assert_eq!(grouper.group("Parallel/SubjectA").unwrap().y_axis, "Parallel/SubjectA");
    /// ```
    pub fn new(pattern: &str, regex: Option<&str>) -> Result<Self> {
        match regex.filter(|r| !r.is_empty()) {
            Some(regex) => Ok(NameGrouper::Regex(RegexGrouper::new(regex)?)),
            None => Ok(NameGrouper::Pattern(PatternGrouper::new(pattern)?)),
        }
    }

    /// Compile the strategy selected by `config`: the grouping regex, else the
    /// separator, else the pattern.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selected strategy is invalid.
    pub fn from_config(config: &ParseConfig) -> Result<Self> {
        if let Some(regex) = config.group_regex.as_deref().filter(|r| !r.is_empty()) {
            return Ok(NameGrouper::Regex(RegexGrouper::new(regex)?));
        }
        match config.separator.as_deref().filter(|s| !s.is_empty()) {
            Some(separator) => Ok(NameGrouper::Separator(SeparatorGrouper::new(separator)?)),
            None => Self::new(&config.group_pattern, None),
        }
    }

    /// Group `name`.
    ///
    /// # Errors
    ///
    /// Only the regex strategy fails, when `name` does not match.
    pub fn group(&self, name: &str) -> Result<NameGroups> {
        match self {
            NameGrouper::Pattern(p) => Ok(p.group(name)),
            NameGrouper::Regex(r) => r.group(name),
            NameGrouper::Separator(s) => Ok(s.group(name)),
        }
    }
}

impl Default for NameGrouper {
    fn default() -> Self {
        NameGrouper::Pattern(PatternGrouper::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_takes_precedence() {
        let grouper = NameGrouper::new("n/x/y", Some(r"^(?P<n>\w+)")).unwrap();
        assert!(matches!(grouper, NameGrouper::Regex(_)));
    }

    #[test]
    fn test_empty_regex_falls_back_to_pattern() {
        let grouper = NameGrouper::new("n/x/y", Some("")).unwrap();
        assert!(matches!(grouper, NameGrouper::Pattern(_)));
    }

    #[test]
    fn test_from_config_precedence() {
        let config = ParseConfig::builder()
            .group_pattern("n/x/y")
            .separator("-")
            .build();
        assert!(matches!(
            NameGrouper::from_config(&config).unwrap(),
            NameGrouper::Separator(_)
        ));

        let config = ParseConfig::builder()
            .separator("-")
            .group_regex(r"(?P<y>.+)")
            .build();
        assert!(matches!(
            NameGrouper::from_config(&config).unwrap(),
            NameGrouper::Regex(_)
        ));

        let config = ParseConfig::builder().group_pattern("n/y").build();
        assert!(matches!(
            NameGrouper::from_config(&config).unwrap(),
            NameGrouper::Pattern(_)
        ));
    }

    #[test]
    fn test_pattern_error_surfaces() {
        assert!(NameGrouper::new("n/bogus", None).is_err());
    }

    #[test]
    fn test_default_matches_default_pattern() {
        let compiled = PatternGrouper::new(DEFAULT_PATTERN).unwrap();
        assert_eq!(compiled, PatternGrouper::default());
    }

    #[test]
    fn test_default_uses_whole_name_as_subject() {
        let groups = NameGrouper::default().group("Encode/Json").unwrap();
        assert_eq!(groups.y_axis, "Encode/Json");
        assert_eq!(groups.name, "");
    }
}

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

//! Grouping by regular expression with named capture groups.

use crate::error::{Result, VizbError};
use crate::model::{NameGroups, Slot};
use regex::Regex;

/// Groups benchmark names with a user-supplied regex.
///
/// Capture groups named `n`/`name`, `x`/`xAxis` and `y`/`yAxis` fill the matching
/// slots. Other groups are ignored.
///
/// Unlike [`PatternGrouper`](super::PatternGrouper), a name that does not match is an
/// error: a regex that fails on some names almost always means the regex is wrong.
///
/// # Examples
///
/// ```rust
/// use vizb_core::grouping::RegexGrouper;
///
/// let grouper = RegexGrouper::new(r"^(?P<n>[^/]+)/size=(?P<x>\d+)/(?P<y>.+)$").unwrap();
/// let groups = grouper.group("Sort/size=100/quick").unwrap();
/// assert_eq!(groups.name, "Sort");
/// assert_eq!(groups.x_axis, "100");
/// assert_eq!(groups.y_axis, "quick");
///
/// assert!(grouper.group("Sort").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegexGrouper {
    regex: Regex,
    captures: Vec<(String, Slot)>,
}

impl RegexGrouper {
    /// Compile `source`.
    ///
    /// # Errors
    ///
    /// Returns [`VizbError::InvalidGroupRegex`] when the regex does not compile or has
    /// no capture group named after a slot.
    pub fn new(source: &str) -> Result<Self> {
        let regex =
            Regex::new(source).map_err(|e| VizbError::invalid_group_regex(source, e.to_string()))?;

        let captures: Vec<(String, Slot)> = regex
            .capture_names()
            .flatten()
            .filter_map(|group| Slot::from_token(group).map(|slot| (group.to_string(), slot)))
            .collect();

        if captures.is_empty() {
            return Err(VizbError::invalid_group_regex(
                source,
                "no capture group named n/name, x/xAxis or y/yAxis",
            ));
        }

        Ok(Self { regex, captures })
    }

    /// The regex source.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Match `name` and fill the slots from the named captures.
    ///
    /// # Errors
    ///
    /// Returns [`VizbError::GroupMismatch`] when `name` does not match.
    pub fn group(&self, name: &str) -> Result<NameGroups> {
        let caps = self.regex.captures(name).ok_or_else(|| VizbError::GroupMismatch {
            name: name.to_string(),
            regex: self.source().to_string(),
        })?;

        let mut groups = NameGroups::default();
        for (group, slot) in &self.captures {
            if let Some(m) = caps.name(group) {
                groups.set(*slot, m.as_str());
            }
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_group_names() {
        let grouper =
            RegexGrouper::new(r"(?P<name>\w+)/(?P<xAxis>\w+)/(?P<yAxis>\w+)").unwrap();
        let groups = grouper.group("Encode/Small/Json").unwrap();
        assert_eq!(groups.name, "Encode");
        assert_eq!(groups.x_axis, "Small");
        assert_eq!(groups.y_axis, "Json");
    }

    #[test]
    fn test_optional_group_leaves_slot_empty() {
        let grouper = RegexGrouper::new(r"^(?P<y>[A-Za-z]+)(?:/(?P<x>\d+))?$").unwrap();

        let groups = grouper.group("Quick/10").unwrap();
        assert_eq!(groups.y_axis, "Quick");
        assert_eq!(groups.x_axis, "10");

        let groups = grouper.group("Quick").unwrap();
        assert_eq!(groups.y_axis, "Quick");
        assert_eq!(groups.x_axis, "");
        assert_eq!(groups.name, "");
    }

    #[test]
    fn test_unrelated_groups_ignored() {
        let grouper = RegexGrouper::new(r"(?P<prefix>Fast|Slow)(?P<y>\w+)").unwrap();
        let groups = grouper.group("FastParser").unwrap();
        assert_eq!(groups.y_axis, "Parser");
        assert_eq!(groups.filled(), 1);
    }

    #[test]
    fn test_invalid_regex() {
        let err = RegexGrouper::new(r"(?P<n>[a-z").unwrap_err();
        assert!(matches!(err, VizbError::InvalidGroupRegex { .. }));
    }

    #[test]
    fn test_regex_without_slot_groups() {
        let err = RegexGrouper::new(r"(\w+)/(\w+)").unwrap_err();
        assert!(err.to_string().contains("no capture group"));
    }

    #[test]
    fn test_mismatch_is_error() {
        let grouper = RegexGrouper::new(r"^(?P<n>\w+)/(?P<y>\w+)$").unwrap();
        let err = grouper.group("NoSlash").unwrap_err();
        assert_eq!(
            err,
            VizbError::GroupMismatch {
                name: "NoSlash".to_string(),
                regex: r"^(?P<n>\w+)/(?P<y>\w+)$".to_string(),
            }
        );
    }
}

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

//! Positional grouping patterns such as `n/x/y` or `/name//yAxis`.

use crate::error::{Result, VizbError};
use crate::model::{NameGroups, Slot};

fn is_separator(c: char) -> bool {
    c == '/' || c == '_'
}

/// A validated grouping pattern.
///
/// The pattern lists slots separated by `/` or `_`. The same separators, in the same
/// order, are used to cut the benchmark identifier, and the pieces are assigned to the
/// slots by position. Empty tokens skip a piece.
///
/// # Examples
///
/// ```rust
/// use vizb_core::grouping::PatternGrouper;
///
/// let grouper = PatternGrouper::new("n/x/y").unwrap();
/// let groups = grouper.group("Group/Task/SubjectA");
/// assert_eq!(groups.name, "Group");
/// assert_eq!(groups.x_axis, "Task");
/// assert_eq!(groups.y_axis, "SubjectA");
///
/// // Leading separator skips the first piece.
/// let grouper = PatternGrouper::new("/name//yAxis").unwrap();
/// let groups = grouper.group("Tasks/Name/Workload/Subject");
/// assert_eq!(groups.name, "Name");
/// assert_eq!(groups.x_axis, "");
/// assert_eq!(groups.y_axis, "Subject");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrouper {
    pattern: String,
    slots: Vec<Option<Slot>>,
    separators: Vec<char>,
}

impl PatternGrouper {
    /// Validate and compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`VizbError::InvalidPattern`] when the pattern is empty, contains a
    /// token other than `n`/`name`, `x`/`xAxis`, `y`/`yAxis`, or names no slot at all.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(VizbError::invalid_pattern(pattern, "pattern cannot be empty"));
        }

        let slots = pattern
            .split(is_separator)
            .map(|token| {
                if token.is_empty() {
                    return Ok(None);
                }
                Slot::from_token(token).map(Some).ok_or_else(|| {
                    VizbError::invalid_pattern(
                        pattern,
                        format!(
                            "invalid part '{}'; only name (n), xAxis (x) and yAxis (y) are allowed",
                            token
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if slots.iter().all(Option::is_none) {
            return Err(VizbError::invalid_pattern(
                pattern,
                "pattern must contain at least one of name (n), xAxis (x) or yAxis (y)",
            ));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            slots,
            separators: pattern.chars().filter(|c| is_separator(*c)).collect(),
        })
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of non-empty slots in the pattern.
    pub fn slot_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Cut `name` into fragments using the pattern's separators in order.
    ///
    /// Each separator splits every current fragment at most once. Empty fragments are
    /// dropped.
    pub fn split<'a>(&self, name: &'a str) -> Vec<&'a str> {
        let mut parts = vec![name];

        for &sep in &self.separators {
            parts = parts
                .into_iter()
                .flat_map(|part| part.splitn(2, sep))
                .collect();
        }

        parts.retain(|p| !p.is_empty());
        parts
    }

    /// Assign the fragments of `name` to slots by position.
    ///
    /// Missing fragments leave their slot empty and extra fragments are ignored.
    pub fn group(&self, name: &str) -> NameGroups {
        let parts = self.split(name);
        let mut groups = NameGroups::default();

        for (slot, part) in self.slots.iter().zip(parts) {
            if let Some(slot) = slot {
                groups.set(*slot, part);
            }
        }

        groups
    }
}

impl Default for PatternGrouper {
    /// The `y` pattern: the whole identifier is the subject.
    fn default() -> Self {
        Self {
            pattern: "y".to_string(),
            slots: vec![Some(Slot::YAxis)],
            separators: Vec::new(),
        }
    }
}

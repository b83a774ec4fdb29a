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

//! Grouping by a single separator, keeping the last three pieces.

use crate::error::{Result, VizbError};
use crate::model::NameGroups;

/// Splits benchmark names on every occurrence of one separator.
///
/// The last three pieces become name, x-axis and y-axis. Two pieces fill name and
/// y-axis, and a single piece is the y-axis. The CPU suffix is stripped before
/// grouping, so a `-` separator does not see it.
///
/// # Examples
///
/// ```rust
/// use vizb_core::grouping::SeparatorGrouper;
///
/// let grouper = SeparatorGrouper::new("-").unwrap();
/// let groups = grouper.group("Suite-Encode-Small-Json");
/// assert_eq!(groups.name, "Encode");
/// assert_eq!(groups.x_axis, "Small");
/// assert_eq!(groups.y_axis, "Json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorGrouper {
    separator: String,
}

impl SeparatorGrouper {
    /// Create a grouper for `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`VizbError::InvalidPattern`] when the separator is empty.
    pub fn new(separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(VizbError::invalid_pattern(
                separator,
                "separator cannot be empty",
            ));
        }
        Ok(Self {
            separator: separator.to_string(),
        })
    }

    /// The separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Split `name` and assign the last pieces to the slots.
    pub fn group(&self, name: &str) -> NameGroups {
        let parts: Vec<&str> = name.split(self.separator.as_str()).collect();

        let (group, x_axis, y_axis) = match parts.as_slice() {
            [] => ("", "", ""),
            [y] => ("", "", *y),
            [n, y] => (*n, "", *y),
            [.., n, x, y] => (*n, *x, *y),
        };

        NameGroups {
            name: group.to_string(),
            x_axis: x_axis.to_string(),
            y_axis: y_axis.to_string(),
        }
    }
}

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

//! Grouping of parsed results into chart-ready series.
//!
//! [`aggregate`] folds a flat list of [`BenchmarkData`] into one [`ResultGroup`] per
//! benchmark name. Groups, categories, series and stat types all keep the order in
//! which they were first seen, so charts follow the order of the input.
//!
//! # Examples
//!
//! ```rust
//! use vizb_core::aggregate::aggregate;
//! use vizb_core::model::{BenchmarkData, Stat};
//!
//! let data = vec![
//!     BenchmarkData {
//!         name: "Sort".into(),
//!         x_axis: "100".into(),
//!         y_axis: "quick".into(),
//!         stats: vec![Stat::new("Execution Time", 10.0, "ns", "op")],
//!     },
//!     BenchmarkData {
//!         name: "Sort".into(),
//!         x_axis: "100".into(),
//!         y_axis: "merge".into(),
//!         stats: vec![Stat::new("Execution Time", 12.0, "ns", "op")],
//!     },
//! ];
//!
//! let groups = aggregate(&data);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].series, vec!["quick", "merge"]);
//! assert_eq!(groups[0].value("Execution Time (ns/op)", "100", "merge"), Some(12.0));
//! ```

use crate::model::BenchmarkData;
use serde::Serialize;
use std::collections::HashMap;

/// Colors assigned to series, in assignment order.
pub const PALETTE: [&str; 50] = [
    "#5470C6", "#3BA272", "#FC8452", "#73C0DE", "#EE6666", "#FAC858", "#9A60B4", "#EA7CCC",
    "#91CC75", "#FF9F7F", "#3E5A9E", "#2E7D32", "#EF6C00", "#7E57C2", "#F9A825", "#6A8ACF",
    "#4CAF50", "#FF8F00", "#AB47BC", "#FFEB3B", "#2B4E72", "#1B5E20", "#D84315", "#512DA8",
    "#F57F17", "#4A90E2", "#66BB6A", "#FF5722", "#BA68C8", "#FFF176", "#1E3A5F", "#00695C",
    "#BF360C", "#673AB7", "#C0CA33", "#7FB3D5", "#81C784", "#FFAB91", "#E040FB", "#DCE775",
    "#335C8A", "#388E3C", "#E64A19", "#9575CD", "#78909C", "#5C9EAD", "#AED581", "#FF7043",
    "#F06292", "#A1887F",
];

/// All results sharing one benchmark name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultGroup {
    /// Benchmark name (may be empty)
    pub name: String,
    /// Distinct x-axis values in first-seen order
    #[serde(rename = "xAxis")]
    pub x_axis: Vec<String>,
    /// Distinct y-axis values (series) in first-seen order
    pub series: Vec<String>,
    /// Distinct stat labels in first-seen order
    #[serde(rename = "statTypes")]
    pub stat_types: Vec<String>,
    #[serde(skip)]
    values: HashMap<(String, String, String), f64>,
}

impl ResultGroup {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Value of `stat_type` for category `x` and series `series`.
    pub fn value(&self, stat_type: &str, x: &str, series: &str) -> Option<f64> {
        self.values
            .get(&(stat_type.to_string(), x.to_string(), series.to_string()))
            .copied()
    }

    /// Values of `stat_type` for `series`, one per x-axis category.
    pub fn series_values(&self, stat_type: &str, series: &str) -> Vec<Option<f64>> {
        self.x_axis
            .iter()
            .map(|x| self.value(stat_type, x, series))
            .collect()
    }

    fn add(&mut self, data: &BenchmarkData) {
        push_unique(&mut self.x_axis, &data.x_axis);
        push_unique(&mut self.series, &data.y_axis);

        for stat in &data.stats {
            push_unique(&mut self.stat_types, &stat.kind);
            self.values.insert(
                (stat.kind.clone(), data.x_axis.clone(), data.y_axis.clone()),
                stat.value,
            );
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Group `results` by name, preserving first-seen order.
///
/// When two results share name, x-axis, y-axis and stat type, the later value wins.
pub fn aggregate(results: &[BenchmarkData]) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for data in results {
        let slot = *index.entry(data.name.as_str()).or_insert_with(|| {
            groups.push(ResultGroup::new(&data.name));
            groups.len() - 1
        });
        groups[slot].add(data);
    }

    groups
}

/// Assigns palette colors to series keys.
///
/// The first key gets the first color, the next new key the next color, wrapping
/// around after the last one. Asking again for a known key returns its color.
#[derive(Debug, Clone, Default)]
pub struct ColorAllocator {
    assigned: HashMap<String, usize>,
    next: usize,
}

impl ColorAllocator {
    /// Create an allocator with no assignments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `key`, assigning the next one if needed.
    pub fn color_for(&mut self, key: &str) -> &'static str {
        if let Some(&idx) = self.assigned.get(key) {
            return PALETTE[idx];
        }

        let idx = self.next % PALETTE.len();
        self.assigned.insert(key.to_string(), idx);
        self.next = (self.next + 1) % PALETTE.len();
        PALETTE[idx]
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns `true` if no color has been assigned.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

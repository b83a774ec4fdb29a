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

//! Report document: the JSON output format and the input format of `merge`.

use crate::error::VizbError;
use crate::model::BenchmarkData;
use crate::parser::ParseOutput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A complete benchmark report.
///
/// # Examples
///
/// ```rust
/// use vizb_core::report::{Report, Settings};
///
/// let json = r#"{
///     "name": "Encoding",
///     "description": "",
///     "cpu": {"name": "Apple M2", "cores": 8},
///     "settings": {"sort": {"enabled": false, "order": "asc"}, "showLabels": false, "charts": ["bar"]},
///     "data": []
/// }"#;
///
/// let report: Report = serde_json::from_str(json).unwrap();
/// assert_eq!(report.cpu.cores, 8);
/// assert_eq!(report.settings.charts.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report title
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Machine the benchmarks ran on
    #[serde(default)]
    pub cpu: CpuInfo,
    /// Viewer settings
    #[serde(default)]
    pub settings: Settings,
    /// Benchmark records in input order
    pub data: Vec<BenchmarkData>,
}

impl Report {
    /// Build a report from a parse run.
    pub fn from_output(
        name: impl Into<String>,
        description: impl Into<String>,
        output: ParseOutput,
        settings: Settings,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cpu: CpuInfo {
                name: output.environment.cpu.unwrap_or_default(),
                cores: output.cpu_count,
            },
            settings,
            data: output.results,
        }
    }
}

/// Processor description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Model name from the `cpu:` header line
    #[serde(default)]
    pub name: String,
    /// Core count from the benchmark name suffix
    #[serde(default)]
    pub cores: u32,
}

/// Viewer settings embedded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Sorting of series values
    #[serde(default)]
    pub sort: SortSettings,
    /// Draw value labels on the charts
    #[serde(rename = "showLabels", default)]
    pub show_labels: bool,
    /// Chart kinds to render, in display order
    #[serde(default = "ChartKind::all")]
    pub charts: Vec<ChartKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort: SortSettings::default(),
            show_labels: false,
            charts: ChartKind::all(),
        }
    }
}

/// Sort settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSettings {
    /// Whether sorting is active
    #[serde(default)]
    pub enabled: bool,
    /// Direction when active
    #[serde(default)]
    pub order: SortOrder,
}

impl SortSettings {
    /// Settings for an explicit sort order.
    pub fn by(order: SortOrder) -> Self {
        Self {
            enabled: true,
            order,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl FromStr for SortOrder {
    type Err = VizbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(VizbError::InvalidUnit {
                kind: "sort order",
                value: s.to_string(),
                expected: "asc, desc",
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// Chart kinds supported by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Grouped bar chart
    Bar,
    /// Line chart
    Line,
    /// Pie chart per category
    Pie,
}

impl ChartKind {
    /// Every chart kind, in default display order.
    pub fn all() -> Vec<ChartKind> {
        vec![ChartKind::Bar, ChartKind::Line, ChartKind::Pie]
    }

    /// Parse a comma separated list, skipping unknown entries with a warning.
    ///
    /// Duplicates are dropped. An empty result falls back to [`ChartKind::all`].
    ///
    /// ```rust
    /// use vizb_core::report::ChartKind;
    ///
    /// assert_eq!(ChartKind::parse_list("pie, bar"), vec![ChartKind::Pie, ChartKind::Bar]);
    /// assert_eq!(ChartKind::parse_list("radar"), ChartKind::all());
    /// ```
    pub fn parse_list(list: &str) -> Vec<ChartKind> {
        let mut kinds = Vec::new();
        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match item.parse::<ChartKind>() {
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(err) => tracing::warn!("{}; ignoring", err),
            }
        }

        if kinds.is_empty() {
            ChartKind::all()
        } else {
            kinds
        }
    }
}

impl FromStr for ChartKind {
    type Err = VizbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(VizbError::InvalidUnit {
                kind: "chart type",
                value: s.to_string(),
                expected: "bar, line, pie",
            }),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => f.write_str("bar"),
            ChartKind::Line => f.write_str("line"),
            ChartKind::Pie => f.write_str("pie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stat;
    use crate::parser::Environment;

    #[test]
    fn test_serialized_shape() {
        let report = Report {
            name: "Benchmarks".to_string(),
            description: "desc".to_string(),
            cpu: CpuInfo {
                name: "Apple M2".to_string(),
                cores: 8,
            },
            settings: Settings {
                sort: SortSettings::by(SortOrder::Desc),
                show_labels: true,
                charts: vec![ChartKind::Bar],
            },
            data: vec![BenchmarkData {
                name: String::new(),
                x_axis: String::new(),
                y_axis: "A".to_string(),
                stats: vec![Stat::new("Execution Time", 1.0, "ns", "op")],
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cpu"]["cores"], 8);
        assert_eq!(json["settings"]["sort"]["enabled"], true);
        assert_eq!(json["settings"]["sort"]["order"], "desc");
        assert_eq!(json["settings"]["showLabels"], true);
        assert_eq!(json["settings"]["charts"][0], "bar");
        assert_eq!(json["data"][0]["yAxis"], "A");
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let report: Report = serde_json::from_str(r#"{"name":"x","data":[]}"#).unwrap();
        assert_eq!(report.settings, Settings::default());
        assert_eq!(report.cpu, CpuInfo::default());
    }

    #[test]
    fn test_from_output() {
        let output = ParseOutput {
            results: vec![],
            cpu_count: 16,
            has_mem_stats: false,
            environment: Environment {
                cpu: Some("AMD Ryzen".to_string()),
                ..Environment::default()
            },
        };
        let report = Report::from_output("N", "D", output, Settings::default());
        assert_eq!(report.cpu.name, "AMD Ryzen");
        assert_eq!(report.cpu.cores, 16);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_chart_list_dedup() {
        assert_eq!(
            ChartKind::parse_list("bar,bar,line"),
            vec![ChartKind::Bar, ChartKind::Line]
        );
        assert_eq!(ChartKind::parse_list(""), ChartKind::all());
    }
}

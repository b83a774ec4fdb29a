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

//! Output rendering.
//!
//! - [`html`]: a self-contained page drawing every chart with ECharts
//! - [`json`]: the report document itself

pub mod html;
pub mod json;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use vizb_core::aggregate::{aggregate, ColorAllocator};
use vizb_core::report::{CpuInfo, Report, Settings, SortOrder};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Interactive HTML page
    #[default]
    Html,
    /// Report document as JSON
    Json,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid format '{}', expected one of: html, json", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One chart: a stat type of one benchmark group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Group name (may be empty)
    pub title: String,
    /// Stat label, used as axis title
    #[serde(rename = "statType")]
    pub stat_type: String,
    /// Categories
    #[serde(rename = "xAxis")]
    pub x_axis: Vec<String>,
    /// One entry per subject
    pub series: Vec<SeriesSpec>,
}

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    /// Subject
    pub name: String,
    /// Palette color
    pub color: &'static str,
    /// One value per category; `null` where the subject has no result
    pub values: Vec<Option<f64>>,
}

/// A report prepared for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    /// Report title
    pub name: String,
    /// Description
    pub description: String,
    /// Machine info
    pub cpu: CpuInfo,
    /// Viewer settings
    pub settings: Settings,
    /// Charts in group order, then stat order
    pub charts: Vec<ChartSpec>,
}

impl ReportView {
    /// Aggregate `report` into charts, assigning series colors from `colors`.
    ///
    /// When sorting is enabled, series are ordered by the mean of their values.
    pub fn build(report: &Report, colors: &mut ColorAllocator) -> Self {
        let mut charts = Vec::new();

        for group in aggregate(&report.data) {
            for stat_type in &group.stat_types {
                let mut series: Vec<SeriesSpec> = group
                    .series
                    .iter()
                    .map(|name| SeriesSpec {
                        name: name.clone(),
                        color: colors.color_for(name),
                        values: group.series_values(stat_type, name),
                    })
                    .filter(|s| s.values.iter().any(Option::is_some))
                    .collect();

                if report.settings.sort.enabled {
                    sort_series(&mut series, report.settings.sort.order);
                }

                charts.push(ChartSpec {
                    title: group.name.clone(),
                    stat_type: stat_type.clone(),
                    x_axis: group.x_axis.clone(),
                    series,
                });
            }
        }

        Self {
            name: report.name.clone(),
            description: report.description.clone(),
            cpu: report.cpu.clone(),
            settings: report.settings.clone(),
            charts,
        }
    }
}

fn mean(values: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        0.0
    } else {
        present.iter().sum::<f64>() / present.len() as f64
    }
}

fn sort_series(series: &mut [SeriesSpec], order: SortOrder) {
    series.sort_by(|a, b| {
        let ord = mean(&a.values).total_cmp(&mean(&b.values));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizb_core::report::SortSettings;
    use vizb_core::{BenchmarkData, Stat};

    fn data(x: &str, y: &str, ns: f64, mem: Option<f64>) -> BenchmarkData {
        let mut stats = vec![Stat::new("Execution Time", ns, "ns", "op")];
        if let Some(mem) = mem {
            stats.push(Stat::new("Memory Usage", mem, "B", "op"));
        }
        BenchmarkData {
            name: "Sort".to_string(),
            x_axis: x.to_string(),
            y_axis: y.to_string(),
            stats,
        }
    }

    fn report(data: Vec<BenchmarkData>, settings: Settings) -> Report {
        Report {
            name: "R".to_string(),
            description: String::new(),
            cpu: CpuInfo::default(),
            settings,
            data,
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_one_chart_per_stat_type() {
        let r = report(
            vec![data("10", "quick", 5.0, Some(8.0)), data("10", "merge", 7.0, None)],
            Settings::default(),
        );
        let view = ReportView::build(&r, &mut ColorAllocator::new());

        assert_eq!(view.charts.len(), 2);
        assert_eq!(view.charts[0].stat_type, "Execution Time (ns/op)");
        assert_eq!(view.charts[0].series.len(), 2);
        // merge has no memory stat
        assert_eq!(view.charts[1].series.len(), 1);
        assert_eq!(view.charts[1].series[0].name, "quick");
    }

    #[test]
    fn test_colors_follow_series_across_charts() {
        let r = report(
            vec![data("10", "quick", 5.0, Some(8.0)), data("10", "merge", 7.0, Some(9.0))],
            Settings::default(),
        );
        let view = ReportView::build(&r, &mut ColorAllocator::new());

        assert_eq!(view.charts[0].series[0].color, view.charts[1].series[0].color);
        assert_ne!(view.charts[0].series[0].color, view.charts[0].series[1].color);
    }

    #[test]
    fn test_sorting_descending() {
        let settings = Settings {
            sort: SortSettings::by(SortOrder::Desc),
            ..Settings::default()
        };
        let r = report(
            vec![data("10", "fast", 1.0, None), data("10", "slow", 9.0, None)],
            settings,
        );
        let view = ReportView::build(&r, &mut ColorAllocator::new());
        let names: Vec<_> = view.charts[0].series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["slow", "fast"]);
    }
}

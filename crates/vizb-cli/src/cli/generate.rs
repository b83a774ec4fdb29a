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

//! Arguments of the default (chart generation) command.

use crate::render::OutputFormat;
use clap::Args;
use vizb_core::config::{unit_or_default, InputFormat, ParseConfig};
use vizb_core::report::{ChartKind, Settings, SortOrder, SortSettings};
use vizb_core::units::{CountUnit, MemoryUnit, TimeUnit};

/// Flags for turning benchmark output into a chart.
///
/// Unit, format, sort and chart values are lenient: an unknown value is reported as
/// a warning and replaced by the default. Grouping and filter settings are strict.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Benchmark output file (text or `go test -json`); read from stdin when omitted
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Name of the chart
    #[arg(short, long, default_value = "Benchmarks")]
    pub name: String,

    /// Description of the benchmark
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Output file; the format extension is appended if missing. Stdout when absent
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (html, json)
    #[arg(short, long, default_value = "html")]
    pub format: String,

    /// Time unit (ns, us, ms, s)
    #[arg(short, long, default_value = "ns")]
    pub time_unit: String,

    /// Memory unit (b, B, KB, MB, GB)
    #[arg(short, long, default_value = "B")]
    pub mem_unit: String,

    /// Allocation and count unit (K, M, B, T); raw counts when empty
    #[arg(short, long, default_value = "")]
    pub alloc_unit: String,

    /// Grouping pattern over name (n), xAxis (x) and yAxis (y), separated by / or _ [default: y]
    #[arg(short = 'p', long)]
    pub group_pattern: Option<String>,

    /// Split names on this separator and use the last three pieces as name, xAxis and
    /// yAxis; ignored when a pattern or regex is given
    #[arg(short = 'S', long)]
    pub separator: Option<String>,

    /// Grouping regex with named groups n/name, x/xAxis, y/yAxis; overrides the pattern
    #[arg(short = 'r', long)]
    pub group_regex: Option<String>,

    /// Only include benchmarks whose name matches this regex
    #[arg(short = 'F', long)]
    pub filter: Option<String>,

    /// Sort series (asc, desc)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Chart types to show, comma separated (bar, line, pie)
    #[arg(short, long, default_value = "bar,line,pie")]
    pub charts: String,

    /// Show value labels on the charts
    #[arg(short = 'l', long)]
    pub show_labels: bool,

    /// Input encoding (auto, text, json); auto reads JSON when the first line is a test event
    #[arg(short = 'i', long, default_value = "auto")]
    pub input_format: String,
}

impl GenerateArgs {
    /// Parser configuration from the flags.
    pub fn parse_config(&self) -> ParseConfig {
        let mut builder = ParseConfig::builder()
            .time_unit(unit_or_default::<TimeUnit>(&self.time_unit))
            .mem_unit(unit_or_default::<MemoryUnit>(&self.mem_unit))
            .count_unit(unit_or_default::<CountUnit>(&self.alloc_unit))
            .input_format(unit_or_default::<InputFormat>(&self.input_format));

        match (&self.group_pattern, &self.separator) {
            (Some(pattern), _) => builder = builder.group_pattern(pattern.clone()),
            (None, Some(separator)) => builder = builder.separator(separator.clone()),
            (None, None) => {}
        }
        if let Some(regex) = &self.group_regex {
            builder = builder.group_regex(regex.clone());
        }
        if let Some(filter) = &self.filter {
            builder = builder.filter(filter.clone());
        }

        builder.build()
    }

    /// Output format, falling back to HTML with a warning.
    pub fn output_format(&self) -> OutputFormat {
        self.format.parse().unwrap_or_else(|err| {
            tracing::warn!("{}; using default '{}'", err, OutputFormat::default());
            OutputFormat::default()
        })
    }

    /// Viewer settings from the flags.
    pub fn settings(&self) -> Settings {
        let sort = match self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            None => SortSettings::default(),
            Some(value) => match value.parse::<SortOrder>() {
                Ok(order) => SortSettings::by(order),
                Err(err) => {
                    tracing::warn!("{}; sorting disabled", err);
                    SortSettings::default()
                }
            },
        };

        Settings {
            sort,
            show_labels: self.show_labels,
            charts: ChartKind::parse_list(&self.charts),
        }
    }
}

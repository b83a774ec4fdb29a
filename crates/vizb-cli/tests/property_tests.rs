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

//! Property-based tests for the vizb CLI using proptest.
//!
//! - Output paths always carry exactly one format extension
//! - Progress counting matches the number of result lines
//! - Chart views keep one value per category for every series
//! - The binary reports one record per distinct benchmark line

use assert_cmd::Command;
use proptest::prelude::*;
use std::fs;
use vizb_cli::commands::resolve_output_path;
use vizb_cli::progress::{ProgressSink, ProgressTracker};
use vizb_cli::render::{OutputFormat, ReportView};
use vizb_core::aggregate::ColorAllocator;
use vizb_core::report::{CpuInfo, Report, Settings};
use vizb_core::{BenchmarkData, Stat};

// ===== Test Helpers =====

struct Quiet;

impl ProgressSink for Quiet {
    fn describe(&mut self, _message: String) {}
    fn finish(&mut self, _message: String) {}
}

fn vizb_cmd() -> Command {
    Command::cargo_bin("vizb").expect("Failed to find vizb binary")
}

// ===== Property-Based Test Generators =====

/// Benchmark identifier parts (no separators, no dashes)
fn part() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,9}").expect("Failed to create part regex")
}

fn format() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Html), Just(OutputFormat::Json)]
}

fn record() -> impl Strategy<Value = BenchmarkData> {
    (part(), part(), part(), 0.0f64..1e6).prop_map(|(name, x, y, ns)| BenchmarkData {
        name,
        x_axis: x,
        y_axis: y,
        stats: vec![Stat::new("Execution Time", ns, "ns", "op")],
    })
}

// ===== Output Path Properties =====

proptest! {
    #[test]
    fn prop_output_path_has_extension(name in "[a-z]{1,12}", fmt in format()) {
        let path = resolve_output_path(&name, fmt);
        let path = path.to_string_lossy().into_owned();
        let suffix = format!(".{}", fmt.extension());
        prop_assert!(path.ends_with(&suffix));

        // Resolving again changes nothing.
        let again = resolve_output_path(&path, fmt);
        prop_assert_eq!(again.to_string_lossy().into_owned(), path);
    }
}

// ===== Progress Properties =====

proptest! {
    #[test]
    fn prop_progress_counts_result_lines(flags in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut tracker = ProgressTracker::new(Quiet);
        for (i, is_result) in flags.iter().enumerate() {
            if *is_result {
                tracker.process_line(&format!("BenchmarkCase{}-8 10 {} ns/op", i, i));
            } else {
                tracker.process_line("PASS");
            }
        }
        let expected = flags.iter().filter(|f| **f).count();
        prop_assert_eq!(tracker.finish(), expected);
    }
}

// ===== Chart View Properties =====

proptest! {
    #[test]
    fn prop_series_values_align_with_categories(data in prop::collection::vec(record(), 1..30)) {
        let report = Report {
            name: "P".to_string(),
            description: String::new(),
            cpu: CpuInfo::default(),
            settings: Settings::default(),
            data,
        };
        let view = ReportView::build(&report, &mut ColorAllocator::new());

        prop_assert!(!view.charts.is_empty());
        for chart in &view.charts {
            prop_assert!(!chart.series.is_empty());
            for series in &chart.series {
                prop_assert_eq!(series.values.len(), chart.x_axis.len());
            }
        }
    }
}

// ===== Binary Properties =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_one_record_per_distinct_line(names in prop::collection::btree_set(part(), 1..8)) {
        let input: String = names
            .iter()
            .map(|n| format!("Benchmark{}-4 100 {} ns/op\n", n, n.len()))
            .collect();
        let file = tempfile::Builder::new().suffix(".txt").tempfile().expect("temp file");
        fs::write(file.path(), &input).expect("write input");

        let output = vizb_cmd()
            .arg(file.path())
            .args(["-f", "json"])
            .output()
            .expect("run vizb");
        prop_assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("report JSON");
        let data = report["data"].as_array().expect("data array");
        prop_assert_eq!(data.len(), names.len());
        prop_assert_eq!(&report["cpu"]["cores"], &serde_json::json!(4));
    }
}

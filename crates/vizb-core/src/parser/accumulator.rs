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

//! Per-run parse state.

use crate::model::BenchmarkData;
use super::stats::StatConverter;
use serde::{Deserialize, Serialize};

/// Header lines printed by the benchmark harness before the results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// `goos:` value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goos: Option<String>,
    /// `goarch:` value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goarch: Option<String>,
    /// `pkg:` value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg: Option<String>,
    /// `cpu:` value (processor model)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
}

impl Environment {
    /// Record a header value. Unknown keys are ignored and later values overwrite
    /// earlier ones. Returns `true` when the key was recognized.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "goos" => &mut self.goos,
            "goarch" => &mut self.goarch,
            "pkg" => &mut self.pkg,
            "cpu" => &mut self.cpu,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }
}

/// Everything a parse run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Results in input order
    pub results: Vec<BenchmarkData>,
    /// CPU core count taken from the first suffixed benchmark, 0 when none had one
    pub cpu_count: u32,
    /// Whether any result carried memory columns
    pub has_mem_stats: bool,
    /// Harness header lines
    pub environment: Environment,
}

/// Mutable state of a single parse run.
///
/// One accumulator is created per parse call, so runs never share state.
#[derive(Debug, Default)]
pub struct ParseAccumulator {
    results: Vec<BenchmarkData>,
    iterations: Vec<u64>,
    cpu_count: u32,
    has_mem_stats: bool,
    environment: Environment,
}

impl ParseAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a CPU count. Only the first non-zero count is kept.
    pub fn record_cpu(&mut self, cores: u32) {
        if self.cpu_count == 0 {
            self.cpu_count = cores;
        }
    }

    /// Note that memory columns were seen. Never cleared within a run.
    pub fn mark_mem_stats(&mut self) {
        self.has_mem_stats = true;
    }

    /// Record a harness header line.
    pub fn record_environment(&mut self, key: &str, value: &str) -> bool {
        self.environment.set(key, value)
    }

    /// Append a finished result with its iteration count.
    pub fn push(&mut self, data: BenchmarkData, iterations: u64) {
        self.results.push(data);
        self.iterations.push(iterations);
    }

    /// Number of results collected so far.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no result has been collected.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Current CPU count (0 when unknown).
    pub fn cpu_count(&self) -> u32 {
        self.cpu_count
    }

    /// Whether memory columns were seen.
    pub fn has_mem_stats(&self) -> bool {
        self.has_mem_stats
    }

    /// Discard all state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Close the run.
    ///
    /// When results disagree on their iteration counts, every result gets an
    /// `Iterations` stat so the counts can be compared in the chart.
    pub fn finish(self, converter: &StatConverter) -> ParseOutput {
        let mut results = self.results;

        let differs = self
            .iterations
            .first()
            .map_or(false, |first| self.iterations.iter().any(|i| i != first));

        if differs {
            for (data, iters) in results.iter_mut().zip(&self.iterations) {
                data.stats.push(converter.iterations(*iters));
            }
        }

        ParseOutput {
            results,
            cpu_count: self.cpu_count,
            has_mem_stats: self.has_mem_stats,
            environment: self.environment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use crate::model::Stat;

    fn data(y: &str) -> BenchmarkData {
        BenchmarkData {
            name: String::new(),
            x_axis: String::new(),
            y_axis: y.to_string(),
            stats: vec![Stat::new("Execution Time", 1.0, "ns", "op")],
        }
    }

    fn converter() -> StatConverter {
        StatConverter::new(&ParseConfig::default())
    }

    #[test]
    fn test_cpu_first_wins() {
        let mut acc = ParseAccumulator::new();
        acc.record_cpu(0);
        assert_eq!(acc.cpu_count(), 0);
        acc.record_cpu(8);
        acc.record_cpu(4);
        assert_eq!(acc.cpu_count(), 8);
    }

    #[test]
    fn test_mem_stats_sticky_and_reset() {
        let mut acc = ParseAccumulator::new();
        acc.mark_mem_stats();
        acc.push(data("A"), 10);
        assert!(acc.has_mem_stats());

        acc.reset();
        assert!(!acc.has_mem_stats());
        assert!(acc.is_empty());
        assert_eq!(acc.cpu_count(), 0);
    }

    #[test]
    fn test_equal_iterations_add_nothing() {
        let mut acc = ParseAccumulator::new();
        acc.push(data("A"), 100);
        acc.push(data("B"), 100);
        let out = acc.finish(&converter());
        assert!(out.results.iter().all(|r| r.stats.len() == 1));
    }

    #[test]
    fn test_different_iterations_append_stat() {
        let mut acc = ParseAccumulator::new();
        acc.push(data("A"), 100);
        acc.push(data("B"), 200);
        let out = acc.finish(&converter());

        assert_eq!(out.results[0].stats[1].kind, "Iterations");
        assert_eq!(out.results[0].stats[1].value, 100.0);
        assert_eq!(out.results[1].stats[1].value, 200.0);
    }

    #[test]
    fn test_environment() {
        let mut acc = ParseAccumulator::new();
        assert!(acc.record_environment("goos", "linux"));
        assert!(acc.record_environment("cpu", "Apple M2"));
        assert!(!acc.record_environment("panic", "oops"));

        let out = acc.finish(&converter());
        assert_eq!(out.environment.goos.as_deref(), Some("linux"));
        assert_eq!(out.environment.cpu.as_deref(), Some("Apple M2"));
        assert!(out.environment.pkg.is_none());
    }
}

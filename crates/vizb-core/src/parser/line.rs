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

//! Line-level recognition: benchmark result lines, header lines and JSON test events.

use crate::config::InputFormat;
use crate::error::{Result, VizbError};
use crate::model::{BenchEvent, Measurement, RawMeasurement};
use once_cell::sync::Lazy;
use regex::Regex;

const FLOAT: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

/// Result line carrying time, memory and allocation columns.
static MEM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^Benchmark(\S*)\s+(\d+)\s+({f})\s+ns/op\s+({f})\s+B/op\s+({f})\s+allocs/op",
        f = FLOAT
    ))
    .expect("memory line regex is valid")
});

/// Result line carrying at least the time column.
static BASIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^Benchmark(\S*)\s+(\d+)\s+({f})\s+ns/op", f = FLOAT))
        .expect("basic line regex is valid")
});

/// `key: value` header line such as `goos: linux`.
static CONFIG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z][a-z0-9_\-]*):\s+(.*\S)\s*$")
        .expect("config line regex is valid")
});

/// One decoded input line.
#[derive(Debug, Clone, PartialEq)]
pub enum InputLine {
    /// Plain benchmark output
    Raw(String),
    /// A `go test -json` event
    Event(BenchEvent),
}

impl InputLine {
    /// Decide how to read `line` under `format`.
    ///
    /// # Errors
    ///
    /// In [`InputFormat::Json`] a non-blank line that is not a JSON event fails with
    /// [`VizbError::Json`] carrying `line_no`.
    pub fn decode(line: &str, format: InputFormat, line_no: usize) -> Result<Self> {
        match format {
            InputFormat::Text => Ok(InputLine::Raw(line.to_string())),
            InputFormat::Auto => {
                if line.trim_start().starts_with('{') {
                    if let Ok(event) = serde_json::from_str::<BenchEvent>(line) {
                        return Ok(InputLine::Event(event));
                    }
                }
                Ok(InputLine::Raw(line.to_string()))
            }
            InputFormat::Json => {
                if line.trim().is_empty() {
                    return Ok(InputLine::Raw(String::new()));
                }
                serde_json::from_str::<BenchEvent>(line)
                    .map(InputLine::Event)
                    .map_err(|e| VizbError::Json {
                        line: line_no,
                        message: e.to_string(),
                    })
            }
        }
    }
}

/// Re-assembles `Output` fragments of test events into complete lines.
///
/// The JSON test driver may split one benchmark line across several events, for
/// example the name in one event and the measurements in the next.
#[derive(Debug, Default)]
pub struct EventAssembler {
    pending: String,
}

impl EventAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an output fragment and return every line it completes.
    pub fn push(&mut self, fragment: &str) -> Vec<String> {
        self.pending.push_str(fragment);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.find('\n') {
            let rest = self.pending.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.pending, rest);
            line.truncate(line.trim_end_matches(['\n', '\r']).len());
            lines.push(line);
        }
        lines
    }

    /// Take any unterminated text.
    pub fn flush(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}

/// Recognize a benchmark result line.
///
/// Only lines mentioning `ns/op` are considered. Measurements following the matched
/// columns are read as `<value> <unit>` pairs until a token fails to parse. Pairs
/// whose value is not finite (`NaN`, `inf`) are skipped.
///
/// ```rust
/// use vizb_core::parser::parse_bench_line;
///
/// let raw = parse_bench_line("BenchmarkSort/quick-8  1000  1234 ns/op  16 B/op  1 allocs/op").unwrap();
/// assert_eq!(raw.name, "Sort/quick-8");
/// assert_eq!(raw.iterations, 1000);
/// assert_eq!(raw.values.len(), 3);
///
/// assert!(parse_bench_line("PASS").is_none());
/// ```
pub fn parse_bench_line(line: &str) -> Option<RawMeasurement> {
    if !line.contains("ns/op") {
        return None;
    }
    let line = line.trim();

    let (caps, units): (_, &[&str]) = match MEM_LINE.captures(line) {
        Some(caps) => (caps, &["ns/op", "B/op", "allocs/op"]),
        None => (BASIC_LINE.captures(line)?, &["ns/op"]),
    };

    let name = caps.get(1)?.as_str().to_string();
    let iterations = caps.get(2)?.as_str().parse::<u64>().ok()?;

    let mut values = Vec::with_capacity(units.len());
    for (i, unit) in units.iter().enumerate() {
        let value = caps.get(3 + i)?.as_str().parse::<f64>().ok()?;
        values.push(Measurement::new(value, *unit));
    }

    let tail = &line[caps.get(0)?.end()..];
    values.extend(trailing_measurements(tail));

    Some(RawMeasurement {
        name,
        iterations,
        values,
    })
}

fn trailing_measurements(tail: &str) -> Vec<Measurement> {
    let mut values = Vec::new();
    let mut tokens = tail.split_whitespace();

    while let (Some(value), Some(unit)) = (tokens.next(), tokens.next()) {
        match value.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(Measurement::new(value, unit)),
            Ok(_) => {}
            Err(_) => break,
        }
    }

    values
}

/// Recognize a `key: value` header line.
pub fn parse_config_line(line: &str) -> Option<(&str, &str)> {
    let caps = CONFIG_LINE.captures(line.trim_end())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Split a trailing `-<digits>` CPU suffix off a benchmark identifier.
///
/// ```rust
/// use vizb_core::parser::strip_cpu_suffix;
///
/// assert_eq!(strip_cpu_suffix("Sort/quick-8"), ("Sort/quick", Some(8)));
/// assert_eq!(strip_cpu_suffix("Sort/quick"), ("Sort/quick", None));
/// assert_eq!(strip_cpu_suffix("Sort/top-k"), ("Sort/top-k", None));
/// ```
pub fn strip_cpu_suffix(name: &str) -> (&str, Option<u32>) {
    if let Some(pos) = name.rfind('-') {
        let suffix = &name[pos + 1..];
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return (&name[..pos], suffix.parse().ok());
        }
    }
    (name, None)
}

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

//! Benchmark output parser.
//!
//! [`BenchParser`] reads `go test -bench` output, either as plain text or as the
//! line-delimited JSON events of `go test -json`, and turns every recognized result
//! line into a [`BenchmarkData`] record.
//!
//! # Pipeline
//!
//! For each record the parser:
//!
//! 1. strips the `Benchmark` prefix and the trailing `-<cores>` suffix
//! 2. drops the record if it fails the name filter
//! 3. records the core count (first one wins)
//! 4. splits the identifier into name, x-axis and y-axis
//! 5. converts each measurement into a [`Stat`](crate::model::Stat)
//!
//! Lines that are not benchmark results are skipped. Harness header lines (`goos:`,
//! `goarch:`, `pkg:`, `cpu:`) are kept in [`ParseOutput::environment`].
//!
//! # Examples
//!
//! ```rust
//! use vizb_core::config::ParseConfig;
//! use vizb_core::parser::BenchParser;
//!
//! let input = "\
//! goos: linux
//! BenchmarkEncode/Small/Json-8   1000   1200 ns/op   64 B/op   2 allocs/op
//! BenchmarkEncode/Small/Gob-8    1000   1800 ns/op   96 B/op   3 allocs/op
//! PASS
//! ";
//!
//! let config = ParseConfig::builder().group_pattern("n/x/y").build();
//! let parser = BenchParser::new(config).unwrap();
//! let output = parser.parse_str(input).unwrap();
//!
//! assert_eq!(output.results.len(), 2);
//! assert_eq!(output.results[0].name, "Encode");
//! assert_eq!(output.results[1].y_axis, "Gob");
//! assert_eq!(output.cpu_count, 8);
//! assert!(output.has_mem_stats);
//! ```

mod accumulator;
mod line;
mod stats;

pub use accumulator::{Environment, ParseAccumulator, ParseOutput};
pub use line::{parse_bench_line, parse_config_line, strip_cpu_suffix, EventAssembler, InputLine};
pub use stats::{is_memory_stat, StatConverter};

use crate::config::{InputFormat, ParseConfig};
use crate::error::{Result, VizbError};
use crate::grouping::NameGrouper;
use crate::model::{BenchmarkData, RawMeasurement};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A configured benchmark parser.
///
/// Grouping and filter regexes are compiled once in [`BenchParser::new`]; the parser
/// itself holds no per-run state and can be reused.
#[derive(Debug, Clone)]
pub struct BenchParser {
    config: ParseConfig,
    grouper: NameGrouper,
    filter: Option<Regex>,
    converter: StatConverter,
}

impl BenchParser {
    /// Compile `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid grouping pattern, grouping regex or
    /// filter regex.
    pub fn new(config: ParseConfig) -> Result<Self> {
        let grouper = NameGrouper::from_config(&config)?;

        let filter = match config.filter.as_deref().filter(|f| !f.is_empty()) {
            Some(source) => Some(
                Regex::new(source).map_err(|e| VizbError::invalid_filter(source, e.to_string()))?,
            ),
            None => None,
        };

        let converter = StatConverter::new(&config);

        Ok(Self {
            config,
            grouper,
            filter,
            converter,
        })
    }

    /// The configuration this parser was built from.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse a file.
    ///
    /// # Errors
    ///
    /// [`VizbError::Io`] when the file cannot be read, [`VizbError::NoResults`] when it
    /// holds no benchmark results, plus any error of [`BenchParser::parse_reader`].
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseOutput> {
        let path = path.as_ref();
        debug!(path = %path.display(), "parsing benchmark file");

        let file = File::open(path).map_err(|e| VizbError::io_error(path, e))?;
        self.parse_lines(BufReader::new(file), path)
    }

    /// Parse an in-memory string.
    pub fn parse_str(&self, input: &str) -> Result<ParseOutput> {
        self.parse_reader(input.as_bytes())
    }

    /// Parse any buffered reader, one line at a time.
    ///
    /// # Errors
    ///
    /// [`VizbError::Io`] on read failure, [`VizbError::Json`] for undecodable lines in
    /// strict JSON mode, [`VizbError::GroupMismatch`] when a grouping regex rejects a
    /// name, [`VizbError::NoResults`] when nothing was recognized.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseOutput> {
        self.parse_lines(reader, Path::new("<reader>"))
    }

    /// Parse structured records, bypassing line recognition.
    ///
    /// ```rust
    /// use vizb_core::config::ParseConfig;
    /// use vizb_core::model::{Measurement, RawMeasurement};
    /// use vizb_core::parser::BenchParser;
    ///
    /// let parser = BenchParser::new(ParseConfig::default()).unwrap();
    /// let output = parser
    ///     .parse_records(vec![RawMeasurement {
    ///         name: "Hash-4".to_string(),
    ///         iterations: 10,
    ///         values: vec![Measurement::new(5.0, "ns/op")],
    ///     }])
    ///     .unwrap();
    ///
    /// assert_eq!(output.results[0].y_axis, "Hash");
    /// assert_eq!(output.cpu_count, 4);
    /// ```
    pub fn parse_records<I>(&self, records: I) -> Result<ParseOutput>
    where
        I: IntoIterator<Item = RawMeasurement>,
    {
        let mut acc = ParseAccumulator::new();
        for record in records {
            self.ingest(&mut acc, record)?;
        }
        self.finish(acc)
    }

    fn parse_lines<R: BufRead>(&self, mut reader: R, source: &Path) -> Result<ParseOutput> {
        let mut acc = ParseAccumulator::new();
        let mut assembler = EventAssembler::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        let mut format = self.config.input_format;
        let mut detected = format != InputFormat::Auto;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| VizbError::io_error(PathBuf::from(source), e))?;
            if n == 0 {
                break;
            }
            line_no += 1;

            let text = String::from_utf8_lossy(&buf);
            let text = text.trim_end_matches(['\n', '\r']);

            let decoded = InputLine::decode(text, format, line_no)?;
            if !detected && !text.trim().is_empty() {
                detected = true;
                if matches!(&decoded, InputLine::Event(ev) if !ev.action.is_empty()) {
                    debug!("input detected as JSON test events");
                    format = InputFormat::Json;
                }
            }

            match decoded {
                InputLine::Raw(raw) => {
                    if let Some(pending) = assembler.flush() {
                        self.handle_text(&mut acc, &pending)?;
                    }
                    self.handle_text(&mut acc, &raw)?;
                }
                InputLine::Event(event) => {
                    if !event.is_output() {
                        continue;
                    }
                    for line in assembler.push(&event.output) {
                        self.handle_text(&mut acc, &line)?;
                    }
                }
            }
        }

        if let Some(pending) = assembler.flush() {
            self.handle_text(&mut acc, &pending)?;
        }

        debug!(lines = line_no, results = acc.len(), "finished reading input");
        self.finish(acc)
    }

    fn handle_text(&self, acc: &mut ParseAccumulator, line: &str) -> Result<()> {
        if let Some(raw) = parse_bench_line(line) {
            return self.ingest(acc, raw);
        }

        if let Some((key, value)) = parse_config_line(line) {
            if acc.record_environment(key, value) {
                trace!(key, value, "recorded environment");
            }
        }

        Ok(())
    }

    fn ingest(&self, acc: &mut ParseAccumulator, raw: RawMeasurement) -> Result<()> {
        let (identifier, cores) = strip_cpu_suffix(&raw.name);

        if let Some(filter) = &self.filter {
            if !filter.is_match(identifier) {
                trace!(identifier, "filtered out");
                return Ok(());
            }
        }

        if raw.values.is_empty() {
            trace!(identifier, "discarded record without measurements");
            return Ok(());
        }

        if let Some(cores) = cores {
            acc.record_cpu(cores);
        }

        let groups = self.grouper.group(identifier)?;

        if raw.values.iter().any(is_memory_stat) {
            acc.mark_mem_stats();
        }

        let stats: Vec<_> = raw.values.iter().map(|m| self.converter.convert(m)).collect();

        acc.push(
            BenchmarkData {
                name: groups.name,
                x_axis: groups.x_axis,
                y_axis: groups.y_axis,
                stats,
            },
            raw.iterations,
        );

        Ok(())
    }

    fn finish(&self, acc: ParseAccumulator) -> Result<ParseOutput> {
        if acc.is_empty() {
            return Err(VizbError::NoResults);
        }
        Ok(acc.finish(&self.converter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;
    use crate::units::TimeUnit;

    fn parse(input: &str, config: ParseConfig) -> Result<ParseOutput> {
        BenchParser::new(config)?.parse_str(input)
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let err = BenchParser::new(ParseConfig::builder().filter("[").build()).unwrap_err();
        assert!(matches!(err, VizbError::InvalidFilter { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = BenchParser::new(ParseConfig::builder().group_pattern("n/q").build())
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_no_results() {
        let err = parse("PASS\nok  \tpkg\t0.1s\n", ParseConfig::default()).unwrap_err();
        assert_eq!(err, VizbError::NoResults);
    }

    #[test]
    fn test_filter_applies_before_cpu_count() {
        let input = "BenchmarkSkip-4 10 1 ns/op\nBenchmarkKeep-8 10 1 ns/op\n";
        let out = parse(input, ParseConfig::builder().filter("^Keep$").build()).unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].y_axis, "Keep");
        assert_eq!(out.cpu_count, 8);
    }

    #[test]
    fn test_group_mismatch_is_fatal() {
        let input = "BenchmarkA/B-8 10 1 ns/op\nBenchmarkPlain-8 10 1 ns/op\n";
        let config = ParseConfig::builder().group_regex(r"^(?P<n>\w+)/(?P<y>\w+)$").build();
        let err = parse(input, config).unwrap_err();
        assert!(matches!(err, VizbError::GroupMismatch { ref name, .. } if name == "Plain"));
    }

    #[test]
    fn test_json_events_with_split_output() {
        let input = concat!(
            r#"{"Action":"start","Package":"p"}"#, "\n",
            r#"{"Action":"output","Package":"p","Output":"goos: linux\n"}"#, "\n",
            r#"{"Action":"output","Package":"p","Test":"BenchmarkFoo","Output":"BenchmarkFoo-8   \t"}"#, "\n",
            r#"{"Action":"output","Package":"p","Test":"BenchmarkFoo","Output":"    1000\t       123 ns/op\n"}"#, "\n",
            r#"{"Action":"pass","Package":"p"}"#, "\n",
        );
        let out = parse(input, ParseConfig::default()).unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].y_axis, "Foo");
        assert_eq!(out.results[0].stats[0].value, 123.0);
        assert_eq!(out.cpu_count, 8);
        assert_eq!(out.environment.goos.as_deref(), Some("linux"));
    }

    #[test]
    fn test_strict_json_rejects_text() {
        let config = ParseConfig::builder()
            .input_format(crate::config::InputFormat::Json)
            .build();
        let err = parse("BenchmarkFoo-8 10 1 ns/op\n", config).unwrap_err();
        assert!(matches!(err, VizbError::Json { line: 1, .. }));
    }

    #[test]
    fn test_time_unit_applied() {
        let config = ParseConfig::builder().time_unit(TimeUnit::Microseconds).build();
        let out = parse("BenchmarkFoo 10 2500 ns/op\n", config).unwrap();
        assert_eq!(out.results[0].stats[0].kind, "Execution Time (us/op)");
        assert_eq!(out.results[0].stats[0].value, 2.5);
    }

    #[test]
    fn test_records_without_values_are_discarded() {
        let parser = BenchParser::new(ParseConfig::default()).unwrap();
        let out = parser
            .parse_records(vec![
                RawMeasurement {
                    name: "Empty-2".to_string(),
                    iterations: 1,
                    values: vec![],
                },
                RawMeasurement {
                    name: "Full".to_string(),
                    iterations: 1,
                    values: vec![Measurement::new(1.0, "ns/op")],
                },
            ])
            .unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].y_axis, "Full");
        assert_eq!(out.cpu_count, 0);
    }

    #[test]
    fn test_discarded_records_leave_no_trace() {
        let config = ParseConfig::builder().group_regex(r"^(?P<n>\w+)/(?P<y>\w+)$").build();
        let parser = BenchParser::new(config).unwrap();
        let out = parser
            .parse_records(vec![
                RawMeasurement {
                    name: "Empty-2".to_string(),
                    iterations: 1,
                    values: vec![],
                },
                RawMeasurement {
                    name: "Sort/quick-8".to_string(),
                    iterations: 1,
                    values: vec![Measurement::new(1.0, "ns/op")],
                },
            ])
            .unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.cpu_count, 8);
    }

    #[test]
    fn test_json_input_detected_from_first_line() {
        let input = concat!(
            r#"{"Action":"start","Package":"p"}"#, "\n",
            r#"{"Action":"output","Package":"p","Test":"BenchmarkA","Output":"BenchmarkA-8 \t 10\t 1 ns/op\n"}"#, "\n",
            r#"{"Action":"output","Package":"p","Outp"#, "\n",
            r#"{"Action":"output","Package":"p","Test":"BenchmarkB","Output":"BenchmarkB-8 \t 10\t 2 ns/op\n"}"#, "\n",
        );
        let err = parse(input, ParseConfig::default()).unwrap_err();
        assert!(matches!(err, VizbError::Json { line: 3, .. }));
    }

    #[test]
    fn test_text_input_stays_lenient() {
        let input = "goos: linux\n{broken\nBenchmarkA-8 10 1 ns/op\n";
        let out = parse(input, ParseConfig::default()).unwrap();
        assert_eq!(out.results.len(), 1);
    }

    #[test]
    fn test_separator_grouping() {
        let config = ParseConfig::builder().separator("-").build();
        let out = parse("BenchmarkWorkload-Subject1-8 10 1 ns/op\n", config).unwrap();
        let r = &out.results[0];
        assert_eq!(r.name, "Workload");
        assert_eq!(r.x_axis, "");
        assert_eq!(r.y_axis, "Subject1");
        assert_eq!(out.cpu_count, 8);
    }

    #[test]
    fn test_missing_file() {
        let parser = BenchParser::new(ParseConfig::default()).unwrap();
        let err = parser.parse_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, VizbError::Io { .. }));
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = BenchParser::new(ParseConfig::default()).unwrap();
        let first = parser.parse_str("BenchmarkA-2 10 1 ns/op\n").unwrap();
        let second = parser.parse_str("BenchmarkB-4 10 1 ns/op\n").unwrap();
        assert_eq!(first.cpu_count, 2);
        assert_eq!(second.cpu_count, 4);
    }
}

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

//! Live progress for piped benchmark output.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use vizb_core::model::BenchEvent;

/// Where progress messages go.
pub trait ProgressSink {
    /// Replace the current message.
    fn describe(&mut self, message: String);
    /// Stop displaying progress.
    fn finish(&mut self, message: String);
}

/// Spinner on stderr. Hidden automatically when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start a spinner.
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Processing benchmarks");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

impl ProgressSink for Spinner {
    fn describe(&mut self, message: String) {
        self.bar.set_message(message);
    }

    fn finish(&mut self, message: String) {
        self.bar.finish_with_message(message);
    }
}

/// Counts completed benchmarks in a stream of output lines.
pub struct ProgressTracker<S: ProgressSink> {
    sink: S,
    completed: usize,
    current: String,
}

impl<S: ProgressSink> ProgressTracker<S> {
    /// Create a tracker reporting to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            completed: 0,
            current: String::new(),
        }
    }

    /// Number of result lines seen.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Name of the benchmark most recently seen.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Feed one input line, raw text or a JSON event.
    pub fn process_line(&mut self, line: &str) {
        let is_result = line.contains("ns/op");
        if is_result {
            self.completed += 1;
        }

        let name = match serde_json::from_str::<BenchEvent>(line) {
            Ok(event) => event_name(&event),
            Err(_) if is_result => raw_name(line),
            Err(_) => None,
        };

        if let Some(name) = name {
            self.current = name;
            self.sink.describe(format!(
                "Running Benchmarks [{}] ({} completed)",
                self.current, self.completed
            ));
        }
    }

    /// Stop the display.
    pub fn finish(mut self) -> usize {
        let message = format!("{} benchmark lines captured", self.completed);
        self.sink.finish(message.green().to_string());
        self.completed
    }
}

fn event_name(event: &BenchEvent) -> Option<String> {
    if event.test.starts_with("Benchmark") {
        Some(event.test.clone())
    } else {
        None
    }
}

fn raw_name(line: &str) -> Option<String> {
    let first = line.split_whitespace().next()?;
    let name = match first.rfind('-') {
        Some(i) if first[i + 1..].bytes().all(|b| b.is_ascii_digit()) => &first[..i],
        _ => first,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        messages: Vec<String>,
        finished: bool,
    }

    impl ProgressSink for &mut Recorder {
        fn describe(&mut self, message: String) {
            self.messages.push(message);
        }

        fn finish(&mut self, _message: String) {
            self.finished = true;
        }
    }

    #[test]
    fn test_raw_lines() {
        let mut rec = Recorder::default();
        let mut tracker = ProgressTracker::new(&mut rec);

        tracker.process_line("goos: linux");
        tracker.process_line("BenchmarkSort/quick-8  100  12 ns/op");
        tracker.process_line("BenchmarkSort/merge-8  100  15 ns/op");
        assert_eq!(tracker.completed(), 2);
        assert_eq!(tracker.current(), "BenchmarkSort/merge");
        assert_eq!(tracker.finish(), 2);

        assert_eq!(rec.messages.len(), 2);
        assert_eq!(
            rec.messages[1],
            "Running Benchmarks [BenchmarkSort/merge] (2 completed)"
        );
        assert!(rec.finished);
    }

    #[test]
    fn test_json_events() {
        let mut rec = Recorder::default();
        let mut tracker = ProgressTracker::new(&mut rec);

        tracker.process_line(r#"{"Action":"run","Test":"BenchmarkQueue"}"#);
        tracker.process_line(r#"{"Action":"output","Test":"BenchmarkQueue","Output":"BenchmarkQueue-8 \t 10\t 5 ns/op\n"}"#);
        tracker.process_line(r#"{"Action":"output","Output":"PASS\n"}"#);

        assert_eq!(tracker.completed(), 1);
        assert_eq!(tracker.current(), "BenchmarkQueue");
        drop(tracker);
        assert_eq!(rec.messages.len(), 2);
    }

    #[test]
    fn test_raw_name_keeps_non_numeric_suffix() {
        assert_eq!(raw_name("BenchmarkTop-k 1 1 ns/op").as_deref(), Some("BenchmarkTop-k"));
        assert_eq!(raw_name("BenchmarkTop-16 1 1 ns/op").as_deref(), Some("BenchmarkTop"));
        assert_eq!(raw_name("   "), None);
    }
}

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

//! Core of vizb: benchmark output parsing, name grouping and result aggregation.
//!
//! This crate turns the output of `go test -bench` (plain text or `go test -json`
//! events) into structured records that a renderer can chart.
//!
//! # Modules
//!
//! - [`units`]: time, memory and count conversion plus stat labels
//! - [`grouping`]: splitting benchmark identifiers into name, x-axis and y-axis
//! - [`parser`]: line and event recognition, per-run accumulation
//! - [`aggregate`]: grouping records into chart series, color assignment
//! - [`report`]: the report document written as JSON and read by `merge`
//!
//! # Quick Start
//!
//! ```rust
//! use vizb_core::aggregate::aggregate;
//! use vizb_core::{BenchParser, ParseConfig};
//!
//! let input = "\
//! BenchmarkSort/100/quick-8    5000   2100 ns/op
//! BenchmarkSort/100/merge-8    5000   2500 ns/op
//! BenchmarkSort/1000/quick-8    500  26000 ns/op
//! ";
//!
//! let parser = BenchParser::new(ParseConfig::builder().group_pattern("n/x/y").build())?;
//! let output = parser.parse_str(input)?;
//! let groups = aggregate(&output.results);
//!
//! assert_eq!(groups[0].name, "Sort");
//! assert_eq!(groups[0].x_axis, vec!["100", "1000"]);
//! assert_eq!(groups[0].series, vec!["quick", "merge"]);
//! # Ok::<(), vizb_core::VizbError>(())
//! ```

pub mod aggregate;
pub mod config;
mod error;
pub mod grouping;
pub mod model;
pub mod parser;
pub mod report;
pub mod units;

pub use config::{InputFormat, ParseConfig};
pub use error::{Result, VizbError};
pub use model::{BenchmarkData, NameGroups, Stat};
pub use parser::{BenchParser, ParseOutput};
pub use report::Report;

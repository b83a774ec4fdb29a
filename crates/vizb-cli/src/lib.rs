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

//! Vizb CLI library.
//!
//! Turns Go benchmark output into interactive charts. The parsing and
//! aggregation live in `vizb-core`; this crate owns the command line, input
//! handling and rendering.
//!
//! # Commands
//!
//! - **(default)**: read benchmark output from a file or stdin and write an HTML
//!   chart or a report JSON file
//! - **merge**: combine report JSON files (or directories of them) into one
//!   HTML page
//!
//! # Input
//!
//! Both plain `go test -bench` text and `go test -json` event streams are
//! accepted, and detection happens per line. When no file is given and stdin
//! is piped, the stream is spooled to a temporary file while a spinner reports
//! the benchmarks seen so far.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod progress;
pub mod render;

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

//! Generate command - benchmark output to chart or report JSON

use super::write_output;
use crate::cli::GenerateArgs;
use crate::error::CliError;
use crate::input;
use crate::render::{html::render_html, json::render_json, OutputFormat};
use colored::Colorize;
use tracing::info;
use vizb_core::{BenchParser, Report};

/// Parse benchmark output and write a chart (HTML) or report (JSON).
///
/// # Errors
///
/// Returns `Err` if:
/// - No input is available or the target file does not exist
/// - The grouping pattern, grouping regex or filter is invalid
/// - The input holds no benchmark results
/// - The output cannot be written
pub fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let config = args.parse_config();
    let format = args.output_format();
    let settings = args.settings();

    // Validate configuration before touching stdin.
    let parser = BenchParser::new(config)?;

    let source = input::resolve(args.target.as_deref())?;
    if args.target.is_some() {
        eprintln!(
            "{} {}",
            "Reading benchmark data from".cyan(),
            source.path().display()
        );
    }

    let output = parser.parse_file(source.path())?;
    info!(
        results = output.results.len(),
        cpu_count = output.cpu_count,
        has_mem_stats = output.has_mem_stats,
        "parsed benchmark output"
    );

    let report = Report::from_output(&args.name, &args.description, output, settings);

    let content = match format {
        OutputFormat::Html => render_html(std::slice::from_ref(&report))?,
        OutputFormat::Json => render_json(&report)?,
    };

    write_output(&content, args.output.as_deref(), format)?;
    if args.output.is_some() {
        eprintln!("{}", format!("Generated {} successfully", format).green());
    }

    Ok(())
}

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

//! Vizb Command Line Interface

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vizb_cli::cli::{Commands, GenerateArgs};
use vizb_cli::commands;

/// Vizb - interactive charts from Go benchmark output
///
/// # Examples
///
/// ```bash
/// # Chart from a saved benchmark run
/// vizb bench.txt -o chart
///
/// # Pipe benchmarks straight in and keep the report JSON
/// go test -bench . -benchmem | vizb -f json -o report
///
/// # Group by name/workload/subject and sort series
/// vizb bench.txt -p n/x/y -s asc -o chart
///
/// # Merge several reports into one page
/// vizb merge reports/ extra.json -o all
/// ```
#[derive(Parser)]
#[command(name = "vizb")]
#[command(author, version, about = "Generate interactive charts from Go benchmark output", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "vizb_cli=warn,vizb_core=warn";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(command) => command.execute(),
        None => commands::generate(&cli.generate),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

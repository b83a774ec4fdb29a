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

//! Command-line definitions.
//!
//! Running `vizb` without a subcommand generates a chart from benchmark output
//! ([`GenerateArgs`]). Subcommands live in [`Commands`].

mod generate;

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

pub use generate::GenerateArgs;

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge report JSON files into one HTML page
    ///
    /// Accepts report files produced with `--format json`, or directories whose
    /// `*.json` children are such files. Unreadable or invalid files are skipped
    /// with a warning.
    Merge {
        /// Files or directories to merge
        #[arg(value_name = "PATHS", required = true)]
        paths: Vec<String>,

        /// Output HTML file (`.html` is appended if missing); stdout when absent
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Commands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns the first error the command hits.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Merge { paths, output } => commands::merge(&paths, output.as_deref()),
        }
    }
}

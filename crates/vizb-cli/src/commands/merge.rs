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

//! Merge command - combine report JSON files into one page

use super::write_output;
use crate::error::CliError;
use crate::render::{html::render_html, OutputFormat};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use vizb_core::Report;

/// Collect report files from `paths`, expanding directories to their `*.json`
/// children (sorted by name). Inaccessible paths are skipped with a warning.
pub fn collect_files(paths: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for arg in paths {
        let path = Path::new(arg);
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                warn(&format!("cannot access {}: {}", arg, e));
                continue;
            }
        };

        if !meta.is_dir() {
            files.push(path.to_path_buf());
            continue;
        }

        match fs::read_dir(path) {
            Ok(entries) => {
                let mut found: Vec<PathBuf> = entries
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .filter(|p| p.is_file() && p.extension().map_or(false, |ext| ext == "json"))
                    .collect();
                found.sort();
                files.extend(found);
            }
            Err(e) => warn(&format!("error scanning directory {}: {}", arg, e)),
        }
    }

    files
}

/// Load every readable report among `files`, skipping the rest with a warning.
pub fn load_reports(files: &[PathBuf]) -> Vec<Report> {
    files
        .iter()
        .filter_map(|file| {
            let content = match fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    warn(&format!("cannot read file {}: {}", file.display(), e));
                    return None;
                }
            };
            match serde_json::from_str::<Report>(&content) {
                Ok(report) => Some(report),
                Err(_) => {
                    warn(&format!(
                        "file {} is not a benchmark report, skipping",
                        file.display()
                    ));
                    None
                }
            }
        })
        .collect()
}

/// Merge report files into one HTML page.
///
/// # Errors
///
/// [`CliError::NothingToMerge`] when no valid report was found, or an I/O error
/// when the output cannot be written.
pub fn merge(paths: &[String], output: Option<&str>) -> Result<(), CliError> {
    let files = collect_files(paths);
    let reports = load_reports(&files);

    if reports.is_empty() {
        return Err(CliError::NothingToMerge);
    }

    tracing::info!(files = files.len(), reports = reports.len(), "merging reports");

    let html = render_html(&reports)?;
    write_output(&html, output, OutputFormat::Html)?;
    if output.is_some() {
        eprintln!(
            "{}",
            format!("Generated merged chart from {} reports", reports.len()).green()
        );
    }

    Ok(())
}

fn warn(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

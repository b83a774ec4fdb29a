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

//! Input resolution: a target file, or benchmark output piped on stdin.

use crate::error::CliError;
use crate::progress::{ProgressSink, ProgressTracker, Spinner};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Benchmark input ready for parsing.
///
/// Piped input is spooled into a temporary file that is deleted when this value is
/// dropped, on success and on error alike.
#[derive(Debug)]
pub enum BenchInput {
    /// An existing file given on the command line
    File(PathBuf),
    /// Stdin copied to a temporary file
    Spooled(NamedTempFile),
}

impl BenchInput {
    /// Path to read from.
    pub fn path(&self) -> &Path {
        match self {
            BenchInput::File(path) => path,
            BenchInput::Spooled(file) => file.path(),
        }
    }
}

/// Pick the input source.
///
/// An explicit `target` is used as is. Without one, piped stdin is spooled.
///
/// # Errors
///
/// [`CliError::NoInput`] when there is neither a target nor piped input, and
/// [`CliError::InvalidInput`] when the target does not exist.
pub fn resolve(target: Option<&str>) -> Result<BenchInput, CliError> {
    if let Some(target) = target {
        return open_target(target);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::NoInput);
    }

    debug!("reading benchmark output from stdin");
    spool(stdin.lock(), Spinner::start()).map(BenchInput::Spooled)
}

fn open_target(target: &str) -> Result<BenchInput, CliError> {
    let path = PathBuf::from(target);
    if !path.is_file() {
        return Err(CliError::InvalidInput(format!(
            "file '{}' does not exist",
            target
        )));
    }
    Ok(BenchInput::File(path))
}

/// Copy `reader` into a temporary file line by line, reporting progress to `sink`.
///
/// Bytes are copied unchanged; invalid UTF-8 only affects the progress display.
pub fn spool<R: BufRead, S: ProgressSink>(
    mut reader: R,
    sink: S,
) -> Result<NamedTempFile, CliError> {
    let mut file = tempfile::Builder::new()
        .prefix("vizb-benchmark-")
        .suffix(".out")
        .tempfile()
        .map_err(|e| CliError::io_error(std::env::temp_dir(), e))?;

    let mut tracker = ProgressTracker::new(sink);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CliError::io_error("<stdin>", e))?;
        if n == 0 {
            break;
        }

        file.write_all(&buf)
            .map_err(|e| CliError::io_error(file.path(), e))?;
        tracker.process_line(String::from_utf8_lossy(&buf).trim_end());
    }

    file.flush().map_err(|e| CliError::io_error(file.path(), e))?;
    let captured = tracker.finish();
    debug!(captured, path = %file.path().display(), "spooled piped input");

    Ok(file)
}

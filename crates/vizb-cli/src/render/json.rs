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

//! JSON output: the report document, pretty-printed.

use crate::error::CliError;
use vizb_core::Report;

/// Serialize `report` as pretty JSON.
pub fn render_json(report: &Report) -> Result<String, CliError> {
    serde_json::to_string_pretty(report).map_err(CliError::json_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizb_core::report::Settings;
    use vizb_core::{BenchmarkData, Stat};

    #[test]
    fn test_output_reads_back() {
        let report = Report {
            name: "Bench".to_string(),
            description: "d".to_string(),
            cpu: Default::default(),
            settings: Settings::default(),
            data: vec![BenchmarkData {
                name: "G".to_string(),
                x_axis: "X".to_string(),
                y_axis: "Y".to_string(),
                stats: vec![Stat::new("Execution Time", 1.5, "ns", "op")],
            }],
        };

        let json = render_json(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains("\"xAxis\": \"X\""));
    }
}

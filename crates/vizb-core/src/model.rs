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

//! Data model shared by the parser, the aggregator and the renderers.

use serde::{Deserialize, Serialize};

/// One formatted metric of a benchmark result.
///
/// `kind` is the composed label (for example `Execution Time (ms/op)`) and is
/// serialized as `type`. `unit` and `per` repeat the label parts for consumers that
/// build their own axis titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Composed label, see [`crate::units::stat_label`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Converted value, rounded to two decimals
    pub value: f64,
    /// Display unit (may be empty)
    #[serde(default)]
    pub unit: String,
    /// Denominator such as `op` (may be empty)
    #[serde(default)]
    pub per: String,
}

impl Stat {
    /// Create a stat, composing its label from `name`, `unit` and `per`.
    pub fn new(name: &str, value: f64, unit: &str, per: &str) -> Self {
        Self {
            kind: crate::units::stat_label(name, unit, per),
            value,
            unit: unit.to_string(),
            per: per.to_string(),
        }
    }
}

/// A finalized benchmark record, the unit of output consumed by rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Top-level group (chart) name
    pub name: String,
    /// Category axis value (workload)
    #[serde(rename = "xAxis")]
    pub x_axis: String,
    /// Series value (subject)
    #[serde(rename = "yAxis")]
    pub y_axis: String,
    /// Metrics in input order
    pub stats: Vec<Stat>,
}

/// Name, x-axis and y-axis parts of a benchmark identifier.
///
/// All three slots are always present; unused slots are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameGroups {
    /// Top-level group
    pub name: String,
    /// Workload
    pub x_axis: String,
    /// Subject
    pub y_axis: String,
}

impl NameGroups {
    /// Write `value` into `slot`.
    pub fn set(&mut self, slot: Slot, value: impl Into<String>) {
        match slot {
            Slot::Name => self.name = value.into(),
            Slot::XAxis => self.x_axis = value.into(),
            Slot::YAxis => self.y_axis = value.into(),
        }
    }

    /// Read the value of `slot`.
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Name => &self.name,
            Slot::XAxis => &self.x_axis,
            Slot::YAxis => &self.y_axis,
        }
    }

    /// Number of slots holding a non-empty value.
    pub fn filled(&self) -> usize {
        [&self.name, &self.x_axis, &self.y_axis]
            .iter()
            .filter(|s| !s.is_empty())
            .count()
    }
}

/// A grouping slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `n` / `name`
    Name,
    /// `x` / `xAxis`
    XAxis,
    /// `y` / `yAxis`
    YAxis,
}

impl Slot {
    /// Resolve a pattern token or capture-group name, expanding shorthands.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "n" | "name" => Some(Slot::Name),
            "x" | "xAxis" => Some(Slot::XAxis),
            "y" | "yAxis" => Some(Slot::YAxis),
            _ => None,
        }
    }

    /// Canonical slot name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Name => "name",
            Slot::XAxis => "xAxis",
            Slot::YAxis => "yAxis",
        }
    }
}

/// One `(value, unit)` pair as emitted by the benchmark harness.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Primary value
    pub value: f64,
    /// Primary unit, e.g. `ns/op` or `MB/s`
    pub unit: String,
    /// Value and unit before a producer normalised them, when known
    pub orig: Option<(f64, String)>,
}

impl Measurement {
    /// Create a measurement without an original pair.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            orig: None,
        }
    }

    /// Attach the pre-normalisation value and unit.
    pub fn with_orig(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.orig = Some((value, unit.into()));
        self
    }
}

/// One benchmark observation before grouping and unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMeasurement {
    /// Identifier with the `Benchmark` prefix removed, CPU suffix still attached
    pub name: String,
    /// Iteration count
    pub iterations: u64,
    /// Measurements in emitted order
    pub values: Vec<Measurement>,
}

/// A `go test -json` event. Only `Action`, `Test` and `Output` are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchEvent {
    /// Event kind (`run`, `output`, `pass`, ...)
    #[serde(rename = "Action", default)]
    pub action: String,
    /// Test or benchmark name
    #[serde(rename = "Test", default, skip_serializing_if = "String::is_empty")]
    pub test: String,
    /// Output fragment for `output` events
    #[serde(rename = "Output", default, skip_serializing_if = "String::is_empty")]
    pub output: String,
}

impl BenchEvent {
    /// Returns `true` for events carrying program output.
    pub fn is_output(&self) -> bool {
        self.action == "output"
    }
}

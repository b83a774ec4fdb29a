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

//! Measurement classification and unit conversion.

use crate::config::ParseConfig;
use crate::model::{Measurement, Stat};
use crate::units::{
    format_count, format_memory, format_time, round_to_two, CountUnit, MemoryUnit, TimeUnit,
};

/// Converts raw measurements into display stats using the configured units.
#[derive(Debug, Clone, Copy)]
pub struct StatConverter {
    time: TimeUnit,
    mem: MemoryUnit,
    count: CountUnit,
}

impl StatConverter {
    /// Take the units from `config`.
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            time: config.time_unit,
            mem: config.mem_unit,
            count: config.count_unit,
        }
    }

    /// Classify `m` by its unit and convert it.
    pub fn convert(&self, m: &Measurement) -> Stat {
        match m.unit.as_str() {
            "ns/op" => self.execution_time(m.value),
            "sec/op" => match &m.orig {
                Some((value, unit)) if unit == "ns/op" => self.execution_time(*value),
                _ => self.execution_time(m.value * 1e9),
            },
            "B/op" => Stat::new(
                "Memory Usage",
                format_memory(m.value, self.mem.as_str()),
                self.mem.as_str(),
                "op",
            ),
            "allocs/op" => Stat::new(
                "Allocations",
                format_count(m.value, self.count.as_str()),
                self.count.as_str(),
                "op",
            ),
            "B/s" | "MB/s" | "GB/s" => {
                let (value, unit) = match &m.orig {
                    Some((value, unit)) if *value != 0.0 && !unit.is_empty() => {
                        (*value, unit.as_str())
                    }
                    _ => (m.value, m.unit.as_str()),
                };
                Stat::new("Throughput", round_to_two(value), unit, "")
            }
            unit if unit.ends_with("/s") => {
                Stat::new("Throughput", round_to_two(m.value), unit, "")
            }
            unit => Stat::new("Metric", round_to_two(m.value), unit, ""),
        }
    }

    /// Build the `Iterations` stat.
    pub fn iterations(&self, iterations: u64) -> Stat {
        Stat::new(
            "Iterations",
            format_count(iterations as f64, self.count.as_str()),
            self.count.as_str(),
            "",
        )
    }

    fn execution_time(&self, value_ns: f64) -> Stat {
        Stat::new(
            "Execution Time",
            format_time(value_ns, self.time.as_str()),
            self.time.as_str(),
            "op",
        )
    }
}

/// Returns `true` for measurements that carry memory statistics.
pub fn is_memory_stat(m: &Measurement) -> bool {
    m.unit == "B/op"
}

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

//! Unit conversion and stat labelling.
//!
//! All conversion functions are pure. An unrecognized unit passes the value through
//! unchanged (still rounded), and a zero input always yields exactly `0.0` so that no
//! `-0` artifacts reach the chart.
//!
//! # Examples
//!
//! ```rust
//! use vizb_core::units::{format_count, format_memory, format_time, stat_label};
//!
//! assert_eq!(format_time(1e9, "s"), 1.0);
//! assert_eq!(format_memory(1024.0, "KB"), 1.0);
//! assert_eq!(format_memory(1.0, "b"), 8.0);
//! assert_eq!(format_count(1000.0, "K"), 1.0);
//! assert_eq!(stat_label("Execution Time", "ns", "op"), "Execution Time (ns/op)");
//! ```

use crate::error::VizbError;
use std::fmt;
use std::str::FromStr;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Round to two decimal places, half away from zero.
#[inline]
pub fn round_to_two(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Convert nanoseconds to `unit` (`s`, `ms`, `us`, anything else is `ns`).
pub fn format_time(value_ns: f64, unit: &str) -> f64 {
    if value_ns == 0.0 {
        return 0.0;
    }

    let converted = match unit {
        "s" => value_ns / 1e9,
        "ms" => value_ns / 1e6,
        "us" => value_ns / 1e3,
        _ => value_ns,
    };

    round_to_two(converted)
}

/// Convert bytes to `unit`.
///
/// `b` converts to bits; `KB`, `MB` and `GB` use binary multiples and are matched
/// case-insensitively. Anything else (including `B`) keeps bytes.
pub fn format_memory(value_bytes: f64, unit: &str) -> f64 {
    if value_bytes == 0.0 {
        return 0.0;
    }

    let converted = if unit == "b" {
        value_bytes * 8.0
    } else if unit.eq_ignore_ascii_case("kb") {
        value_bytes / KIB
    } else if unit.eq_ignore_ascii_case("mb") {
        value_bytes / MIB
    } else if unit.eq_ignore_ascii_case("gb") {
        value_bytes / GIB
    } else {
        value_bytes
    };

    round_to_two(converted)
}

/// Scale a plain count to `unit` (`K`, `M`, `B`, `T`; empty keeps the raw count).
pub fn format_count(value: f64, unit: &str) -> f64 {
    if value == 0.0 {
        return 0.0;
    }

    let converted = match unit {
        "K" => value / 1e3,
        "M" => value / 1e6,
        "B" => value / 1e9,
        "T" => value / 1e12,
        _ => value,
    };

    round_to_two(converted)
}

/// Compose a stat label such as `Memory Usage (KB/op)`.
pub fn stat_label(name: &str, unit: &str, per: &str) -> String {
    match (unit.is_empty(), per.is_empty()) {
        (false, false) => format!("{} ({}/{})", name, unit, per),
        (false, true) => format!("{} ({})", name, unit),
        (true, false) => format!("{}/{}", name, per),
        (true, true) => name.to_string(),
    }
}

/// Display unit for execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Nanoseconds (as reported by the harness)
    #[default]
    Nanoseconds,
    /// Microseconds
    Microseconds,
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
}

impl TimeUnit {
    /// Short unit symbol used in labels and passed to [`format_time`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = VizbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" => Ok(TimeUnit::Nanoseconds),
            "us" => Ok(TimeUnit::Microseconds),
            "ms" => Ok(TimeUnit::Milliseconds),
            "s" => Ok(TimeUnit::Seconds),
            _ => Err(VizbError::InvalidUnit {
                kind: "time unit",
                value: s.to_string(),
                expected: "ns, us, ms, s",
            }),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display unit for memory usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryUnit {
    /// Bits
    Bits,
    /// Bytes (as reported by the harness)
    #[default]
    Bytes,
    /// Kibibytes, labelled `KB`
    Kilobytes,
    /// Mebibytes, labelled `MB`
    Megabytes,
    /// Gibibytes, labelled `GB`
    Gigabytes,
}

impl MemoryUnit {
    /// Unit symbol used in labels and passed to [`format_memory`].
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryUnit::Bits => "b",
            MemoryUnit::Bytes => "B",
            MemoryUnit::Kilobytes => "KB",
            MemoryUnit::Megabytes => "MB",
            MemoryUnit::Gigabytes => "GB",
        }
    }
}

impl FromStr for MemoryUnit {
    type Err = VizbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `b` and `B` differ only by case, so they are checked before normalising.
        match s.trim() {
            "b" => return Ok(MemoryUnit::Bits),
            "B" => return Ok(MemoryUnit::Bytes),
            _ => {}
        }

        match s.trim().to_ascii_uppercase().as_str() {
            "KB" => Ok(MemoryUnit::Kilobytes),
            "MB" => Ok(MemoryUnit::Megabytes),
            "GB" => Ok(MemoryUnit::Gigabytes),
            _ => Err(VizbError::InvalidUnit {
                kind: "memory unit",
                value: s.to_string(),
                expected: "b, B, KB, MB, GB",
            }),
        }
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scale used for allocation counts and other plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountUnit {
    /// Raw count, no suffix
    #[default]
    Raw,
    /// Thousands
    Thousands,
    /// Millions
    Millions,
    /// Billions
    Billions,
    /// Trillions
    Trillions,
}

impl CountUnit {
    /// Unit suffix used in labels and passed to [`format_count`]; empty for raw counts.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountUnit::Raw => "",
            CountUnit::Thousands => "K",
            CountUnit::Millions => "M",
            CountUnit::Billions => "B",
            CountUnit::Trillions => "T",
        }
    }
}

impl FromStr for CountUnit {
    type Err = VizbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(CountUnit::Raw),
            "K" => Ok(CountUnit::Thousands),
            "M" => Ok(CountUnit::Millions),
            "B" => Ok(CountUnit::Billions),
            "T" => Ok(CountUnit::Trillions),
            _ => Err(VizbError::InvalidUnit {
                kind: "count unit",
                value: s.to_string(),
                expected: "K, M, B, T or empty",
            }),
        }
    }
}

impl fmt::Display for CountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_to_two() {
        assert_eq!(round_to_two(0.0), 0.0);
        assert_eq!(round_to_two(1.006), 1.01);
        assert_eq!(round_to_two(1.004), 1.0);
        assert_eq!(round_to_two(100.0), 100.0);
        assert_eq!(round_to_two(-1.006), -1.01);
        assert_eq!(round_to_two(-1.004), -1.0);
        assert_eq!(round_to_two(123456.78945345545), 123456.79);
        assert_eq!(round_to_two(0.00001), 0.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1000.0, ""), 1000.0);
        assert_eq!(format_time(5_000_000_000.0, "s"), 5.0);
        assert_eq!(format_time(5_000_000.0, "ms"), 5.0);
        assert_eq!(format_time(5_000.0, "us"), 5.0);
        assert_eq!(format_time(0.5, "ns"), 0.5);
        assert_eq!(format_time(1000.0, "invalid"), 1000.0);
        assert_eq!(format_time(123.45, "ms"), 0.0);
        assert_eq!(format_time(-5e9, "s"), -5.0);
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory(1024.0, ""), 1024.0);
        assert_eq!(format_memory(64.0, "b"), 512.0);
        assert_eq!(format_memory(2048.0, "KB"), 2.0);
        assert_eq!(format_memory(2_097_152.0, "MB"), 2.0);
        assert_eq!(format_memory(2_147_483_648.0, "GB"), 2.0);
        assert_eq!(format_memory(512.0, "KB"), 0.5);
        assert_eq!(format_memory(64.0, "KB"), 0.06);
        assert_eq!(format_memory(2048.0, "kb"), 2.0);
        assert_eq!(format_memory(1.0, "GB"), 0.0);
        assert_eq!(format_memory(1024.0, "invalid"), 1024.0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1000.0, ""), 1000.0);
        assert_eq!(format_count(5000.0, "K"), 5.0);
        assert_eq!(format_count(5e6, "M"), 5.0);
        assert_eq!(format_count(5e9, "B"), 5.0);
        assert_eq!(format_count(5e12, "T"), 5.0);
        assert_eq!(format_count(500.0, "K"), 0.5);
        assert_eq!(format_count(999.0, "K"), 1.0);
        assert_eq!(format_count(2.0, "K"), 0.0);
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("Execution Time", "ns", "op"), "Execution Time (ns/op)");
        assert_eq!(stat_label("Throughput", "MB/s", ""), "Throughput (MB/s)");
        assert_eq!(stat_label("Allocations", "", "op"), "Allocations/op");
        assert_eq!(stat_label("Iterations", "", ""), "Iterations");
    }

    #[test]
    fn test_time_unit_parse() {
        assert_eq!("ns".parse::<TimeUnit>().unwrap(), TimeUnit::Nanoseconds);
        assert_eq!("MS".parse::<TimeUnit>().unwrap(), TimeUnit::Milliseconds);
        assert_eq!("s".parse::<TimeUnit>().unwrap().as_str(), "s");
        assert!("minutes".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_memory_unit_parse_keeps_bit_byte_distinction() {
        assert_eq!("b".parse::<MemoryUnit>().unwrap(), MemoryUnit::Bits);
        assert_eq!("B".parse::<MemoryUnit>().unwrap(), MemoryUnit::Bytes);
        assert_eq!("kb".parse::<MemoryUnit>().unwrap(), MemoryUnit::Kilobytes);
        assert_eq!("Mb".parse::<MemoryUnit>().unwrap().as_str(), "MB");
        assert!("TB".parse::<MemoryUnit>().is_err());
    }

    #[test]
    fn test_count_unit_parse() {
        assert_eq!("".parse::<CountUnit>().unwrap(), CountUnit::Raw);
        assert_eq!("k".parse::<CountUnit>().unwrap(), CountUnit::Thousands);
        assert_eq!("T".parse::<CountUnit>().unwrap().as_str(), "T");

        let err = "X".parse::<CountUnit>().unwrap_err();
        assert!(err.to_string().contains("count unit 'X'"));
    }

    proptest! {
        #[test]
        fn prop_zero_is_invariant(unit in "[a-zA-Z]{0,3}") {
            prop_assert_eq!(format_time(0.0, &unit).to_bits(), 0.0f64.to_bits());
            prop_assert_eq!(format_memory(0.0, &unit).to_bits(), 0.0f64.to_bits());
            prop_assert_eq!(format_count(0.0, &unit).to_bits(), 0.0f64.to_bits());
        }

        #[test]
        fn prop_unknown_unit_is_rounded_identity(value in -1e9f64..1e9f64) {
            prop_assert_eq!(format_time(value, "ns"), round_to_two(value));
            prop_assert_eq!(format_memory(value, "B"), round_to_two(value));
            prop_assert_eq!(format_count(value, ""), round_to_two(value));
        }
    }
}

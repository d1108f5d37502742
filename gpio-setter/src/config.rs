// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiocdev::line::{Offset, Value};
use std::fmt;
use std::path::PathBuf;

/// The chip used if none is specified.
pub const DEFAULT_CHIP: &str = "/dev/gpiochip0";

/// The line offset used if none is specified.
pub const DEFAULT_OFFSET: Offset = 1;

/// The consumer label applied to the requested line if none is specified.
pub const DEFAULT_CONSUMER: &str = "gpio_output";

/// The line to drive and how to drive it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The path to the GPIO chip character device.
    pub chip: PathBuf,

    /// The offset of the line on the chip.
    pub offset: Offset,

    /// The consumer label applied to the line while it is requested.
    pub consumer: String,

    /// The value the line is set to when it is requested as an output.
    pub initial: Value,

    /// The value the line is then driven to.
    pub value: Value,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chip: DEFAULT_CHIP.into(),
            offset: DEFAULT_OFFSET,
            consumer: DEFAULT_CONSUMER.into(),
            initial: Value::Inactive,
            value: Value::Active,
        }
    }
}

/// Map a chip identifier to the path of its character device.
///
/// Chips may be identified by number, name, or path,
/// e.g. `0`, `gpiochip0` and `/dev/gpiochip0` all map to `/dev/gpiochip0`.
pub fn chip_path_from_id(id: &str) -> PathBuf {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        // from number
        return format!("/dev/gpiochip{id}").into();
    }
    if !id.contains('/') {
        // from name
        let mut p: PathBuf = "/dev".into();
        p.push(id);
        return p;
    }
    // from raw path
    id.into()
}

/// Parse a line value.
///
/// Values may be inactive/off/false/0 or active/on/true/1.
pub fn parse_value(s: &str) -> Result<Value, InvalidValue> {
    match s.to_lowercase().as_str() {
        "0" | "inactive" | "off" | "false" => Ok(Value::Inactive),
        "1" | "active" | "on" | "true" => Ok(Value::Active),
        _ => Err(InvalidValue(s.into())),
    }
}

/// A string that does not correspond to a line value.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid line value: '{0}'")]
pub struct InvalidValue(pub String);

/// A human readable form of a line value.
pub struct Level(pub Value);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Active => write!(f, "HIGH (1)"),
            Value::Inactive => write!(f, "LOW (0)"),
        }
    }
}

// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a single GPIO line using the GPIO character device.
//!
//! The line is requested as an output, driven to a value, then released
//! along with the chip.
//!
//! ```no_run
//! # fn example() -> Result<(), gpio_setter::Error> {
//! use gpio_setter::{Cdev, Config};
//!
//! // sets line 1 on /dev/gpiochip0 high
//! gpio_setter::run(&Cdev, &Config::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! Chip access is provided by a [`Backend`], so the sequence can be driven
//! against chips other than the GPIO character device.

use gpiocdev::line::Offset;
use std::path::PathBuf;

mod backend;
pub use backend::{Backend, Cdev, Chip};

mod config;
pub use config::{chip_path_from_id, parse_value, Config, InvalidValue, Level};
pub use config::{DEFAULT_CHIP, DEFAULT_CONSUMER, DEFAULT_OFFSET};

mod driver;
pub use driver::{run, Line, OutputLine};

/// The result returned by [`gpio_setter`] functions.
///
/// [`gpio_setter`]: crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`gpio_setter`] functions.
///
/// Each variant identifies the step that failed.
///
/// [`gpio_setter`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The chip could not be opened.
    #[error("Failed to open GPIO chip '{}'", .0.display())]
    OpenChip(PathBuf, #[source] gpiocdev::Error),

    /// The line could not be found on the chip.
    #[error("Failed to get GPIO line {0}")]
    GetLine(Offset, #[source] gpiocdev::Error),

    /// The line could not be requested as an output.
    #[error("Failed to request GPIO line {0} as output")]
    RequestOutput(Offset, #[source] gpiocdev::Error),

    /// The line value could not be set.
    #[error("Failed to set GPIO line {0} value")]
    SetValue(Offset, #[source] gpiocdev::Error),
}

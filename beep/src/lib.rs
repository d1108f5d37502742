// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sound a tone on a Linux input event device, such as the PC speaker.
//!
//! The tone is started by writing an `EV_SND`/`SND_TONE` event with the
//! frequency as the value, and stopped by writing the same event with a
//! zero value.
//!
//! ```no_run
//! # fn example() -> Result<(), beep::Error> {
//! use std::time::Duration;
//!
//! let tone = beep::Tone {
//!     frequency: 440,
//!     duration: Duration::from_secs(1),
//! };
//! let report = beep::beep("/dev/input/event3", &tone, |_, _| {})?;
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

/// The input event record written to the device.
pub mod event;

mod tone;
pub use tone::{beep, open_device, parse_int, play, Phase, Report, Tone};
pub use tone::{DEFAULT_DURATION, DEFAULT_FREQUENCY};

/// The result returned by [`beep`] functions.
///
/// [`beep`]: crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`beep`] functions.
///
/// [`beep`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The device could not be opened.
    #[error("unable to open '{}'", .0.display())]
    Open(PathBuf, #[source] std::io::Error),

    /// A buffer was too short to contain an event.
    #[error("read {1} bytes, expected at least {0}")]
    UnderRead(usize, usize),
}

// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::{InputEvent, RECORD_SIZE};
use crate::{Error, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// The tone frequency used if none is specified, in Hz.
pub const DEFAULT_FREQUENCY: i32 = 1000;

/// The tone duration used if none is specified.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// The tone to be sounded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tone {
    /// The frequency of the tone in Hz.
    pub frequency: i32,
    /// How long the tone is sounded.
    pub duration: Duration,
}

impl Default for Tone {
    fn default() -> Self {
        Tone {
            frequency: DEFAULT_FREQUENCY,
            duration: DEFAULT_DURATION,
        }
    }
}

impl Tone {
    /// Build a tone from optional frequency and duration arguments.
    ///
    /// Missing arguments take their defaults.
    /// Arguments are parsed with [`parse_int`], so garbage becomes 0.
    /// The duration is in seconds and negative durations are treated as 0.
    pub fn from_args(frequency: Option<&str>, duration: Option<&str>) -> Tone {
        let mut tone = Tone::default();
        if let Some(f) = frequency {
            tone.frequency = parse_int(f);
        }
        if let Some(d) = duration {
            tone.duration = Duration::from_secs(parse_int(d).max(0) as u64);
        }
        tone
    }
}

/// Parse the leading integer from a string, in the manner of C `atoi`.
///
/// Leading whitespace and a single sign are accepted, and parsing stops at
/// the first non-digit. Strings with no leading digits return 0.
/// Values beyond the range of an i32 saturate.
pub fn parse_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let limit = i32::MAX as i64 + 1;
    let mut v: i64 = 0;
    for c in digits.bytes().take_while(u8::is_ascii_digit) {
        v = (v * 10 + (c - b'0') as i64).min(limit);
    }
    if negative {
        v = -v;
    }
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// The phases of a beep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The tone has been started.
    On,
    /// The tone has been stopped.
    Off,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::On => write!(f, "tone on"),
            Phase::Off => write!(f, "tone off"),
        }
    }
}

/// The outcome of the writes performed by a beep.
#[derive(Debug)]
pub struct Report {
    /// The result of writing the tone on event.
    pub on: io::Result<usize>,
    /// The result of writing the tone off event.
    pub off: io::Result<usize>,
}

impl Report {
    /// Returns true if both events were written in full.
    pub fn is_complete(&self) -> bool {
        matches!(self.on, Ok(RECORD_SIZE)) && matches!(self.off, Ok(RECORD_SIZE))
    }

    /// The byte count of the final write, truncated to a process exit status.
    ///
    /// A failed write maps to 255, as a -1 return would.
    pub fn byte_count_status(&self) -> u8 {
        match self.off {
            Ok(n) => n as u8,
            Err(_) => u8::MAX,
        }
    }
}

/// Open the input event device for reading and writing.
pub fn open_device<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| Error::Open(path.to_path_buf(), e))
}

/// Sound a tone on the device at `path`.
///
/// The device is closed before returning.
/// Failing to open the device is an error, while failed writes are only
/// recorded in the returned [`Report`].
///
/// `observe` is called with the result of each write as it completes.
pub fn beep<P, F>(path: P, tone: &Tone, observe: F) -> Result<Report>
where
    P: AsRef<Path>,
    F: FnMut(Phase, &io::Result<usize>),
{
    let path = path.as_ref();
    let mut dev = open_device(path)?;
    debug!(path = %path.display(), "opened device");
    Ok(play(&mut dev, tone, observe))
}

/// Sound a tone on an already open device.
///
/// Each event is issued as a single write.
/// The tone off event is written even if the tone on write failed.
pub fn play<W, F>(dev: &mut W, tone: &Tone, mut observe: F) -> Report
where
    W: Write,
    F: FnMut(Phase, &io::Result<usize>),
{
    let on = write_tone(dev, Phase::On, tone.frequency);
    observe(Phase::On, &on);
    thread::sleep(tone.duration);
    let off = write_tone(dev, Phase::Off, 0);
    observe(Phase::Off, &off);
    Report { on, off }
}

fn write_tone<W: Write>(dev: &mut W, phase: Phase, frequency: i32) -> io::Result<usize> {
    let ev = InputEvent::tone(frequency);
    let res = dev.write(ev.as_bytes());
    match &res {
        Ok(n) if *n == RECORD_SIZE => debug!(%phase, frequency, bytes = n, "wrote event"),
        Ok(n) => warn!(%phase, frequency, bytes = n, expected = RECORD_SIZE, "short write"),
        Err(e) => warn!(%phase, frequency, error = %e, "write failed"),
    }
    res
}

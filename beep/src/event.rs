// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, Result};
use libc::c_long;
use std::mem::size_of;
use std::slice;

/// The event type for sound events.
pub const EV_SND: u16 = 0x12;

/// The sound event code for a tone, with the value being the frequency in Hz.
pub const SND_TONE: u16 = 0x02;

/// The size of an [`InputEvent`] as read and written on the device.
///
/// 24 bytes on 64-bit platforms, 16 bytes on 32-bit platforms.
pub const RECORD_SIZE: usize = size_of::<InputEvent>();

/// The event timestamp.
///
/// Equivalent to the kernel `timeval`, or the `__sec`/`__usec` pair used on
/// 32-bit platforms with 64-bit time, both of which are a pair of longs.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Timestamp {
    /// Seconds.
    pub sec: c_long,
    /// Microseconds.
    pub usec: c_long,
}

/// A record exchanged with an input event device.
///
/// Matches the layout of the kernel `struct input_event`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputEvent {
    /// The time of the event.
    ///
    /// Ignored by the kernel for events written by userspace, so left zeroed.
    pub time: Timestamp,
    /// The event class, e.g. [`EV_SND`].
    pub kind: u16,
    /// The event subtype within the class, e.g. [`SND_TONE`].
    pub code: u16,
    /// The event payload.
    pub value: i32,
}

impl InputEvent {
    /// A tone event.
    ///
    /// A zero `frequency` turns the tone off.
    pub fn tone(frequency: i32) -> InputEvent {
        InputEvent {
            kind: EV_SND,
            code: SND_TONE,
            value: frequency,
            ..Default::default()
        }
    }

    /// The event as the raw bytes to be written to the device.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: InputEvent is repr(C), contains no padding, and the slice
        // borrows self.
        unsafe { slice::from_raw_parts(self as *const InputEvent as *const u8, RECORD_SIZE) }
    }

    /// Read an event from the start of a byte buffer.
    pub fn from_slice(d: &[u8]) -> Result<InputEvent> {
        if d.len() < RECORD_SIZE {
            return Err(Error::UnderRead(RECORD_SIZE, d.len()));
        }
        // SAFETY: length is checked above, and any bit pattern is a valid InputEvent.
        Ok(unsafe { std::ptr::read_unaligned(d.as_ptr() as *const InputEvent) })
    }
}

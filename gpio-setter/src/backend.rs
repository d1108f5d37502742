// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiocdev::line::{Info, Offset, Value};
use gpiocdev::request::Request;
use gpiocdev::Result;
use std::path::Path;

/// A source of GPIO chips.
pub trait Backend {
    /// The chip type provided by the backend.
    type Chip: Chip;

    /// Open the chip at the given path.
    fn open_chip(&self, path: &Path) -> Result<Self::Chip>;
}

/// An open GPIO chip.
///
/// The chip is released when dropped.
pub trait Chip {
    /// A request for lines on the chip.
    ///
    /// The request holds the requested lines until it is dropped.
    type Request;

    /// The path to the chip.
    fn path(&self) -> &Path;

    /// Get the info for the line at `offset`.
    ///
    /// Fails if the chip has no such line.
    fn line_info(&self, offset: Offset) -> Result<Info>;

    /// Request the line at `offset` as an output, set to `value`.
    fn request_output(&self, offset: Offset, consumer: &str, value: Value)
        -> Result<Self::Request>;

    /// Set the value of a line held by `req`.
    fn set_value(&self, req: &Self::Request, offset: Offset, value: Value) -> Result<()>;
}

/// The GPIO character device backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cdev;

impl Backend for Cdev {
    type Chip = gpiocdev::chip::Chip;

    fn open_chip(&self, path: &Path) -> Result<Self::Chip> {
        gpiocdev::chip::Chip::from_path(path)
    }
}

impl Chip for gpiocdev::chip::Chip {
    type Request = Request;

    fn path(&self) -> &Path {
        gpiocdev::chip::Chip::path(self)
    }

    fn line_info(&self, offset: Offset) -> Result<Info> {
        gpiocdev::chip::Chip::line_info(self, offset)
    }

    fn request_output(&self, offset: Offset, consumer: &str, value: Value) -> Result<Request> {
        Request::builder()
            .on_chip(gpiocdev::chip::Chip::path(self))
            .with_consumer(consumer)
            .with_line(offset)
            .as_output(value)
            .request()
    }

    fn set_value(&self, req: &Request, offset: Offset, value: Value) -> Result<()> {
        req.set_value(offset, value)
    }
}

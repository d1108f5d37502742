// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::backend::{Backend, Chip};
use crate::{Config, Error, Result};
use gpiocdev::line::{Info, Offset, Value};
use tracing::debug;

/// A line on a chip.
///
/// The line borrows the chip so it cannot outlive it.
#[derive(Debug)]
pub struct Line<'c, C: Chip> {
    chip: &'c C,
    info: Info,
}

impl<'c, C: Chip> Line<'c, C> {
    /// Get the line at `offset` on the chip.
    pub fn get(chip: &'c C, offset: Offset) -> gpiocdev::Result<Self> {
        let info = chip.line_info(offset)?;
        Ok(Line { chip, info })
    }

    /// The offset of the line on its chip.
    pub fn offset(&self) -> Offset {
        self.info.offset
    }

    /// The info for the line at the time it was acquired.
    pub fn info(&self) -> &Info {
        &self.info
    }

    /// Request the line as an output, initially set to `value`.
    pub fn request_output(
        self,
        consumer: &str,
        value: Value,
    ) -> gpiocdev::Result<OutputLine<'c, C>> {
        let offset = self.offset();
        let req = self.chip.request_output(offset, consumer, value)?;
        Ok(OutputLine {
            chip: self.chip,
            offset,
            req,
        })
    }
}

/// A line that has been requested as an output.
///
/// The request is released when the line is dropped, which must happen
/// before the chip is released.
pub struct OutputLine<'c, C: Chip> {
    chip: &'c C,
    offset: Offset,
    req: C::Request,
}

impl<C: Chip> OutputLine<'_, C> {
    /// The offset of the line on its chip.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Drive the line to `value`.
    pub fn set_value(&self, value: Value) -> gpiocdev::Result<()> {
        self.chip.set_value(&self.req, self.offset, value)
    }
}

/// Drive the configured line to the configured value.
///
/// The chip is opened, the line requested as an output and set, then the
/// line and chip are released.
/// The first failing step aborts the sequence, and anything acquired so far
/// is released before returning.
pub fn run<B: Backend>(backend: &B, cfg: &Config) -> Result<()> {
    let chip = backend
        .open_chip(&cfg.chip)
        .map_err(|e| Error::OpenChip(cfg.chip.clone(), e))?;
    debug!(chip = %cfg.chip.display(), "opened chip");
    drive(&chip, cfg)
}

fn drive<C: Chip>(chip: &C, cfg: &Config) -> Result<()> {
    let line = Line::get(chip, cfg.offset).map_err(|e| Error::GetLine(cfg.offset, e))?;
    debug!(
        chip = %chip.path().display(),
        offset = line.offset(),
        name = %line.info().name,
        used = line.info().used,
        "got line"
    );
    let line = line
        .request_output(&cfg.consumer, cfg.initial)
        .map_err(|e| Error::RequestOutput(cfg.offset, e))?;
    debug!(
        offset = line.offset(),
        consumer = %cfg.consumer,
        initial = ?cfg.initial,
        "requested line as output"
    );
    line.set_value(cfg.value)
        .map_err(|e| Error::SetValue(cfg.offset, e))?;
    debug!(offset = line.offset(), value = ?cfg.value, "set line value");
    Ok(())
}

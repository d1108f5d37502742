// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpio_setter::{Backend, Chip};
use gpiocdev::line::{Info, Offset, Value};
use gpiocdev::{Error, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// The calls made on a fake backend, in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    OpenChip(PathBuf),
    LineInfo(Offset),
    RequestOutput(Offset, String, Value),
    SetValue(Offset, Value),
    ReleaseLine(Offset),
    ReleaseChip(PathBuf),
}

/// The step a fake backend should fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    OpenChip,
    LineInfo,
    RequestOutput,
    SetValue,
}

type Log = Rc<RefCell<Vec<Call>>>;

/// A backend that records all calls, and fails a given step.
pub struct Fake {
    log: Log,
    fail: Option<Step>,
    num_lines: u32,
}

impl Fake {
    pub fn new(num_lines: u32) -> Fake {
        Fake {
            log: Default::default(),
            fail: None,
            num_lines,
        }
    }

    pub fn failing(num_lines: u32, step: Step) -> Fake {
        Fake {
            fail: Some(step),
            ..Fake::new(num_lines)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    /// The number of chips opened and not yet released.
    pub fn open_chips(&self) -> usize {
        let log = self.log.borrow();
        let opened = log
            .iter()
            .filter(|c| matches!(c, Call::OpenChip(_)))
            .count();
        let released = log
            .iter()
            .filter(|c| matches!(c, Call::ReleaseChip(_)))
            .count();
        // a failed open is logged but never released
        opened - released - usize::from(self.fail == Some(Step::OpenChip))
    }
}

fn injected(step: Step) -> Error {
    Error::InvalidArgument(format!("injected {step:?} failure"))
}

impl Backend for Fake {
    type Chip = FakeChip;

    fn open_chip(&self, path: &Path) -> Result<FakeChip> {
        self.log.borrow_mut().push(Call::OpenChip(path.into()));
        if self.fail == Some(Step::OpenChip) {
            return Err(injected(Step::OpenChip));
        }
        Ok(FakeChip {
            path: path.into(),
            log: self.log.clone(),
            fail: self.fail,
            num_lines: self.num_lines,
        })
    }
}

pub struct FakeChip {
    path: PathBuf,
    log: Log,
    fail: Option<Step>,
    num_lines: u32,
}

impl Drop for FakeChip {
    fn drop(&mut self) {
        self.log
            .borrow_mut()
            .push(Call::ReleaseChip(self.path.clone()));
    }
}

pub struct FakeRequest {
    offset: Offset,
    log: Log,
}

impl Drop for FakeRequest {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::ReleaseLine(self.offset));
    }
}

impl Chip for FakeChip {
    type Request = FakeRequest;

    fn path(&self) -> &Path {
        &self.path
    }

    fn line_info(&self, offset: Offset) -> Result<Info> {
        self.log.borrow_mut().push(Call::LineInfo(offset));
        if self.fail == Some(Step::LineInfo) {
            return Err(injected(Step::LineInfo));
        }
        if offset >= self.num_lines {
            return Err(Error::InvalidArgument(format!("offset {offset} out of range")));
        }
        Ok(Info {
            offset,
            name: format!("GPIO{offset}"),
            ..Default::default()
        })
    }

    fn request_output(&self, offset: Offset, consumer: &str, value: Value) -> Result<FakeRequest> {
        self.log
            .borrow_mut()
            .push(Call::RequestOutput(offset, consumer.into(), value));
        if self.fail == Some(Step::RequestOutput) {
            return Err(injected(Step::RequestOutput));
        }
        Ok(FakeRequest {
            offset,
            log: self.log.clone(),
        })
    }

    fn set_value(&self, req: &FakeRequest, offset: Offset, value: Value) -> Result<()> {
        assert_eq!(req.offset, offset);
        self.log.borrow_mut().push(Call::SetValue(offset, value));
        if self.fail == Some(Step::SetValue) {
            return Err(injected(Step::SetValue));
        }
        Ok(())
    }
}

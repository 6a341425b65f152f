// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::{Read, Write};
use std::mem::MaybeUninit;

use log::{debug, warn};

use crate::acquire::{self, Acquired};
use crate::error::HarnessError;
use crate::status::Status;

/// Size of the stack buffer a line is copied into.
pub const CAPACITY: usize = 64;

/// Content length from which a line is reported as large.
pub const LARGE_THRESHOLD: usize = CAPACITY - 2;

/// Position of the left operand of the byte comparison.
pub const LEFT: usize = 4;

/// Position of the right operand of the byte comparison.
pub const RIGHT: usize = 5;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Copy the line into an uninitialized stack buffer with no bound. Long
    /// lines corrupt the classifier's stack frame.
    #[default]
    Unchecked,

    /// Copy into a zeroed buffer and reject lines that do not fit.
    Checked,
}

/// Apply the classification checks in order, stopping at the first match.
///
/// `probe` yields the bytes at [`LEFT`] and [`RIGHT`]. It is only called once
/// the content is known to be non-empty.
pub fn decide<F>(content_len: usize, probe: F) -> Status
where
    F: FnOnce() -> (u8, u8),
{
    if content_len == 0 {
        return Status::Empty;
    }

    let (left, right) = probe();

    if left > right {
        return Status::ConditionTrue;
    }

    if content_len >= LARGE_THRESHOLD {
        return Status::Large;
    }

    Status::Normal
}

/// Reads one line, classifies it and writes the status text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Classifier {
    mode: Mode,
}

impl Classifier {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn checked() -> Self {
        Self::new(Mode::Checked)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn classify<R, W>(&self, source: &mut R, sink: &mut W) -> Result<Status, HarnessError>
    where
        R: Read,
        W: Write,
    {
        debug!("classifying line in {:?} mode", self.mode);

        let result = match self.mode {
            Mode::Unchecked => classify_unchecked(source, sink),
            Mode::Checked => classify_checked(source, sink),
        };

        match &result {
            Ok(status) => debug!("classified as {:?}, exit code {}", status, status.code()),
            Err(err) => warn!("line not classified: {err}"),
        }

        result
    }
}

fn emit<W: Write>(sink: &mut W, status: Status) -> Result<(), HarnessError> {
    sink.write_all(status.output().as_bytes())?;
    sink.flush()?;
    Ok(())
}

// Must own its frame: the buffer has to sit next to this function's saved
// state, and the status text has to be written before returning through it.
#[inline(never)]
fn classify_unchecked<R, W>(source: &mut R, sink: &mut W) -> Result<Status, HarnessError>
where
    R: Read,
    W: Write,
{
    let mut buffer = MaybeUninit::<[u8; CAPACITY]>::uninit();
    let base = buffer.as_mut_ptr() as *mut u8;

    // SAFETY: none. A line of `CAPACITY` bytes or more writes past `buffer`.
    let acquired = unsafe { acquire::read_line_unchecked(base, source)? };

    let content_len = match acquired {
        Acquired::EndOfStream => 0,
        // SAFETY: a terminator was just written at or after `base`.
        Acquired::Line(_) => unsafe { acquire::content_len_unchecked(base) },
    };

    // Short lines leave these positions unwritten; the read is allowed to
    // observe whatever the stack held.
    let status = decide(content_len, || unsafe {
        (
            base.wrapping_add(LEFT).read_volatile(),
            base.wrapping_add(RIGHT).read_volatile(),
        )
    });

    emit(sink, status)?;

    Ok(status)
}

fn classify_checked<R, W>(source: &mut R, sink: &mut W) -> Result<Status, HarnessError>
where
    R: Read,
    W: Write,
{
    let mut buffer = [0u8; CAPACITY];

    let content_len = match acquire::read_line_checked(&mut buffer, source)? {
        Acquired::EndOfStream => 0,
        Acquired::Line(_) => acquire::content_len(&buffer),
    };

    let status = decide(content_len, || (buffer[LEFT], buffer[RIGHT]));

    emit(sink, status)?;

    Ok(status)
}

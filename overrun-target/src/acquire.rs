// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Line acquisition into caller-provided storage.
//!
//! [`read_line_unchecked`] is the defect under study: it behaves like C's
//! `gets` and writes however many bytes the source produces, plus a zero
//! terminator, starting at a raw base address. [`read_line_checked`] is the
//! control variant that refuses to write past the end of a slice.

use std::io::{self, ErrorKind, Read};

use crate::error::HarnessError;

/// Ends a line. Never stored in the destination.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Written after the last transferred byte, and the marker that ends the
/// content when measuring its length.
pub const NUL: u8 = 0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Acquired {
    /// A line was read; holds the number of bytes transferred, excluding the
    /// line terminator.
    Line(usize),

    /// The source was exhausted before any byte was read. The destination
    /// was not written.
    EndOfStream,
}

fn next_byte<R: Read>(source: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];

    loop {
        match source.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

/// Read one line from `source` into memory starting at `dst`, with no bound on
/// the number of bytes written.
///
/// # Safety
///
/// `dst` must be valid for writes of the line length plus one. Nothing here
/// checks that, and the harness binaries deliberately call this with a buffer
/// that a long enough line overruns.
pub unsafe fn read_line_unchecked<R: Read>(
    dst: *mut u8,
    source: &mut R,
) -> Result<Acquired, HarnessError> {
    let mut written = 0;

    loop {
        match next_byte(source)? {
            None if written == 0 => return Ok(Acquired::EndOfStream),
            None | Some(LINE_TERMINATOR) => break,
            Some(byte) => {
                // Volatile so the stores past the end of the allocation survive
                // optimization.
                dst.wrapping_add(written).write_volatile(byte);
                written += 1;
            }
        }
    }

    dst.wrapping_add(written).write_volatile(NUL);

    Ok(Acquired::Line(written))
}

/// Count the bytes before the first [`NUL`] at `base`, scanning without bound.
///
/// # Safety
///
/// Memory from `base` up to and including the first zero byte must be
/// readable.
pub unsafe fn content_len_unchecked(base: *const u8) -> usize {
    let mut len = 0;

    while base.wrapping_add(len).read_volatile() != NUL {
        len += 1;
    }

    len
}

/// Read one line from `source` into `dst`, keeping the last slot of `dst` for
/// the terminator.
///
/// Stops with [`HarnessError::InputTooLong`] as soon as a byte would not fit.
/// The rest of the line is left unread in `source`.
pub fn read_line_checked<R: Read>(
    dst: &mut [u8],
    source: &mut R,
) -> Result<Acquired, HarnessError> {
    let capacity = dst.len();
    let mut written = 0;

    loop {
        match next_byte(source)? {
            None if written == 0 => return Ok(Acquired::EndOfStream),
            None | Some(LINE_TERMINATOR) => break,
            Some(byte) => {
                if written + 1 >= capacity {
                    return Err(HarnessError::InputTooLong {
                        capacity,
                        len: written + 1,
                    });
                }

                dst[written] = byte;
                written += 1;
            }
        }
    }

    if let Some(slot) = dst.get_mut(written) {
        *slot = NUL;
    }

    Ok(Acquired::Line(written))
}

/// Count the bytes of `buffer` before the first [`NUL`].
pub fn content_len(buffer: &[u8]) -> usize {
    buffer
        .iter()
        .position(|&byte| byte == NUL)
        .unwrap_or(buffer.len())
}

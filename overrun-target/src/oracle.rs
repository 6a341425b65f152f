// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Memory-safe prediction of the status the harness reports for an input.
//!
//! The prediction models the buffer after acquisition as the transferred
//! bytes, a zero terminator, then zeroes. That is exactly what the checked
//! classifier sees. The unchecked classifier agrees whenever
//! [`Verdict::undefined_read`] is false and [`Verdict::overruns`] is false; an
//! overrunning run may also crash instead of returning.

use serde::Serialize;

use crate::acquire::{LINE_TERMINATOR, NUL};
use crate::classify::{decide, CAPACITY, LEFT, RIGHT};
use crate::status::Status;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub code: i32,
    pub message: &'static str,

    /// Bytes of the first line, excluding its terminator.
    pub transferred: usize,

    /// Bytes of the first line before any embedded zero byte.
    pub content_len: usize,

    /// The unbounded copy writes past the buffer.
    pub overruns: bool,

    /// The comparison reads a position that acquisition never wrote, so the
    /// unchecked classifier's result depends on stale stack contents.
    pub undefined_read: bool,
}

pub fn predict(input: &[u8]) -> Verdict {
    let line = match input.iter().position(|&byte| byte == LINE_TERMINATOR) {
        Some(end) => &input[..end],
        None => input,
    };

    let transferred = line.len();
    let content_len = line
        .iter()
        .position(|&byte| byte == NUL)
        .unwrap_or(transferred);

    let at = |index: usize| line.get(index).copied().unwrap_or(NUL);
    let status = decide(content_len, || (at(LEFT), at(RIGHT)));

    // With exactly `LEFT` bytes the left operand is the terminator, and zero
    // is never greater than anything.
    let undefined_read = content_len > 0 && transferred < LEFT;

    Verdict {
        status,
        code: status.code(),
        message: status.message(),
        transferred,
        content_len,
        overruns: transferred + 1 > CAPACITY,
        undefined_read,
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io;

use thiserror::Error;

/// Exit code of the control binary when a line does not fit the buffer.
pub const EXIT_REJECTED: i32 = 2;

/// Exit code when the input source or output sink fails.
pub const EXIT_IO: i32 = 3;

#[derive(Error, Debug)]
pub enum HarnessError {
    /// Only raised in checked mode. `len` counts the bytes of the line seen
    /// before acquisition stopped, which is never less than `capacity`.
    #[error("input line of at least {len} bytes does not fit in a {capacity} byte buffer")]
    InputTooLong { capacity: usize, len: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HarnessError {
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::InputTooLong { .. } => EXIT_REJECTED,
            HarnessError::Io(_) => EXIT_IO,
        }
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A deliberately defective target for exercising fuzzers, sanitizers and
//! other analysis tools.
//!
//! One line is read into a 64 byte stack buffer with no length check, then
//! classified into a [`Status`] that the binaries forward as their exit code.
//! In [`Mode::Unchecked`] a long line overruns the buffer and corrupts the
//! classifier's stack frame. [`Mode::Checked`] runs the same classification
//! but rejects such lines, for use as a non-vulnerable control.

use std::io;

use log::error;

pub mod acquire;
pub mod classify;
pub mod error;
pub mod oracle;
pub mod outcome;
pub mod status;

pub use classify::{Classifier, Mode, CAPACITY, LARGE_THRESHOLD};
pub use error::HarnessError;
pub use oracle::{predict, Verdict};
pub use outcome::Outcome;
pub use status::Status;

/// Classify one line of stdin, writing the status text to stdout.
///
/// Returns the process exit code: the status code, or the error's own code if
/// the line could not be classified.
pub fn run(mode: Mode) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut source = stdin.lock();
    let mut sink = stdout.lock();

    match Classifier::new(mode).classify(&mut source, &mut sink) {
        Ok(status) => status.code(),
        Err(err) => {
            error!("{err}");
            err.exit_code()
        }
    }
}

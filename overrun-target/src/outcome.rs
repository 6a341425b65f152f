// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::process::ExitStatus;

use serde::Serialize;

use crate::status::Status;

/// How a harness process ended, as seen by whoever ran it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Outcome {
    Code(i32),

    /// Terminated without an exit code, usually after the overrun reached
    /// saved control data. Holds the signal number when the platform has one.
    Signal(Option<i32>),
}

impl Outcome {
    pub fn from_exit_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Outcome::Code(code),
            None => Outcome::Signal(signal(&status)),
        }
    }

    pub fn is_crash(&self) -> bool {
        matches!(self, Outcome::Signal(_))
    }

    /// The status reported by a clean run, if the exit code is one.
    pub fn status(&self) -> Option<Status> {
        match self {
            Outcome::Code(code) => Status::from_code(*code),
            Outcome::Signal(_) => None,
        }
    }
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        Outcome::Code(status.code())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Code(code) => write!(f, "code {code}"),
            Outcome::Signal(Some(signal)) => write!(f, "killed by signal {signal}"),
            Outcome::Signal(None) => write!(f, "killed"),
        }
    }
}

#[cfg(unix)]
fn signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal(_status: &ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_status() {
        assert_eq!(Outcome::from(Status::Large), Outcome::Code(20));
        assert_eq!(Outcome::Code(10).status(), Some(Status::ConditionTrue));
        assert_eq!(Outcome::Code(3).status(), None);
        assert_eq!(Outcome::Signal(None).status(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Code(1).to_string(), "code 1");
        assert_eq!(Outcome::Signal(Some(11)).to_string(), "killed by signal 11");
        assert_eq!(Outcome::Signal(None).to_string(), "killed");
    }

    #[cfg(unix)]
    #[test]
    fn test_from_exit_status() {
        use std::os::unix::process::ExitStatusExt;

        let exited = ExitStatus::from_raw(10 << 8);
        assert_eq!(Outcome::from_exit_status(exited), Outcome::Code(10));

        // SIGSEGV
        let killed = ExitStatus::from_raw(11);
        let outcome = Outcome::from_exit_status(killed);
        assert_eq!(outcome, Outcome::Signal(Some(11)));
        assert!(outcome.is_crash());
    }
}

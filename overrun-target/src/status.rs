// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use serde::Serialize;

/// Terminal result of classifying one line of input.
///
/// The numeric codes are the process exit codes of the harness binaries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Empty,
    ConditionTrue,
    Large,
    Normal,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Empty,
        Status::ConditionTrue,
        Status::Large,
        Status::Normal,
    ];

    pub fn code(self) -> i32 {
        match self {
            Status::Empty => 1,
            Status::ConditionTrue => 10,
            Status::Large => 20,
            Status::Normal => 0,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Empty => "got empty string",
            Status::ConditionTrue => "condition is true",
            Status::Large => "got large string, stack is probably dead, nice!",
            Status::Normal => "got normal string",
        }
    }

    /// Exact bytes written to the sink for this status.
    ///
    /// Every branch but `Normal` ends its message with an extra blank line.
    pub fn output(self) -> &'static str {
        match self {
            Status::Empty => "got empty string\n\n",
            Status::ConditionTrue => "condition is true\n\n",
            Status::Large => "got large string, stack is probably dead, nice!\n\n",
            Status::Normal => "got normal string\n",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

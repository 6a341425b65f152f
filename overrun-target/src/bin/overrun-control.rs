// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::process;

use overrun_target::Mode;

fn main() {
    env_logger::init();

    process::exit(overrun_target::run(Mode::Checked));
}

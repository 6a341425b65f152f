// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{Context, Result};
use log::debug;
use std::{env, fs};

fn main() -> Result<()> {
    env_logger::init();

    for filename in env::args().skip(1) {
        let data = fs::read(&filename).with_context(|| format!("unable to read {filename}"))?;
        let verdict = overrun_target::predict(&data);
        debug!("{filename}: {:?}", verdict.status);
        eprintln!("{}", filename);
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    Ok(())
}

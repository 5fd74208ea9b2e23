// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use anyhow::Context;
use env_logger::Env;

static LOG_LEVEL_VARIABLE: &str = "BLOCKINFO_LOG";
static DEFAULT_LOG_LEVEL: &str = "warn";

pub fn setup_troubleshooting() -> anyhow::Result<()> {
    better_panic::install();
    human_panic::setup_panic!();

    let environment = Env::default()
        .filter_or(LOG_LEVEL_VARIABLE, DEFAULT_LOG_LEVEL)
        .write_style("BLOCKINFO_LOG_STYLE");

    env_logger::Builder::from_env(environment)
        .format_timestamp(None)
        .format_module_path(false)
        .format_file(false)
        .format_target(false)
        .try_init()
        .context("blockinfo.troubleshooting : logger already initialised")
}

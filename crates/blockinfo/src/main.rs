// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use blockinfo::infra::cli::parsing::parse_arguments;
use blockinfo::infra::cli::troubleshooting::setup_troubleshooting;
use blockinfo::ioc;
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_troubleshooting()?;

    let invocation = parse_arguments()?;
    let inspector = ioc::create_inspector(&invocation.settings, invocation.report_kind)?;
    inspector.execute(invocation.task).await
}

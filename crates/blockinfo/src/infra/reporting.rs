// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{BlockLookup, BlockSummary, ChainInfo};
use crate::infra::reporting::console::ConsoleReporter;
use crate::infra::reporting::json::JsonReporter;
use std::fmt::{Display, Formatter};

pub mod console;
pub mod json;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockHashKind {
    Current,
    Previous,
}

impl Display for BlockHashKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockHashKind::Current => f.write_str("current block hash"),
            BlockHashKind::Previous => f.write_str("previous block hash"),
        }
    }
}

pub enum InspectionReporter {
    Console(ConsoleReporter),
    Json(JsonReporter),
}

impl InspectionReporter {
    pub fn report_channels(&self, channels: &[String]) -> anyhow::Result<()> {
        match self {
            InspectionReporter::Console(reporter) => {
                reporter.report_channels(channels);
                Ok(())
            },
            InspectionReporter::Json(reporter) => reporter.report_channels(channels),
        }
    }

    pub fn report_chain_info(&self, chain_info: &ChainInfo) -> anyhow::Result<()> {
        match self {
            InspectionReporter::Console(reporter) => {
                reporter.report_chain_info(chain_info);
                Ok(())
            },
            InspectionReporter::Json(reporter) => reporter.report_chain_info(chain_info),
        }
    }

    pub fn report_height(&self, channel_name: &str, height: u64) -> anyhow::Result<()> {
        match self {
            InspectionReporter::Console(reporter) => {
                reporter.report_height(channel_name, height);
                Ok(())
            },
            InspectionReporter::Json(reporter) => reporter.report_height(channel_name, height),
        }
    }

    pub fn report_block_hash(&self, channel_name: &str, kind: BlockHashKind, hash: &[u8]) -> anyhow::Result<()> {
        match self {
            InspectionReporter::Console(reporter) => {
                reporter.report_block_hash(channel_name, kind, hash);
                Ok(())
            },
            InspectionReporter::Json(reporter) => reporter.report_block_hash(channel_name, kind, hash),
        }
    }

    pub fn report_block(&self, lookup: &BlockLookup, summary: &BlockSummary) -> anyhow::Result<()> {
        match self {
            InspectionReporter::Console(reporter) => {
                reporter.report_block(lookup, summary);
                Ok(())
            },
            InspectionReporter::Json(reporter) => reporter.report_block(summary),
        }
    }
}

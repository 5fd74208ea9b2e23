// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{BlockLookup, BlockSummary, ChainInfo};
use crate::core::queries;
use crate::infra::networking::LedgerNetwork;
use crate::infra::reporting::{BlockHashKind, InspectionReporter};

#[derive(Clone, Debug, PartialEq)]
pub enum InspectionTask {
    ListChannels,
    ShowChainInfo,
    ShowHeight,
    ShowCurrentBlockHash,
    ShowPreviousBlockHash,
    ShowBlock(BlockLookup),
}

/// Runs a single ledger query on the configured channel and reports its outcome.
pub struct LedgerInspector {
    network: LedgerNetwork,
    channel_name: String,
    reporter: InspectionReporter,
}

impl LedgerInspector {
    pub fn new(network: LedgerNetwork, channel_name: String, reporter: InspectionReporter) -> Self {
        Self {
            network,
            channel_name,
            reporter,
        }
    }

    pub async fn execute(&self, task: InspectionTask) -> anyhow::Result<()> {
        log::info!("[blockinfo.inspector] running {:?} on channel {}", task, self.channel_name);
        let channel_name = self.channel_name.as_str();

        match task {
            InspectionTask::ListChannels => {
                let channels = queries::query_channels(&self.network).await?;
                self.reporter.report_channels(&channels)
            },
            InspectionTask::ShowChainInfo => {
                let blockchain_info = queries::query_block_info(&self.network, channel_name).await?;
                self.reporter
                    .report_chain_info(&ChainInfo::new(channel_name, &blockchain_info))
            },
            InspectionTask::ShowHeight => {
                let height = queries::query_block_height(&self.network, channel_name).await?;
                self.reporter.report_height(channel_name, height)
            },
            InspectionTask::ShowCurrentBlockHash => {
                let hash = queries::query_current_block_hash(&self.network, channel_name).await?;
                self.reporter
                    .report_block_hash(channel_name, BlockHashKind::Current, &hash)
            },
            InspectionTask::ShowPreviousBlockHash => {
                let hash = queries::query_previous_block_hash(&self.network, channel_name).await?;
                self.reporter
                    .report_block_hash(channel_name, BlockHashKind::Previous, &hash)
            },
            InspectionTask::ShowBlock(lookup) => {
                let block = match &lookup {
                    BlockLookup::Number(number) => {
                        queries::query_block_by_index(&self.network, channel_name, *number).await?
                    },
                    BlockLookup::Hash(hash) => queries::query_block_by_hash(&self.network, channel_name, hash).await?,
                    BlockLookup::TransactionId(tx_id) => {
                        queries::query_block_by_tx_id(&self.network, channel_name, tx_id.as_bytes()).await?
                    },
                };

                self.reporter.report_block(&lookup, &BlockSummary::from(&block))
            },
        }
    }
}

// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{BlockLookup, BlockSummary, ChainInfo};
use crate::infra::reporting::BlockHashKind;
use comfy_table::Table;
use console::{StyledObject, style};

#[derive(Default)]
pub struct ConsoleReporter {
    use_colors: bool,
}

impl ConsoleReporter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn report_channels(&self, channels: &[String]) {
        println!();

        if channels.is_empty() {
            println!("{}", self.cyan("Peer has not joined any channel"));
            println!();
            return;
        }

        println!("Joined channels : {}", self.cyan(channels.len()));
        println!();

        let mut table = Table::new();
        table.set_header(vec!["#", "Channel"]);
        channels.iter().enumerate().for_each(|(position, channel)| {
            table.add_row(vec![(position + 1).to_string(), channel.clone()]);
        });

        println!("{table}");
        println!();
    }

    pub fn report_chain_info(&self, chain_info: &ChainInfo) {
        println!();
        println!("Chain info for : {}", self.cyan(&chain_info.channel));
        println!();
        println!("• height : {}", self.cyan(chain_info.height));
        println!("• current block hash : {}", self.cyan(&chain_info.current_block_hash));
        println!("• previous block hash : {}", self.cyan(&chain_info.previous_block_hash));

        if let Some(last_block) = chain_info.last_block_in_snapshot {
            println!("• bootstrapped from snapshot at block : {}", self.cyan(last_block));
        }

        println!();
    }

    pub fn report_height(&self, channel_name: &str, height: u64) {
        println!();
        println!("• height of {} : {}", channel_name, self.cyan(height));
        println!();
    }

    pub fn report_block_hash(&self, channel_name: &str, kind: BlockHashKind, hash: &[u8]) {
        println!();
        println!("• {} of {} : {}", kind, channel_name, self.cyan(hex::encode(hash)));
        println!();
    }

    pub fn report_block(&self, lookup: &BlockLookup, summary: &BlockSummary) {
        println!();
        println!("Found {} : ", self.cyan(lookup));
        println!();
        println!("• number : {}", self.cyan(summary.number));
        println!("• previous hash : {}", self.cyan(&summary.previous_hash));
        println!("• data hash : {}", self.cyan(&summary.data_hash));
        println!("• metadata entries : {}", self.cyan(summary.metadata_entries));
        println!("• transactions : {}", self.cyan(summary.transactions.len()));
        println!();

        summary.transactions.iter().for_each(|tx_id| {
            println!("  - {}", tx_id);
        });

        if !summary.transactions.is_empty() {
            println!();
        }
    }

    fn cyan<T>(&self, what: T) -> StyledObject<T> {
        match self.use_colors {
            true => style(what).cyan(),
            false => style(what),
        }
    }
}

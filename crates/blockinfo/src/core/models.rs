// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::infra::protos::common::{Block, BlockchainInfo, ChannelHeader, Envelope, Payload};
use camino::Utf8PathBuf;
use clap::ValueEnum;
use prost::Message;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct TlsSettings {
    pub ca_certificate_path: Utf8PathBuf,
    pub server_name_override: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GatewaySettings {
    pub peer_endpoint: String,
    pub channel_name: String,
    pub msp_id: String,
    pub certificate_path: Utf8PathBuf,
    pub private_key_path: Utf8PathBuf,
    pub tls: Option<TlsSettings>,
    pub evaluate_timeout: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BlockLookup {
    Number(u64),
    Hash(Vec<u8>),
    TransactionId(String),
}

impl Display for BlockLookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockLookup::Number(number) => f.write_fmt(format_args!("block #{}", number)),
            BlockLookup::Hash(hash) => f.write_fmt(format_args!("block with hash {}", hex::encode(hash))),
            BlockLookup::TransactionId(tx_id) => f.write_fmt(format_args!("block containing tx {}", tx_id)),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum ReportKind {
    Console,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChainInfo {
    pub channel: String,
    pub height: u64,
    pub current_block_hash: String,
    pub previous_block_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_block_in_snapshot: Option<u64>,
}

impl ChainInfo {
    pub fn new(channel: &str, info: &BlockchainInfo) -> Self {
        Self {
            channel: channel.to_string(),
            height: info.height,
            current_block_hash: hex::encode(&info.current_block_hash),
            previous_block_hash: hex::encode(&info.previous_block_hash),
            last_block_in_snapshot: info
                .bootstrapping_snapshot_info
                .as_ref()
                .map(|snapshot| snapshot.last_block_in_snapshot),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockSummary {
    pub number: u64,
    pub previous_hash: String,
    pub data_hash: String,
    pub transactions: Vec<String>,
    pub metadata_entries: usize,
}

impl From<&Block> for BlockSummary {
    fn from(block: &Block) -> Self {
        let header = block.header.clone().unwrap_or_default();

        let transactions = block
            .data
            .as_ref()
            .map(|data| data.data.iter().filter_map(|envelope| transaction_id(envelope.as_slice())).collect())
            .unwrap_or_default();

        let metadata_entries = block
            .metadata
            .as_ref()
            .map(|metadata| metadata.metadata.len())
            .unwrap_or_default();

        Self {
            number: header.number,
            previous_hash: hex::encode(&header.previous_hash),
            data_hash: hex::encode(&header.data_hash),
            transactions,
            metadata_entries,
        }
    }
}

fn transaction_id(raw_envelope: &[u8]) -> Option<String> {
    let extracted = Envelope::decode(raw_envelope)
        .and_then(|envelope| Payload::decode(envelope.payload.as_slice()))
        .and_then(|payload| {
            let header = payload.header.unwrap_or_default();
            ChannelHeader::decode(header.channel_header.as_slice())
        });

    match extracted {
        Ok(channel_header) if !channel_header.tx_id.is_empty() => Some(channel_header.tx_id),
        Ok(_) => {
            log::info!("[blockinfo.models] skipping envelope without transaction id");
            None
        },
        Err(incoming) => {
            log::info!("[blockinfo.models] skipping undecodable envelope : {}", incoming);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::core::models::{BlockLookup, BlockSummary, ChainInfo};
    use crate::infra::protos::common::{
        Block, BlockData, BlockHeader, BlockMetadata, BlockchainInfo, BootstrappingSnapshotInfo, ChannelHeader,
        Envelope, Header, Payload,
    };
    use assertor::EqualityAssertion;
    use prost::Message;

    fn envelope_for(tx_id: &str) -> Vec<u8> {
        let channel_header = ChannelHeader {
            tx_id: tx_id.to_string(),
            channel_id: "mychannel".to_string(),
            ..Default::default()
        };

        let payload = Payload {
            header: Some(Header {
                channel_header: channel_header.encode_to_vec(),
                signature_header: vec![],
            }),
            data: vec![],
        };

        Envelope {
            payload: payload.encode_to_vec(),
            signature: vec![],
        }
        .encode_to_vec()
    }

    #[test]
    fn should_summarize_block_with_transactions() {
        let block = Block {
            header: Some(BlockHeader {
                number: 12,
                previous_hash: vec![0xab, 0xcd],
                data_hash: vec![0x01],
            }),
            data: Some(BlockData {
                data: vec![envelope_for("tx-1"), vec![0xff, 0xff], envelope_for("tx-2")],
            }),
            metadata: Some(BlockMetadata {
                metadata: vec![vec![], vec![], vec![], vec![], vec![]],
            }),
        };

        let summary = BlockSummary::from(&block);

        let expected = BlockSummary {
            number: 12,
            previous_hash: "abcd".to_string(),
            data_hash: "01".to_string(),
            transactions: vec!["tx-1".to_string(), "tx-2".to_string()],
            metadata_entries: 5,
        };

        assertor::assert_that!(summary).is_equal_to(expected);
    }

    #[test]
    fn should_summarize_empty_block() {
        let summary = BlockSummary::from(&Block::default());

        let expected = BlockSummary {
            number: 0,
            previous_hash: String::new(),
            data_hash: String::new(),
            transactions: vec![],
            metadata_entries: 0,
        };

        assertor::assert_that!(summary).is_equal_to(expected);
    }

    #[test]
    fn should_render_chain_info_hashes_as_hex() {
        let info = BlockchainInfo {
            height: 8,
            current_block_hash: vec![0xde, 0xad],
            previous_block_hash: vec![0xbe, 0xef],
            bootstrapping_snapshot_info: Some(BootstrappingSnapshotInfo {
                last_block_in_snapshot: 5,
            }),
        };

        let chain_info = ChainInfo::new("mychannel", &info);

        assertor::assert_that!(chain_info.current_block_hash).is_equal_to("dead".to_string());
        assertor::assert_that!(chain_info.previous_block_hash).is_equal_to("beef".to_string());
        assertor::assert_that!(chain_info.last_block_in_snapshot).is_equal_to(Some(5));
    }

    #[test]
    fn should_describe_block_lookups() {
        assertor::assert_that!(BlockLookup::Number(3).to_string()).is_equal_to("block #3".to_string());
        assertor::assert_that!(BlockLookup::Hash(vec![0x0f]).to_string())
            .is_equal_to("block with hash 0f".to_string());
        assertor::assert_that!(BlockLookup::TransactionId("abc".to_string()).to_string())
            .is_equal_to("block containing tx abc".to_string());
    }
}

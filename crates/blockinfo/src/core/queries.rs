// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

//! Read-only queries against the `cscc` and `qscc` system chaincodes.
//!
//! Every helper evaluates a single transaction, decodes the protobuf payload and narrows it.
//! Failures are reported either as [`QueryError::Evaluation`] or [`QueryError::Decoding`].

use crate::core::errors::QueryError;
use crate::core::interfaces::TransactionEvaluation;
use crate::infra::networking::LedgerNetwork;
use crate::infra::protos::common::{Block, BlockchainInfo};
use crate::infra::protos::peer::ChannelQueryResponse;
use prost::Message;

pub static CONFIGURATION_CHAINCODE: &str = "cscc";
pub static LEDGER_QUERY_CHAINCODE: &str = "qscc";

async fn evaluate_and_decode<M: Message + Default>(
    network: &LedgerNetwork,
    chaincode_name: &str,
    transaction_name: &str,
    arguments: &[&[u8]],
    action: &'static str,
    record: &'static str,
) -> Result<M, QueryError> {
    let contract = network.contract(chaincode_name);

    let evaluated = contract
        .evaluate(transaction_name, arguments)
        .await
        .map_err(|cause| QueryError::evaluation(action, cause))?;

    M::decode(evaluated.as_slice()).map_err(|cause| QueryError::decoding(record, cause))
}

/// Channels the target peer has joined, in the order the peer reports them.
pub async fn query_channels(network: &LedgerNetwork) -> Result<Vec<String>, QueryError> {
    let response: ChannelQueryResponse = evaluate_and_decode(
        network,
        CONFIGURATION_CHAINCODE,
        "GetChannels",
        &[],
        "query channels",
        "channel query response",
    )
    .await?;

    let channels = response
        .channels
        .into_iter()
        .map(|channel_info| channel_info.channel_id)
        .collect();

    Ok(channels)
}

/// Height plus current and previous block hashes for `channel_name`.
pub async fn query_block_info(network: &LedgerNetwork, channel_name: &str) -> Result<BlockchainInfo, QueryError> {
    evaluate_and_decode(
        network,
        LEDGER_QUERY_CHAINCODE,
        "GetChainInfo",
        &[channel_name.as_bytes()],
        "get chain info",
        "blockchain info",
    )
    .await
}

pub async fn query_block_height(network: &LedgerNetwork, channel_name: &str) -> Result<u64, QueryError> {
    let chain_info = query_block_info(network, channel_name).await?;
    Ok(chain_info.height)
}

pub async fn query_current_block_hash(network: &LedgerNetwork, channel_name: &str) -> Result<Vec<u8>, QueryError> {
    let chain_info = query_block_info(network, channel_name).await?;
    Ok(chain_info.current_block_hash)
}

pub async fn query_previous_block_hash(network: &LedgerNetwork, channel_name: &str) -> Result<Vec<u8>, QueryError> {
    let chain_info = query_block_info(network, channel_name).await?;
    Ok(chain_info.previous_block_hash)
}

/// Block stored at `block_number`. The number travels as its decimal rendering.
pub async fn query_block_by_index(
    network: &LedgerNetwork,
    channel_name: &str,
    block_number: u64,
) -> Result<Block, QueryError> {
    let rendered_number = block_number.to_string();

    evaluate_and_decode(
        network,
        LEDGER_QUERY_CHAINCODE,
        "GetBlockByNumber",
        &[channel_name.as_bytes(), rendered_number.as_bytes()],
        "query block by index",
        "block",
    )
    .await
}

pub async fn query_block_by_hash(
    network: &LedgerNetwork,
    channel_name: &str,
    block_hash: &[u8],
) -> Result<Block, QueryError> {
    evaluate_and_decode(
        network,
        LEDGER_QUERY_CHAINCODE,
        "GetBlockByHash",
        &[channel_name.as_bytes(), block_hash],
        "query block by hash",
        "block",
    )
    .await
}

/// Block containing the transaction identified by `transaction_id`.
pub async fn query_block_by_tx_id(
    network: &LedgerNetwork,
    channel_name: &str,
    transaction_id: &[u8],
) -> Result<Block, QueryError> {
    evaluate_and_decode(
        network,
        LEDGER_QUERY_CHAINCODE,
        "GetBlockByTxID",
        &[channel_name.as_bytes(), transaction_id],
        "query block by TxID",
        "block",
    )
    .await
}

#[cfg(test)]
mod tests {
    use crate::core::errors::QueryError;
    use crate::core::queries::{
        query_block_by_hash, query_block_by_index, query_block_by_tx_id, query_block_height, query_block_info,
        query_channels, query_current_block_hash, query_previous_block_hash,
    };
    use crate::infra::networking::{FakeLedger, LedgerNetwork, RecordedInvocation};
    use crate::infra::protos::common::{Block, BlockHeader, BlockchainInfo};
    use crate::infra::protos::peer::{ChannelInfo, ChannelQueryResponse};
    use assertor::{BooleanAssertion, EqualityAssertion, ResultAssertion};
    use prost::Message;

    fn sample_chain_info() -> BlockchainInfo {
        BlockchainInfo {
            height: 42,
            current_block_hash: vec![0xca, 0xfe],
            previous_block_hash: vec![0xbe, 0xef],
            bootstrapping_snapshot_info: None,
        }
    }

    fn sample_block(number: u64) -> Block {
        Block {
            header: Some(BlockHeader {
                number,
                previous_hash: vec![1, 2, 3],
                data_hash: vec![4, 5, 6],
            }),
            data: None,
            metadata: None,
        }
    }

    fn invocation(chaincode_name: &str, transaction_name: &str, arguments: &[&[u8]]) -> RecordedInvocation {
        RecordedInvocation {
            chaincode_name: chaincode_name.to_string(),
            transaction_name: transaction_name.to_string(),
            arguments: arguments.iter().map(|argument| argument.to_vec()).collect(),
        }
    }

    #[tokio::test]
    async fn should_list_joined_channels_in_peer_order() {
        let response = ChannelQueryResponse {
            channels: vec![
                ChannelInfo {
                    channel_id: "mychannel".to_string(),
                },
                ChannelInfo {
                    channel_id: "audit".to_string(),
                },
            ],
        };

        let ledger = FakeLedger::new().responding("cscc", "GetChannels", response.encode_to_vec());
        let network = LedgerNetwork::Fake(ledger.clone());

        let channels = query_channels(&network).await.unwrap();

        assertor::assert_that!(channels).is_equal_to(vec!["mychannel".to_string(), "audit".to_string()]);
        assertor::assert_that!(ledger.invocations()).is_equal_to(vec![invocation("cscc", "GetChannels", &[])]);
    }

    #[tokio::test]
    async fn should_list_no_channels_for_empty_response() {
        let ledger = FakeLedger::new().responding("cscc", "GetChannels", vec![]);
        let network = LedgerNetwork::Fake(ledger);

        let channels = query_channels(&network).await.unwrap();

        assertor::assert_that!(channels.is_empty()).is_true();
    }

    #[tokio::test]
    async fn should_report_evaluation_failure_when_listing_channels() {
        let ledger = FakeLedger::new().failing("cscc", "GetChannels", "access denied");
        let network = LedgerNetwork::Fake(ledger);

        let outcome = query_channels(&network).await;

        assertor::assert_that!(outcome).is_err();
        let error = outcome.unwrap_err();
        assertor::assert_that!(error.to_string()).is_equal_to("failed to query channels".to_string());
        assert!(matches!(error, QueryError::Evaluation { .. }));
    }

    #[tokio::test]
    async fn should_report_decoding_failure_for_malformed_channels_payload() {
        let ledger = FakeLedger::new().responding("cscc", "GetChannels", vec![0xff, 0xff, 0xff]);
        let network = LedgerNetwork::Fake(ledger);

        let outcome = query_channels(&network).await;

        let error = outcome.unwrap_err();
        assertor::assert_that!(error.to_string()).is_equal_to("failed to unmarshal channel query response".to_string());
        assert!(matches!(error, QueryError::Decoding { .. }));
    }

    #[tokio::test]
    async fn should_query_chain_info_for_channel() {
        let ledger = FakeLedger::new().responding("qscc", "GetChainInfo", sample_chain_info().encode_to_vec());
        let network = LedgerNetwork::Fake(ledger.clone());

        let chain_info = query_block_info(&network, "mychannel").await.unwrap();

        assertor::assert_that!(chain_info).is_equal_to(sample_chain_info());
        assertor::assert_that!(ledger.invocations())
            .is_equal_to(vec![invocation("qscc", "GetChainInfo", &[b"mychannel"])]);
    }

    #[tokio::test]
    async fn should_narrow_chain_info_fields() {
        let ledger = FakeLedger::new().responding("qscc", "GetChainInfo", sample_chain_info().encode_to_vec());
        let network = LedgerNetwork::Fake(ledger.clone());

        let height = query_block_height(&network, "mychannel").await.unwrap();
        let current_hash = query_current_block_hash(&network, "mychannel").await.unwrap();
        let previous_hash = query_previous_block_hash(&network, "mychannel").await.unwrap();

        assertor::assert_that!(height).is_equal_to(42);
        assertor::assert_that!(current_hash).is_equal_to(vec![0xca, 0xfe]);
        assertor::assert_that!(previous_hash).is_equal_to(vec![0xbe, 0xef]);
        assertor::assert_that!(ledger.invocations().len()).is_equal_to(3);
    }

    #[tokio::test]
    async fn should_propagate_chain_info_failure_when_narrowing() {
        let ledger = FakeLedger::new().failing("qscc", "GetChainInfo", "channel not found");
        let network = LedgerNetwork::Fake(ledger);

        let height = query_block_height(&network, "unknown").await;
        let current_hash = query_current_block_hash(&network, "unknown").await;
        let previous_hash = query_previous_block_hash(&network, "unknown").await;

        assertor::assert_that!(height.unwrap_err().to_string()).is_equal_to("failed to get chain info".to_string());
        assertor::assert_that!(current_hash).is_err();
        assertor::assert_that!(previous_hash.unwrap_err().to_string())
            .is_equal_to("failed to get chain info".to_string());
    }

    #[tokio::test]
    async fn should_report_decoding_failure_for_malformed_chain_info() {
        let ledger = FakeLedger::new().responding("qscc", "GetChainInfo", vec![0x12, 0xff]);
        let network = LedgerNetwork::Fake(ledger);

        let error = query_block_info(&network, "mychannel").await.unwrap_err();

        assertor::assert_that!(error.to_string()).is_equal_to("failed to unmarshal blockchain info".to_string());
        assert!(matches!(error, QueryError::Decoding { .. }));
    }

    #[tokio::test]
    async fn should_treat_empty_chain_info_payload_as_default_record() {
        let ledger = FakeLedger::new().responding("qscc", "GetChainInfo", vec![]);
        let network = LedgerNetwork::Fake(ledger);

        let height = query_block_height(&network, "mychannel").await.unwrap();

        assertor::assert_that!(height).is_equal_to(0);
    }

    #[tokio::test]
    async fn should_query_block_by_index_with_decimal_number() {
        let ledger = FakeLedger::new().responding("qscc", "GetBlockByNumber", sample_block(1024).encode_to_vec());
        let network = LedgerNetwork::Fake(ledger.clone());

        let block = query_block_by_index(&network, "mychannel", 1024).await.unwrap();

        assertor::assert_that!(block).is_equal_to(sample_block(1024));
        assertor::assert_that!(ledger.invocations())
            .is_equal_to(vec![invocation("qscc", "GetBlockByNumber", &[b"mychannel", b"1024"])]);
    }

    #[tokio::test]
    async fn should_query_block_by_hash_with_raw_bytes() {
        let block_hash = [0x00, 0x9f, 0xff, 0x10];
        let ledger = FakeLedger::new().responding("qscc", "GetBlockByHash", sample_block(7).encode_to_vec());
        let network = LedgerNetwork::Fake(ledger.clone());

        let block = query_block_by_hash(&network, "mychannel", &block_hash).await.unwrap();

        assertor::assert_that!(block).is_equal_to(sample_block(7));
        assertor::assert_that!(ledger.invocations())
            .is_equal_to(vec![invocation("qscc", "GetBlockByHash", &[b"mychannel", &block_hash])]);
    }

    #[tokio::test]
    async fn should_query_block_by_transaction_id() {
        let tx_id = b"6f1c1d0e4b1e7a3c";
        let ledger = FakeLedger::new().responding("qscc", "GetBlockByTxID", sample_block(3).encode_to_vec());
        let network = LedgerNetwork::Fake(ledger.clone());

        let block = query_block_by_tx_id(&network, "mychannel", tx_id).await.unwrap();

        assertor::assert_that!(block).is_equal_to(sample_block(3));
        assertor::assert_that!(ledger.invocations())
            .is_equal_to(vec![invocation("qscc", "GetBlockByTxID", &[b"mychannel", tx_id])]);
    }

    #[tokio::test]
    async fn should_report_dedicated_messages_for_block_queries() {
        let ledger = FakeLedger::new()
            .failing("qscc", "GetBlockByNumber", "out of range")
            .failing("qscc", "GetBlockByHash", "not found")
            .responding("qscc", "GetBlockByTxID", vec![0x0a, 0xff]);
        let network = LedgerNetwork::Fake(ledger);

        let by_index = query_block_by_index(&network, "mychannel", 99).await.unwrap_err();
        let by_hash = query_block_by_hash(&network, "mychannel", b"nope").await.unwrap_err();
        let by_tx_id = query_block_by_tx_id(&network, "mychannel", b"nope").await.unwrap_err();

        assertor::assert_that!(by_index.to_string()).is_equal_to("failed to query block by index".to_string());
        assertor::assert_that!(by_hash.to_string()).is_equal_to("failed to query block by hash".to_string());
        assertor::assert_that!(by_tx_id.to_string()).is_equal_to("failed to unmarshal block".to_string());
    }
}

// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{BlockSummary, ChainInfo};
use crate::infra::reporting::BlockHashKind;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Writes one pretty-printed JSON document per report on stdout.
#[derive(Default)]
pub struct JsonReporter;

impl JsonReporter {
    pub fn report_channels(&self, channels: &[String]) -> anyhow::Result<()> {
        self.emit(&json!({ "channels": channels }))
    }

    pub fn report_chain_info(&self, chain_info: &ChainInfo) -> anyhow::Result<()> {
        self.emit(chain_info)
    }

    pub fn report_height(&self, channel_name: &str, height: u64) -> anyhow::Result<()> {
        self.emit(&json!({ "channel": channel_name, "height": height }))
    }

    pub fn report_block_hash(&self, channel_name: &str, kind: BlockHashKind, hash: &[u8]) -> anyhow::Result<()> {
        self.emit(&block_hash_document(channel_name, kind, hash))
    }

    pub fn report_block(&self, summary: &BlockSummary) -> anyhow::Result<()> {
        self.emit(summary)
    }

    fn emit<T: Serialize + ?Sized>(&self, document: &T) -> anyhow::Result<()> {
        let rendered = serde_json::to_string_pretty(document)?;
        println!("{}", rendered);
        Ok(())
    }
}

fn block_hash_document(channel_name: &str, kind: BlockHashKind, hash: &[u8]) -> Value {
    let field = match kind {
        BlockHashKind::Current => "current_block_hash",
        BlockHashKind::Previous => "previous_block_hash",
    };

    let mut document = Map::new();
    document.insert("channel".to_string(), Value::from(channel_name));
    document.insert(field.to_string(), Value::from(hex::encode(hash)));
    Value::Object(document)
}

#[cfg(test)]
mod tests {
    use crate::core::models::BlockSummary;
    use crate::infra::reporting::BlockHashKind;
    use crate::infra::reporting::json::block_hash_document;
    use assertor::EqualityAssertion;
    use serde_json::json;

    #[test]
    fn should_name_hash_field_after_its_kind() {
        let current = block_hash_document("mychannel", BlockHashKind::Current, &[0xab]);
        let previous = block_hash_document("mychannel", BlockHashKind::Previous, &[0xcd]);

        assertor::assert_that!(current).is_equal_to(json!({ "channel": "mychannel", "current_block_hash": "ab" }));
        assertor::assert_that!(previous).is_equal_to(json!({ "channel": "mychannel", "previous_block_hash": "cd" }));
    }

    #[test]
    fn should_serialize_block_summary() {
        let summary = BlockSummary {
            number: 4,
            previous_hash: "aa".to_string(),
            data_hash: "bb".to_string(),
            transactions: vec!["tx-1".to_string()],
            metadata_entries: 5,
        };

        let serialized = serde_json::to_value(&summary).unwrap();

        let expected = json!({
            "number": 4,
            "previous_hash": "aa",
            "data_hash": "bb",
            "transactions": ["tx-1"],
            "metadata_entries": 5
        });
        assertor::assert_that!(serialized).is_equal_to(expected);
    }
}

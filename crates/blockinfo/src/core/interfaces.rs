// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

/// Evaluate-only invocation of a chaincode transaction. Nothing is sent to ordering.
pub trait TransactionEvaluation {
    async fn evaluate(&self, transaction_name: &str, arguments: &[&[u8]]) -> anyhow::Result<Vec<u8>>;
}

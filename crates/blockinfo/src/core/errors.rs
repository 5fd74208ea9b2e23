// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of the ledger query helpers.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The peer could not evaluate the system chaincode transaction.
    #[error("failed to {action}")]
    Evaluation {
        action: &'static str,
        #[source]
        cause: BoxedError,
    },

    /// The peer answered, but the payload does not match the expected schema.
    #[error("failed to unmarshal {record}")]
    Decoding {
        record: &'static str,
        #[source]
        cause: prost::DecodeError,
    },
}

impl QueryError {
    pub fn evaluation(action: &'static str, cause: anyhow::Error) -> Self {
        Self::Evaluation {
            action,
            cause: cause.into(),
        }
    }

    pub fn decoding(record: &'static str, cause: prost::DecodeError) -> Self {
        Self::Decoding { record, cause }
    }
}

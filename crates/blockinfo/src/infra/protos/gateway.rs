// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::infra::protos::peer::{Response, SignedProposal};

/// Full gRPC path of the unary `Gateway.Evaluate` method.
pub static EVALUATE_METHOD_PATH: &str = "/gateway.Gateway/Evaluate";

#[derive(Clone, PartialEq, prost::Message)]
pub struct EvaluateRequest {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
    #[prost(string, tag = "2")]
    pub channel_id: String,
    #[prost(message, optional, tag = "3")]
    pub proposed_transaction: Option<SignedProposal>,
    #[prost(string, repeated, tag = "4")]
    pub target_organizations: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EvaluateResponse {
    #[prost(message, optional, tag = "1")]
    pub result: Option<Response>,
}

// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

/// The `creator` of a proposal : MSP id plus the PEM encoded X.509 certificate.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SerializedIdentity {
    #[prost(string, tag = "1")]
    pub mspid: String,
    #[prost(bytes = "vec", tag = "2")]
    pub id_bytes: Vec<u8>,
}

// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

//! Subset of the Hyperledger Fabric protobuf schema used by this tool.
//!
//! Messages are declared by hand with `prost` derives, so no `protoc` is required at
//! build time. Field numbers mirror `fabric-protos` and must never be renumbered.

pub mod common;
pub mod gateway;
pub mod msp;
pub mod peer;

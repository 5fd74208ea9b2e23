// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::infra::networking::identity::SigningIdentity;
use crate::infra::protos::common::{ChannelHeader, Header, HeaderType, SignatureHeader};
use crate::infra::protos::peer::{
    ChaincodeHeaderExtension, ChaincodeId, ChaincodeInput, ChaincodeInvocationSpec, ChaincodeProposalPayload,
    ChaincodeSpec, Proposal, SignedProposal,
};
use prost::Message;
use prost_types::Timestamp;
use sha2::{Digest, Sha256};
use std::time::SystemTime;

pub const NONCE_LENGTH: usize = 24;

pub struct PreparedProposal {
    pub transaction_id: String,
    pub signed_proposal: SignedProposal,
}

/// Lowercase hex of SHA-256(nonce || creator), the way peers recompute it.
pub fn transaction_id(nonce: &[u8], creator: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nonce);
    hasher.update(creator);
    hex::encode(hasher.finalize())
}

pub struct ProposalBuilder<'a> {
    identity: &'a SigningIdentity,
    channel_name: &'a str,
    chaincode_name: &'a str,
}

impl<'a> ProposalBuilder<'a> {
    pub fn new(identity: &'a SigningIdentity, channel_name: &'a str, chaincode_name: &'a str) -> Self {
        Self {
            identity,
            channel_name,
            chaincode_name,
        }
    }

    pub fn build(&self, transaction_name: &str, arguments: &[&[u8]]) -> PreparedProposal {
        let nonce: [u8; NONCE_LENGTH] = rand::random();
        self.build_with_nonce(transaction_name, arguments, &nonce)
    }

    fn build_with_nonce(&self, transaction_name: &str, arguments: &[&[u8]], nonce: &[u8]) -> PreparedProposal {
        let creator = self.identity.creator();
        let transaction_id = transaction_id(nonce, &creator);

        let chaincode_id = ChaincodeId {
            name: self.chaincode_name.to_string(),
            ..Default::default()
        };

        let extension = ChaincodeHeaderExtension {
            chaincode_id: Some(chaincode_id.clone()),
        };

        let channel_header = ChannelHeader {
            r#type: HeaderType::EndorserTransaction as i32,
            timestamp: Some(Timestamp::from(SystemTime::now())),
            channel_id: self.channel_name.to_string(),
            tx_id: transaction_id.clone(),
            extension: extension.encode_to_vec(),
            ..Default::default()
        };

        let signature_header = SignatureHeader {
            creator,
            nonce: nonce.to_vec(),
        };

        let header = Header {
            channel_header: channel_header.encode_to_vec(),
            signature_header: signature_header.encode_to_vec(),
        };

        let mut args = Vec::with_capacity(arguments.len() + 1);
        args.push(transaction_name.as_bytes().to_vec());
        args.extend(arguments.iter().map(|argument| argument.to_vec()));

        let invocation_spec = ChaincodeInvocationSpec {
            chaincode_spec: Some(ChaincodeSpec {
                chaincode_id: Some(chaincode_id),
                input: Some(ChaincodeInput {
                    args,
                    ..Default::default()
                }),
                ..Default::default()
            }),
        };

        let proposal_payload = ChaincodeProposalPayload {
            input: invocation_spec.encode_to_vec(),
            ..Default::default()
        };

        let proposal = Proposal {
            header: header.encode_to_vec(),
            payload: proposal_payload.encode_to_vec(),
            extension: vec![],
        };

        let proposal_bytes = proposal.encode_to_vec();
        let signature = self.identity.sign(&proposal_bytes);

        PreparedProposal {
            transaction_id,
            signed_proposal: SignedProposal {
                proposal_bytes,
                signature,
            },
        }
    }
}

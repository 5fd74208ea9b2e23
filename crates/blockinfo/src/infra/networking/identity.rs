// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::infra::protos::msp::SerializedIdentity;
use anyhow::{Context, bail};
use camino::Utf8Path;
use p256::SecretKey;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use p256::pkcs8::DecodePrivateKey;
use prost::Message;
use std::fmt::{Debug, Formatter};
use std::fs;

static PEM_PREAMBLE: &str = "-----BEGIN";

/// Client identity enrolled with a Fabric MSP : X.509 certificate plus its P-256 private key.
pub struct SigningIdentity {
    msp_id: String,
    certificate_pem: Vec<u8>,
    signing_key: SigningKey,
}

impl SigningIdentity {
    pub fn new(msp_id: String, certificate_pem: Vec<u8>, signing_key: SigningKey) -> Self {
        Self {
            msp_id,
            certificate_pem,
            signing_key,
        }
    }

    pub fn from_pem_files(msp_id: &str, certificate_path: &Utf8Path, private_key_path: &Utf8Path) -> anyhow::Result<Self> {
        let certificate_pem = fs::read(certificate_path)
            .with_context(|| format!("[blockinfo.identity] cannot read certificate at {}", certificate_path))?;

        if !String::from_utf8_lossy(&certificate_pem).contains(PEM_PREAMBLE) {
            bail!("blockinfo.identity : {} is not a PEM encoded certificate", certificate_path)
        }

        let private_key_pem = fs::read_to_string(private_key_path)
            .with_context(|| format!("[blockinfo.identity] cannot read private key at {}", private_key_path))?;

        let signing_key = parse_private_key(&private_key_pem)
            .with_context(|| format!("[blockinfo.identity] unsupported private key at {}", private_key_path))?;

        log::info!("[blockinfo.identity] loaded identity for MSP {}", msp_id);
        Ok(Self::new(msp_id.to_string(), certificate_pem, signing_key))
    }

    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    /// Serialized `msp.SerializedIdentity`, used as proposal creator.
    pub fn creator(&self) -> Vec<u8> {
        SerializedIdentity {
            mspid: self.msp_id.clone(),
            id_bytes: self.certificate_pem.clone(),
        }
        .encode_to_vec()
    }

    /// ECDSA over the SHA-256 digest of `message`, DER encoded. Peers reject high-S signatures.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let signature: Signature = self.signing_key.sign(message);
        let normalized = signature.normalize_s().unwrap_or(signature);
        normalized.to_der().as_bytes().to_vec()
    }
}

impl Debug for SigningIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("msp_id", &self.msp_id)
            .finish_non_exhaustive()
    }
}

// Fabric CA enrolls PKCS#8 keys, cryptogen may still emit SEC1 ones
fn parse_private_key(pem: &str) -> anyhow::Result<SigningKey> {
    if let Ok(signing_key) = SigningKey::from_pkcs8_pem(pem) {
        return Ok(signing_key);
    }

    let secret_key = SecretKey::from_sec1_pem(pem).context("expected a PKCS#8 or SEC1 PEM encoded P-256 key")?;
    Ok(SigningKey::from(secret_key))
}

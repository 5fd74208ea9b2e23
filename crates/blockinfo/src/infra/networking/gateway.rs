// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::interfaces::TransactionEvaluation;
use crate::core::models::GatewaySettings;
use crate::infra::networking::identity::SigningIdentity;
use crate::infra::networking::proposals::ProposalBuilder;
use crate::infra::protos::gateway::{EVALUATE_METHOD_PATH, EvaluateRequest, EvaluateResponse};
use anyhow::{Context, anyhow, bail};
use http::uri::PathAndQuery;
use std::fs;
use std::sync::Arc;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Status};
use url::Url;

pub static DEFAULT_EVALUATE_TIMEOUT_SECS: u64 = 5;

/// Lazily connected gRPC channel towards the Gateway service of a peer.
#[derive(Clone)]
pub struct GatewayConnection {
    channel: Channel,
    peer_url: Url,
}

impl GatewayConnection {
    pub fn establish(settings: &GatewaySettings) -> anyhow::Result<Self> {
        let scheme = match settings.tls {
            Some(_) => "https",
            None => "http",
        };

        let peer_url = Url::parse(&format!("{}://{}", scheme, settings.peer_endpoint))
            .with_context(|| format!("[blockinfo.gateway] invalid peer endpoint : {}", settings.peer_endpoint))?;

        let mut endpoint = Endpoint::from_shared(peer_url.to_string())?
            .connect_timeout(settings.evaluate_timeout)
            .timeout(settings.evaluate_timeout);

        if let Some(tls) = &settings.tls {
            let ca_certificate = fs::read(&tls.ca_certificate_path).with_context(|| {
                format!("[blockinfo.gateway] cannot read TLS CA certificate at {}", tls.ca_certificate_path)
            })?;

            let mut tls_config = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(ca_certificate));
            if let Some(server_name) = &tls.server_name_override {
                tls_config = tls_config.domain_name(server_name.clone());
            }

            endpoint = endpoint.tls_config(tls_config)?;
        }

        log::info!("[blockinfo.gateway] using peer gateway at {}", peer_url);
        let channel = endpoint.connect_lazy();
        Ok(Self { channel, peer_url })
    }

    pub async fn evaluate(&self, request: EvaluateRequest) -> Result<EvaluateResponse, Status> {
        let mut grpc = Grpc::new(self.channel.clone());

        grpc.ready()
            .await
            .map_err(|incoming| Status::unavailable(format!("{} not ready : {}", self.peer_url, incoming)))?;

        let codec = ProstCodec::<EvaluateRequest, EvaluateResponse>::default();
        let path = PathAndQuery::from_static(EVALUATE_METHOD_PATH);
        let response = grpc.unary(Request::new(request), path, codec).await?;
        Ok(response.into_inner())
    }
}

pub struct GatewayNetwork {
    connection: GatewayConnection,
    identity: Arc<SigningIdentity>,
    channel_name: String,
}

impl GatewayNetwork {
    pub fn new(connection: GatewayConnection, identity: SigningIdentity, channel_name: String) -> Self {
        Self {
            connection,
            identity: Arc::new(identity),
            channel_name,
        }
    }

    pub fn contract(&self, chaincode_name: &str) -> GatewayContract {
        GatewayContract {
            connection: self.connection.clone(),
            identity: self.identity.clone(),
            channel_name: self.channel_name.clone(),
            chaincode_name: chaincode_name.to_string(),
        }
    }
}

pub struct GatewayContract {
    connection: GatewayConnection,
    identity: Arc<SigningIdentity>,
    channel_name: String,
    chaincode_name: String,
}

impl GatewayContract {
    fn evaluate_request(&self, transaction_name: &str, arguments: &[&[u8]]) -> EvaluateRequest {
        let builder = ProposalBuilder::new(&self.identity, &self.channel_name, &self.chaincode_name);
        let prepared = builder.build(transaction_name, arguments);

        log::info!(
            "[blockinfo.gateway] evaluating {}:{} as {} (tx {})",
            self.chaincode_name,
            transaction_name,
            self.identity.msp_id(),
            prepared.transaction_id
        );

        EvaluateRequest {
            transaction_id: prepared.transaction_id,
            channel_id: self.channel_name.clone(),
            proposed_transaction: Some(prepared.signed_proposal),
            target_organizations: vec![],
        }
    }
}

impl TransactionEvaluation for GatewayContract {
    async fn evaluate(&self, transaction_name: &str, arguments: &[&[u8]]) -> anyhow::Result<Vec<u8>> {
        let request = self.evaluate_request(transaction_name, arguments);

        let response = self.connection.evaluate(request).await.map_err(|status| {
            anyhow!(
                "blockinfo.gateway : evaluation rejected ({:?}) : {}",
                status.code(),
                status.message()
            )
        })?;

        let payload = payload_of(response)?;

        log::info!(
            "[blockinfo.gateway] {}:{} returned {} bytes",
            self.chaincode_name,
            transaction_name,
            payload.len()
        );
        Ok(payload)
    }
}

fn payload_of(response: EvaluateResponse) -> anyhow::Result<Vec<u8>> {
    let Some(result) = response.result else {
        bail!("blockinfo.gateway : evaluation returned no result")
    };

    if result.status >= 400 {
        bail!(
            "blockinfo.gateway : chaincode responded with status {} : {}",
            result.status,
            result.message
        )
    }

    Ok(result.payload)
}

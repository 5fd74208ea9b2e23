// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::interfaces::TransactionEvaluation;
use crate::infra::networking::gateway::{GatewayContract, GatewayNetwork};
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

pub mod gateway;
pub mod identity;
pub mod proposals;

/// Channel-bound handle to a ledger, able to hand out system chaincode contracts.
pub enum LedgerNetwork {
    FabricGateway(GatewayNetwork),
    #[cfg(test)]
    Fake(FakeLedger),
}

impl LedgerNetwork {
    pub fn contract(&self, chaincode_name: &str) -> SystemContract {
        match self {
            LedgerNetwork::FabricGateway(network) => SystemContract::FabricGateway(network.contract(chaincode_name)),
            #[cfg(test)]
            LedgerNetwork::Fake(ledger) => SystemContract::Fake(FakeContract {
                chaincode_name: chaincode_name.to_string(),
                ledger: ledger.clone(),
            }),
        }
    }
}

pub enum SystemContract {
    FabricGateway(GatewayContract),
    #[cfg(test)]
    Fake(FakeContract),
}

impl TransactionEvaluation for SystemContract {
    async fn evaluate(&self, transaction_name: &str, arguments: &[&[u8]]) -> anyhow::Result<Vec<u8>> {
        match self {
            SystemContract::FabricGateway(delegate) => delegate.evaluate(transaction_name, arguments).await,
            #[cfg(test)]
            SystemContract::Fake(fake) => fake.evaluate(transaction_name, arguments).await,
        }
    }
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedInvocation {
    pub chaincode_name: String,
    pub transaction_name: String,
    pub arguments: Vec<Vec<u8>>,
}

#[cfg(test)]
#[derive(Default)]
struct FakeLedgerState {
    responses: HashMap<(String, String), Result<Vec<u8>, String>>,
    invocations: Vec<RecordedInvocation>,
}

/// Canned answers keyed by chaincode and transaction, recording every evaluation.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct FakeLedger {
    state: Arc<Mutex<FakeLedgerState>>,
}

#[cfg(test)]
impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(self, chaincode_name: &str, transaction_name: &str, payload: Vec<u8>) -> Self {
        self.answer(chaincode_name, transaction_name, Ok(payload))
    }

    pub fn failing(self, chaincode_name: &str, transaction_name: &str, reason: &str) -> Self {
        self.answer(chaincode_name, transaction_name, Err(reason.to_string()))
    }

    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.state.lock().unwrap().invocations.clone()
    }

    fn answer(self, chaincode_name: &str, transaction_name: &str, outcome: Result<Vec<u8>, String>) -> Self {
        let key = (chaincode_name.to_string(), transaction_name.to_string());
        self.state.lock().unwrap().responses.insert(key, outcome);
        self
    }
}

#[cfg(test)]
pub struct FakeContract {
    chaincode_name: String,
    ledger: FakeLedger,
}

#[cfg(test)]
impl TransactionEvaluation for FakeContract {
    async fn evaluate(&self, transaction_name: &str, arguments: &[&[u8]]) -> anyhow::Result<Vec<u8>> {
        let mut state = self.ledger.state.lock().unwrap();

        state.invocations.push(RecordedInvocation {
            chaincode_name: self.chaincode_name.clone(),
            transaction_name: transaction_name.to_string(),
            arguments: arguments.iter().map(|argument| argument.to_vec()).collect(),
        });

        let key = (self.chaincode_name.clone(), transaction_name.to_string());
        match state.responses.get(&key) {
            Some(Ok(payload)) => Ok(payload.clone()),
            Some(Err(reason)) => anyhow::bail!("{}", reason),
            None => anyhow::bail!("no canned response for {}.{}", self.chaincode_name, transaction_name),
        }
    }
}

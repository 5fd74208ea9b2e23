// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{GatewaySettings, ReportKind};
use crate::infra::networking::LedgerNetwork;
use crate::infra::networking::gateway::{GatewayConnection, GatewayNetwork};
use crate::infra::networking::identity::SigningIdentity;
use crate::infra::reporting::InspectionReporter;
use crate::infra::reporting::console::ConsoleReporter;
use crate::infra::reporting::json::JsonReporter;
use crate::inspector::LedgerInspector;

fn reporter(report_kind: ReportKind) -> InspectionReporter {
    match report_kind {
        ReportKind::Console => InspectionReporter::Console(ConsoleReporter::new(console::colors_enabled())),
        ReportKind::Json => InspectionReporter::Json(JsonReporter),
    }
}

fn gateway_network(settings: &GatewaySettings) -> anyhow::Result<LedgerNetwork> {
    let identity = SigningIdentity::from_pem_files(
        &settings.msp_id,
        &settings.certificate_path,
        &settings.private_key_path,
    )?;

    let connection = GatewayConnection::establish(settings)?;
    let network = GatewayNetwork::new(connection, identity, settings.channel_name.clone());
    Ok(LedgerNetwork::FabricGateway(network))
}

pub fn create_inspector(settings: &GatewaySettings, report_kind: ReportKind) -> anyhow::Result<LedgerInspector> {
    let network = gateway_network(settings)?;
    Ok(LedgerInspector::new(
        network,
        settings.channel_name.clone(),
        reporter(report_kind),
    ))
}

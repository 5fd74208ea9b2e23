// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{BlockLookup, GatewaySettings, ReportKind, TlsSettings};
use crate::infra::networking::gateway::DEFAULT_EVALUATE_TIMEOUT_SECS;
use crate::inspector::InspectionTask;
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

#[derive(Args, Debug)]
struct ConnectionArguments {
    /// Gateway endpoint of the target peer (host:port)
    #[arg(long, env = "BLOCKINFO_PEER_ENDPOINT")]
    pub peer_endpoint: String,

    /// Channel to run queries against
    #[arg(long, env = "BLOCKINFO_CHANNEL")]
    pub channel: String,

    /// MSP id of the client identity
    #[arg(long, env = "BLOCKINFO_MSP_ID")]
    pub msp_id: String,

    /// PEM encoded X.509 certificate of the client identity
    #[arg(long, env = "BLOCKINFO_CERT_PATH")]
    pub cert_path: Utf8PathBuf,

    /// PEM encoded private key of the client identity
    #[arg(long, env = "BLOCKINFO_KEY_PATH")]
    pub key_path: Utf8PathBuf,

    /// CA certificate for the peer TLS connection (plaintext when absent)
    #[arg(long, env = "BLOCKINFO_TLS_CERT_PATH")]
    pub tls_cert_path: Option<Utf8PathBuf>,

    /// Server name expected in the peer TLS certificate
    #[arg(long, env = "BLOCKINFO_TLS_SERVER_NAME", requires = "tls_cert_path")]
    pub tls_server_name: Option<String>,

    /// Timeout applied to every evaluation, in seconds
    #[arg(long, env = "BLOCKINFO_TIMEOUT_SECS", default_value_t = DEFAULT_EVALUATE_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// How results are reported
    #[arg(long, value_enum, default_value = "console")]
    pub output: ReportKind,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct BlockArguments {
    /// Block number
    #[arg(long)]
    pub number: Option<u64>,

    /// Hex encoded block hash
    #[arg(long)]
    pub hash: Option<String>,

    /// Id of a transaction included in the block
    #[arg(long)]
    pub tx_id: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "blockinfo", version, about, long_about = None)]
#[command(propagate_version = false)]
struct CliParser {
    #[command(flatten)]
    pub connection: ConnectionArguments,

    #[command(subcommand)]
    pub command: MainCommands,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    /// List channels joined by the peer
    Channels,
    /// Show height and latest block hashes of the channel
    Info,
    /// Show the channel height
    Height,
    /// Show the hash of the latest block
    CurrentHash,
    /// Show the hash of the block preceding the latest one
    PreviousHash,
    /// Show a block found by number, hash or transaction id
    Block(BlockArguments),
}

#[derive(Debug, PartialEq)]
pub struct Invocation {
    pub settings: GatewaySettings,
    pub task: InspectionTask,
    pub report_kind: ReportKind,
}

pub fn parse_arguments() -> anyhow::Result<Invocation> {
    let cli = CliParser::parse();
    into_invocation(cli)
}

fn ensure_exists(path: &Utf8Path) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("blockinfo.cli : no such file or directory ({})", path)
    }
    Ok(())
}

fn parse_block_hash(hash: &str) -> anyhow::Result<Vec<u8>> {
    let digits = hash.strip_prefix("0x").unwrap_or(hash);
    if digits.is_empty() {
        bail!("blockinfo.cli : empty block hash")
    }

    hex::decode(digits).with_context(|| format!("blockinfo.cli : invalid block hash ({})", hash))
}

fn into_invocation(cli: CliParser) -> anyhow::Result<Invocation> {
    let connection = cli.connection;

    ensure_exists(&connection.cert_path)?;
    ensure_exists(&connection.key_path)?;

    let tls = match connection.tls_cert_path {
        Some(ca_certificate_path) => {
            ensure_exists(&ca_certificate_path)?;
            Some(TlsSettings {
                ca_certificate_path,
                server_name_override: connection.tls_server_name,
            })
        },
        None => None,
    };

    let task = match cli.command {
        MainCommands::Channels => InspectionTask::ListChannels,
        MainCommands::Info => InspectionTask::ShowChainInfo,
        MainCommands::Height => InspectionTask::ShowHeight,
        MainCommands::CurrentHash => InspectionTask::ShowCurrentBlockHash,
        MainCommands::PreviousHash => InspectionTask::ShowPreviousBlockHash,
        MainCommands::Block(args) => {
            let lookup = match (args.number, args.hash, args.tx_id) {
                (Some(number), _, _) => BlockLookup::Number(number),
                (_, Some(hash), _) => BlockLookup::Hash(parse_block_hash(&hash)?),
                (_, _, Some(tx_id)) => BlockLookup::TransactionId(tx_id),
                (None, None, None) => bail!("blockinfo.cli : expecting --number, --hash or --tx-id"),
            };
            InspectionTask::ShowBlock(lookup)
        },
    };

    let settings = GatewaySettings {
        peer_endpoint: connection.peer_endpoint,
        channel_name: connection.channel,
        msp_id: connection.msp_id,
        certificate_path: connection.cert_path,
        private_key_path: connection.key_path,
        tls,
        evaluate_timeout: Duration::from_secs(connection.timeout_secs),
    };

    Ok(Invocation {
        settings,
        task,
        report_kind: connection.output,
    })
}

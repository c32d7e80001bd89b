//! paysplit — offline evaluator for the withdrawal split gates.
//!
//! Loads the deployed parameters from a TOML file, a transaction view from
//! JSON (file or stdin), and runs one of the three entry points. Exit code
//! 0 means Accept; 1 means Reject, with the reason on stderr.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use paysplit_gates::{Certificate, GateError, SplitGate, TransactionView, UtxoRef};
use paysplit_types::{Credential, SplitParams, TxHash};

#[derive(Parser)]
#[command(name = "paysplit", about = "Evaluate a transaction against the withdrawal split gates")]
struct Cli {
    /// Path to the TOML parameter file (owner_one, owner_two, share_bps).
    #[arg(long, env = "PAYSPLIT_CONFIG")]
    config: PathBuf,

    /// Credential under which the withdrawal check is registered (56 hex chars).
    #[arg(long, env = "PAYSPLIT_GATE_ID")]
    gate_id: Credential,

    /// Path to the transaction view JSON; "-" reads stdin.
    #[arg(long, default_value = "-")]
    tx: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "PAYSPLIT_LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    entry: Entry,
}

#[derive(Subcommand)]
enum Entry {
    /// Per-input check: confirm the withdrawal check runs in this transaction.
    Spend {
        /// Hash of the transaction that produced the spent output (64 hex chars).
        #[arg(long)]
        utxo_tx: String,
        /// Output index within that transaction.
        #[arg(long, default_value_t = 0)]
        utxo_index: u32,
    },
    /// The authoritative withdrawal split check.
    Withdraw,
    /// Stake-certificate authorization.
    Publish {
        /// Path to the certificate JSON.
        #[arg(long)]
        certificate: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    match run(&cli) {
        Ok(Ok(())) => {
            println!("accept");
            ExitCode::SUCCESS
        }
        Ok(Err(reason)) => {
            eprintln!("reject: {reason}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Outer error: could not even evaluate. Inner: the gate's verdict.
fn run(cli: &Cli) -> Result<Result<(), GateError>> {
    let params = SplitParams::from_toml_file(
        cli.config
            .to_str()
            .context("config path is not valid UTF-8")?,
    )
    .with_context(|| format!("loading parameters from {}", cli.config.display()))?;

    let gate = SplitGate::new(params, cli.gate_id).context("invalid deployment parameters")?;

    let view = read_view(&cli.tx)?;

    let verdict = match &cli.entry {
        Entry::Spend { utxo_tx, utxo_index } => {
            let utxo = UtxoRef {
                tx: parse_tx_hash(utxo_tx)?,
                index: *utxo_index,
            };
            gate.spend(&utxo, &view)
        }
        Entry::Withdraw => gate.withdraw(&view),
        Entry::Publish { certificate } => {
            let content = std::fs::read_to_string(certificate)
                .with_context(|| format!("reading {}", certificate.display()))?;
            let cert: Certificate =
                serde_json::from_str(&content).context("parsing certificate JSON")?;
            gate.publish(&cert, &view)
        }
    };

    Ok(verdict)
}

fn read_view(source: &str) -> Result<TransactionView> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading transaction view from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading {source}"))?
    };
    serde_json::from_str(&content).context("parsing transaction view JSON")
}

fn parse_tx_hash(s: &str) -> Result<TxHash> {
    let bytes = (0..s.len())
        .step_by(2)
        .map(|i| {
            s.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .context("utxo tx hash must be hex")
        })
        .collect::<Result<Vec<u8>>>()?;
    let arr: [u8; 32] = bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("utxo tx hash must be 32 bytes"))?;
    Ok(TxHash::new(arr))
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides the flag.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use plate_engine::catalog::{self, MenuCatalog};
use plate_engine::plates::{self, CheckoutGateway, CheckoutRequest, CheckoutResult, CommandContext};
use plate_engine::{EngineConfig, StorefrontSession, init_logger_with_file};
use shared::error::AppError;
use shared::plate::{PlateEvent, SessionCommand};

/// One line of replay output
#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum StepOutput<'a> {
    Ok {
        step: usize,
        command: &'a SessionCommand,
        events: Vec<PlateEvent>,
    },
    Rejected {
        step: usize,
        command: &'a SessionCommand,
        error: AppError,
    },
}

/// Accepts every order and hands back a generated reference
struct DryRunGateway;

#[async_trait]
impl CheckoutGateway for DryRunGateway {
    async fn submit(&self, request: CheckoutRequest) -> CheckoutResult {
        tracing::info!(plates = request.plates.len(), total = %request.total, "Dry-run checkout");
        CheckoutResult::Accepted {
            reference: format!("DRY-{}", uuid::Uuid::new_v4().simple()),
        }
    }
}

struct Args {
    catalog: PathBuf,
    script: PathBuf,
    checkout: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut checkout = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--checkout" => checkout = true,
            other if other.starts_with("--") => anyhow::bail!("unknown flag {other}"),
            other => positional.push(PathBuf::from(other)),
        }
    }
    let [catalog, script] = <[PathBuf; 2]>::try_from(positional).map_err(|_| {
        anyhow::anyhow!("usage: plate-engine <catalog.json> <script.json> [--checkout]")
    })?;
    Ok(Args {
        catalog,
        script,
        checkout,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    dotenv::dotenv().ok();
    let config = EngineConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let args = parse_args()?;

    // 2. Catalog and script
    let catalog = catalog::load_catalog_file(&args.catalog, &config)?;
    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let commands: Vec<SessionCommand> = serde_json::from_str(&script)
        .with_context(|| format!("parsing {}", args.script.display()))?;
    tracing::info!(
        catalog_items = catalog.all().len(),
        commands = commands.len(),
        policy = ?config.abandoned_edit_policy,
        "Replaying session script"
    );

    // 3. Replay
    let mut session = StorefrontSession::new(&config);
    for (step, command) in commands.iter().enumerate() {
        let mut ctx = CommandContext::new(&mut session, &catalog, &config);
        let output = match plates::dispatch(&mut ctx, command) {
            Ok(events) => StepOutput::Ok {
                step,
                command,
                events,
            },
            Err(e) => StepOutput::Rejected {
                step,
                command,
                error: e.into(),
            },
        };
        println!("{}", serde_json::to_string(&output)?);
    }

    // 4. Optional checkout
    let session = session.into_shared();
    if args.checkout {
        match plates::checkout_cart(&session, &DryRunGateway).await {
            Ok(receipt) => println!("{}", serde_json::to_string(&receipt.to_event())?),
            Err(e) => println!("{}", serde_json::to_string(&AppError::from(e))?),
        }
    }

    let snapshot = session.lock().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use curve_progress::pump::get_bonding_curve_state;
use curve_progress::{Config, ConfigError, CurveConfig};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Report bonding curve progress for the configured curves.
#[derive(Debug, Parser)]
#[command(name = "curve-progress", version)]
struct Args {
    /// Path to the TOML config (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `rpc.endpoint` from the config
    #[arg(long)]
    rpc_url: Option<String>,

    /// Extra bonding curve accounts to report on
    accounts: Vec<String>,
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => Config::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Config::from_file(DEFAULT_CONFIG_PATH)?
        }
        None => Config::default(),
    };

    if let Some(url) = &args.rpc_url {
        cfg.rpc.endpoint = url.clone();
    }
    cfg.curves.extend(
        args.accounts
            .iter()
            .map(|account| CurveConfig::from_account(account.as_str())),
    );

    Ok(cfg)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let cfg = match load_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let curves = match cfg.curve_accounts() {
        Ok(curves) => curves,
        Err(e) => {
            eprintln!("Error resolving curves: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if curves.is_empty() {
        eprintln!("No curves configured, pass accounts or add [[curves]] to the config");
        return ExitCode::FAILURE;
    }

    info!("Using RPC endpoint {}", cfg.rpc.endpoint);
    let source = match cfg.rpc.source() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error creating RPC client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0usize;
    for (label, account) in &curves {
        match get_bonding_curve_state(&source, account) {
            Ok(state) => {
                println!(
                    "{}: account={} virtual_token_reserves={} progress={:.2}% complete={}",
                    label,
                    account,
                    state.virtual_token_reserves,
                    state.progress(),
                    state.complete
                );
            }
            Err(e) => {
                warn!("Failed to read bonding curve {} ({}): {}", label, account, e);
                eprintln!("{}: account={} error: {}", label, account, e);
                failed += 1;
            }
        }
    }

    info!("Reported {} curves, {} failed", curves.len(), failed);
    if failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

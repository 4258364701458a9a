//! Off-chain reader for bonding curve accounts.
//!
//! Fetches a curve account over JSON-RPC, reads its virtual token reserves
//! and turns them into a progress percentage.

pub mod common;
pub mod config;
pub mod error;
pub mod pump;
pub mod rpc;

pub use config::{Config, CurveConfig, DEFAULT_RPC_URL, RpcConfig};
pub use error::{ConfigError, CurveError, DecodeError};
pub use pump::{BondingCurveState, progress_from_reserves};

/// Virtual token reserves of `account`, fetched from `config.endpoint`.
///
/// # Errors
/// [`CurveError::NotFound`] when the node has no data for the account,
/// [`CurveError::Transport`] when the request fails, [`CurveError::Parse`]
/// for an unexpected response and [`CurveError::Decode`] when the data is
/// not base64 or shorter than 16 bytes.
pub fn get_virtual_token_reserves(account: &str, config: &RpcConfig) -> Result<u64, CurveError> {
    pump::virtual_token_reserves(&config.source()?, account)
}

/// Progress of `account` in percent, using the default mainnet endpoint.
pub fn calculate_bonding_curve_progress(account: &str) -> Result<f64, CurveError> {
    calculate_bonding_curve_progress_with(account, &RpcConfig::default())
}

pub fn calculate_bonding_curve_progress_with(
    account: &str,
    config: &RpcConfig,
) -> Result<f64, CurveError> {
    pump::bonding_curve_progress(&config.source()?, account)
}

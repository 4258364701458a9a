use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use std::path::Path;

use crate::error::{ConfigError, CurveError};
use crate::pump::bonding_curve_address;
use crate::rpc::HttpAccountSource;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

fn default_endpoint() -> String {
    DEFAULT_RPC_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcConfig {
    /// URL JSON-RPC ноды
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl RpcConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn source(&self) -> Result<HttpAccountSource, CurveError> {
        HttpAccountSource::new(self.endpoint.clone())
    }
}

/// Одна bonding curve для отчёта: либо адрес аккаунта, либо mint токена.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CurveConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub mint: Option<String>,
}

impl CurveConfig {
    pub fn from_account(account: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            ..Default::default()
        }
    }

    /// Адрес аккаунта curve. `account` имеет приоритет, иначе PDA от `mint`.
    pub fn account_address(&self, index: usize) -> Result<String, ConfigError> {
        if let Some(account) = &self.account {
            return Ok(account.clone());
        }

        let mint = self.mint.as_ref().ok_or(ConfigError::MissingAccount(index))?;
        let mint_key = mint.parse::<Pubkey>().map_err(|e| ConfigError::InvalidMint {
            mint: mint.clone(),
            reason: e.to_string(),
        })?;

        Ok(bonding_curve_address(&mint_key).to_string())
    }

    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.account.as_deref())
            .or(self.mint.as_deref())
            .unwrap_or("<unnamed>")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub curves: Vec<CurveConfig>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        Ok(cfg)
    }

    /// Resolves every configured curve to an account address, in config order.
    pub fn curve_accounts(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.curves
            .iter()
            .enumerate()
            .map(|(index, curve)| Ok((curve.label().to_string(), curve.account_address(index)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_default_endpoint() {
        let cfg = Config::from_toml("").unwrap();

        assert_eq!(cfg.rpc, RpcConfig::default());
        assert_eq!(cfg.rpc.endpoint, DEFAULT_RPC_URL);
        assert!(cfg.curves.is_empty());
    }

    #[test]
    fn parses_endpoint_and_curves() {
        let cfg = Config::from_toml(
            r#"
            [rpc]
            endpoint = "http://localhost:8899"

            [[curves]]
            name = "by-account"
            account = "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj"

            [[curves]]
            mint = "So11111111111111111111111111111111111111112"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.rpc.endpoint, "http://localhost:8899");
        assert_eq!(cfg.curves.len(), 2);

        let accounts = cfg.curve_accounts().unwrap();
        assert_eq!(
            accounts[0],
            (
                "by-account".to_string(),
                "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj".to_string()
            )
        );

        let mint: Pubkey = "So11111111111111111111111111111111111111112".parse().unwrap();
        assert_eq!(accounts[1].1, bonding_curve_address(&mint).to_string());
        assert_eq!(accounts[1].0, "So11111111111111111111111111111111111111112");
    }

    #[test]
    fn account_takes_precedence_over_mint() {
        let curve = CurveConfig {
            account: Some("anything".to_string()),
            mint: Some("not a key".to_string()),
            ..Default::default()
        };

        assert_eq!(curve.account_address(0).unwrap(), "anything");
    }

    #[test]
    fn curve_without_address_is_rejected() {
        let cfg = Config::from_toml("[[curves]]\nname = \"empty\"\n").unwrap();

        assert!(matches!(cfg.curve_accounts(), Err(ConfigError::MissingAccount(0))));
    }

    #[test]
    fn invalid_mint_is_rejected() {
        let curve = CurveConfig {
            mint: Some("not a key".to_string()),
            ..Default::default()
        };

        assert!(matches!(curve.account_address(3), Err(ConfigError::InvalidMint { .. })));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(matches!(Config::from_toml("[rpc"), Err(ConfigError::Toml(_))));
    }
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::contracts::ContractAddresses;
use crate::rpc::RpcUrl;
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Process configuration, resolved once at startup and passed into the
/// orchestrator. The signer key is deliberately not part of this struct;
/// it is read and scrubbed from the environment where it is needed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// JSON-RPC endpoint, from the `RPC_URL` environment variable
    pub rpc_url: String,
    /// Deployment to target, defaulting to Polymarket on Polygon mainnet
    pub contracts: ContractAddresses,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            contracts: ContractAddresses::default(),
        }
    }
}

impl AppConfig {
    pub fn rpc(&self) -> Result<RpcUrl> {
        RpcUrl::from_url(&self.rpc_url)
    }

    fn validate(&self) -> Result<()> {
        if self.rpc_url.is_empty() {
            bail!("RPC_URL is not set");
        }
        self.rpc().context("RPC_URL is not a usable endpoint")?;
        Ok(())
    }
}

/// Loads configuration from the process environment over the built-in
/// defaults. `RPC_URL` supplies the endpoint; `CTF_`-prefixed variables
/// override nested fields, e.g. `CTF_CONTRACTS__COLLATERAL`.
pub fn load_config() -> Result<AppConfig> {
    let config: AppConfig = Figment::new()
        .merge(Serialized::defaults(AppConfig::default()))
        .merge(Env::raw().only(&["rpc_url"]))
        .merge(Env::prefixed("CTF_").split("__"))
        .extract()
        .context("Failed to read configuration from the environment")?;

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn loads_polygon_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RPC_URL", "https://polygon-rpc.com");
            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.rpc_url, "https://polygon-rpc.com");
            assert_eq!(config.contracts, ContractAddresses::polygon());
            Ok(())
        });
    }

    #[test]
    fn missing_rpc_url_fails() {
        figment::Jail::expect_with(|_jail| {
            assert!(load_config().is_err());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_contract_addresses() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RPC_URL", "https://polygon-rpc.com");
            jail.set_env(
                "CTF_CONTRACTS__COLLATERAL",
                "0x0000000000000000000000000000000000000001",
            );
            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(
                config.contracts.collateral,
                address!("0000000000000000000000000000000000000001")
            );
            assert_eq!(
                config.contracts.conditional_tokens,
                ContractAddresses::polygon().conditional_tokens
            );
            Ok(())
        });
    }
}

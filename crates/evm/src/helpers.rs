// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::PrivateKeySigner,
    transports::ws::WsConnect,
};
use anyhow::{Context, Result};
use ctf_config::RpcUrl;
use std::{env, sync::Arc};

/// A provider with its chain id resolved up front.
#[derive(Clone)]
pub struct EthProvider<P> {
    provider: Arc<P>,
    chain_id: u64,
}

impl<P: Provider + Clone> EthProvider<P> {
    pub async fn new(provider: P) -> Result<Self> {
        let chain_id = provider.get_chain_id().await?;
        Ok(Self {
            provider: Arc::new(provider),
            chain_id,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

pub struct ProviderConfig {
    rpc: RpcUrl,
}

impl ProviderConfig {
    pub fn new(rpc: RpcUrl) -> Self {
        Self { rpc }
    }

    pub async fn create_signer_provider(
        &self,
        signer: &PrivateKeySigner,
    ) -> Result<EthProvider<impl Provider + WalletProvider + Clone>> {
        let wallet = EthereumWallet::from(signer.clone());

        let provider = if self.rpc.is_websocket() {
            ProviderBuilder::new()
                .wallet(wallet)
                .connect_ws(WsConnect::new(self.rpc.as_str()))
                .await
                .context("Failed to connect to WebSocket RPC. Check if the node is running and URL is correct.")?
        } else {
            ProviderBuilder::new()
                .wallet(wallet)
                .connect_http(self.rpc.url().clone())
        };

        EthProvider::new(provider).await
    }
}

/// Reads the signer key from the named environment variable, then removes
/// the variable so the key does not linger in the process environment.
pub fn load_signer_from_env(var: &str) -> Result<PrivateKeySigner> {
    let private_key =
        env::var(var).with_context(|| format!("environment variable {} is not set", var))?;
    env::remove_var(var);
    private_key.parse().map_err(Into::into)
}

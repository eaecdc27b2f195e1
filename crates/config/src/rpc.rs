// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcProtocol {
    Http,
    Https,
    Ws,
    Wss,
}

impl RpcProtocol {
    pub fn is_websocket(&self) -> bool {
        matches!(self, RpcProtocol::Ws | RpcProtocol::Wss)
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, RpcProtocol::Https | RpcProtocol::Wss)
    }
}

/// A validated JSON-RPC endpoint.
#[derive(Clone, Debug)]
pub struct RpcUrl {
    protocol: RpcProtocol,
    url: Url,
}

impl RpcUrl {
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).context("Invalid URL format")?;
        let protocol = match parsed.scheme() {
            "http" => RpcProtocol::Http,
            "https" => RpcProtocol::Https,
            "ws" => RpcProtocol::Ws,
            "wss" => RpcProtocol::Wss,
            _ => bail!("Invalid protocol. Expected: http://, https://, ws://, wss://"),
        };

        if parsed.host_str().is_none() {
            bail!("URL must contain a host");
        }

        Ok(RpcUrl {
            protocol,
            url: parsed,
        })
    }

    pub fn protocol(&self) -> RpcProtocol {
        self.protocol
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_websocket(&self) -> bool {
        self.protocol.is_websocket()
    }

    pub fn is_secure(&self) -> bool {
        self.protocol.is_secure()
    }
}

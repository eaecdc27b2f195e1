// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// The on-chain deployment a redemption targets.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractAddresses {
    /// Factory that relays batched calls on behalf of the proxy wallet
    pub proxy_wallet_factory: Address,
    /// Gnosis Conditional Tokens Framework
    pub conditional_tokens: Address,
    /// Adapter for negative-risk market redemptions
    pub neg_risk_adapter: Address,
    /// Collateral token positions settle into
    pub collateral: Address,
}

impl ContractAddresses {
    /// The Polymarket deployment on Polygon mainnet. Collateral is USDC.
    pub fn polygon() -> Self {
        Self {
            proxy_wallet_factory: address!("ab45c5a4b0c941a2f231c04c3f49182e1a254052"),
            conditional_tokens: address!("4d97dcd97ec945f40cf65f87097ace5ea0476045"),
            neg_risk_adapter: address!("d91e80cf2e7be2e162c6513ced06f1dd0da35296"),
            collateral: address!("2791bca1f2de4661ed88a30c99a7a9449aa84174"),
        }
    }
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self::polygon()
    }
}

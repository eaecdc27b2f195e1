// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::contracts::IProxyWalletFactory;
use crate::error::EvmError;
use crate::helpers::EthProvider;
use crate::relay::RelayedCall;
use alloy::{primitives::Address, providers::Provider, rpc::types::TransactionReceipt};
use ctf_fees::FeePair;
use tracing::info;

/// Sends a single relayed call through the proxy factory with the escalated
/// fee pair and waits for it to be mined. A mined-but-reverted receipt is an
/// error; the redemption did not happen.
pub async fn submit_relayed_call<P: Provider + Clone>(
    provider: &EthProvider<P>,
    factory: Address,
    call: RelayedCall,
    fees: &FeePair,
) -> Result<TransactionReceipt, EvmError> {
    let contract = IProxyWalletFactory::new(factory, provider.provider());
    let pending = contract
        .proxy(vec![call.into()])
        .max_fee_per_gas(fees.max_fee_per_gas)
        .max_priority_fee_per_gas(fees.max_priority_fee_per_gas)
        .send()
        .await?;

    let tx_hash = *pending.tx_hash();
    info!(tx=%tx_hash, "Transaction submitted, waiting for confirmation");

    let receipt = pending.get_receipt().await?;
    if !receipt.status() {
        return Err(EvmError::Confirmation { tx_hash });
    }

    Ok(receipt)
}

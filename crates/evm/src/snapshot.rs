// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::EvmError;
use crate::helpers::EthProvider;
use alloy::eips::BlockNumberOrTag;
use alloy::providers::Provider;
use alloy::transports::RpcError;
use ctf_fees::FeeSnapshot;

const METHOD_NOT_FOUND: i64 = -32601;

/// Reads the network's current fee state. The base fee comes from the
/// latest block header and is absent on pre-London chains; the suggested
/// pair comes from the node's EIP-1559 estimation and is absent when the
/// node does not serve it. Any other RPC failure is fatal.
pub async fn fetch_fee_snapshot<P: Provider + Clone>(
    provider: &EthProvider<P>,
) -> Result<FeeSnapshot, EvmError> {
    let block = provider
        .provider()
        .get_block_by_number(BlockNumberOrTag::Latest)
        .await?;
    let base_fee = block
        .and_then(|b| b.header.base_fee_per_gas)
        .map(u128::from);

    let (max_fee, priority_fee) = match provider.provider().estimate_eip1559_fees().await {
        Ok(estimate) => (
            Some(estimate.max_fee_per_gas),
            Some(estimate.max_priority_fee_per_gas),
        ),
        Err(RpcError::UnsupportedFeature(_)) => (None, None),
        Err(RpcError::ErrorResp(resp)) if resp.code == METHOD_NOT_FOUND => (None, None),
        Err(e) => return Err(e.into()),
    };

    Ok(FeeSnapshot {
        base_fee,
        max_fee,
        priority_fee,
    })
}

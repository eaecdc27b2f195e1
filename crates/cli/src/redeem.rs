// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use ctf_config::AppConfig;
use ctf_evm::{
    build_redemption_call, fetch_fee_snapshot, load_signer_from_env, submit_relayed_call,
    with_retries, ProviderConfig, RedemptionRequest,
};
use ctf_fees::{as_gwei, FeePolicy};
use tracing::info;

/// One-shot redemption: build the relayed call, price it from the current
/// fee snapshot, submit through the proxy factory and wait for the receipt.
pub async fn execute(config: &AppConfig, request: RedemptionRequest, retries: u32) -> Result<()> {
    info!(
        condition_id = %request.condition_id,
        neg_risk = request.neg_risk,
        "Starting redemption"
    );
    if request.neg_risk {
        info!(yes = %request.yes_amount, no = %request.no_amount, "Redeem amounts");
    }

    let signer = load_signer_from_env("PK")?;
    info!(address = %signer.address(), "Signer loaded");

    let provider = ProviderConfig::new(config.rpc()?)
        .create_signer_provider(&signer)
        .await?;
    info!(chain_id = provider.chain_id(), "Connected to RPC");

    let call = build_redemption_call(&request, &config.contracts)?;
    info!(to = %call.to, calldata_bytes = call.data.len(), "Relayed call assembled");

    let snapshot = with_retries("fetch fee snapshot", retries, || {
        fetch_fee_snapshot(&provider)
    })
    .await?;
    info!(
        base_fee = ?snapshot.base_fee,
        suggested_max_fee = ?snapshot.max_fee,
        suggested_priority_fee = ?snapshot.priority_fee,
        "Fee snapshot (wei)"
    );

    let fees = FeePolicy::default().compute_fees(&snapshot);
    info!(
        max_fee_per_gas = fees.max_fee_per_gas,
        max_fee_gwei = as_gwei(fees.max_fee_per_gas),
        max_priority_fee_per_gas = fees.max_priority_fee_per_gas,
        priority_fee_gwei = as_gwei(fees.max_priority_fee_per_gas),
        "Escalated fees"
    );

    let receipt = submit_relayed_call(
        &provider,
        config.contracts.proxy_wallet_factory,
        call,
        &fees,
    )
    .await?;
    info!(
        tx = %receipt.transaction_hash,
        block = ?receipt.block_number,
        "Redemption confirmed"
    );

    Ok(())
}

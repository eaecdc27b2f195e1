// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::EvmError;
use alloy::{
    primitives::{Address, Bytes, B256, U256},
    sol,
    sol_types::SolCall,
};

sol! {
    /// One relayed call as the proxy factory consumes it.
    #[derive(Debug, PartialEq, Eq)]
    struct ProxyTransaction {
        address to;
        uint8 typeCode;
        bytes data;
        uint256 value;
    }

    #[sol(rpc)]
    interface IProxyWalletFactory {
        function proxy(ProxyTransaction[] memory transactions) external payable returns (bytes[] memory returnValues);
    }

    interface IConditionalTokens {
        function redeemPositions(address collateralToken, bytes32 parentCollectionId, bytes32 conditionId, uint256[] indexSets) external;
    }

    interface INegRiskAdapter {
        function redeemPositions(bytes32 conditionId, uint256[] amounts) external;
    }
}

/// Parses a 32-byte hex condition identifier.
pub fn parse_condition_id(condition_id: &str) -> Result<B256, EvmError> {
    condition_id
        .parse::<B256>()
        .map_err(|_| EvmError::Encoding(condition_id.to_string()))
}

/// Calldata for a standard redemption against the conditional tokens
/// framework. The parent collection is the root and the index sets cover
/// both outcome slots of a binary market.
pub fn encode_redeem(collateral: Address, condition_id: &str) -> Result<Bytes, EvmError> {
    let call = IConditionalTokens::redeemPositionsCall {
        collateralToken: collateral,
        parentCollectionId: B256::ZERO,
        conditionId: parse_condition_id(condition_id)?,
        indexSets: vec![U256::from(1), U256::from(2)],
    };
    Ok(call.abi_encode().into())
}

/// Calldata for a neg-risk redemption. The adapter wants explicit
/// per-outcome amounts, YES first.
pub fn encode_redeem_neg_risk(
    condition_id: &str,
    yes_amount: U256,
    no_amount: U256,
) -> Result<Bytes, EvmError> {
    let call = INegRiskAdapter::redeemPositionsCall {
        conditionId: parse_condition_id(condition_id)?,
        amounts: vec![yes_amount, no_amount],
    };
    Ok(call.abi_encode().into())
}

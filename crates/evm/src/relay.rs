// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::contracts::{encode_redeem, encode_redeem_neg_risk, ProxyTransaction};
use crate::error::EvmError;
use alloy::primitives::{Address, Bytes, U256};
use ctf_config::ContractAddresses;

/// How the proxy wallet executes a relayed call. Only plain calls are
/// relayed in this flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyCallType {
    Call,
}

impl ProxyCallType {
    /// Wire value understood by the proxy factory.
    pub fn code(&self) -> u8 {
        match self {
            ProxyCallType::Call => 1,
        }
    }
}

/// A settled position to redeem. The amounts only matter on the neg-risk
/// path; the standard path redeems whatever the wallet holds.
#[derive(Debug, Clone)]
pub struct RedemptionRequest {
    pub condition_id: String,
    pub neg_risk: bool,
    pub yes_amount: U256,
    pub no_amount: U256,
}

/// A single call relayed through the proxy factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedCall {
    pub to: Address,
    pub type_code: ProxyCallType,
    pub data: Bytes,
    pub value: U256,
}

impl From<RelayedCall> for ProxyTransaction {
    fn from(call: RelayedCall) -> Self {
        ProxyTransaction {
            to: call.to,
            typeCode: call.type_code.code(),
            data: call.data,
            value: call.value,
        }
    }
}

/// Routes a redemption to the neg-risk adapter or the conditional tokens
/// framework and assembles the relayed call. Redemption moves no native
/// currency, so the value is always zero.
pub fn build_redemption_call(
    request: &RedemptionRequest,
    contracts: &ContractAddresses,
) -> Result<RelayedCall, EvmError> {
    let (to, data) = if request.neg_risk {
        (
            contracts.neg_risk_adapter,
            encode_redeem_neg_risk(&request.condition_id, request.yes_amount, request.no_amount)?,
        )
    } else {
        (
            contracts.conditional_tokens,
            encode_redeem(contracts.collateral, &request.condition_id)?,
        )
    };

    Ok(RelayedCall {
        to,
        type_code: ProxyCallType::Call,
        data,
        value: U256::ZERO,
    })
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::TxHash;
use alloy::providers::PendingTransactionError;
use alloy::transports::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum EvmError {
    /// Malformed redemption parameters; raised by the encoders.
    #[error("invalid condition id: {0}")]
    Encoding(String),

    /// The RPC transport failed.
    #[error("rpc request failed: {0}")]
    Rpc(#[from] TransportError),

    /// The contract call could not be built or sent.
    #[error("contract call failed: {0}")]
    Contract(#[from] alloy::contract::Error),

    /// The transaction left the mempool without a usable receipt.
    #[error("transaction dropped before confirmation: {0}")]
    Pending(#[from] PendingTransactionError),

    /// The transaction was mined but reverted.
    #[error("transaction {tx_hash} reverted on-chain")]
    Confirmation { tx_hash: TxHash },
}

impl EvmError {
    /// Network-class failures are safe to retry; a revert or a malformed
    /// request is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            EvmError::Rpc(_) => true,
            EvmError::Contract(err) => matches!(err, alloy::contract::Error::TransportError(_)),
            EvmError::Encoding(_) | EvmError::Pending(_) | EvmError::Confirmation { .. } => false,
        }
    }
}

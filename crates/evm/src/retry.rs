// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::EvmError;
use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::warn;

const RETRY_INITIAL_DELAY_MS: u64 = 2000;

/// Runs an operation with up to `retries` additional attempts and
/// exponential backoff. Only network-class errors are retried; the default
/// of zero retries preserves the fail-fast behavior of a one-shot run.
pub async fn with_retries<F, Fut, T>(
    operation_name: &str,
    retries: u32,
    operation: F,
) -> Result<T, EvmError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, EvmError>>,
{
    let max_attempts = retries + 1;
    let mut attempt = 1;
    let mut delay_ms = RETRY_INITIAL_DELAY_MS;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                warn!(
                    "{}: attempt {}/{} failed, retrying in {}ms: {}",
                    operation_name, attempt, max_attempts, delay_ms, e
                );
                sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
                delay_ms *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::transports::{RpcError, TransportErrorKind};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn network_error() -> EvmError {
        EvmError::Rpc(RpcError::Transport(TransportErrorKind::BackendGone))
    }

    #[tokio::test(start_paused = true)]
    async fn retries_network_errors_until_success() {
        let calls = AtomicU32::new(0);
        let result = with_retries("op", 3, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(network_error())
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_retries_fails_fast() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retries("op", 0, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(network_error()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn non_retryable_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retries("op", 5, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(EvmError::Encoding("0xbad".to_string())) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

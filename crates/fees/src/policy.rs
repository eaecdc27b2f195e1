// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! EIP-1559 fee escalation.
//!
//! The network enforces a minimum priority fee and we additionally floor the
//! max fee to avoid chronic underpricing. Observed suggestions are escalated
//! to reduce the chance of a stuck transaction, and the max fee is kept
//! consistent with the base fee so a spike between estimation and inclusion
//! does not invalidate the transaction.

/// Minimum priority fee enforced by Polygon validators.
pub const MIN_PRIORITY_FEE: u128 = 25_000_000_000; // 25 gwei

/// Floor for the max fee so quiet-network estimates don't underprice.
pub const MIN_MAX_FEE: u128 = 500_000_000_000; // 500 gwei

/// Escalation applied to network suggestions, as an integer ratio.
/// Division truncates toward zero on purpose.
const ESCALATION_NUMERATOR: u128 = 150;
const ESCALATION_DENOMINATOR: u128 = 100;

/// The max fee must cover this many multiples of the base fee on top of the
/// priority fee.
const BASE_FEE_HEADROOM: u128 = 2;

/// Network-reported fee state at submission time, in wei. Nodes that predate
/// EIP-1559 or refuse `eth_maxPriorityFeePerGas` leave fields unset; the
/// policy resolves every absence to a floor, never to a silent zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeSnapshot {
    pub base_fee: Option<u128>,
    pub max_fee: Option<u128>,
    pub priority_fee: Option<u128>,
}

/// The fee pair handed to the transaction, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePair {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

/// Per-network fee floors. The defaults are the Polygon mainnet values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    pub min_priority_fee: u128,
    pub min_max_fee: u128,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            min_priority_fee: MIN_PRIORITY_FEE,
            min_max_fee: MIN_MAX_FEE,
        }
    }
}

impl FeePolicy {
    /// Derives a fee pair from a snapshot. Total: any snapshot, including an
    /// entirely empty one, produces a valid pair satisfying
    /// `max >= priority + BASE_FEE_HEADROOM * base`.
    pub fn compute_fees(&self, snapshot: &FeeSnapshot) -> FeePair {
        let priority = snapshot
            .priority_fee
            .map(escalate)
            .unwrap_or(self.min_priority_fee)
            .max(self.min_priority_fee);

        let mut max_fee = snapshot
            .max_fee
            .map(escalate)
            .unwrap_or(self.min_max_fee)
            .max(self.min_max_fee);

        let base_fee = snapshot.base_fee.unwrap_or(0);
        let required = base_fee
            .saturating_mul(BASE_FEE_HEADROOM)
            .saturating_add(priority);
        if max_fee < required {
            max_fee = required;
        }

        FeePair {
            max_fee_per_gas: max_fee,
            max_priority_fee_per_gas: priority,
        }
    }
}

fn escalate(fee: u128) -> u128 {
    fee.saturating_mul(ESCALATION_NUMERATOR) / ESCALATION_DENOMINATOR
}

/// Wei to gwei, for log output only.
pub fn as_gwei(wei: u128) -> f64 {
    wei as f64 / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot(
        base_fee: Option<u128>,
        max_fee: Option<u128>,
        priority_fee: Option<u128>,
    ) -> FeeSnapshot {
        FeeSnapshot {
            base_fee,
            max_fee,
            priority_fee,
        }
    }

    #[test]
    fn empty_snapshot_returns_floors() {
        let fees = FeePolicy::default().compute_fees(&FeeSnapshot::default());
        assert_eq!(fees.max_fee_per_gas, MIN_MAX_FEE);
        assert_eq!(fees.max_priority_fee_per_gas, MIN_PRIORITY_FEE);
    }

    #[test]
    fn escalates_suggestions_above_unclipped_floors() {
        // base 100, suggested max 200, suggested priority 30:
        // priority -> 45, max -> 300, required = 2*100 + 45 = 245 <= 300.
        let policy = FeePolicy {
            min_priority_fee: 0,
            min_max_fee: 0,
        };
        let fees = policy.compute_fees(&snapshot(Some(100), Some(200), Some(30)));
        assert_eq!(fees.max_fee_per_gas, 300);
        assert_eq!(fees.max_priority_fee_per_gas, 45);
    }

    #[test]
    fn raises_max_fee_to_cover_priority_floor() {
        // base 1000, suggested max 200, suggested priority 10: the escalated
        // priority (15) sits below the 25 gwei floor, and the consistency
        // raise then dominates the escalated max fee.
        let policy = FeePolicy {
            min_priority_fee: MIN_PRIORITY_FEE,
            min_max_fee: 0,
        };
        let fees = policy.compute_fees(&snapshot(Some(1000), Some(200), Some(10)));
        assert_eq!(fees.max_priority_fee_per_gas, MIN_PRIORITY_FEE);
        assert_eq!(fees.max_fee_per_gas, 2000 + MIN_PRIORITY_FEE);
    }

    #[test]
    fn polygon_floors_dominate_small_suggestions() {
        let fees = FeePolicy::default().compute_fees(&snapshot(Some(1000), Some(200), Some(10)));
        assert_eq!(fees.max_priority_fee_per_gas, MIN_PRIORITY_FEE);
        assert_eq!(fees.max_fee_per_gas, MIN_MAX_FEE);
    }

    #[test]
    fn consistency_raise_applies_above_floors() {
        // All values comfortably above the Polygon floors so step 5 is the
        // deciding branch: 400 gwei escalates to 600 gwei, but
        // 2 * 300 gwei + 45 gwei = 645 gwei is required.
        let gwei = 1_000_000_000u128;
        let fees = FeePolicy::default().compute_fees(&snapshot(
            Some(300 * gwei),
            Some(400 * gwei),
            Some(30 * gwei),
        ));
        assert_eq!(fees.max_priority_fee_per_gas, 45 * gwei);
        assert_eq!(fees.max_fee_per_gas, 645 * gwei);
    }

    #[test]
    fn escalation_truncates_toward_zero() {
        let policy = FeePolicy {
            min_priority_fee: 0,
            min_max_fee: 0,
        };
        // 33 * 150 / 100 = 49.5, truncated.
        let fees = policy.compute_fees(&snapshot(None, Some(33), Some(33)));
        assert_eq!(fees.max_priority_fee_per_gas, 49);
        assert_eq!(fees.max_fee_per_gas, 49);
    }

    #[test]
    fn absent_base_fee_is_treated_as_zero() {
        let policy = FeePolicy {
            min_priority_fee: 0,
            min_max_fee: 0,
        };
        let fees = policy.compute_fees(&snapshot(None, Some(100), Some(200)));
        // required = 0 * 2 + 300, which beats the escalated max of 150
        assert_eq!(fees.max_fee_per_gas, 300);
        assert_eq!(fees.max_priority_fee_per_gas, 300);
    }

    fn arb_snapshot() -> impl Strategy<Value = FeeSnapshot> {
        (
            prop::option::of(any::<u128>()),
            prop::option::of(any::<u128>()),
            prop::option::of(any::<u128>()),
        )
            .prop_map(|(base_fee, max_fee, priority_fee)| FeeSnapshot {
                base_fee,
                max_fee,
                priority_fee,
            })
    }

    proptest! {

        #[test]
        fn max_fee_covers_priority_fee(s in arb_snapshot()) {
            let fees = FeePolicy::default().compute_fees(&s);
            prop_assert!(fees.max_fee_per_gas >= fees.max_priority_fee_per_gas);
        }

        #[test]
        fn max_fee_covers_base_fee_headroom(s in arb_snapshot()) {
            let fees = FeePolicy::default().compute_fees(&s);
            let base_fee = s.base_fee.unwrap_or(0);
            prop_assert!(
                fees.max_fee_per_gas
                    >= base_fee
                        .saturating_mul(2)
                        .saturating_add(fees.max_priority_fee_per_gas)
            );
        }

        #[test]
        fn floors_always_hold(s in arb_snapshot()) {
            let fees = FeePolicy::default().compute_fees(&s);
            prop_assert!(fees.max_fee_per_gas >= MIN_MAX_FEE);
            prop_assert!(fees.max_priority_fee_per_gas >= MIN_PRIORITY_FEE);
        }

        #[test]
        fn idempotent(s in arb_snapshot()) {
            let policy = FeePolicy::default();
            prop_assert_eq!(policy.compute_fees(&s), policy.compute_fees(&s));
        }
    }
}

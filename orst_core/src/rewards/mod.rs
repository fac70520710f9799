//! Splits food orders into pairs with one uniform price sum and scores the split.
//!
//! After sorting, the only split that can give every pair the same sum is cheapest with dearest,
//! second cheapest with second dearest and so on. Each pair earns the product of its two prices
//! as reward points.
//!
//! # Example
//!
//! ```
//! use orst_core::rewards::{maximize_rewards, Rewards};
//!
//! let rewards = maximize_rewards(&[1, 2, 3, 4]);
//! assert_eq!(rewards.pairs, [(1, 4), (2, 3)]);
//! assert_eq!(rewards.reward, 10);
//!
//! assert_eq!(maximize_rewards(&[1, 1, 2, 4]), Rewards::unpaired());
//! ```

mod error;

pub use error::{PairingError, Result};

use crate::orst::{HybridMergeSorter, Sorter};

/// Two prices from opposite ends of the sorted list, cheaper one first.
pub type Pair = (i64, i64);

/// The outcome of pairing up a list of prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewards {
    pub pairs: Vec<Pair>,
    pub reward: i64,
}

impl Rewards {
    /// Reward reported when no uniform-sum pairing exists.
    pub const NO_REWARD: i64 = -1;

    /// The sentinel result: no pairs and a reward of [`Rewards::NO_REWARD`].
    pub fn unpaired() -> Self {
        Self {
            pairs: Vec::new(),
            reward: Self::NO_REWARD,
        }
    }

    // A valid pairing can legitimately total -1, so only the pairs tell the two apart.
    pub fn is_paired(&self) -> bool {
        !self.pairs.is_empty()
    }
}

/// Pairs up `prices` and totals the reward, or explains why that is impossible.
///
/// `prices` itself is left untouched; a sorted copy is used for the scan.
pub fn pair_orders(prices: &[i64]) -> Result<Rewards> {
    let len = prices.len();
    if len <= 1 {
        return Err(PairingError::TooFewItems { len });
    }
    if len % 2 != 0 {
        return Err(PairingError::OddLength { len });
    }

    let mut sorted = prices.to_vec();
    HybridMergeSorter::default().sort(&mut sorted);

    let mut pairs = Vec::with_capacity(len / 2);
    let mut reward: i64 = 0;
    let mut previous_sum = None;

    let (mut low, mut high) = (0, len - 1);
    while low < high {
        let pair = (sorted[low], sorted[high]);

        let sum = pair.0.checked_add(pair.1).ok_or(PairingError::Overflow)?;
        if let Some(expected) = previous_sum {
            if sum != expected {
                return Err(PairingError::UnevenSums {
                    expected,
                    found: sum,
                });
            }
        }
        previous_sum = Some(sum);

        reward = pair
            .0
            .checked_mul(pair.1)
            .and_then(|product| reward.checked_add(product))
            .ok_or(PairingError::Overflow)?;
        pairs.push(pair);

        low += 1;
        high -= 1;
    }

    Ok(Rewards { pairs, reward })
}

/// Pairs up `prices`, falling back to [`Rewards::unpaired`] when no valid pairing exists.
pub fn maximize_rewards(prices: &[i64]) -> Rewards {
    pair_orders(prices).unwrap_or_else(|_| Rewards::unpaired())
}

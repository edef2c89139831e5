//! NFT staking reward accrual.
//!
//! Accrual is sampled: rewards are a pure function of `staked_at`, the
//! rate, and the injected `now`. There is no ledger, so a missed sample
//! underclaims rather than overclaims. A claim resets `staked_at`,
//! which makes an immediate second claim accrue zero.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reward points per day for a contract-locked NFT.
pub const HARD_STAKE_RATE: u64 = 10;
/// Reward points per day for an ownership-tracked NFT.
pub const SOFT_STAKE_RATE: u64 = 5;
/// Percentage taken from every claim.
pub const CLAIM_FEE_PERCENT: f64 = 2.5;
/// Claims below this many points are rejected.
pub const MIN_CLAIM_AMOUNT: u64 = 100;

const MS_PER_DAY: f64 = 86_400_000.0;

/// One staked NFT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakedNft {
    pub token_id: u64,
    /// Start of the current accrual window; reset on claim.
    pub staked_at: DateTime<Utc>,
    /// Contract-locked (hard) vs ownership-tracked (soft).
    pub hard_staked: bool,
    /// Lifetime points claimed from this NFT, before fees.
    pub claimed_rewards: u64,
}

impl StakedNft {
    pub fn new(token_id: u64, hard_staked: bool, now: DateTime<Utc>) -> Self {
        Self {
            token_id,
            staked_at: now,
            hard_staked,
            claimed_rewards: 0,
        }
    }

    /// The daily rate this NFT accrues at.
    pub fn rate(&self) -> u64 {
        if self.hard_staked {
            HARD_STAKE_RATE
        } else {
            SOFT_STAKE_RATE
        }
    }
}

/// Points accrued since `staked_at` at `rate` points per day:
/// `floor(days_elapsed * rate)`. A `now` before `staked_at` (clock skew)
/// accrues zero rather than going negative.
pub fn accrue(staked_at: DateTime<Utc>, rate: u64, now: DateTime<Utc>) -> u64 {
    let elapsed_ms = (now - staked_at).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0;
    }
    (elapsed_ms as f64 / MS_PER_DAY * rate as f64).floor() as u64
}

/// Points accrued by one NFT at `now`.
pub fn accrued_rewards(nft: &StakedNft, now: DateTime<Utc>) -> u64 {
    accrue(nft.staked_at, nft.rate(), now)
}

/// Total points accrued across `nfts` at `now`.
pub fn total_accrued(nfts: &[StakedNft], now: DateTime<Utc>) -> u64 {
    nfts.iter().map(|nft| accrued_rewards(nft, now)).sum()
}

/// Fee withheld from a claim of `amount` points.
pub fn claim_fee(amount: u64) -> u64 {
    (amount as f64 * (CLAIM_FEE_PERCENT / 100.0)).floor() as u64
}

/// Why a claim was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimError {
    /// Accrued total is below the minimum claim amount.
    BelowMinimum { accrued: u64, minimum: u64 },
}

impl std::fmt::Display for ClaimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimError::BelowMinimum { accrued, minimum } => {
                write!(f, "accrued {accrued} points, minimum claim is {minimum}")
            }
        }
    }
}

impl std::error::Error for ClaimError {}

/// Result of a successful claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Points accrued across all NFTs at claim time.
    pub gross: u64,
    pub fee: u64,
    /// Points actually credited: `gross - fee`.
    pub net: u64,
}

/// Claims all accrued rewards at `now`, resetting every accrual window.
/// Rejects the claim (leaving windows untouched) if the total is below
/// `MIN_CLAIM_AMOUNT`.
pub fn claim(nfts: &mut [StakedNft], now: DateTime<Utc>) -> Result<ClaimOutcome, ClaimError> {
    let gross = total_accrued(nfts, now);
    if gross < MIN_CLAIM_AMOUNT {
        return Err(ClaimError::BelowMinimum {
            accrued: gross,
            minimum: MIN_CLAIM_AMOUNT,
        });
    }

    for nft in nfts.iter_mut() {
        nft.claimed_rewards += accrued_rewards(nft, now);
        nft.staked_at = now;
    }

    let fee = claim_fee(gross);
    Ok(ClaimOutcome {
        gross,
        fee,
        net: gross - fee,
    })
}

/// An NFT collection whose holdings boost staking rewards.
#[derive(Debug, Clone)]
pub struct MultiplierCollection {
    pub id: &'static str,
    pub name: &'static str,
    /// Tokens of this collection that must be held.
    pub required_amount: u32,
    pub multiplier: f64,
}

/// Collections that grant reward multipliers.
pub fn multiplier_collections() -> Vec<MultiplierCollection> {
    vec![
        MultiplierCollection {
            id: "flingers",
            name: "Flingers Collection",
            required_amount: 1,
            multiplier: 1.5,
        },
        MultiplierCollection {
            id: "special",
            name: "Special Collection",
            required_amount: 5,
            multiplier: 2.0,
        },
        MultiplierCollection {
            id: "rare",
            name: "Rare Collection",
            required_amount: 3,
            multiplier: 2.5,
        },
    ]
}

/// The highest multiplier active for the given holdings (collection id
/// to owned-token count). Defaults to 1.0 when none qualifies.
pub fn active_multiplier(holdings: &HashMap<String, u32>) -> f64 {
    multiplier_collections()
        .iter()
        .filter(|c| holdings.get(c.id).copied().unwrap_or(0) >= c.required_amount)
        .map(|c| c.multiplier)
        .fold(1.0, f64::max)
}

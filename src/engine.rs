//! Weighted card draws with a 5★ rate-up coin flip.
//!
//! Every draw is independent: no pity counter, no deduplication, no
//! guaranteed rarity per batch. Point accounting lives in [`crate::session`].

use crate::card::Card;
use crate::pool::{Pool, Tier};
use crate::random::{RandomSource, pick};

/// Probability of landing in the 5★ band.
pub const P5: f64 = 0.035;
/// Probability of landing in the 4★ band.
pub const P4: f64 = 0.15;
/// Chance that a 5★ draw resolves to a rate-up card when any are featured.
pub const RATE_UP_SHARE: f64 = 0.5;

/// Outcome of a single draw, tagged by how the card was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw<'a> {
    /// Won the rate-up coin flip.
    RateUp(&'a Card),
    /// Card came from the band's own tier.
    Hit { tier: Tier, card: &'a Card },
    /// Band's tier was empty; card came from the next source in the chain.
    Fallback { tier: Tier, card: &'a Card },
    /// Nothing eligible for this band.
    Miss { tier: Tier },
}

impl<'a> Draw<'a> {
    pub fn card(&self) -> Option<&'a Card> {
        match *self {
            Draw::RateUp(card)
            | Draw::Hit { card, .. }
            | Draw::Fallback { card, .. } => Some(card),
            Draw::Miss { .. } => None,
        }
    }

    /// The probability band the roll landed in.
    pub fn tier(&self) -> Tier {
        match *self {
            Draw::RateUp(_) => Tier::Five,
            Draw::Hit { tier, .. } | Draw::Fallback { tier, .. } | Draw::Miss { tier } => tier,
        }
    }
}

/// Draw once. Random values are consumed in order: band roll, rate-up flip
/// (5★ band with featured cards only), then the index pick.
pub fn draw<'a, S>(pool: &'a Pool, rate_up: &'a [Card], source: &mut S) -> Draw<'a>
where
    S: RandomSource + ?Sized,
{
    let roll = source.next_unit();

    if roll < P5 {
        if !rate_up.is_empty() && source.next_unit() < RATE_UP_SHARE {
            if let Some(card) = pick(source, rate_up) {
                return Draw::RateUp(card);
            }
        }
        if let Some(card) = pick(source, &pool.tier5) {
            return Draw::Hit {
                tier: Tier::Five,
                card,
            };
        }
        return match pick(source, rate_up) {
            Some(card) => Draw::Fallback {
                tier: Tier::Five,
                card,
            },
            None => Draw::Miss { tier: Tier::Five },
        };
    }

    if roll < P5 + P4 {
        if let Some(card) = pick(source, &pool.tier4) {
            return Draw::Hit {
                tier: Tier::Four,
                card,
            };
        }
        return match pick(source, &pool.tier3_or_below) {
            Some(card) => Draw::Fallback {
                tier: Tier::Four,
                card,
            },
            None => Draw::Miss { tier: Tier::Four },
        };
    }

    match pick(source, &pool.tier3_or_below) {
        Some(card) => Draw::Hit {
            tier: Tier::ThreeOrBelow,
            card,
        },
        None => {
            tracing::debug!("base pool is empty");
            Draw::Miss {
                tier: Tier::ThreeOrBelow,
            }
        }
    }
}

pub fn draw_one<'a, S>(pool: &'a Pool, rate_up: &'a [Card], source: &mut S) -> Option<&'a Card>
where
    S: RandomSource + ?Sized,
{
    draw(pool, rate_up, source).card()
}

/// Draw `count` times in pull order. Misses are dropped, so the result may
/// be shorter than `count`.
pub fn draw_batch<'a, S>(
    pool: &'a Pool,
    rate_up: &'a [Card],
    count: usize,
    source: &mut S,
) -> Vec<&'a Card>
where
    S: RandomSource + ?Sized,
{
    let mut cards = Vec::with_capacity(count);
    let mut base_misses = 0usize;
    for _ in 0..count {
        match draw(pool, rate_up, source) {
            Draw::Miss {
                tier: Tier::ThreeOrBelow,
            } => base_misses += 1,
            outcome => cards.extend(outcome.card()),
        }
    }
    if base_misses > 0 {
        tracing::warn!(
            requested = count,
            base_misses,
            "base pool is empty, banner data is incomplete"
        );
    }
    if cards.len() < count {
        tracing::debug!(
            requested = count,
            produced = cards.len(),
            "degraded batch"
        );
    }
    cards
}

use crate::card::Card;
use crate::pool::Tier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierTally {
    pub tier5: usize,
    pub tier4: usize,
    pub tier3_or_below: usize,
    pub rate_up: usize,
}

impl TierTally {
    pub fn from_cards(cards: &[Card], rate_up: &[Card]) -> Self {
        let mut tally = TierTally::default();
        for card in cards {
            match Tier::of(card.rarity_tier) {
                Some(Tier::Five) => tally.tier5 += 1,
                Some(Tier::Four) => tally.tier4 += 1,
                Some(Tier::ThreeOrBelow) => tally.tier3_or_below += 1,
                None => continue,
            }
            if card.is_rate_up(rate_up) {
                tally.rate_up += 1;
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.tier5 + self.tier4 + self.tier3_or_below
    }

    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Five => self.tier5,
            Tier::Four => self.tier4,
            Tier::ThreeOrBelow => self.tier3_or_below,
        }
    }

    /// Fraction of all tallied cards in `tier`; 0 when nothing was tallied.
    pub fn rate(&self, tier: Tier) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(tier) as f64 / total as f64,
        }
    }
}

pub fn format_pull_line(card: &Card, rate_up: &[Card]) -> String {
    let stars = "★".repeat(card.rarity_tier as usize);
    let mut line = format!("{:<6} {:<8}", stars, card.unique_id);
    if let Some(name) = &card.name {
        line.push(' ');
        line.push_str(name);
    }
    if card.is_rate_up(rate_up) {
        line.push_str("  [RATE UP]");
    }
    line
}

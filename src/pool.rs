use crate::card::Card;
use crate::error::{GachaError, Result};

/// Draw tier a card belongs to. Rarities 1 to 3 share the bottom tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Five,
    Four,
    ThreeOrBelow,
}

impl Tier {
    pub fn of(rarity: u8) -> Option<Tier> {
        match rarity {
            5 => Some(Tier::Five),
            4 => Some(Tier::Four),
            1..=3 => Some(Tier::ThreeOrBelow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Five => "5★",
            Tier::Four => "4★",
            Tier::ThreeOrBelow => "≤3★",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pool {
    pub tier5: Vec<Card>,
    pub tier4: Vec<Card>,
    pub tier3_or_below: Vec<Card>,
    /// Cards whose rarity is outside 1..=5. Never drawn.
    pub rejected: Vec<Card>,
}

impl Pool {
    /// Split a flat card list by rarity, keeping input order within each tier.
    pub fn partition(cards: Vec<Card>) -> Pool {
        let mut pool = Pool::default();
        for card in cards {
            match Tier::of(card.rarity_tier) {
                Some(Tier::Five) => pool.tier5.push(card),
                Some(Tier::Four) => pool.tier4.push(card),
                Some(Tier::ThreeOrBelow) => pool.tier3_or_below.push(card),
                None => {
                    tracing::warn!(
                        id = %card.unique_id,
                        rarity = card.rarity_tier,
                        "rejecting card with invalid rarity tier"
                    );
                    pool.rejected.push(card);
                }
            }
        }
        pool
    }

    pub fn tier(&self, tier: Tier) -> &[Card] {
        match tier {
            Tier::Five => &self.tier5,
            Tier::Four => &self.tier4,
            Tier::ThreeOrBelow => &self.tier3_or_below,
        }
    }

    /// Number of drawable cards.
    pub fn len(&self) -> usize {
        self.tier5.len() + self.tier4.len() + self.tier3_or_below.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails when no draw could ever produce a card: no drawable tier and
    /// no rate-up cards to fall back on.
    pub fn ensure_drawable(&self, rate_up: &[Card], banner: &str) -> Result<()> {
        if self.is_empty() && rate_up.is_empty() {
            return Err(GachaError::EmptyPool(banner.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.unique_id.as_str()).collect()
    }

    #[test]
    fn test_partition_is_total() {
        let cards: Vec<Card> = (0..50)
            .map(|i| Card::new(&format!("c{i}"), (i % 5 + 1) as u8))
            .collect();
        let pool = Pool::partition(cards.clone());
        assert_eq!(
            pool.tier5.len() + pool.tier4.len() + pool.tier3_or_below.len(),
            cards.len()
        );
        assert!(pool.rejected.is_empty());
        for card in &cards {
            let hits = [&pool.tier5, &pool.tier4, &pool.tier3_or_below]
                .iter()
                .filter(|t| t.contains(card))
                .count();
            assert_eq!(hits, 1, "card {} must land in exactly one tier", card.unique_id);
        }
    }

    #[test]
    fn test_partition_keeps_input_order() {
        let pool = Pool::partition(vec![
            Card::new("a", 3),
            Card::new("b", 5),
            Card::new("c", 1),
            Card::new("d", 4),
            Card::new("e", 2),
            Card::new("f", 5),
        ]);
        assert_eq!(ids(&pool.tier5), ["b", "f"]);
        assert_eq!(ids(&pool.tier4), ["d"]);
        assert_eq!(ids(&pool.tier3_or_below), ["a", "c", "e"]);
    }

    #[test]
    fn test_invalid_rarity_is_rejected_not_dropped() {
        let pool = Pool::partition(vec![
            Card::new("ok", 4),
            Card::new("zero", 0),
            Card::new("six", 6),
        ]);
        assert_eq!(pool.len(), 1);
        assert_eq!(ids(&pool.rejected), ["zero", "six"]);
    }

    #[test]
    fn test_empty_pool_is_not_drawable() {
        let err = Pool::default().ensure_drawable(&[], "Empty").unwrap_err();
        assert!(matches!(err, GachaError::EmptyPool(ref name) if name == "Empty"));
    }

    #[test]
    fn test_fully_rejected_pool_is_not_drawable() {
        let cards = vec![Card::new("nine", 9), Card::new("zero", 0)];
        let pool = Pool::partition(cards);
        assert_eq!(pool.rejected.len(), 2);
        let err = pool.ensure_drawable(&[], "Broken").unwrap_err();
        assert!(matches!(err, GachaError::EmptyPool(_)));
    }

    #[test]
    fn test_rate_up_only_pool_is_drawable() {
        let featured = vec![Card::new("R", 5)];
        assert!(Pool::default().ensure_drawable(&featured, "New").is_ok());
        let pool = Pool::partition(vec![Card::new("C", 3)]);
        assert!(pool.ensure_drawable(&[], "Base").is_ok());
    }

    #[test]
    fn test_tier_lookup() {
        let pool = Pool::partition(vec![Card::new("a", 5), Card::new("b", 2)]);
        assert_eq!(ids(pool.tier(Tier::Five)), ["a"]);
        assert!(pool.tier(Tier::Four).is_empty());
        assert_eq!(ids(pool.tier(Tier::ThreeOrBelow)), ["b"]);
    }

    #[test]
    fn test_tier_of() {
        assert_eq!(Tier::of(5), Some(Tier::Five));
        assert_eq!(Tier::of(4), Some(Tier::Four));
        assert_eq!(Tier::of(1), Some(Tier::ThreeOrBelow));
        assert_eq!(Tier::of(0), None);
        assert_eq!(Tier::of(7), None);
    }
}

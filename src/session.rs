use crate::card::{BannerInfo, Card};
use crate::engine::draw_batch;
use crate::error::{GachaError, Result};
use crate::pool::Pool;
use crate::random::RandomSource;

/// Per-banner pull state. Lives as long as the banner is open; never persisted.
#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    pub cumulative_points: u32,
    pub exchange_limit: u32,
    pub last_draw_results: Vec<Card>,
    /// All results so far, newest batch first.
    pub history: Vec<Card>,
}

impl DrawSession {
    pub fn new(exchange_limit: u32) -> Self {
        Self {
            exchange_limit,
            ..Self::default()
        }
    }

    pub fn for_banner(banner: &BannerInfo) -> Self {
        Self::new(banner.exchange_limit)
    }

    /// Adds one point per requested draw, including dropped misses.
    pub fn record_batch(&mut self, count: usize, cards: Vec<Card>) {
        let gained = u32::try_from(count).unwrap_or(u32::MAX);
        self.cumulative_points = self.cumulative_points.saturating_add(gained);
        let mut history = cards.clone();
        history.append(&mut self.history);
        self.history = history;
        self.last_draw_results = cards;
    }

    pub fn can_exchange(&self) -> bool {
        self.exchange_limit > 0 && self.cumulative_points >= self.exchange_limit
    }

    /// Spend `exchange_limit` points. Returns the remaining balance.
    pub fn redeem_exchange(&mut self) -> Result<u32> {
        if !self.can_exchange() {
            return Err(GachaError::InvalidState {
                points: self.cumulative_points,
                limit: self.exchange_limit,
            });
        }
        self.cumulative_points -= self.exchange_limit;
        tracing::info!(remaining = self.cumulative_points, "exchange redeemed");
        Ok(self.cumulative_points)
    }

    /// Draw a batch and record it.
    pub fn pull<S: RandomSource + ?Sized>(
        &mut self,
        pool: &Pool,
        rate_up: &[Card],
        count: usize,
        source: &mut S,
    ) -> &[Card] {
        let cards: Vec<Card> = draw_batch(pool, rate_up, count, source)
            .into_iter()
            .cloned()
            .collect();
        self.record_batch(count, cards);
        &self.last_draw_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.unique_id.as_str()).collect()
    }

    #[test]
    fn test_exchange_accounting() {
        let mut session = DrawSession::new(200);
        session.cumulative_points = 200;
        assert!(session.can_exchange());
        assert_eq!(session.redeem_exchange().unwrap(), 0);
        assert_eq!(session.cumulative_points, 0);

        let err = session.redeem_exchange().unwrap_err();
        assert!(matches!(
            err,
            GachaError::InvalidState {
                points: 0,
                limit: 200
            }
        ));
        assert_eq!(session.cumulative_points, 0);
    }

    #[test]
    fn test_exchange_keeps_surplus() {
        let mut session = DrawSession::new(200);
        session.cumulative_points = 450;
        assert_eq!(session.redeem_exchange().unwrap(), 250);
        assert_eq!(session.redeem_exchange().unwrap(), 50);
        assert!(!session.can_exchange());
    }

    #[test]
    fn test_zero_limit_has_no_exchange() {
        let mut session = DrawSession::new(0);
        session.record_batch(10, Vec::new());
        assert!(!session.can_exchange());
        assert!(session.redeem_exchange().is_err());
    }

    #[test]
    fn test_record_batch_replaces_last_and_prepends_history() {
        let mut session = DrawSession::new(200);
        session.record_batch(2, vec![Card::new("a", 3), Card::new("b", 4)]);
        session.record_batch(2, vec![Card::new("c", 5), Card::new("d", 3)]);
        assert_eq!(session.cumulative_points, 4);
        assert_eq!(ids(&session.last_draw_results), ["c", "d"]);
        assert_eq!(ids(&session.history), ["c", "d", "a", "b"]);
    }

    #[test]
    fn test_points_count_requested_draws() {
        let pool = Pool::partition(vec![Card::new("only4", 4)]);
        let mut session = DrawSession::new(200);
        // Every roll lands in the base band, which is empty here.
        let mut source = ScriptedSource::new(&[0.9]);
        let pulled = session.pull(&pool, &[], 10, &mut source).len();
        assert_eq!(pulled, 0);
        assert_eq!(session.cumulative_points, 10);
    }

    #[test]
    fn test_pull_records_batch() {
        let pool = Pool::partition(vec![
            Card::new("A", 5),
            Card::new("B", 4),
            Card::new("C", 3),
        ]);
        let banner = BannerInfo {
            id: 1,
            name: "Test".into(),
            exchange_limit: 10,
        };
        let mut session = DrawSession::for_banner(&banner);
        let mut source = ScriptedSource::new(&[0.9]);
        assert_eq!(ids(session.pull(&pool, &[], 10, &mut source)), ["C"; 10]);
        assert!(session.can_exchange());
        assert_eq!(session.history.len(), 10);
    }
}

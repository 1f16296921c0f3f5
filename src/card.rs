use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub unique_id: String,
    pub rarity_tier: u8,
    #[serde(default)]
    pub name: Option<String>,
}

impl Card {
    pub fn new(unique_id: &str, rarity_tier: u8) -> Self {
        Self {
            unique_id: unique_id.to_string(),
            rarity_tier,
            name: None,
        }
    }

    /// Rate-up status is derived from id membership, never stored.
    pub fn is_rate_up(&self, rate_up: &[Card]) -> bool {
        rate_up.iter().any(|c| c.unique_id == self.unique_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerInfo {
    pub id: u64,
    pub name: String,
    pub exchange_limit: u32,
}

// The provider payload has the following structure:
// {
//    "bannerInfo": { "id": 1, "name": "...", "exchangeLimit": 200 },
//    "rateUpCards": [ { "uniqueId": "...", "rarityTier": 5 }, ... ],
//    "pool": [ { "uniqueId": "...", "rarityTier": 3 }, ... ]
// }
// Display metadata other than "name" is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolResponse {
    pub banner_info: BannerInfo,
    #[serde(default)]
    pub rate_up_cards: Vec<Card>,
    pub pool: Vec<Card>,
}

impl PoolResponse {
    /// Featured cards that are not 5★. Rate-up only applies in the 5★ band.
    pub fn off_tier_rate_up(&self) -> Vec<&Card> {
        self.rate_up_cards
            .iter()
            .filter(|c| c.rarity_tier != 5)
            .collect()
    }
}

pub fn read_pool_response<R: Read>(reader: R) -> Result<PoolResponse> {
    let response: PoolResponse = serde_json::from_reader(reader)?;
    for card in response.off_tier_rate_up() {
        tracing::warn!(
            id = %card.unique_id,
            rarity = card.rarity_tier,
            "rate-up card is not 5★"
        );
    }
    tracing::debug!(
        banner = %response.banner_info.name,
        pool = response.pool.len(),
        rate_up = response.rate_up_cards.len(),
        "loaded pool response"
    );
    Ok(response)
}

pub fn read_pool_response_from_json(path: &str) -> Result<PoolResponse> {
    let file = File::open(path)?;
    read_pool_response(BufReader::new(file))
}

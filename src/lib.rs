//! Card banner pull simulator
//!
//! Partitions a banner's card pool by rarity, draws cards with fixed band
//! rates and a 5★ rate-up flip, and tracks exchange points per session.

pub mod card;
pub mod engine;
pub mod error;
pub mod pool;
pub mod random;
pub mod report;
pub mod session;

pub use card::{
    BannerInfo, Card, PoolResponse, read_pool_response, read_pool_response_from_json,
};
pub use engine::{Draw, draw, draw_batch, draw_one};
pub use error::{GachaError, Result};
pub use pool::{Pool, Tier};
pub use session::DrawSession;

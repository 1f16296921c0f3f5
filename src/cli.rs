//! Command-line options for the pull simulator

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gacha-sim")]
#[command(about = "Simulate pulls on a card banner")]
pub struct Cli {
    /// Banner pool file (bannerInfo, rateUpCards, pool)
    #[arg(short, long, env = "GACHA_POOL", default_value = "pool.json")]
    pub pool: String,

    /// Number of batches to pull
    #[arg(long, default_value_t = 1)]
    pub pulls: usize,

    /// Cards per batch
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// Seed for reproducible runs
    #[arg(long, env = "GACHA_SEED")]
    pub seed: Option<u64>,

    /// Redeem the exchange whenever enough points are banked
    #[arg(long)]
    pub exchange: bool,

    /// Print full pull history (newest first) at the end
    #[arg(long)]
    pub history: bool,
}

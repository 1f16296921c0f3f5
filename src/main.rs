use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;
use gacha_sim::random::{RandomSource, RngSource};
use gacha_sim::report::{TierTally, format_pull_line};
use gacha_sim::{DrawSession, Pool, Tier};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gacha_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // read the banner and its card pool from the provider payload
    let response = gacha_sim::read_pool_response_from_json(&cli.pool)
        .with_context(|| format!("Failed to load pool from {}", cli.pool))?;
    let banner = response.banner_info;
    let rate_up = response.rate_up_cards;
    let pool = Pool::partition(response.pool);

    pool.ensure_drawable(&rate_up, &banner.name)?;
    tracing::info!(
        banner = %banner.name,
        tier5 = pool.tier5.len(),
        tier4 = pool.tier4.len(),
        tier3_or_below = pool.tier3_or_below.len(),
        rate_up = rate_up.len(),
        rejected = pool.rejected.len(),
        "pool ready"
    );

    let mut source: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(RngSource(StdRng::seed_from_u64(seed))),
        None => Box::new(RngSource(rand::rng())),
    };

    let mut session = DrawSession::for_banner(&banner);
    println!("{} (exchange at {} pts)", banner.name, session.exchange_limit);

    for n in 1..=cli.pulls {
        let results = session.pull(&pool, &rate_up, cli.count, &mut *source);
        println!("\nPull {n}:");
        for card in results {
            println!("  {}", format_pull_line(card, &rate_up));
        }
        if results.len() < cli.count {
            let missed = cli.count - results.len();
            println!("  ({missed} of {} draws produced no card)", cli.count);
        }

        if cli.exchange && session.can_exchange() {
            let remaining = session.redeem_exchange()?;
            println!("  Exchange redeemed, {remaining} pts left");
        }
    }

    let tally = TierTally::from_cards(&session.history, &rate_up);
    println!("\n{:<5} {:>6} {:>8}", "Tier", "Count", "Rate");
    println!("{}", "-".repeat(21));
    for tier in [Tier::Five, Tier::Four, Tier::ThreeOrBelow] {
        println!(
            "{:<5} {:>6} {:>7.2}%",
            tier.label(),
            tally.count(tier),
            tally.rate(tier) * 100.0
        );
    }
    println!("Rate-up hits: {}", tally.rate_up);
    println!("Points: {}/{}", session.cumulative_points, session.exchange_limit);

    if cli.history {
        println!("\nHistory (newest first):");
        for card in &session.history {
            println!("  {}", format_pull_line(card, &rate_up));
        }
    }

    Ok(())
}

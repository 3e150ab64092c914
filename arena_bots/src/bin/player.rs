use anyhow::Context;
use arena_bots::random::RandomStrategy;
use arena_client::{Connection, Session, SessionConfig, Url};
use clap::Parser;
use rand::prelude::SeedableRng;
use tokio::sync::oneshot;
use tracing::info;

#[derive(Parser)]
#[command(about = "Territory Arena reference player")]
struct Args {
    /// Team/player display name.
    #[arg(long)]
    name: String,

    /// Entry key.
    #[arg(long, default_value = "arena")]
    entry: String,

    /// Arena server URL.
    #[arg(long, default_value = "https://territory-arena.fly.dev")]
    server: String,

    /// Strategy seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let base = Url::parse(&args.server)
        .with_context(|| format!("invalid server url: {}", args.server))?;
    let connection = Connection::new(base).context("failed to build http client")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding strategy");
    let strategy = RandomStrategy::new(rand_xoshiro::Xoshiro256StarStar::seed_from_u64(seed));

    let config = SessionConfig::new(args.name).with_entry_key(args.entry);
    let session = Session::new(connection, strategy, config);

    let (stop_tx, stop_rx) = oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = stop_tx.send(());
        }
    });

    session.run(stop_rx).await;
    Ok(())
}

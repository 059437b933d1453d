use std::time::Duration;

use anyhow::Result;
use tokio::sync::{mpsc, watch};

use ticklive::config::Config;
use ticklive::engine::Engine;
use ticklive::event::EngineEvent;
use ticklive::feed::types::FeedTick;
use ticklive::feed::ws::FeedClient;
use ticklive::params::StrategyParams;

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider (required by rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .init();

    tracing::info!(
        instrument = %config.feed.instrument,
        ws_url = %config.feed.ws_url,
        interval_secs = config.simulation.interval().as_secs(),
        "starting ticklive"
    );

    let params = StrategyParams::default();
    let (tick_tx, tick_rx) = mpsc::channel::<FeedTick>(256);
    let (out_tx, mut out_rx) = mpsc::channel::<EngineEvent>(256);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let engine = Engine::new(params, config.simulation.interval());
    let engine_handle = tokio::spawn(engine.run(tick_rx, out_tx.clone(), shutdown_rx.clone()));

    let client = FeedClient::new(&config.feed.ws_url, &config.feed.instrument);
    let feed_shutdown = shutdown_rx.clone();
    let feed_handle = tokio::spawn(async move {
        client.connect_and_run(tick_tx, out_tx, feed_shutdown).await;
    });

    // Surface engine output to whatever is watching the logs; a real
    // front end would consume the same channel.
    let report_handle = tokio::spawn(async move {
        let mut last_price = None;
        while let Some(event) = out_rx.recv().await {
            match event {
                EngineEvent::Connection(state) => {
                    tracing::info!(
                        status = state.status.label(),
                        retry = state.retry_count,
                        "connection state"
                    );
                }
                EngineEvent::LastPrice(price) => {
                    last_price = Some(price);
                    tracing::debug!(price, "tick");
                }
                EngineEvent::Simulation {
                    events,
                    cumulative_profit,
                } => {
                    tracing::info!(
                        trades = events.len(),
                        total_profit_pct = cumulative_profit.last().copied().unwrap_or(0.0),
                        last_price = last_price.unwrap_or(0.0),
                        "simulation pass"
                    );
                    for event in &events {
                        tracing::info!(
                            index = event.time_index,
                            kind = ?event.kind,
                            price = event.price,
                            reason = event.reason.as_deref().unwrap_or(""),
                            profit_pct = event.profit_pct.unwrap_or(0.0),
                            "trade event"
                        );
                    }
                }
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    let _ = shutdown_tx.send(true);

    // Give the tasks a moment to observe teardown, then let the
    // process exit either way.
    let _ = tokio::time::timeout(Duration::from_secs(5), async {
        let _ = feed_handle.await;
        let _ = engine_handle.await;
        let _ = report_handle.await;
    })
    .await;

    Ok(())
}

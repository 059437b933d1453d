use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite;

use super::types::{FeedTick, SubscribeRequest, TradeFrame};
use crate::error::AppError;
use crate::event::{ConnectionState, ConnectionStatus, EngineEvent};

/// Reconnect delay schedule: `min(30s, 1s * 2^retry_count)`, so
/// {1, 2, 4, 8, 16, 30, 30, ...}. Attempts are unbounded; only the
/// delay is capped.
#[derive(Debug)]
pub struct ReconnectBackoff {
    retry_count: u32,
    base: Duration,
    max: Duration,
}

impl ReconnectBackoff {
    pub fn new(base: Duration, max: Duration) -> Self {
        Self {
            retry_count: 0,
            base,
            max,
        }
    }

    /// Delay for the current retry count, then advance the count.
    pub fn next_delay(&mut self) -> Duration {
        let factor = 1u64 << self.retry_count.min(31);
        let delay = self
            .base
            .saturating_mul(factor.min(u32::MAX as u64) as u32)
            .min(self.max);
        self.retry_count = self.retry_count.saturating_add(1);
        delay
    }

    pub fn reset(&mut self) {
        self.retry_count = 0;
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }
}

impl Default for ReconnectBackoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(30))
    }
}

/// How a connected session ended.
enum SessionEnd {
    /// Teardown requested through the shutdown channel.
    Shutdown,
    /// The server closed the stream.
    ServerClosed,
}

pub struct FeedClient {
    url: String,
    instrument: String,
}

impl FeedClient {
    pub fn new(url: &str, instrument: &str) -> Self {
        Self {
            url: url.to_string(),
            instrument: instrument.to_string(),
        }
    }

    /// Run the ingestion loop until teardown: connect, subscribe, push
    /// ticks, and reconnect with capped exponential backoff on any
    /// transport failure. Teardown through `shutdown` cancels an
    /// in-flight backoff sleep, so a scheduled reconnect can never
    /// fire after the consumer has moved on.
    pub async fn connect_and_run(
        &self,
        tick_tx: mpsc::Sender<FeedTick>,
        event_tx: mpsc::Sender<EngineEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut backoff = ReconnectBackoff::default();

        if self.instrument.is_empty() {
            self.send_status(&event_tx, ConnectionStatus::Idle, 0).await;
            return;
        }

        loop {
            self.send_status(&event_tx, ConnectionStatus::Connecting, backoff.retry_count())
                .await;

            let end = match self.connect_once(&tick_tx, &event_tx, &mut backoff, &mut shutdown).await
            {
                Ok(SessionEnd::Shutdown) => {
                    tracing::info!("feed teardown requested");
                    self.send_status(&event_tx, ConnectionStatus::Idle, 0).await;
                    return;
                }
                Ok(SessionEnd::ServerClosed) => ConnectionStatus::Closed,
                Err(e) => {
                    tracing::warn!(error = %e, "feed transport failure");
                    ConnectionStatus::Error
                }
            };

            let delay = backoff.next_delay();
            self.send_status(&event_tx, end, backoff.retry_count()).await;
            tracing::info!(
                retry = backoff.retry_count(),
                delay_ms = delay.as_millis() as u64,
                "scheduling reconnect"
            );

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.changed() => {
                    tracing::info!("teardown during reconnect backoff");
                    self.send_status(&event_tx, ConnectionStatus::Idle, 0).await;
                    return;
                }
            }
        }
    }

    async fn connect_once(
        &self,
        tick_tx: &mpsc::Sender<FeedTick>,
        event_tx: &mpsc::Sender<EngineEvent>,
        backoff: &mut ReconnectBackoff,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<SessionEnd, AppError> {
        let (ws_stream, _resp) = tokio_tungstenite::connect_async(&self.url).await?;
        let (mut write, mut read) = ws_stream.split();

        // Connected: reset the retry count, then subscribe.
        backoff.reset();
        self.send_status(event_tx, ConnectionStatus::Connected, 0).await;
        let subscribe = serde_json::to_string(&SubscribeRequest::for_instrument(&self.instrument))?;
        write.send(tungstenite::Message::Text(subscribe)).await?;
        tracing::info!(instrument = %self.instrument, "subscribed to trade stream");

        loop {
            tokio::select! {
                msg = read.next() => {
                    match msg {
                        Some(Ok(tungstenite::Message::Text(text))) => {
                            match serde_json::from_str::<TradeFrame>(&text) {
                                Ok(frame) if frame.is_trade() => {
                                    let now_ms = chrono::Utc::now().timestamp_millis() as u64;
                                    let tick = FeedTick::from_frame(frame, now_ms);
                                    if tick_tx.try_send(tick).is_err() {
                                        tracing::warn!("tick channel full, dropping tick");
                                    }
                                }
                                Ok(_) => {
                                    // Non-trade message; not for us.
                                }
                                Err(e) => {
                                    tracing::debug!(error = %e, "ignoring malformed frame");
                                }
                            }
                        }
                        Some(Ok(tungstenite::Message::Ping(_))) => {
                            // Pong is handled by the library.
                        }
                        Some(Ok(tungstenite::Message::Close(_))) | None => {
                            return Ok(SessionEnd::ServerClosed);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            return Err(AppError::Transport(e));
                        }
                    }
                }
                _ = shutdown.changed() => {
                    return Ok(SessionEnd::Shutdown);
                }
            }
        }
    }

    async fn send_status(
        &self,
        event_tx: &mpsc::Sender<EngineEvent>,
        status: ConnectionStatus,
        retry_count: u32,
    ) {
        let _ = event_tx
            .send(EngineEvent::Connection(ConnectionState {
                status,
                retry_count,
            }))
            .await;
    }
}

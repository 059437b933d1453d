use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::event::EngineEvent;
use crate::feed::types::FeedTick;
use crate::model::buffer::SampleBuffer;
use crate::model::trade_event::cumulative_profit;
use crate::params::StrategyParams;
use crate::sim::replay::run_simulation;

/// Single owner of the sample buffer. Ticks arrive on one channel, a
/// periodic timer drives simulation passes, and results go out as
/// `EngineEvent`s.
///
/// Running everything on one task is the re-entrancy guard: a pass
/// runs to completion over a snapshot taken at its start before the
/// next timer tick or inbound tick is observed, so no two passes
/// overlap and no partial tick leaks into a pass.
pub struct Engine {
    buffer: SampleBuffer,
    params: StrategyParams,
    sim_interval: Duration,
}

impl Engine {
    pub fn new(params: StrategyParams, sim_interval: Duration) -> Self {
        Self {
            buffer: SampleBuffer::new(params.buffer_capacity),
            params,
            sim_interval,
        }
    }

    pub async fn run(
        mut self,
        mut tick_rx: mpsc::Receiver<FeedTick>,
        out_tx: mpsc::Sender<EngineEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut timer = tokio::time::interval(self.sim_interval);
        timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                tick = tick_rx.recv() => {
                    match tick {
                        Some(tick) => {
                            self.buffer.push(tick.price, tick.volume, tick.timestamp_ms);
                            let _ = out_tx.send(EngineEvent::LastPrice(tick.price)).await;
                        }
                        None => {
                            tracing::info!("tick channel closed, stopping engine");
                            return;
                        }
                    }
                }
                _ = timer.tick() => {
                    if let Some(event) = self.run_pass() {
                        let _ = out_tx.send(event).await;
                    }
                }
                _ = shutdown.changed() => {
                    tracing::info!("engine teardown requested");
                    return;
                }
            }
        }
    }

    /// One simulation pass over a snapshot of the current buffer.
    /// Skipped until the warm-up threshold is met.
    fn run_pass(&self) -> Option<EngineEvent> {
        if self.buffer.len() < self.params.min_samples_for_sim {
            tracing::debug!(
                buffered = self.buffer.len(),
                needed = self.params.min_samples_for_sim,
                "skipping simulation pass, not enough samples"
            );
            return None;
        }
        let (prices, volumes) = self.buffer.snapshot();
        let report = run_simulation(&prices, &volumes, &self.params);
        let profit = cumulative_profit(&report.events);
        tracing::debug!(
            samples = prices.len(),
            events = report.events.len(),
            open = report.open_position.is_some(),
            "simulation pass complete"
        );
        Some(EngineEvent::Simulation {
            events: report.events,
            cumulative_profit: profit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_tick(price: f64) -> FeedTick {
        FeedTick {
            price,
            volume: 1.0,
            timestamp_ms: 0,
        }
    }

    #[tokio::test]
    async fn ticks_update_last_price_and_buffer() {
        let params = StrategyParams::default();
        let engine = Engine::new(params, Duration::from_secs(3600));
        let (tick_tx, tick_rx) = mpsc::channel(16);
        let (out_tx, mut out_rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(engine.run(tick_rx, out_tx, shutdown_rx));

        tick_tx.send(feed_tick(101.5)).await.unwrap();
        match out_rx.recv().await.unwrap() {
            EngineEvent::LastPrice(p) => assert_eq!(p, 101.5),
            other => panic!("unexpected event: {other:?}"),
        }

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn pass_skipped_below_warmup_threshold() {
        let params = StrategyParams::default();
        let mut engine = Engine::new(params, Duration::from_secs(3600));
        for i in 0..(params.min_samples_for_sim - 1) {
            engine.buffer.push(100.0, 1.0, i as u64);
        }
        assert!(engine.run_pass().is_none());

        engine.buffer.push(100.0, 1.0, 99);
        assert!(engine.run_pass().is_some());
    }
}

use crate::indicator::IndicatorSnapshot;
use crate::model::trade_event::TradeEvent;
use crate::params::StrategyParams;
use crate::signal;
use crate::sim::position::{PositionState, PositionTracker};

/// Result of one full simulation pass over a buffer snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub events: Vec<TradeEvent>,
    /// Position still open when the buffer ended, if any. Unrealized
    /// and absent from the event log on purpose.
    pub open_position: Option<OpenPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenPosition {
    pub entry_price: f64,
    pub entry_index: usize,
}

/// Replay the buffered series prefix-by-prefix and rebuild the event
/// log from scratch. Idempotent: the same snapshot always produces the
/// same log, so a pass can be re-run over current buffer contents at
/// any time without carrying state between runs.
///
/// Indicators are batch-recomputed per index. Quadratic over the
/// replayed window, which is fine at the capped buffer size; an
/// incremental variant must match these batch definitions exactly.
pub fn run_simulation(
    prices: &[f64],
    volumes: &[f64],
    params: &StrategyParams,
) -> SimulationReport {
    debug_assert_eq!(prices.len(), volumes.len());
    let mut tracker = PositionTracker::new(*params);
    let mut events = Vec::new();

    for i in 0..prices.len() {
        let prefix_prices = &prices[..=i];
        let prefix_volumes = &volumes[..=i];
        let price = prices[i];

        if tracker.is_holding() {
            if let Some((sell, _trigger)) = tracker.check_exit(i, price) {
                events.push(sell);
            }
        } else {
            let snapshot = IndicatorSnapshot::compute(prefix_prices, prefix_volumes, params);
            let reasons = signal::buy_reasons(&snapshot, price, params);
            if signal::is_buy(&reasons) {
                if let Some(buy) = tracker.on_buy_signal(i, price, &reasons) {
                    events.push(buy);
                }
            }
        }
    }

    let open_position = match tracker.state() {
        PositionState::Holding {
            entry_price,
            entry_index,
        } => Some(OpenPosition {
            entry_price,
            entry_index,
        }),
        PositionState::Flat => None,
    };

    SimulationReport {
        events,
        open_position,
    }
}

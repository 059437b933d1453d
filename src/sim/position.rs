use crate::model::trade_event::TradeEvent;
use crate::params::StrategyParams;
use crate::sim::pnl::net_profit_pct;

/// Why a holding was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    TakeProfit,
    StopLoss,
    MaxHoldTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionState {
    Flat,
    Holding {
        entry_price: f64,
        entry_index: usize,
    },
}

/// Flat/Holding state machine. At most one open position at a time;
/// BUY signals while holding are ignored. An open position at the end
/// of a replay is left unrealized, never force-closed.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    state: PositionState,
    params: StrategyParams,
}

impl PositionTracker {
    pub fn new(params: StrategyParams) -> Self {
        Self {
            state: PositionState::Flat,
            params,
        }
    }

    pub fn state(&self) -> PositionState {
        self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, PositionState::Holding { .. })
    }

    /// Open a position if flat. Emits the BUY event with the joined
    /// reason labels; returns None while holding.
    pub fn on_buy_signal(
        &mut self,
        index: usize,
        price: f64,
        reasons: &[&'static str],
    ) -> Option<TradeEvent> {
        if self.is_holding() {
            return None;
        }
        self.state = PositionState::Holding {
            entry_price: price,
            entry_index: index,
        };
        Some(TradeEvent::buy(index, price, reasons.join(", ")))
    }

    /// Evaluate exit conditions at `index`. Only meaningful strictly
    /// after the entry index; closes on take-profit, stop-loss, or the
    /// hold-time limit, whichever is observed first.
    pub fn check_exit(&mut self, index: usize, price: f64) -> Option<(TradeEvent, ExitTrigger)> {
        let PositionState::Holding {
            entry_price,
            entry_index,
        } = self.state
        else {
            return None;
        };
        if index <= entry_index {
            return None;
        }
        let net = net_profit_pct(entry_price, price, &self.params);
        let trigger = if net >= self.params.take_profit_pct {
            ExitTrigger::TakeProfit
        } else if net <= self.params.stop_loss_pct {
            ExitTrigger::StopLoss
        } else if index - entry_index >= self.params.max_hold_ticks {
            ExitTrigger::MaxHoldTime
        } else {
            return None;
        };
        self.state = PositionState::Flat;
        Some((TradeEvent::sell(index, price, net), trigger))
    }
}

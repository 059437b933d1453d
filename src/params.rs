/// Strategy constants shared by the indicator engine, the signal
/// aggregator, and the position state machine.
///
/// These are deliberately not runtime-configurable: the simulation's
/// output is only reproducible if every run uses the same arithmetic.
/// The struct exists (rather than module-level consts) so the replay
/// engine receives one immutable value at construction and several
/// instruments could in principle run side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyParams {
    pub rsi_period: usize,
    pub rsi_buy_threshold: f64,
    pub sma_short_period: usize,
    pub sma_long_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// Net-profit percentage at or above which a position is closed.
    pub take_profit_pct: f64,
    /// Net-profit percentage at or below which a position is closed.
    pub stop_loss_pct: f64,
    /// Applied only to positive post-commission gross returns.
    pub tax_rate: f64,
    /// Per-leg commission; a round trip pays it twice.
    pub commission_rate: f64,
    /// Maximum number of samples a position may be held.
    pub max_hold_ticks: usize,
    pub buffer_capacity: usize,
    /// A simulation pass only runs once this many samples are buffered.
    pub min_samples_for_sim: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_buy_threshold: 30.0,
            sma_short_period: 5,
            sma_long_period: 20,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            take_profit_pct: 0.7,
            stop_loss_pct: -0.5,
            tax_rate: 0.22,
            commission_rate: 0.0023,
            max_hold_ticks: 90,
            buffer_capacity: 100,
            min_samples_for_sim: 20,
        }
    }
}

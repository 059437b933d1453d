pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod vwap;

use crate::params::StrategyParams;

/// Indicator values at one buffer index. Each field is absent until
/// enough history exists; insufficient history is never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorSnapshot {
    pub rsi: Option<f64>,
    pub sma_short: Option<f64>,
    pub sma_long: Option<f64>,
    pub vwap: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
}

impl IndicatorSnapshot {
    /// Batch-recompute every indicator over the prefix `prices[..=i]`
    /// (the caller passes the prefix slices directly).
    pub fn compute(prices: &[f64], volumes: &[f64], params: &StrategyParams) -> Self {
        let (macd, macd_signal) = match macd::macd(
            prices,
            params.macd_fast,
            params.macd_slow,
            params.macd_signal,
        ) {
            Some((line, signal)) => (Some(line), Some(signal)),
            None => (None, None),
        };
        Self {
            rsi: rsi::rsi(prices, params.rsi_period),
            sma_short: sma::sma(prices, params.sma_short_period),
            sma_long: sma::sma(prices, params.sma_long_period),
            vwap: vwap::vwap(prices, volumes),
            macd,
            macd_signal,
        }
    }
}

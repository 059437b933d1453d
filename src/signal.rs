use crate::indicator::IndicatorSnapshot;
use crate::params::StrategyParams;

pub const REASON_RSI: &str = "RSI<30";
pub const REASON_VWAP: &str = "VWAP breakout";
pub const REASON_GOLDEN_CROSS: &str = "golden cross";
pub const REASON_MACD: &str = "MACD bullish crossover";

/// Number of reasons that must agree before a BUY fires.
const REQUIRED_REASONS: usize = 4;

/// Ordered trigger reasons at one index. An absent indicator simply
/// contributes no reason, so thin history suppresses signals instead
/// of failing. Pure function of its inputs; holds no state.
pub fn buy_reasons(
    snapshot: &IndicatorSnapshot,
    price: f64,
    params: &StrategyParams,
) -> Vec<&'static str> {
    let mut reasons = Vec::with_capacity(REQUIRED_REASONS);
    if let Some(rsi) = snapshot.rsi {
        if rsi < params.rsi_buy_threshold {
            reasons.push(REASON_RSI);
        }
    }
    if let Some(vwap) = snapshot.vwap {
        if price > vwap {
            reasons.push(REASON_VWAP);
        }
    }
    if let (Some(short), Some(long)) = (snapshot.sma_short, snapshot.sma_long) {
        if short > long {
            reasons.push(REASON_GOLDEN_CROSS);
        }
    }
    if let (Some(line), Some(signal)) = (snapshot.macd, snapshot.macd_signal) {
        if line > signal {
            reasons.push(REASON_MACD);
        }
    }
    reasons
}

/// All four indicators must agree; partial agreement is no signal.
pub fn is_buy(reasons: &[&'static str]) -> bool {
    reasons.len() == REQUIRED_REASONS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            rsi: Some(25.0),
            sma_short: Some(102.0),
            sma_long: Some(101.0),
            vwap: Some(99.0),
            macd: Some(0.5),
            macd_signal: Some(0.2),
        }
    }

    #[test]
    fn all_four_reasons_fire_a_buy() {
        let params = StrategyParams::default();
        let reasons = buy_reasons(&full_snapshot(), 100.0, &params);
        assert_eq!(
            reasons,
            vec![REASON_RSI, REASON_VWAP, REASON_GOLDEN_CROSS, REASON_MACD]
        );
        assert!(is_buy(&reasons));
    }

    #[test]
    fn partial_agreement_is_no_signal() {
        let params = StrategyParams::default();
        let mut snapshot = full_snapshot();
        snapshot.rsi = Some(55.0);
        let reasons = buy_reasons(&snapshot, 100.0, &params);
        assert_eq!(reasons.len(), 3);
        assert!(!is_buy(&reasons));
    }

    #[test]
    fn absent_indicator_suppresses_signal() {
        let params = StrategyParams::default();
        let mut snapshot = full_snapshot();
        snapshot.macd = None;
        snapshot.macd_signal = None;
        let reasons = buy_reasons(&snapshot, 100.0, &params);
        assert!(!is_buy(&reasons));
    }

    #[test]
    fn rsi_at_threshold_does_not_count() {
        let params = StrategyParams::default();
        let mut snapshot = full_snapshot();
        snapshot.rsi = Some(30.0);
        let reasons = buy_reasons(&snapshot, 100.0, &params);
        assert!(!reasons.contains(&REASON_RSI));
    }
}

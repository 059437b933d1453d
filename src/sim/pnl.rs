use crate::params::StrategyParams;

/// Net percentage return for a round trip.
///
/// The order is a fixed contract: round-trip commission comes off the
/// gross return first, and tax applies only when the post-commission
/// gross is positive. Reordering these steps changes results.
pub fn net_profit_pct(entry: f64, exit: f64, params: &StrategyParams) -> f64 {
    let mut gross = (exit - entry) / entry;
    gross -= params.commission_rate * 2.0;
    if gross > 0.0 {
        gross *= 1.0 - params.tax_rate;
    }
    gross * 100.0
}

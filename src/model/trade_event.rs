use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeKind {
    Buy,
    Sell,
}

/// One simulated fill in the event log. BUY events carry the joined
/// trigger reasons; SELL events carry the realized net profit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeEvent {
    /// Index into the buffer snapshot the simulation pass ran over.
    pub time_index: usize,
    pub kind: TradeKind,
    pub price: f64,
    pub reason: Option<String>,
    pub profit_pct: Option<f64>,
}

impl TradeEvent {
    pub fn buy(time_index: usize, price: f64, reason: String) -> Self {
        Self {
            time_index,
            kind: TradeKind::Buy,
            price,
            reason: Some(reason),
            profit_pct: None,
        }
    }

    pub fn sell(time_index: usize, price: f64, profit_pct: f64) -> Self {
        Self {
            time_index,
            kind: TradeKind::Sell,
            price,
            reason: None,
            profit_pct: Some(profit_pct),
        }
    }
}

/// Running sum over SELL events' net profit, in log order. One output
/// point per SELL; BUY events contribute nothing.
pub fn cumulative_profit(events: &[TradeEvent]) -> Vec<f64> {
    let mut total = 0.0;
    let mut series = Vec::new();
    for event in events {
        if let Some(pct) = event.profit_pct {
            total += pct;
            series.push(total);
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_profit_sums_sells_in_order() {
        let events = vec![
            TradeEvent::buy(3, 100.0, "x".to_string()),
            TradeEvent::sell(10, 101.0, 0.5),
            TradeEvent::buy(20, 100.0, "y".to_string()),
            TradeEvent::sell(25, 99.0, -1.06),
        ];
        let series = cumulative_profit(&events);
        assert_eq!(series.len(), 2);
        assert!((series[0] - 0.5).abs() < 1e-12);
        assert!((series[1] - (0.5 - 1.06)).abs() < 1e-12);
    }

    #[test]
    fn no_sells_means_empty_series() {
        let events = vec![TradeEvent::buy(0, 1.0, "x".to_string())];
        assert!(cumulative_profit(&events).is_empty());
    }
}

use super::ema::ema_series;

/// MACD line and signal line at the end of a prefix.
///
/// The MACD line is `EMA(fast) - EMA(slow)` over the whole prefix. The
/// signal line is an EMA restarted on the MACD line slice beginning at
/// index `slow - 1`, so it is only seeded once the slow EMA has a full
/// period of support. Absent until the prefix holds `slow` samples.
pub fn macd(data: &[f64], fast: usize, slow: usize, signal: usize) -> Option<(f64, f64)> {
    if slow == 0 || data.len() < slow {
        return None;
    }
    let fast_ema = ema_series(data, fast);
    let slow_ema = ema_series(data, slow);
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_series = ema_series(&macd_line[slow - 1..], signal);
    let macd_last = *macd_line.last()?;
    let signal_last = *signal_series.last()?;
    Some((macd_last, signal_last))
}

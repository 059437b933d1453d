/// Simple Moving Average over the last `period` values of a prefix.
/// Absent until the prefix holds at least `period` samples.
pub fn sma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let window = &data[data.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

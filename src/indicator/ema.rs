/// Exponential Moving Average over a whole series, seeded with the
/// first element. `ema[i] = series[i] * k + ema[i-1] * (1 - k)` with
/// `k = 2 / (n + 1)`. Empty input yields an empty output; otherwise the
/// result covers every index of the input.
pub fn ema_series(series: &[f64], n: usize) -> Vec<f64> {
    let Some(&first) = series.first() else {
        return Vec::new();
    };
    let k = 2.0 / (n as f64 + 1.0);
    let mut out = Vec::with_capacity(series.len());
    out.push(first);
    for &value in &series[1..] {
        let prev = *out.last().unwrap_or(&first);
        out.push(value * k + prev * (1.0 - k));
    }
    out
}

/// Relative Strength Index over the last `period` deltas of a prefix.
///
/// Average gain and loss are both divided by `period` (classic
/// Wilder-style window means). Saturates to 100 when the window holds
/// no losses, so the division below never sees a zero. Absent until
/// the prefix holds `period + 1` samples.
pub fn rsi(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period + 1 {
        return None;
    }
    let start = data.len() - period;
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for i in start..data.len() {
        let delta = data[i] - data[i - 1];
        if delta > 0.0 {
            gain_sum += delta;
        } else {
            loss_sum += -delta;
        }
    }
    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;
    if avg_loss == 0.0 {
        return Some(100.0);
    }
    Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_gains_saturate_to_100() {
        let data: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&data, 14), Some(100.0));
    }

    #[test]
    fn all_losses_hit_zero() {
        let data: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let v = rsi(&data, 14).unwrap();
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn bounded_on_mixed_input() {
        let data: Vec<f64> = (0..50)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0)
            .collect();
        for len in 15..=data.len() {
            let v = rsi(&data[..len], 14).unwrap();
            assert!((0.0..=100.0).contains(&v), "RSI out of range: {v}");
        }
    }

    #[test]
    fn absent_below_period_plus_one() {
        let data: Vec<f64> = (0..14).map(|i| i as f64).collect();
        assert_eq!(rsi(&data, 14), None);
    }

    #[test]
    fn balanced_gains_and_losses_near_50() {
        // Alternating +1/-1 deltas: equal average gain and loss.
        let data: Vec<f64> = (0..21)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let v = rsi(&data, 14).unwrap();
        assert!((v - 50.0).abs() < 1e-9);
    }
}

/// Volume-Weighted Average Price, cumulative over the entire supplied
/// prefix. This is deliberately a since-start average, not a
/// session-reset VWAP; changing that would change simulation outcomes.
///
/// Absent with fewer than two points or mismatched series lengths.
/// Volumes are sanitized positive at ingestion, so the divisor is
/// nonzero in-contract.
pub fn vwap(prices: &[f64], volumes: &[f64]) -> Option<f64> {
    if prices.len() < 2 || prices.len() != volumes.len() {
        return None;
    }
    let mut pv_sum = 0.0;
    let mut v_sum = 0.0;
    for (price, volume) in prices.iter().zip(volumes.iter()) {
        pv_sum += price * volume;
        v_sum += volume;
    }
    debug_assert!(v_sum > 0.0, "vwap divisor must be positive");
    Some(pv_sum / v_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_average() {
        let prices = [10.0, 20.0];
        let volumes = [3.0, 1.0];
        let v = vwap(&prices, &volumes).unwrap();
        assert!((v - 12.5).abs() < 1e-12);
    }

    #[test]
    fn absent_for_short_or_mismatched_input() {
        assert_eq!(vwap(&[10.0], &[1.0]), None);
        assert_eq!(vwap(&[10.0, 11.0], &[1.0]), None);
        assert_eq!(vwap(&[], &[]), None);
    }

    #[test]
    fn invariant_under_uniform_volume_scaling() {
        let prices = [101.0, 99.5, 100.25, 102.0, 98.75];
        let volumes = [2.0, 5.0, 1.0, 3.0, 4.0];
        let scaled: Vec<f64> = volumes.iter().map(|v| v * 7.5).collect();
        let a = vwap(&prices, &volumes).unwrap();
        let b = vwap(&prices, &scaled).unwrap();
        assert!((a - b).abs() < 1e-9);
    }
}

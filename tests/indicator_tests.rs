use ticklive::indicator::ema::ema_series;
use ticklive::indicator::macd::macd;
use ticklive::indicator::rsi::rsi;
use ticklive::indicator::sma::sma;
use ticklive::indicator::vwap::vwap;
use ticklive::indicator::IndicatorSnapshot;
use ticklive::params::StrategyParams;

fn noisy_series(len: usize) -> Vec<f64> {
    // Deterministic xorshift walk; no external state.
    let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut out = Vec::with_capacity(len);
    let mut price = 1000.0;
    for _ in 0..len {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        price += ((x % 101) as f64 - 50.0) / 10.0;
        out.push(price.max(1.0));
    }
    out
}

#[test]
fn sma_matches_naive_mean_for_every_valid_period() {
    let data = noisy_series(60);
    for period in 1..=data.len() {
        let expected: f64 =
            data[data.len() - period..].iter().sum::<f64>() / period as f64;
        let got = sma(&data, period).unwrap();
        assert!((got - expected).abs() < 1e-9);
    }
    assert_eq!(sma(&data, data.len() + 1), None);
}

#[test]
fn rsi_stays_in_bounds_over_every_prefix() {
    let data = noisy_series(120);
    for len in 15..=data.len() {
        let v = rsi(&data[..len], 14).unwrap();
        assert!((0.0..=100.0).contains(&v), "RSI {v} out of bounds at len {len}");
    }
}

#[test]
fn ema_depends_only_on_prefix_order() {
    let data = noisy_series(50);
    let full = ema_series(&data, 12);
    // Recomputing over a prefix reproduces the same leading values.
    let partial = ema_series(&data[..30], 12);
    for (a, b) in partial.iter().zip(full.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn macd_absent_until_slow_period_then_present() {
    let data = noisy_series(40);
    for len in 1..26 {
        assert_eq!(macd(&data[..len], 12, 26, 9), None);
    }
    for len in 26..=data.len() {
        assert!(macd(&data[..len], 12, 26, 9).is_some());
    }
}

#[test]
fn vwap_scaling_invariance_on_noisy_data() {
    let prices = noisy_series(80);
    let volumes: Vec<f64> = (0..80).map(|i| 1.0 + (i % 9) as f64).collect();
    let scaled: Vec<f64> = volumes.iter().map(|v| v * 1234.5).collect();
    let a = vwap(&prices, &volumes).unwrap();
    let b = vwap(&prices, &scaled).unwrap();
    assert!((a - b).abs() < 1e-6);
}

#[test]
fn snapshot_is_consistent_with_the_leaf_functions() {
    let params = StrategyParams::default();
    let prices = noisy_series(70);
    let volumes = vec![1.0; 70];
    let snapshot = IndicatorSnapshot::compute(&prices, &volumes, &params);
    assert_eq!(snapshot.rsi, rsi(&prices, params.rsi_period));
    assert_eq!(snapshot.sma_short, sma(&prices, params.sma_short_period));
    assert_eq!(snapshot.sma_long, sma(&prices, params.sma_long_period));
    assert_eq!(snapshot.vwap, vwap(&prices, &volumes));
    let (line, signal) =
        macd(&prices, params.macd_fast, params.macd_slow, params.macd_signal).unwrap();
    assert_eq!(snapshot.macd, Some(line));
    assert_eq!(snapshot.macd_signal, Some(signal));
}

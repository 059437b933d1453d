#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub price: f64,
    pub volume: f64,
    /// Position in the overall ingestion order, assigned by the buffer.
    /// Survives eviction: the first tick ever recorded is seq 0 forever.
    pub seq: u64,
    pub timestamp_ms: u64,
}

/// Volume must never be zero or negative; sources that omit it or send
/// junk get a unit volume so VWAP stays well-defined.
pub fn sanitize_volume(volume: f64) -> f64 {
    if volume.is_finite() && volume > 0.0 {
        volume
    } else {
        1.0
    }
}

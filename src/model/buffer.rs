use std::collections::VecDeque;

use super::tick::{sanitize_volume, Tick};

/// Capacity-bounded FIFO buffer of recent ticks for one instrument.
///
/// The ingestion loop is the only writer. A simulation pass reads a
/// consistent snapshot taken at its start; prices and volumes always
/// share the same index because they come from the same `Tick`.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    ticks: VecDeque<Tick>,
    capacity: usize,
    next_seq: u64,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be > 0");
        Self {
            ticks: VecDeque::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    /// Append a tick, evicting the oldest sample when full. Returns the
    /// sequence index assigned to the new tick.
    pub fn push(&mut self, price: f64, volume: f64, timestamp_ms: u64) -> u64 {
        if self.ticks.len() == self.capacity {
            self.ticks.pop_front();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.ticks.push_back(Tick {
            price,
            volume: sanitize_volume(volume),
            seq,
            timestamp_ms,
        });
        seq
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn oldest_seq(&self) -> Option<u64> {
        self.ticks.front().map(|t| t.seq)
    }

    pub fn last_price(&self) -> Option<f64> {
        self.ticks.back().map(|t| t.price)
    }

    /// Stable copy of the buffered series for one simulation pass.
    pub fn snapshot(&self) -> (Vec<f64>, Vec<f64>) {
        let prices = self.ticks.iter().map(|t| t.price).collect();
        let volumes = self.ticks.iter().map(|t| t.volume).collect();
        (prices, volumes)
    }
}

use serde::{Deserialize, Serialize};

use crate::model::tick::sanitize_volume;

/// Subscribe request written to the socket right after connecting.
#[derive(Debug, Serialize)]
pub struct SubscribeRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub instrument: &'a str,
}

impl<'a> SubscribeRequest<'a> {
    pub fn for_instrument(instrument: &'a str) -> Self {
        Self {
            kind: "subscribe",
            instrument,
        }
    }
}

/// One inbound frame. Anything that fails to parse, or parses with a
/// non-trade `type`, is ignored by the ingestion loop.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeFrame {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    /// Omitted by some sources; coerced to 1 downstream.
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl TradeFrame {
    pub fn is_trade(&self) -> bool {
        self.kind == "trade"
    }
}

/// A validated trade ready for the sample buffer. The sequence index
/// is assigned by the buffer, not the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedTick {
    pub price: f64,
    pub volume: f64,
    pub timestamp_ms: u64,
}

impl FeedTick {
    /// `now_ms` stands in when the source omits the timestamp.
    pub fn from_frame(frame: TradeFrame, now_ms: u64) -> Self {
        Self {
            price: frame.price,
            volume: sanitize_volume(frame.volume.unwrap_or(1.0)),
            timestamp_ms: frame.timestamp.unwrap_or(now_ms),
        }
    }
}

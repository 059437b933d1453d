use crate::model::trade_event::TradeEvent;

/// Connection lifecycle as surfaced to the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No instrument configured; no connection attempted.
    Idle,
    Connecting,
    Connected,
    /// Transport failure; a reconnect is scheduled.
    Error,
    /// Server-initiated close; a reconnect is scheduled.
    Closed,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "idle",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Error => "error",
            ConnectionStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    pub retry_count: u32,
}

/// Everything the core exposes outward: status label, last price, and
/// the rebuilt event log with its derived cumulative profit series.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    Connection(ConnectionState),
    LastPrice(f64),
    Simulation {
        events: Vec<TradeEvent>,
        cumulative_profit: Vec<f64>,
    },
}

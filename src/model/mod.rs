pub mod buffer;
pub mod tick;
pub mod trade_event;

pub mod pnl;
pub mod position;
pub mod replay;

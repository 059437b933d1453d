pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod feed;
pub mod indicator;
pub mod model;
pub mod params;
pub mod signal;
pub mod sim;

pub mod client;
pub mod models;

pub use client::NobitexClient;
pub use models::OrderbookEntry;

//! REST adapters over the logistics backend.

mod client;
mod shipment_api;
mod wire;

pub use client::ConsoleHttpClient;
pub use shipment_api::HttpShipmentApi;

//! # fd-infra
//!
//! Infrastructure adapters for FreightDesk: the REST port implementations
//! and console configuration.

pub mod config;
pub mod http;

pub use config::{ConfigError, ConsoleConfig};
pub use http::{ConsoleHttpClient, HttpShipmentApi};

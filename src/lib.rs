// src/lib.rs

pub mod config;
pub mod error;
pub mod es;
pub mod mcp;

pub use config::EsConfig;
pub use error::{EsError, Result};
pub use es::EsClient;
pub use mcp::EverythingServer;

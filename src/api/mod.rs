pub mod client;
pub mod config;
pub mod provider;

pub use client::*;
pub use config::*;
pub use provider::*;

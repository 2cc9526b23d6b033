//! Core types for skywatch
//!
//! This crate contains domain types shared across all other crates.

mod config;
mod constants;
mod env_config;
mod location;
mod preferences;
mod snapshot;
mod weather;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use location::*;
pub use preferences::*;
pub use snapshot::*;
pub use weather::*;

//! Infrastructure layer for Mergington.
//!
//! Provides the built-in seed catalog, TOML seed file loading, and the
//! `config.toml` loader with data directory resolution.

pub mod config;
pub mod seed;

//! Shared domain types for the Mergington activity directory.
//!
//! This crate contains the types used across the workspace: Activity,
//! the ordered activity catalog, roster request/confirmation structs,
//! service configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod activity;
pub mod config;
pub mod error;

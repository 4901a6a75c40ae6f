//! Business logic for the Mergington activity directory.
//!
//! This crate owns the in-memory activity registry and the roster service
//! built on top of it. It depends only on `mergington-types` -- never on
//! `mergington-infra` or any IO crate.

pub mod registry;
pub mod service;

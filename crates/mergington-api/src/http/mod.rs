//! HTTP/REST API layer for Mergington.
//!
//! Axum-based REST API over the activity registry. Success bodies carry a
//! `message`, error bodies a `detail`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;

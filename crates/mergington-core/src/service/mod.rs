//! Business logic services (use cases).
//!
//! Services apply roster rules on top of the registry and are shared with
//! the HTTP layer behind an `Arc`.

pub mod activity;

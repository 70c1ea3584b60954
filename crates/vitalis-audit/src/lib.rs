//! vitalis-audit
//!
//! Application-level audit events, emitted as structured `tracing`
//! records for CloudWatch.

pub mod events;

//! vitalis-storage
//!
//! S3 operations and the per-user assessment history store. Thin wrapper
//! around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod history;
pub mod objects;

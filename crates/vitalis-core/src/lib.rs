//! vitalis-core
//!
//! Pure domain types, the vitals field vocabulary, and storage key
//! conventions. No AWS or HTTP dependency — this is the shared vocabulary
//! of the Vitalis system.

pub mod error;
pub mod fields;
pub mod models;
pub mod storage_keys;

//! vitalis-predict
//!
//! Client for the external prediction model service. The service is
//! opaque: it takes the submitted vitals and returns a free-text label;
//! everything downstream of the label is `vitalis-engine`'s business.

pub mod client;
pub mod error;
pub mod extract;
pub mod payload;

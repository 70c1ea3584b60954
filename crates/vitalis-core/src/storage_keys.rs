//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the
//! canonical layout of objects in the Vitalis bucket. Each assessment
//! record is one JSON document under its owner's prefix.

use uuid::Uuid;

pub fn user_records_prefix(user_sub: &str) -> String {
    format!("users/{user_sub}/records/")
}

pub fn user_record(user_sub: &str, record_id: Uuid) -> String {
    format!("users/{user_sub}/records/{record_id}.json")
}

pub const USERS_PREFIX: &str = "users/";

//! Per-user assessment history.
//!
//! One JSON document per assessment under
//! `users/{sub}/records/{id}.json`. Listing returns documents in
//! unspecified order; display ordering is the engine's concern.

use aws_sdk_s3::Client;
use tracing::warn;
use uuid::Uuid;

use vitalis_core::models::record::AssessmentRecord;
use vitalis_core::storage_keys;

use crate::error::StorageError;
use crate::objects;

/// Append a record to a user's history.
///
/// A failure here happens after the record was built: the caller must
/// surface the error, but the in-memory record stays usable for the
/// session's display list.
pub async fn append_record(
    client: &Client,
    bucket: &str,
    user_sub: &str,
    record: &AssessmentRecord,
) -> Result<(), StorageError> {
    let key = storage_keys::user_record(user_sub, record.id);
    let body = serde_json::to_vec(record)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await
}

/// List every record in a user's history, in unspecified order.
///
/// A document that fails to deserialize is logged and skipped; one bad
/// object must not take down the whole history view.
pub async fn list_records(
    client: &Client,
    bucket: &str,
    user_sub: &str,
) -> Result<Vec<AssessmentRecord>, StorageError> {
    let prefix = storage_keys::user_records_prefix(user_sub);
    let keys = objects::list_objects(client, bucket, &prefix).await?;

    let mut records = Vec::with_capacity(keys.len());
    for key in &keys {
        let body = objects::get_object(client, bucket, key).await?;
        match serde_json::from_slice::<AssessmentRecord>(&body) {
            Ok(record) => records.push(record),
            Err(e) => warn!(key = %key, error = %e, "skipping undecodable record"),
        }
    }

    Ok(records)
}

/// Delete a single record from a user's history.
pub async fn delete_record(
    client: &Client,
    bucket: &str,
    user_sub: &str,
    record_id: Uuid,
) -> Result<(), StorageError> {
    let key = storage_keys::user_record(user_sub, record_id);
    objects::delete_object(client, bucket, &key).await
}

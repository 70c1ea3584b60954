//! History ordering for display.

use jiff::Timestamp;

use vitalis_core::models::record::AssessmentRecord;

/// Order records most recent first.
///
/// The sort is stable: records with equal timestamps keep their incoming
/// relative order. A record with no decodable timestamp orders as the
/// earliest possible instant, i.e. at the end of the list.
pub fn sort_for_display(mut records: Vec<AssessmentRecord>) -> Vec<AssessmentRecord> {
    records.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
    records
}

fn sort_key(record: &AssessmentRecord) -> Timestamp {
    record.recorded_at.unwrap_or(Timestamp::MIN)
}

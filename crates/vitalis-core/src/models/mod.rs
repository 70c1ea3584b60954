pub mod assessment_type;
pub mod record;
pub mod vitals;

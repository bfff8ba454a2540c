use crate::domain::record::Record;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Name stamped on every envelope; the endpoint aggregates this one dataset.
pub const DATASET_NAME: &str = "All_Diets.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetEnvelope {
    pub dataset_name: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<Record>,
}

impl DatasetEnvelope {
    /// Wraps freshly received records, stamping the current time.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            dataset_name: DATASET_NAME.to_string(),
            fetched_at: Utc::now(),
            records,
        }
    }

    /// Same name and timestamp, different records.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            dataset_name: self.dataset_name.clone(),
            fetched_at: self.fetched_at,
            records,
        }
    }
}

// `2025-11-03T18:04:05.123Z`
fn serialize_iso_millis<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

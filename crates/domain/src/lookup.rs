use super::RecordType;
use serde::Serialize;

/// Result of an ordinary recursive lookup of one record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupAnswer {
    /// Domain or IP address the lookup was made for.
    pub target: String,
    pub record_type: RecordType,
    pub records: Vec<String>,
    pub response_time_ms: f64,
}

impl LookupAnswer {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

mod record_type;

pub use record_type::{parse_record_types, RecordType};

use serde::Serialize;

/// A resource record in presentation form, as read from a response section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    /// RDATA in zone-file text form, e.g. `93.184.216.34` or `10 mail.example.com.`
    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }

    /// Target hostname of an NS record, `None` for any other type.
    pub fn nameserver(&self) -> Option<&str> {
        if self.record_type.is_nameserver() {
            Some(self.data.as_str())
        } else {
            None
        }
    }
}

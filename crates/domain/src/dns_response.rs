use super::ResourceRecord;
use serde::Serialize;

/// Parsed reply to a single non-recursive query sent to one server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerResponse {
    pub answers: Vec<ResourceRecord>,

    /// AUTHORITY section: NS records of a referral, or the SOA of a negative answer.
    pub authority: Vec<ResourceRecord>,

    pub response_code: &'static str,

    pub authoritative: bool,

    pub truncated: bool,
}

impl ServerResponse {
    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Nameserver hostnames this response refers the query to.
    pub fn referrals(&self) -> impl Iterator<Item = &str> {
        self.authority.iter().filter_map(ResourceRecord::nameserver)
    }
}

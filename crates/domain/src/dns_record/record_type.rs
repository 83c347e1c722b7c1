use crate::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    DS,
    DNSKEY,
    SVCB,
    HTTPS,

    CAA,
    TLSA,
    SSHFP,
    DNAME,

    /// Any type code without a mnemonic here, carried through as-is (RFC 3597 `TYPEnnn`).
    Unknown(u16),
}

impl RecordType {
    /// Types queried by `lookup --all`, in display order.
    pub const COMMON: [RecordType; 7] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::NS,
        RecordType::TXT,
        RecordType::CNAME,
        RecordType::SOA,
    ];

    /// Mnemonic for known types, `None` for `Unknown`.
    pub fn as_str(&self) -> Option<&'static str> {
        let name = match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::DNAME => "DNAME",
            RecordType::Unknown(_) => return None,
        };
        Some(name)
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DNAME => 39,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::DNSKEY => 48,
            RecordType::TLSA => 52,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::CAA => 257,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            35 => RecordType::NAPTR,
            39 => RecordType::DNAME,
            43 => RecordType::DS,
            44 => RecordType::SSHFP,
            48 => RecordType::DNSKEY,
            52 => RecordType::TLSA,
            64 => RecordType::SVCB,
            65 => RecordType::HTTPS,
            257 => RecordType::CAA,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_nameserver(&self) -> bool {
        matches!(self, RecordType::NS)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let record_type = match upper.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "MX" => RecordType::MX,
            "TXT" => RecordType::TXT,
            "PTR" => RecordType::PTR,
            "SRV" => RecordType::SRV,
            "SOA" => RecordType::SOA,
            "NS" => RecordType::NS,
            "NAPTR" => RecordType::NAPTR,
            "DS" => RecordType::DS,
            "DNSKEY" => RecordType::DNSKEY,
            "SVCB" => RecordType::SVCB,
            "HTTPS" => RecordType::HTTPS,
            "CAA" => RecordType::CAA,
            "TLSA" => RecordType::TLSA,
            "SSHFP" => RecordType::SSHFP,
            "DNAME" => RecordType::DNAME,
            other => {
                // RFC 3597 generic syntax, e.g. TYPE65
                let code = other
                    .strip_prefix("TYPE")
                    .and_then(|digits| digits.parse::<u16>().ok())
                    .ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))?;
                RecordType::from_u16(code)
            }
        };
        Ok(record_type)
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses a comma-separated list such as `"a, mx,TXT"`.
///
/// Empty items are ignored and duplicates keep their first position.
pub fn parse_record_types(input: &str) -> Result<Vec<RecordType>, DomainError> {
    let mut types = Vec::new();
    for item in input.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let record_type = item.parse::<RecordType>()?;
        if !types.contains(&record_type) {
            types.push(record_type);
        }
    }

    if types.is_empty() {
        return Err(DomainError::InvalidRecordType(input.to_string()));
    }
    Ok(types)
}

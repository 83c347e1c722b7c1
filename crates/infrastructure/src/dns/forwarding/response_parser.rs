use super::record_type_map::RecordTypeMapper;
use dnspect_domain::{DomainError, ResourceRecord, ServerResponse};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

/// A decoded reply together with the ID it carried on the wire.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub response: ServerResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is a query, not a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        let answers: Vec<ResourceRecord> = message.answers().iter().map(Self::convert).collect();
        let authority: Vec<ResourceRecord> =
            message.name_servers().iter().map(Self::convert).collect();

        debug!(
            id = message.id(),
            rcode = ?rcode,
            answers = answers.len(),
            authority = authority.len(),
            authoritative = message.authoritative(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            response: ServerResponse {
                answers,
                authority,
                response_code: Self::rcode_to_status(rcode),
                authoritative: message.authoritative(),
                truncated: message.truncated(),
            },
        })
    }

    fn convert(record: &Record) -> ResourceRecord {
        ResourceRecord::new(
            record.name().to_utf8(),
            RecordTypeMapper::from_hickory(record.record_type()),
            record.ttl(),
            record.data().to_string(),
        )
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

//! Result model of an iterative root-to-authoritative trace.

use super::DnsQuery;
use serde::Serialize;
use std::net::IpAddr;

/// How a single query to a single server ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttemptOutcome {
    Responded { latency_ms: f64 },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerAttempt {
    pub server: IpAddr,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
}

impl ServerAttempt {
    pub fn responded(server: IpAddr, latency_ms: f64) -> Self {
        Self {
            server,
            outcome: AttemptOutcome::Responded { latency_ms },
        }
    }

    pub fn failed(server: IpAddr, reason: impl Into<String>) -> Self {
        Self {
            server,
            outcome: AttemptOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn latency_ms(&self) -> Option<f64> {
        match self.outcome {
            AttemptOutcome::Responded { latency_ms } => Some(latency_ms),
            AttemptOutcome::Failed { .. } => None,
        }
    }
}

/// One round of querying the server set at a given referral depth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep {
    pub depth: usize,
    pub attempts: Vec<ServerAttempt>,
    pub answers: Vec<String>,
    /// Nameservers referred to at this depth, sorted.
    pub referrals: Vec<String>,
    /// Some server at this depth set the TC bit.
    pub truncated: bool,
}

impl TraceStep {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            attempts: Vec::new(),
            answers: Vec::new(),
            referrals: Vec::new(),
            truncated: false,
        }
    }

    /// `(server, latency)` of every attempt that got a response.
    pub fn responded(&self) -> impl Iterator<Item = (IpAddr, f64)> + '_ {
        self.attempts
            .iter()
            .filter_map(|attempt| attempt.latency_ms().map(|ms| (attempt.server, ms)))
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceOutcome {
    /// The last step holds the answers.
    Answered,
    /// No referred nameserver resolved to an address.
    Stalled,
    /// The depth bound was reached without an answer.
    Exhausted,
}

impl TraceOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceOutcome::Answered => "answered",
            TraceOutcome::Stalled => "stalled",
            TraceOutcome::Exhausted => "exhausted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceResult {
    pub domain: String,
    pub record_type: super::RecordType,
    pub steps: Vec<TraceStep>,
    pub outcome: TraceOutcome,
}

impl TraceResult {
    pub fn new(query: &DnsQuery, steps: Vec<TraceStep>, outcome: TraceOutcome) -> Self {
        Self {
            domain: query.domain.to_string(),
            record_type: query.record_type,
            steps,
            outcome,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == TraceOutcome::Answered
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Answers of the final step; empty unless the trace was answered.
    pub fn answers(&self) -> &[String] {
        self.steps
            .last()
            .map(|step| step.answers.as_slice())
            .unwrap_or_default()
    }
}

#![allow(dead_code)]
use dnspect_domain::{RecordType, ResourceRecord, ServerAttempt, TraceStep};
use std::net::IpAddr;

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    data: String,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            data: "93.184.216.34".to_string(),
        }
    }

    pub fn nameserver(zone: &str, target: &str) -> Self {
        Self::new()
            .name(zone)
            .record_type(RecordType::NS)
            .ttl(172_800)
            .data(target)
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.record_type, self.ttl, self.data)
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TraceStepBuilder {
    step: TraceStep,
}

impl TraceStepBuilder {
    pub fn new(depth: usize) -> Self {
        Self {
            step: TraceStep::new(depth),
        }
    }

    pub fn responded(mut self, server: &str, latency_ms: f64) -> Self {
        self.step
            .attempts
            .push(ServerAttempt::responded(ip(server), latency_ms));
        self
    }

    pub fn failed(mut self, server: &str, reason: &str) -> Self {
        self.step.attempts.push(ServerAttempt::failed(ip(server), reason));
        self
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.step.answers.push(answer.to_string());
        self
    }

    pub fn build(self) -> TraceStep {
        self.step
    }
}

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

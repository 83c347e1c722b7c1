pub mod trace_domain;

pub use trace_domain::{TraceDomainUseCase, TraceSettings};

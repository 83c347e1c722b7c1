pub mod lookup;
pub mod trace;

// Re-export use cases
pub use lookup::{LookupRecordsUseCase, RecordLookupOutcome, ReverseLookupUseCase};
pub use trace::{TraceDomainUseCase, TraceSettings};

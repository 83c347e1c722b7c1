pub mod lookup_records;
pub mod reverse_lookup;

pub use lookup_records::{LookupRecordsUseCase, RecordLookupOutcome};
pub use reverse_lookup::ReverseLookupUseCase;

mod builders;

pub use builders::{ResourceRecordBuilder, TraceStepBuilder};

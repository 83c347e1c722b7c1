pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use forwarding::{DnsForwarder, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use resolver::HickoryResolverClient;

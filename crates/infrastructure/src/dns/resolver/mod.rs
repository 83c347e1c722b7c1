pub mod builder;
pub mod client;

pub use builder::build_resolver;
pub use client::HickoryResolverClient;

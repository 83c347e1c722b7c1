mod mock_resolvers;

pub use mock_resolvers::{answer, ip, referral, MockRecordLookup, MockResolverClient};

use dnspect_application::use_cases::{
    LookupRecordsUseCase, ReverseLookupUseCase, TraceDomainUseCase, TraceSettings,
};
use dnspect_domain::Config;
use dnspect_infrastructure::dns::HickoryResolverClient;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub trace: TraceDomainUseCase,
    pub lookup: LookupRecordsUseCase,
    pub reverse: ReverseLookupUseCase,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(HickoryResolverClient::from_config(&config.dns)?);

        info!(
            timeout_secs = config.dns.query_timeout_secs,
            max_depth = config.dns.max_depth,
            port = config.dns.port,
            "DNS client ready"
        );

        Ok(Self {
            trace: TraceDomainUseCase::new(client.clone())
                .with_settings(TraceSettings::from(&config.dns)),
            lookup: LookupRecordsUseCase::new(client.clone()),
            reverse: ReverseLookupUseCase::new(client),
        })
    }
}

use crate::ports::ResolverClient;
use dnspect_domain::config::dns::{DnsConfig, DEFAULT_MAX_DEPTH, DEFAULT_QUERY_TIMEOUT_SECS};
use dnspect_domain::{
    root_server_set, DnsQuery, ServerAttempt, TraceOutcome, TraceResult, TraceStep,
};
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct TraceSettings {
    pub max_depth: usize,
    pub query_timeout: Duration,
    /// Server set queried at depth 0.
    pub root_servers: Vec<IpAddr>,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            root_servers: root_server_set(),
        }
    }
}

impl From<&DnsConfig> for TraceSettings {
    fn from(config: &DnsConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            query_timeout: config.query_timeout(),
            root_servers: root_server_set(),
        }
    }
}

/// Walks from the root servers down the referral chain until a server
/// answers, no referred nameserver resolves, or the depth bound is hit.
pub struct TraceDomainUseCase {
    client: Arc<dyn ResolverClient>,
    settings: TraceSettings,
}

impl TraceDomainUseCase {
    pub fn new(client: Arc<dyn ResolverClient>) -> Self {
        Self {
            client,
            settings: TraceSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: TraceSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Never fails: per-server errors are recorded as failed attempts and an
    /// unfinished walk is reported through [`TraceResult::outcome`].
    pub async fn execute(&self, query: &DnsQuery) -> TraceResult {
        info!(
            domain = %query.domain,
            record_type = %query.record_type,
            max_depth = self.settings.max_depth,
            "Starting trace"
        );

        let mut steps = Vec::new();
        let mut servers = self.settings.root_servers.clone();

        for depth in 0..self.settings.max_depth {
            let mut step = TraceStep::new(depth);
            let mut candidates: HashSet<String> = HashSet::new();

            for &server in &servers {
                let start = Instant::now();
                let response = match self
                    .client
                    .query_server(query, server, self.settings.query_timeout)
                    .await
                {
                    Ok(response) => response,
                    Err(e) => {
                        debug!(depth, server = %server, error = %e, "Server attempt failed");
                        step.attempts.push(ServerAttempt::failed(server, e.to_string()));
                        continue;
                    }
                };
                let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
                step.attempts.push(ServerAttempt::responded(server, latency_ms));
                if response.truncated {
                    debug!(depth, server = %server, "Response truncated");
                    step.truncated = true;
                }

                if response.has_answers() {
                    step.answers = response
                        .answers
                        .into_iter()
                        .map(|record| record.data)
                        .collect();

                    info!(
                        depth,
                        server = %server,
                        answers = step.answers.len(),
                        "Trace answered"
                    );
                    steps.push(step);
                    return TraceResult::new(query, steps, TraceOutcome::Answered);
                }

                let before = candidates.len();
                candidates.extend(response.referrals().map(str::to_ascii_lowercase));
                debug!(
                    depth,
                    server = %server,
                    rcode = response.response_code,
                    new_referrals = candidates.len() - before,
                    "Server responded without answers"
                );
            }

            step.referrals = sorted(&candidates);
            steps.push(step);

            servers = self.resolve_next_servers(&candidates).await;
            if servers.is_empty() {
                info!(depth, "Trace stalled: no referred nameserver resolved");
                return TraceResult::new(query, steps, TraceOutcome::Stalled);
            }
            debug!(depth, next_servers = servers.len(), "Following referral");
        }

        info!(
            max_depth = self.settings.max_depth,
            "Trace exhausted its depth budget"
        );
        TraceResult::new(query, steps, TraceOutcome::Exhausted)
    }

    /// Addresses of every candidate that resolves; order is unspecified
    /// because candidates come from a set.
    async fn resolve_next_servers(&self, candidates: &HashSet<String>) -> Vec<IpAddr> {
        let mut next = Vec::new();
        for hostname in candidates {
            match self.client.resolve_address(hostname).await {
                Ok(addresses) => {
                    for address in addresses {
                        if !next.contains(&address) {
                            next.push(address);
                        }
                    }
                }
                Err(e) => {
                    debug!(nameserver = %hostname, error = %e, "Skipping unresolvable nameserver");
                }
            }
        }
        next
    }
}

fn sorted(candidates: &HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = candidates.iter().cloned().collect();
    names.sort();
    names
}

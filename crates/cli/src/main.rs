use clap::{Parser, Subcommand};
use dnspect_domain::CliOverrides;
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dnspect")]
#[command(version)]
#[command(about = "dnspect - DNS lookups, reverse lookups and iterative traces")]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Recursive resolver to use instead of the system configuration (repeatable)
    #[arg(long = "nameserver", global = true, value_name = "IP")]
    nameservers: Vec<String>,

    /// Destination port for trace queries
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Print machine-readable JSON instead of trees and tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace resolution from the root servers down to the authoritative servers
    Trace {
        domain: String,

        /// Record type to trace
        #[arg(short, long, default_value = "A")]
        record: String,

        /// Referral depth after which the trace gives up
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Look up DNS records for a domain
    Lookup {
        domain: String,

        /// Record types, comma-separated
        #[arg(short, long, default_value = "A", conflicts_with = "all")]
        record: String,

        /// Query all common record types
        #[arg(long)]
        all: bool,
    },

    /// Reverse DNS lookup (IP to hostname)
    Reverse { ip: String },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let max_depth = match &self.command {
            Command::Trace { max_depth, .. } => *max_depth,
            _ => None,
        };

        CliOverrides {
            timeout_secs: self.timeout,
            max_depth,
            port: self.port,
            nameservers: self.nameservers.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.overrides())?;
    bootstrap::init_logging(&config);

    debug!(config = ?config, "Configuration loaded");

    let format = output::Format::from_json_flag(cli.json);

    // Resolvers are built only once the arguments have been validated
    let code = match cli.command {
        Command::Trace { domain, record, .. } => {
            commands::trace::run(&domain, &record, format, || {
                Ok(di::Services::new(&config)?.trace)
            })
            .await
        }
        Command::Lookup {
            domain,
            record,
            all,
        } => {
            commands::lookup::run(&domain, &record, all, format, || {
                Ok(di::Services::new(&config)?.lookup)
            })
            .await
        }
        Command::Reverse { ip } => {
            commands::reverse::run(&ip, format, || Ok(di::Services::new(&config)?.reverse)).await
        }
    }?;

    Ok(code)
}

//! # zonecheck
//!
//! Reads a tinydns data file and asks a nameserver for every declared
//! A, PTR, CNAME, MX and SOA record, printing one line per record whose
//! live answer differs from the declaration.

mod bootstrap;
mod di;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing::info;
use zonecheck_domain::CliOverrides;

use bootstrap::{init_logging, load_config};
use di::UseCases;

#[derive(Parser, Debug)]
#[command(name = "zonecheck")]
#[command(version)]
#[command(about = "Check a nameserver's answers against a tinydns data file")]
struct Cli {
    /// tinydns data file
    data: PathBuf,

    /// IP address of the nameserver to check
    dns_server: IpAddr,

    /// Nameserver port
    #[arg(short = 'p', long, default_value = "53")]
    port: u16,

    /// Per-query timeout in milliseconds
    #[arg(short = 't', long, default_value = "5000", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Log level for stderr output (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nameserver: Some(self.dns_server),
            port: Some(self.port),
            query_timeout_ms: Some(self.timeout),
            log_level: Some(self.log_level.clone()),
        }
    }
}

/// How a command line that clap rejected is answered.
#[derive(Debug, PartialEq, Eq)]
enum ArgsFailure {
    /// Wrong number of arguments: usage line on stdout, no checks, exit 0.
    Usage,
    /// Help, version and unparseable values keep clap's own output.
    Clap,
}

fn classify_args_error(kind: ErrorKind) -> ArgsFailure {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidValue => ArgsFailure::Clap,
        _ => ArgsFailure::Usage,
    }
}

fn usage(program: &str) -> String {
    format!("Usage:\n{} <data> <dnsserver ip>", program)
}

fn print_usage() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "zonecheck".to_string());
    println!("{}", usage(&program));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match classify_args_error(err.kind()) {
            ArgsFailure::Clap => err.exit(),
            ArgsFailure::Usage => {
                print_usage();
                return Ok(());
            }
        },
    };

    let config = load_config(cli.overrides())?;
    init_logging(&config.logging);

    info!(
        data = %cli.data.display(),
        nameservers = ?config.resolver.nameservers,
        timeout_ms = config.resolver.query_timeout_ms,
        "Checking zone data"
    );

    let file = File::open(&cli.data)
        .await
        .with_context(|| format!("cannot open data file {}", cli.data.display()))?;

    let use_cases = UseCases::new(&config);
    use_cases
        .check_zone
        .execute(BufReader::new(file), |finding| println!("{}", finding))
        .await
        .with_context(|| format!("cannot read data file {}", cli.data.display()))?;

    Ok(())
}

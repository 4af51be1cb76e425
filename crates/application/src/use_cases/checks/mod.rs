//! One use case per checked record type.
//!
//! Every checker sends a single query through the [`DnsResolver`] port and
//! turns the outcome into at most one [`CheckFinding`] per query. Resolver
//! errors are not distinguished: timeouts, NXDOMAIN, SERVFAIL and empty
//! answers all become the same "check failed" finding.
//!
//! [`CheckFinding`]: zonecheck_domain::CheckFinding

pub mod address;
pub mod alias;
pub mod mail_exchanger;
pub mod pointer;
pub mod start_of_authority;

pub use address::CheckAddressUseCase;
pub use alias::CheckAliasUseCase;
pub use mail_exchanger::CheckMailExchangerUseCase;
pub use pointer::CheckPointerUseCase;
pub use start_of_authority::CheckStartOfAuthorityUseCase;

use crate::ports::DnsResolver;
use tracing::debug;
use zonecheck_domain::{DnsQuery, RecordType};

/// Runs one query, collapsing every error into `None`.
pub(crate) async fn lookup(
    resolver: &dyn DnsResolver,
    domain: &str,
    record_type: RecordType,
) -> Option<Vec<String>> {
    let query = DnsQuery::new(domain, record_type);
    match resolver.resolve(&query).await {
        Ok(answer) if !answer.is_empty() => Some(answer.records),
        Ok(_) => {
            debug!(domain = %domain, record_type = %record_type, "Empty answer");
            None
        }
        Err(e) => {
            debug!(
                domain = %domain,
                record_type = %record_type,
                error = %e,
                "Query failed"
            );
            None
        }
    }
}

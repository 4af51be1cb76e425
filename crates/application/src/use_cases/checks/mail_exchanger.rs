use super::lookup;
use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::instrument;
use zonecheck_domain::{CheckFinding, Observed, RecordType};

/// `@domain:ip:hostname:preference`: `"<preference> <hostname>."` must be
/// one of the MX answers.
///
/// The preference field is pasted into the expected text unparsed, so
/// `010` never matches an answer of `10`.
pub struct CheckMailExchangerUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CheckMailExchangerUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub fn expected_answer(hostname: &str, preference: &str) -> String {
        format!("{} {}.", preference, hostname)
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        hostname: &str,
        preference: &str,
    ) -> Option<CheckFinding> {
        let Some(answers) = lookup(self.resolver.as_ref(), domain, RecordType::MX).await else {
            return Some(CheckFinding::query_failed(RecordType::MX, domain));
        };

        let expected = Self::expected_answer(hostname, preference);
        if answers.iter().any(|answer| *answer == expected) {
            return None;
        }

        Some(CheckFinding::mismatch(
            RecordType::MX,
            domain,
            expected,
            Observed::Set(answers),
        ))
    }
}

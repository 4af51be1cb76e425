use super::lookup;
use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::instrument;
use zonecheck_domain::{strip_trailing_dots, CheckFinding, Observed, RecordType};

/// `Calias:target`: the target must be among the CNAME answers.
///
/// Answers lose their trailing dot before comparison; the declared target
/// is compared as written.
pub struct CheckAliasUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CheckAliasUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, alias: &str, target: &str) -> Option<CheckFinding> {
        let Some(answers) = lookup(self.resolver.as_ref(), alias, RecordType::CNAME).await else {
            return Some(CheckFinding::query_failed(RecordType::CNAME, alias));
        };

        let canonical: Vec<String> = answers
            .iter()
            .map(|name| strip_trailing_dots(name).to_string())
            .collect();

        if canonical.iter().any(|name| name == target) {
            return None;
        }

        Some(CheckFinding::mismatch(
            RecordType::CNAME,
            alias,
            target,
            Observed::Set(canonical),
        ))
    }
}

use crate::ports::DnsResolver;
use crate::use_cases::checks::{
    CheckAddressUseCase, CheckAliasUseCase, CheckMailExchangerUseCase, CheckPointerUseCase,
    CheckStartOfAuthorityUseCase,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};
use zonecheck_domain::{CheckFinding, DomainError, ZoneEntry};

/// Counters for one pass over a data file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneCheckSummary {
    pub lines_read: u64,
    pub records_checked: u64,
    pub records_skipped: u64,
    pub findings: u64,
    pub mismatches: u64,
    pub query_failures: u64,
}

impl ZoneCheckSummary {
    fn record(&mut self, finding: &CheckFinding) {
        self.findings += 1;
        if finding.is_mismatch() {
            self.mismatches += 1;
        } else if finding.is_query_failure() {
            self.query_failures += 1;
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings == 0
    }
}

/// Checks every declaration of a tinydns data file against a nameserver.
///
/// Lines are handled strictly one after another: each query is awaited
/// before the next line is read.
pub struct CheckZoneUseCase {
    address: CheckAddressUseCase,
    pointer: CheckPointerUseCase,
    alias: CheckAliasUseCase,
    mail_exchanger: CheckMailExchangerUseCase,
    start_of_authority: CheckStartOfAuthorityUseCase,
}

impl CheckZoneUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self {
            address: CheckAddressUseCase::new(Arc::clone(&resolver)),
            pointer: CheckPointerUseCase::new(Arc::clone(&resolver)),
            alias: CheckAliasUseCase::new(Arc::clone(&resolver)),
            mail_exchanger: CheckMailExchangerUseCase::new(Arc::clone(&resolver)),
            start_of_authority: CheckStartOfAuthorityUseCase::new(resolver),
        }
    }

    /// Routes one parsed declaration to its checker.
    pub async fn check_entry(&self, entry: &ZoneEntry) -> Vec<CheckFinding> {
        match entry {
            ZoneEntry::NameServer => Vec::new(),
            ZoneEntry::Address { name, ip } => {
                self.address.execute(name, ip).await.into_iter().collect()
            }
            ZoneEntry::AddressWithPointer { name, ip } => self.pointer.execute(name, ip).await,
            ZoneEntry::Alias { alias, target } => {
                self.alias.execute(alias, target).await.into_iter().collect()
            }
            ZoneEntry::MailExchanger {
                domain,
                hostname,
                preference,
            } => self
                .mail_exchanger
                .execute(domain, hostname, preference)
                .await
                .into_iter()
                .collect(),
            ZoneEntry::StartOfAuthority {
                domain,
                nameserver,
                email,
            } => self
                .start_of_authority
                .execute(domain, nameserver, email)
                .await
                .into_iter()
                .collect(),
            ZoneEntry::Unknown { line } => vec![CheckFinding::UnknownType { line: line.clone() }],
            ZoneEntry::Malformed { tag, line } => vec![CheckFinding::Malformed {
                tag: *tag,
                line: line.clone(),
            }],
        }
    }

    /// Parses and checks one raw line. Blank and comment lines yield nothing.
    pub async fn check_line(&self, line: &str) -> Vec<CheckFinding> {
        match ZoneEntry::parse(line) {
            Some(entry) => self.check_entry(&entry).await,
            None => Vec::new(),
        }
    }

    /// Reads `reader` to the end, handing each finding to `on_finding` as
    /// soon as it is produced.
    ///
    /// Only read errors abort the run; every DNS problem is a finding.
    #[instrument(skip_all)]
    pub async fn execute<R, F>(
        &self,
        reader: R,
        mut on_finding: F,
    ) -> Result<ZoneCheckSummary, DomainError>
    where
        R: AsyncBufRead + Unpin,
        F: FnMut(&CheckFinding),
    {
        let mut summary = ZoneCheckSummary::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            summary.lines_read += 1;

            let Some(entry) = ZoneEntry::parse(&line) else {
                continue;
            };

            match entry {
                ZoneEntry::NameServer | ZoneEntry::Unknown { .. } | ZoneEntry::Malformed { .. } => {
                    summary.records_skipped += 1
                }
                _ => summary.records_checked += 1,
            }

            debug!(line = summary.lines_read, entry = ?entry, "Checking zone entry");

            for finding in self.check_entry(&entry).await {
                summary.record(&finding);
                on_finding(&finding);
            }
        }

        info!(
            lines = summary.lines_read,
            checked = summary.records_checked,
            skipped = summary.records_skipped,
            mismatches = summary.mismatches,
            failures = summary.query_failures,
            "Zone check finished"
        );

        Ok(summary)
    }
}

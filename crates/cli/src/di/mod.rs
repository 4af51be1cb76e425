use std::sync::Arc;
use zonecheck_application::ports::DnsResolver;
use zonecheck_application::use_cases::CheckZoneUseCase;
use zonecheck_domain::Config;
use zonecheck_infrastructure::dns::NameserverResolver;

/// Wires the resolver adapter into the use cases.
pub struct UseCases {
    pub check_zone: CheckZoneUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let resolver: Arc<dyn DnsResolver> =
            Arc::new(NameserverResolver::new(config.resolver.clone()));

        Self {
            check_zone: CheckZoneUseCase::new(resolver),
        }
    }
}

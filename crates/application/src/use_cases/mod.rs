pub mod check_zone;
pub mod checks;

pub use check_zone::{CheckZoneUseCase, ZoneCheckSummary};
pub use checks::{
    CheckAddressUseCase, CheckAliasUseCase, CheckMailExchangerUseCase, CheckPointerUseCase,
    CheckStartOfAuthorityUseCase,
};

use hickory_proto::rr::RecordType as HickoryRecordType;
use zonecheck_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries
    /// and filtering answers)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
        }
    }
}

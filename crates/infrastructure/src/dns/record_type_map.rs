//! Mapping from `hickory_proto::rr::RecordType` to `microdns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use microdns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert an incoming hickory query type. Never fails: unknown types are carried by code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            other => RecordType::Other(u16::from(other)),
        }
    }
}

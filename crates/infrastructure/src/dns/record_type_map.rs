//! Mapping from `hickory_proto::rr::RecordType` to `restdns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use restdns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Every incoming type maps; anything but A and AAAA lands in `Other`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

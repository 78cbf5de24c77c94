use hickory_proto::op::{Header, Message, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use restdns_domain::{DnsRecord, ResponseOutcome};
use std::net::IpAddr;

/// Renders a `ResponseOutcome` as the DNS reply to one request.
///
/// Header policy:
/// - answered: AA, NOERROR, one record per address
/// - empty answer: NOERROR, no records, AA clear
/// - name error: AA, NXDOMAIN
/// - server failure: SERVFAIL, AA clear
///
/// RD and RA are always clear.
pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn build(request_header: &Header, query: &Query, outcome: &ResponseOutcome) -> Message {
        let mut message = Message::new();
        message.set_header(Self::header(request_header, outcome));
        message.add_query(query.clone());
        message.add_answers(Self::answer_records(query.name(), outcome));
        message
    }

    pub fn header(request_header: &Header, outcome: &ResponseOutcome) -> Header {
        let mut header = Header::response_from_request(request_header);
        header.set_authoritative(outcome.is_authoritative());
        header.set_recursion_desired(false);
        header.set_recursion_available(false);
        header.set_response_code(Self::response_code(outcome));
        header
    }

    pub fn response_code(outcome: &ResponseOutcome) -> ResponseCode {
        match outcome {
            ResponseOutcome::Answered(_) | ResponseOutcome::EmptyAnswer => ResponseCode::NoError,
            ResponseOutcome::NameError => ResponseCode::NXDomain,
            ResponseOutcome::ServerFailure(_) => ResponseCode::ServFail,
        }
    }

    /// `query_name` is used when a record owner does not parse back into a
    /// name; owners come from the same query so this only guards the type.
    pub fn answer_records(query_name: &Name, outcome: &ResponseOutcome) -> Vec<Record> {
        outcome
            .records()
            .iter()
            .map(|record| Self::to_record(query_name, record))
            .collect()
    }

    fn to_record(query_name: &Name, record: &DnsRecord) -> Record {
        let owner = Name::from_ascii(record.owner.as_ref()).unwrap_or_else(|_| query_name.clone());
        let rdata = match record.address {
            IpAddr::V4(ipv4) => RData::A(A(ipv4)),
            IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
        };
        Record::from_rdata(owner, record.ttl, rdata)
    }
}

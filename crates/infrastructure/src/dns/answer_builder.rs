use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use microdns_domain::DnsAnswer;
use std::net::IpAddr;

/// Turns a domain answer into hickory records owned by the queried name.
pub struct AnswerBuilder;

impl AnswerBuilder {
    pub fn build(owner: &Name, answer: &DnsAnswer) -> Vec<Record> {
        answer
            .records
            .iter()
            .map(|record| {
                let rdata = match record.address {
                    IpAddr::V4(ipv4) => RData::A(A(ipv4)),
                    IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
                };
                Record::from_rdata(owner.clone(), record.ttl, rdata)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::{DNSClass, RecordType};
    use microdns_domain::DnsRecord;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;
    use std::sync::Arc;

    #[test]
    fn test_builds_internet_class_records_in_order() {
        let owner = Name::from_str("example.com.").unwrap();
        let domain: Arc<str> = Arc::from("example.com.");
        let answer = DnsAnswer::new(
            vec![
                DnsRecord::a(domain.clone(), Ipv4Addr::new(10, 0, 0, 1), 120),
                DnsRecord::aaaa(domain, Ipv6Addr::LOCALHOST, 120),
            ],
            true,
        );

        let records = AnswerBuilder::build(&owner, &answer);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].record_type(), RecordType::A);
        assert_eq!(records[1].record_type(), RecordType::AAAA);
        for record in &records {
            assert_eq!(record.name(), &owner);
            assert_eq!(record.ttl(), 120);
            assert_eq!(record.dns_class(), DNSClass::IN);
        }
        assert_eq!(records[0].data(), &RData::A(A(Ipv4Addr::new(10, 0, 0, 1))));
    }
}

use super::DnsRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub records: Vec<DnsRecord>,
    /// True when the addresses came from the record table rather than the defaults
    pub from_table: bool,
}

impl DnsAnswer {
    pub fn new(records: Vec<DnsRecord>, from_table: bool) -> Self {
        Self {
            records,
            from_table,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

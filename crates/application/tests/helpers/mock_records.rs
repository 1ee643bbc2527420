#![allow(dead_code)]

use async_trait::async_trait;
use microdns_application::ports::{RecordSource, RecordStore};
use microdns_domain::{DomainError, HostAddresses, RecordTable, RecordTableError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory store that counts how often it was replaced.
pub struct MockRecordStore {
    table: RwLock<Arc<RecordTable>>,
    replacements: AtomicUsize,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::with_table(RecordTable::new())
    }

    pub fn with_table(table: RecordTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
            replacements: AtomicUsize::new(0),
        }
    }

    pub fn from_lines(contents: &str) -> Self {
        Self::with_table(RecordTable::parse(contents).unwrap())
    }

    pub fn replacements(&self) -> usize {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl RecordStore for MockRecordStore {
    fn lookup(&self, domain: &str) -> Option<HostAddresses> {
        self.table.read().unwrap().get(domain)
    }

    fn replace(&self, table: RecordTable) {
        *self.table.write().unwrap() = Arc::new(table);
        self.replacements.fetch_add(1, Ordering::SeqCst);
    }

    fn len(&self) -> usize {
        self.table.read().unwrap().len()
    }
}

#[derive(Clone)]
pub enum SourceBehavior {
    Contents(String),
    Missing,
    Unreadable,
}

pub struct MockRecordSource {
    behavior: RwLock<SourceBehavior>,
    loads: AtomicUsize,
}

impl MockRecordSource {
    pub fn new(behavior: SourceBehavior) -> Self {
        Self {
            behavior: RwLock::new(behavior),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn with_contents(contents: &str) -> Self {
        Self::new(SourceBehavior::Contents(contents.to_string()))
    }

    pub fn set_behavior(&self, behavior: SourceBehavior) {
        *self.behavior.write().unwrap() = behavior;
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn load(&self) -> Result<Option<RecordTable>, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let behavior = self.behavior.read().unwrap().clone();
        match behavior {
            SourceBehavior::Contents(contents) => Ok(Some(RecordTable::parse(&contents)?)),
            SourceBehavior::Missing => Ok(None),
            SourceBehavior::Unreadable => Err(RecordTableError::Read {
                path: self.location(),
                message: "permission denied".to_string(),
            }
            .into()),
        }
    }

    fn location(&self) -> String {
        "mock://records".to_string()
    }
}

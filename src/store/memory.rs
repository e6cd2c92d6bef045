//! In-memory record store backed by a fixture

use crate::error::ConfigError;
use crate::record::{LanguageId, Record, Uid, WorkspaceId};
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Fixture file layout
///
/// JSON fixtures may also be a bare array of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFixture {
    Records(Vec<Record>),
    Fixture(Fixture),
}

/// Record store over a fixed record set
///
/// Children are returned ordered by `sorting`, ties broken by insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<Record>,
    index: HashMap<Uid, usize>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Load a fixture file; `.toml` files are parsed as TOML, anything else as JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let records = if is_toml {
            toml::from_str::<Fixture>(&raw)
                .map_err(|e| ConfigError::Fixture {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
                .records
        } else {
            match serde_json::from_str::<JsonFixture>(&raw).map_err(|e| {
                ConfigError::Fixture {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })? {
                JsonFixture::Records(records) => records,
                JsonFixture::Fixture(fixture) => fixture.records,
            }
        };

        debug!(path = %path.display(), record_count = records.len(), "Loaded fixture");
        Ok(Self::from_records(records))
    }

    /// Insert a record, replacing any earlier record with the same uid in place
    pub fn insert(&mut self, record: Record) {
        match self.index.get(&record.uid) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(record.uid, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted<F>(&self, predicate: F) -> Vec<Record>
    where
        F: Fn(&Record) -> bool,
    {
        let mut matching: Vec<&Record> = self.records.iter().filter(|&r| predicate(r)).collect();
        matching.sort_by_key(|r| r.sorting);
        matching.into_iter().cloned().collect()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch_one_record(&self, uid: Uid) -> Option<Record> {
        self.index.get(&uid).map(|&position| self.records[position].clone())
    }

    fn fetch_one_default_record(&self, record: &Record) -> Option<Record> {
        if record.l18n_parent == 0 {
            return None;
        }
        self.fetch_one_record(record.l18n_parent)
            .filter(|default| default.sys_language_uid == 0)
    }

    fn fetch_overlay_candidates(&self, uid: Uid, language: LanguageId) -> Vec<Record> {
        self.sorted(|r| r.l18n_parent == uid && r.sys_language_uid == language)
    }

    fn fetch_workspace_version(&self, uid: Uid, workspace: WorkspaceId) -> Option<Record> {
        if uid == 0 || workspace == 0 {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.t3ver_wsid == workspace && r.t3ver_oid == uid)
            .cloned()
    }

    fn fetch_records_by_parent_and_language(
        &self,
        parent: Uid,
        language: LanguageId,
    ) -> Vec<Record> {
        self.sorted(|r| r.tx_container_parent == parent && r.sys_language_uid == language)
    }

    fn fetch_overlay_records(&self, records: &[Record], language: LanguageId) -> Vec<Record> {
        let parents: HashSet<Uid> = records
            .iter()
            .flat_map(|r| [r.uid, r.t3ver_oid])
            .filter(|&uid| uid > 0)
            .collect();
        self.sorted(|r| r.sys_language_uid == language && parents.contains(&r.l18n_parent))
    }

    fn fetch_uids_having_workspace_version(
        &self,
        records: &[Record],
        workspace: WorkspaceId,
    ) -> Vec<Uid> {
        let candidates: HashSet<Uid> = records.iter().map(|r| r.uid).collect();
        let mut uids: Vec<Uid> = self
            .records
            .iter()
            .filter(|r| r.t3ver_wsid == workspace && candidates.contains(&r.t3ver_oid))
            .map(|r| r.t3ver_oid)
            .collect();
        uids.sort_unstable();
        uids.dedup();
        uids
    }
}

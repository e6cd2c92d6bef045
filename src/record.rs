//! Content record model
//!
//! A record is a read-only snapshot of one content element row. The columns the
//! resolver branches on are typed; every other column is carried opaquely in
//! `fields` and round-trips through serde under its original name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Record identifier
pub type Uid = u64;

/// Language identifier (0 = default language)
pub type LanguageId = i64;

/// Workspace identifier (0 = live)
pub type WorkspaceId = u64;

/// Column position of a child inside its container
pub type ColPos = i64;

/// Content element record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub uid: Uid,

    #[serde(default)]
    pub pid: Uid,

    #[serde(rename = "CType", default)]
    pub ctype: String,

    #[serde(default)]
    pub sys_language_uid: LanguageId,

    /// Uid of the default-language original (0 if none)
    #[serde(default)]
    pub l18n_parent: Uid,

    /// Workspace owning this version (0 = live)
    #[serde(default)]
    pub t3ver_wsid: WorkspaceId,

    /// Live uid this workspace version overlays (0 for live records)
    #[serde(default)]
    pub t3ver_oid: Uid,

    #[serde(rename = "colPos", default)]
    pub col_pos: ColPos,

    /// Uid of the container this record is a child of (0 if top level)
    #[serde(default)]
    pub tx_container_parent: Uid,

    #[serde(default)]
    pub sorting: i64,

    /// Remaining columns
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create a live, default-language record
    pub fn new(uid: Uid, ctype: impl Into<String>) -> Self {
        Self {
            uid,
            pid: 0,
            ctype: ctype.into(),
            sys_language_uid: 0,
            l18n_parent: 0,
            t3ver_wsid: 0,
            t3ver_oid: 0,
            col_pos: 0,
            tx_container_parent: 0,
            sorting: 0,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_pid(mut self, pid: Uid) -> Self {
        self.pid = pid;
        self
    }

    /// Mark as a translation of `l18n_parent` in `language`
    pub fn translated(mut self, language: LanguageId, l18n_parent: Uid) -> Self {
        self.sys_language_uid = language;
        self.l18n_parent = l18n_parent;
        self
    }

    /// Mark as the version of live record `t3ver_oid` in `workspace`
    pub fn versioned(mut self, workspace: WorkspaceId, t3ver_oid: Uid) -> Self {
        self.t3ver_wsid = workspace;
        self.t3ver_oid = t3ver_oid;
        self
    }

    /// Place as a child of `parent` in column `col_pos`
    pub fn child_of(mut self, parent: Uid, col_pos: ColPos) -> Self {
        self.tx_container_parent = parent;
        self.col_pos = col_pos;
        self
    }

    pub fn with_sorting(mut self, sorting: i64) -> Self {
        self.sorting = sorting;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up an opaque column
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn is_translation(&self) -> bool {
        self.sys_language_uid > 0
    }

    pub fn is_workspace_version(&self) -> bool {
        self.t3ver_wsid != 0
    }

    /// Uid of the live record this row stands for
    pub fn live_uid(&self) -> Uid {
        if self.t3ver_oid > 0 {
            self.t3ver_oid
        } else {
            self.uid
        }
    }

    /// Whether `candidate` is a translation of this record.
    ///
    /// A translation may point at this row's own uid or, when this row is a
    /// workspace version, at the live uid it overlays.
    pub fn is_translated_by(&self, candidate: &Record) -> bool {
        candidate.l18n_parent == self.uid
            || (self.t3ver_oid > 0 && candidate.l18n_parent == self.t3ver_oid)
    }
}

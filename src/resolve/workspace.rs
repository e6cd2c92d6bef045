//! Workspace filtering of fetched record sets.

use crate::context::WorkspaceContext;
use crate::record::{Record, Uid};
use crate::store::RecordStore;
use std::collections::HashSet;
use tracing::trace;

/// Drops records that are not visible in the active workspace.
///
/// Live: every workspace version is dropped. Inside workspace `W`: versions
/// owned by other workspaces are dropped, and so is every live record that has
/// a pending version in `W`; `W`'s own versions are kept.
pub struct WorkspaceFilter<'a> {
    store: &'a dyn RecordStore,
    workspace: WorkspaceContext,
}

impl<'a> WorkspaceFilter<'a> {
    pub fn new(store: &'a dyn RecordStore, workspace: WorkspaceContext) -> Self {
        Self { store, workspace }
    }

    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        if records.is_empty() {
            return records;
        }

        let before = records.len();
        let filtered: Vec<Record> = if self.workspace.is_live() {
            records
                .into_iter()
                .filter(|record| !record.is_workspace_version())
                .collect()
        } else {
            let workspace_id = self.workspace.workspace_id;
            let superseded: HashSet<Uid> = self
                .store
                .fetch_uids_having_workspace_version(&records, workspace_id)
                .into_iter()
                .collect();
            records
                .into_iter()
                .filter(|record| {
                    if record.t3ver_wsid == workspace_id {
                        true
                    } else {
                        record.t3ver_wsid == 0 && !superseded.contains(&record.uid)
                    }
                })
                .collect()
        };

        trace!(
            workspace_id = self.workspace.workspace_id,
            before,
            after = filtered.len(),
            "Workspace filter applied"
        );
        filtered
    }

    /// Variant of a single record visible in the active workspace.
    ///
    /// Live: only live records. Inside workspace `W`: `W`'s own versions, and
    /// live records replaced by their version in `W` when one exists.
    pub fn select(&self, record: Record) -> Option<Record> {
        let workspace_id = self.workspace.workspace_id;
        if record.is_workspace_version() {
            return (!self.workspace.is_live() && record.t3ver_wsid == workspace_id)
                .then_some(record);
        }
        if self.workspace.is_live() {
            return Some(record);
        }
        match self.store.fetch_workspace_version(record.uid, workspace_id) {
            Some(version) => {
                trace!(
                    uid = record.uid,
                    version_uid = version.uid,
                    workspace_id,
                    "Using workspace version"
                );
                Some(version)
            }
            None => Some(record),
        }
    }
}

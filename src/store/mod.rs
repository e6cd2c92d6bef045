//! Record Store
//!
//! Read-only query interface over raw content records. Implementations carry no
//! business logic: absence is `None` or an empty result, never an error.

pub mod memory;

pub use memory::InMemoryRecordStore;

use crate::record::{LanguageId, Record, Uid, WorkspaceId};

/// Record Store interface
pub trait RecordStore {
    /// Fetch one record by uid, regardless of language or workspace
    fn fetch_one_record(&self, uid: Uid) -> Option<Record>;

    /// Fetch the default-language original a localized record points at
    fn fetch_one_default_record(&self, record: &Record) -> Option<Record>;

    /// Fetch the translation of `uid` in `language`
    fn fetch_one_overlay_record(&self, uid: Uid, language: LanguageId) -> Option<Record> {
        self.fetch_overlay_candidates(uid, language).into_iter().next()
    }

    /// Fetch every translation of `uid` in `language`, workspace versions
    /// included, in sibling order
    fn fetch_overlay_candidates(&self, uid: Uid, language: LanguageId) -> Vec<Record>;

    /// Fetch the version of live record `uid` owned by `workspace`
    fn fetch_workspace_version(&self, uid: Uid, workspace: WorkspaceId) -> Option<Record>;

    /// Fetch the children of container `parent` in `language`, in sibling order
    fn fetch_records_by_parent_and_language(&self, parent: Uid, language: LanguageId)
        -> Vec<Record>;

    /// Fetch translations in `language` of any of `records`.
    ///
    /// A translation belongs to a record when its `l18n_parent` is the record's
    /// uid or, for workspace versions, the live uid it overlays.
    fn fetch_overlay_records(&self, records: &[Record], language: LanguageId) -> Vec<Record>;

    /// Uids among `records` that have a pending version in `workspace`
    fn fetch_uids_having_workspace_version(
        &self,
        records: &[Record],
        workspace: WorkspaceId,
    ) -> Vec<Uid>;
}

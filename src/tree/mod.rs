//! Container Tree
//!
//! A resolved container: the skeleton record plus its children grouped by
//! column position. Built fresh per resolution and handed to rendering.

pub mod builder;

pub use builder::ContainerTreeBuilder;

use crate::context::TranslationMode;
use crate::record::{ColPos, LanguageId, Record, Uid};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerTree {
    /// Root record (the default-language original in connected mode)
    pub root_record: Record,
    /// Children by column, never holding an empty list.
    ///
    /// Every child's `col_pos` equals its key. In connected mode a translation
    /// sits in the slot of its default child and carries that colPos, which may
    /// differ from the colPos stored on the translated row.
    pub children_by_col_pos: BTreeMap<ColPos, Vec<Record>>,
    pub language_id: LanguageId,
    pub translation_mode: TranslationMode,
}

impl ContainerTree {
    pub fn uid(&self) -> Uid {
        self.root_record.uid
    }

    pub fn pid(&self) -> Uid {
        self.root_record.pid
    }

    pub fn ctype(&self) -> &str {
        &self.root_record.ctype
    }

    /// Live uid of the root, for workspace versions the uid they overlay
    pub fn uid_of_live_workspace(&self) -> Uid {
        self.root_record.live_uid()
    }

    pub fn language_id(&self) -> LanguageId {
        self.language_id
    }

    pub fn is_connected_mode(&self) -> bool {
        self.translation_mode == TranslationMode::Connected
    }

    pub fn container_record(&self) -> &Record {
        &self.root_record
    }

    /// Children in column `col_pos`; empty if the column holds none.
    ///
    /// Connected-mode translations are reported in the slot of their default
    /// child, with `col_pos` rewritten to match.
    pub fn children_by_col_pos(&self, col_pos: ColPos) -> &[Record] {
        self.children_by_col_pos
            .get(&col_pos)
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    /// All children, column by column in ascending colPos
    pub fn child_records(&self) -> impl Iterator<Item = &Record> {
        self.children_by_col_pos.values().flatten()
    }

    pub fn child_uids(&self) -> Vec<Uid> {
        self.child_records().map(|r| r.uid).collect()
    }

    pub fn child_col_pos_list(&self) -> Vec<ColPos> {
        self.children_by_col_pos.keys().copied().collect()
    }

    pub fn has_child_in_col_pos(&self, col_pos: ColPos, child_uid: Uid) -> bool {
        self.children_by_col_pos(col_pos)
            .iter()
            .any(|child| child.uid == child_uid)
    }

    pub fn child_count(&self) -> usize {
        self.children_by_col_pos.values().map(Vec::len).sum()
    }
}

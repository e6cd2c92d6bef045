//! Tree builder for assembling resolved containers

use crate::context::TranslationMode;
use crate::record::{ColPos, LanguageId, Record};
use crate::tree::ContainerTree;
use std::collections::BTreeMap;

/// Assembles a `ContainerTree` from an already resolved root and ordered children
pub struct ContainerTreeBuilder {
    root_record: Record,
    children: Vec<Record>,
    language_id: LanguageId,
    translation_mode: TranslationMode,
}

impl ContainerTreeBuilder {
    pub fn new(root_record: Record) -> Self {
        Self {
            root_record,
            children: Vec::new(),
            language_id: 0,
            translation_mode: TranslationMode::None,
        }
    }

    pub fn language(mut self, language_id: LanguageId, mode: TranslationMode) -> Self {
        self.language_id = language_id;
        self.translation_mode = mode;
        self
    }

    /// Set the ordered child sequence
    pub fn children(mut self, children: Vec<Record>) -> Self {
        self.children = children;
        self
    }

    pub fn build(self) -> ContainerTree {
        ContainerTree {
            root_record: self.root_record,
            children_by_col_pos: group_by_col_pos(self.children),
            language_id: self.language_id,
            translation_mode: self.translation_mode,
        }
    }
}

/// Group records by colPos, keeping relative order within each column
pub fn group_by_col_pos(records: Vec<Record>) -> BTreeMap<ColPos, Vec<Record>> {
    let mut grouped: BTreeMap<ColPos, Vec<Record>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.col_pos).or_default().push(record);
    }
    grouped
}

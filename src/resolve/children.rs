//! Child assembly: fetch, workspace-filter, translate and order container children.

use crate::context::WorkspaceContext;
use crate::record::Record;
use crate::resolve::overlay::ChildPlan;
use crate::resolve::workspace::WorkspaceFilter;
use crate::store::RecordStore;
use tracing::{debug, trace};

/// Child Assembler
pub struct ChildAssembler<'a> {
    store: &'a dyn RecordStore,
    filter: WorkspaceFilter<'a>,
}

impl<'a> ChildAssembler<'a> {
    pub fn new(store: &'a dyn RecordStore, workspace: WorkspaceContext) -> Self {
        Self {
            store,
            filter: WorkspaceFilter::new(store, workspace),
        }
    }

    /// Ordered children for a resolved container
    pub fn assemble(&self, plan: &ChildPlan) -> Vec<Record> {
        let children = if plan.aligned {
            let defaults = self.filter.apply(
                self.store
                    .fetch_records_by_parent_and_language(plan.parent_uid, 0),
            );
            if plan.perform_overlays && plan.language > 0 {
                let translations = self
                    .filter
                    .apply(self.store.fetch_overlay_records(&defaults, plan.language));
                debug!(
                    parent_uid = plan.parent_uid,
                    defaults = defaults.len(),
                    translations = translations.len(),
                    "Aligning translated children"
                );
                overlay_children(defaults, &translations)
            } else {
                defaults
            }
        } else {
            self.store
                .fetch_records_by_parent_and_language(plan.parent_uid, plan.language)
        };

        self.filter.apply(children)
    }
}

/// Replace each default child by its translation, keeping default order.
///
/// When several translations point at the same default child the last one in
/// `translations` wins. Default children without a translation are kept. A
/// translation takes the slot (colPos) of the default child it replaces.
pub fn overlay_children(defaults: Vec<Record>, translations: &[Record]) -> Vec<Record> {
    let mut overlaid = Vec::with_capacity(defaults.len());
    for default in defaults {
        match translations
            .iter()
            .rev()
            .find(|candidate| default.is_translated_by(candidate))
        {
            Some(translation) => {
                let mut translation = translation.clone();
                if translation.col_pos != default.col_pos {
                    trace!(
                        uid = translation.uid,
                        col_pos = translation.col_pos,
                        default_col_pos = default.col_pos,
                        "Translation moved to default slot"
                    );
                    translation.col_pos = default.col_pos;
                }
                overlaid.push(translation);
            }
            None => overlaid.push(default),
        }
    }
    overlaid
}

//! Root record resolution: workspace variant, language overlay, container check
//! and translation mode.

use crate::context::{ExecutionMode, LanguageContext, TranslationMode, WorkspaceContext};
use crate::error::ResolveError;
use crate::record::{LanguageId, Record, Uid};
use crate::registry::TypeRegistry;
use crate::resolve::workspace::WorkspaceFilter;
use crate::store::RecordStore;
use tracing::{debug, warn};

/// Where and how the children of a resolved container are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildPlan {
    /// Container uid the children hang off
    pub parent_uid: Uid,
    /// Target language of the children
    pub language: LanguageId,
    /// Children are fetched in the default language and aligned to it
    pub aligned: bool,
    /// Replace aligned default children by their translations
    pub perform_overlays: bool,
}

/// Outcome of root resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoot {
    /// Record fetched for the requested uid
    pub record: Record,
    /// Default-language original, present in connected mode
    pub default_record: Option<Record>,
    pub language_id: LanguageId,
    pub translation_mode: TranslationMode,
    pub children: ChildPlan,
}

impl ResolvedRoot {
    /// Record the tree is rooted at: the default original when there is one
    pub fn skeleton(&self) -> &Record {
        self.default_record.as_ref().unwrap_or(&self.record)
    }
}

/// Overlay Resolver
pub struct OverlayResolver<'a> {
    store: &'a dyn RecordStore,
    registry: &'a dyn TypeRegistry,
}

impl<'a> OverlayResolver<'a> {
    pub fn new(store: &'a dyn RecordStore, registry: &'a dyn TypeRegistry) -> Self {
        Self { store, registry }
    }

    /// Resolve the root record variant for `uid`
    ///
    /// Only variants visible in `workspace` are considered; inside a workspace
    /// its own version of the root wins over the live record.
    pub fn resolve(
        &self,
        uid: Uid,
        mode: ExecutionMode,
        language: &LanguageContext,
        workspace: WorkspaceContext,
    ) -> Result<ResolvedRoot, ResolveError> {
        let visibility = WorkspaceFilter::new(self.store, workspace);

        // Front end: uid is always the default-language uid.
        // Back end: uid already is the localized row.
        let overlay_language = match mode {
            ExecutionMode::FrontEnd if language.language_id > 0 => Some(language.language_id),
            _ => None,
        };

        let record = match overlay_language {
            Some(language_id) => {
                self.fetch_overlaid(&visibility, uid, language_id, language.perform_overlays)
            }
            None => self.fetch_visible(&visibility, uid),
        }
        .ok_or_else(|| {
            warn!(uid, %mode, workspace_id = workspace.workspace_id, "Container record not found");
            ResolveError::NotFound { uid }
        })?;

        if !self.registry.is_container_element(&record.ctype) {
            warn!(uid, ctype = %record.ctype, "Record is not a container element");
            return Err(ResolveError::NotContainer {
                uid,
                ctype: record.ctype.clone(),
            });
        }

        let language_id = overlay_language.unwrap_or(record.sys_language_uid);
        // Back end aligns translations unconditionally; the front end honours the
        // language's overlay setting.
        let perform_overlays = match mode {
            ExecutionMode::FrontEnd => language.perform_overlays,
            ExecutionMode::BackEnd => true,
        };

        if record.is_translation() {
            let default_record = self
                .store
                .fetch_one_default_record(&record)
                .and_then(|default| visibility.select(default));
            match default_record {
                None => {
                    debug!(uid = record.uid, language_id, "Free mode translation");
                    let children = ChildPlan {
                        parent_uid: record.live_uid(),
                        language: language_id,
                        aligned: false,
                        perform_overlays: false,
                    };
                    Ok(ResolvedRoot {
                        record,
                        default_record: None,
                        language_id,
                        translation_mode: TranslationMode::Free,
                        children,
                    })
                }
                Some(default_record) => {
                    debug!(
                        uid = record.uid,
                        default_uid = default_record.uid,
                        language_id,
                        "Connected mode translation"
                    );
                    let children = ChildPlan {
                        parent_uid: default_record.live_uid(),
                        language: language_id,
                        aligned: true,
                        perform_overlays,
                    };
                    Ok(ResolvedRoot {
                        record,
                        default_record: Some(default_record),
                        language_id,
                        translation_mode: TranslationMode::Connected,
                        children,
                    })
                }
            }
        } else if language_id > 0 {
            // Default-language record requested in a translated front end:
            // the record is its own skeleton.
            debug!(uid = record.uid, language_id, "Default record overlaid in place");
            let children = ChildPlan {
                parent_uid: record.live_uid(),
                language: language_id,
                aligned: true,
                perform_overlays,
            };
            Ok(ResolvedRoot {
                record,
                default_record: None,
                language_id,
                translation_mode: TranslationMode::Connected,
                children,
            })
        } else {
            let children = ChildPlan {
                parent_uid: record.live_uid(),
                language: 0,
                aligned: false,
                perform_overlays: false,
            };
            Ok(ResolvedRoot {
                record,
                default_record: None,
                language_id: 0,
                translation_mode: TranslationMode::None,
                children,
            })
        }
    }

    /// Plain record for `uid` as seen from the active workspace
    fn fetch_visible(&self, visibility: &WorkspaceFilter<'_>, uid: Uid) -> Option<Record> {
        self.store
            .fetch_one_record(uid)
            .and_then(|record| visibility.select(record))
    }

    fn fetch_overlaid(
        &self,
        visibility: &WorkspaceFilter<'_>,
        uid: Uid,
        language_id: LanguageId,
        fallback: bool,
    ) -> Option<Record> {
        let overlay = self
            .store
            .fetch_overlay_candidates(uid, language_id)
            .into_iter()
            .find_map(|candidate| visibility.select(candidate));
        match overlay {
            Some(record) => Some(record),
            None if fallback => {
                debug!(uid, language_id, "No overlay record, falling back to default");
                self.fetch_visible(visibility, uid)
            }
            None => None,
        }
    }
}

//! Container resolution
//!
//! Picks the authoritative root variant for a uid across workspace and
//! language, assembles its children and groups them into a `ContainerTree`.

pub mod children;
pub mod overlay;
pub mod workspace;

pub use children::{overlay_children, ChildAssembler};
pub use overlay::{ChildPlan, OverlayResolver, ResolvedRoot};
pub use workspace::WorkspaceFilter;

use crate::context::{ExecutionMode, LanguageContext, WorkspaceContext};
use crate::error::ResolveError;
use crate::record::Uid;
use crate::registry::TypeRegistry;
use crate::store::RecordStore;
use crate::tree::{ContainerTree, ContainerTreeBuilder};
use tracing::{debug, instrument};

/// Resolves containers against a record store and a type registry.
///
/// Holds no state across calls; resolving the same inputs twice against an
/// unchanged store yields equal trees.
pub struct ContainerResolver<'a> {
    store: &'a dyn RecordStore,
    registry: &'a dyn TypeRegistry,
}

impl<'a> ContainerResolver<'a> {
    pub fn new(store: &'a dyn RecordStore, registry: &'a dyn TypeRegistry) -> Self {
        Self { store, registry }
    }

    #[instrument(
        skip(self, language, workspace),
        fields(
            language_id = language.language_id,
            workspace_id = workspace.workspace_id
        )
    )]
    pub fn resolve_container(
        &self,
        uid: Uid,
        mode: ExecutionMode,
        language: &LanguageContext,
        workspace: WorkspaceContext,
    ) -> Result<ContainerTree, ResolveError> {
        let root = OverlayResolver::new(self.store, self.registry)
            .resolve(uid, mode, language, workspace)?;
        let children = ChildAssembler::new(self.store, workspace).assemble(&root.children);

        debug!(
            root_uid = root.skeleton().uid,
            translation_mode = ?root.translation_mode,
            child_count = children.len(),
            "Container resolved"
        );

        let ResolvedRoot {
            record,
            default_record,
            language_id,
            translation_mode,
            ..
        } = root;
        Ok(ContainerTreeBuilder::new(default_record.unwrap_or(record))
            .language(language_id, translation_mode)
            .children(children)
            .build())
    }
}

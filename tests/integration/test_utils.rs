//! Shared fixtures for integration tests

use container_resolver::record::{ColPos, Uid};
use container_resolver::registry::{ContainerConfiguration, ContainerRegistry};
use container_resolver::{
    ContainerResolver, ContainerTree, ExecutionMode, InMemoryRecordStore, LanguageContext,
    Record, ResolveError, WorkspaceContext,
};

pub const CONTAINER: &str = "b13-2cols";

pub fn registry() -> ContainerRegistry {
    [ContainerConfiguration::new(CONTAINER)
        .with_column(0, "left")
        .with_column(1, "right")]
    .into_iter()
    .collect()
}

/// Child content element with an explicit sibling position
pub fn child(uid: Uid, parent: Uid, col_pos: ColPos, sorting: i64) -> Record {
    Record::new(uid, "text")
        .child_of(parent, col_pos)
        .with_sorting(sorting)
}

pub fn resolve(
    store: &InMemoryRecordStore,
    uid: Uid,
    mode: ExecutionMode,
    language: LanguageContext,
    workspace: WorkspaceContext,
) -> Result<ContainerTree, ResolveError> {
    let registry = registry();
    ContainerResolver::new(store, &registry).resolve_container(uid, mode, &language, workspace)
}

pub fn column(tree: &ContainerTree, col_pos: ColPos) -> Vec<Uid> {
    tree.children_by_col_pos(col_pos)
        .iter()
        .map(|r| r.uid)
        .collect()
}

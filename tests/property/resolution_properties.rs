//! Property-based tests for resolution invariants

use container_resolver::record::Uid;
use container_resolver::registry::{ContainerConfiguration, ContainerRegistry};
use container_resolver::{
    ContainerResolver, ContainerTree, ExecutionMode, InMemoryRecordStore, LanguageContext,
    Record, TranslationMode, WorkspaceContext,
};
use proptest::prelude::*;

const CONTAINER: &str = "b13-2cols";

/// (colPos, sorting, translated, workspace owning a pending version)
type ChildSpec = (i64, i64, bool, u64);

fn child_specs() -> impl Strategy<Value = Vec<ChildSpec>> {
    proptest::collection::vec((0i64..3, 0i64..100, any::<bool>(), 0u64..3), 0..12)
}

fn registry() -> ContainerRegistry {
    [ContainerConfiguration::new(CONTAINER)].into_iter().collect()
}

/// Container 5 with translation 10 (language 1). Default child `i` is uid
/// `100 + i`, its translation `200 + i`, its workspace version `300 + i`.
fn build_store(specs: &[ChildSpec]) -> InMemoryRecordStore {
    let mut records = vec![
        Record::new(5, CONTAINER),
        Record::new(10, CONTAINER).translated(1, 5),
    ];
    for (i, &(col_pos, sorting, translated, workspace)) in specs.iter().enumerate() {
        let uid = 100 + i as Uid;
        records.push(Record::new(uid, "text").child_of(5, col_pos).with_sorting(sorting));
        if translated {
            records.push(
                Record::new(200 + i as Uid, "text")
                    .child_of(10, col_pos)
                    .with_sorting(sorting)
                    .translated(1, uid),
            );
        }
        if workspace > 0 {
            records.push(
                Record::new(300 + i as Uid, "text")
                    .child_of(5, col_pos)
                    .with_sorting(sorting)
                    .versioned(workspace, uid),
            );
        }
    }
    InMemoryRecordStore::from_records(records)
}

fn resolve(
    store: &InMemoryRecordStore,
    uid: Uid,
    mode: ExecutionMode,
    language: LanguageContext,
    workspace: WorkspaceContext,
) -> ContainerTree {
    let registry = registry();
    ContainerResolver::new(store, &registry)
        .resolve_container(uid, mode, &language, workspace)
        .unwrap()
}

/// Index into the generated child specs of a resolved child
fn spec_index(child: &Record) -> usize {
    (child.uid % 100) as usize
}

/// Connected mode keeps one child per default child, in its default slot and
/// in default order, for either execution mode and any workspace
#[test]
fn test_connected_mode_preserves_default_slots() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(child_specs(), 0u64..3, any::<bool>()),
            |(specs, workspace_id, frontend)| {
                let store = build_store(&specs);
                let (uid, mode, language) = if frontend {
                    (5, ExecutionMode::FrontEnd, LanguageContext::new(1, true))
                } else {
                    (10, ExecutionMode::BackEnd, LanguageContext::default())
                };
                let workspace = WorkspaceContext::new(workspace_id);
                let tree = resolve(&store, uid, mode, language, workspace);

                prop_assert_eq!(tree.translation_mode, TranslationMode::Connected);
                prop_assert_eq!(tree.child_count(), specs.len());

                for (i, &(col_pos, _, translated, workspace)) in specs.iter().enumerate() {
                    let default_uid = if workspace_id > 0 && workspace == workspace_id {
                        300 + i as Uid
                    } else {
                        100 + i as Uid
                    };
                    let expected = if translated { 200 + i as Uid } else { default_uid };
                    let found = tree.has_child_in_col_pos(col_pos, expected);
                    prop_assert!(found, "child {} missing from slot {}", expected, col_pos);
                }

                for col_pos in tree.child_col_pos_list() {
                    let sortings: Vec<i64> = tree
                        .children_by_col_pos(col_pos)
                        .iter()
                        .map(|child| specs[spec_index(child)].1)
                        .collect();
                    prop_assert!(sortings.windows(2).all(|w| w[0] <= w[1]));
                }
                Ok(())
            },
        )
        .unwrap();
}

/// The live workspace never shows a workspace version
#[test]
fn test_live_workspace_shows_no_versions() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&child_specs(), |specs| {
            let store = build_store(&specs);
            let tree = resolve(
                &store,
                5,
                ExecutionMode::BackEnd,
                LanguageContext::default(),
                WorkspaceContext::live(),
            );
            prop_assert!(tree.child_records().all(|r| r.t3ver_wsid == 0));
            prop_assert_eq!(tree.child_count(), specs.len());
            Ok(())
        })
        .unwrap();
}

/// Inside a workspace, its versions replace the live records they supersede
#[test]
fn test_workspace_versions_supersede_live_records() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(child_specs(), 1u64..3), |(specs, workspace_id)| {
            let store = build_store(&specs);
            let tree = resolve(
                &store,
                5,
                ExecutionMode::BackEnd,
                LanguageContext::default(),
                WorkspaceContext::new(workspace_id),
            );

            prop_assert_eq!(tree.child_count(), specs.len());
            for (i, &(_, _, _, workspace)) in specs.iter().enumerate() {
                let live_uid = 100 + i as Uid;
                let shown = tree
                    .child_records()
                    .find(|r| r.live_uid() == live_uid)
                    .map(|r| r.uid);
                let expected = if workspace == workspace_id {
                    300 + i as Uid
                } else {
                    live_uid
                };
                prop_assert_eq!(shown, Some(expected));
            }
            Ok(())
        })
        .unwrap();
}

/// Free mode children follow their sorting within each column
#[test]
fn test_free_mode_children_follow_sorting() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec((0i64..3, 0i64..100), 0..12), |specs| {
            let mut records = vec![Record::new(15, CONTAINER).translated(2, 0)];
            for (i, &(col_pos, sorting)) in specs.iter().enumerate() {
                records.push(
                    Record::new(400 + i as Uid, "text")
                        .child_of(15, col_pos)
                        .with_sorting(sorting)
                        .translated(2, 0),
                );
            }
            let store = InMemoryRecordStore::from_records(records);
            let tree = resolve(
                &store,
                15,
                ExecutionMode::BackEnd,
                LanguageContext::default(),
                WorkspaceContext::live(),
            );

            prop_assert_eq!(tree.translation_mode, TranslationMode::Free);
            prop_assert_eq!(tree.child_count(), specs.len());
            for col_pos in tree.child_col_pos_list() {
                let sortings: Vec<i64> = tree
                    .children_by_col_pos(col_pos)
                    .iter()
                    .map(|r| r.sorting)
                    .collect();
                prop_assert!(sortings.windows(2).all(|w| w[0] <= w[1]));
            }
            Ok(())
        })
        .unwrap();
}

/// Resolving twice against an unchanged store yields equal trees
#[test]
fn test_resolution_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(child_specs(), 0u64..3, 0i64..3, any::<bool>()),
            |(specs, workspace_id, language_id, frontend)| {
                let store = build_store(&specs);
                let (uid, mode) = if frontend {
                    (5, ExecutionMode::FrontEnd)
                } else {
                    (10, ExecutionMode::BackEnd)
                };
                let language = LanguageContext::new(language_id, true);
                let workspace = WorkspaceContext::new(workspace_id);

                let first = resolve(&store, uid, mode, language, workspace);
                let second = resolve(&store, uid, mode, language, workspace);
                prop_assert_eq!(first, second);
                Ok(())
            },
        )
        .unwrap();
}

//! Presentation: text and json formatters for resolved trees and registries.

use crate::registry::ContainerRegistry;
use crate::tree::ContainerTree;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_tree_json(tree: &ContainerTree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

pub fn format_tree_text(tree: &ContainerTree, registry: &ContainerRegistry) -> String {
    let mut output = format!(
        "Container: {} ({})\nLanguage: {} ({:?})\n",
        tree.uid(),
        tree.ctype(),
        tree.language_id(),
        tree.translation_mode
    );

    if tree.child_count() == 0 {
        output.push_str("No children.");
        return output;
    }

    let column_names = registry
        .configuration(tree.ctype())
        .map(|c| c.columns.clone())
        .unwrap_or_default();

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["colPos", "column", "uid", "CType", "language", "workspace"]);
    for (col_pos, children) in &tree.children_by_col_pos {
        let name = column_names
            .iter()
            .find(|c| c.col_pos == *col_pos)
            .map(|c| c.name.as_str())
            .unwrap_or("");
        for child in children {
            table.add_row(vec![
                col_pos.to_string(),
                name.to_string(),
                child.uid.to_string(),
                child.ctype.clone(),
                child.sys_language_uid.to_string(),
                child.t3ver_wsid.to_string(),
            ]);
        }
    }
    output.push_str(&table.to_string());
    output
}

pub fn format_containers_table(registry: &ContainerRegistry) -> String {
    if registry.is_empty() {
        return "No container types registered.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["CType", "label", "columns"]);
    for ctype in registry.ctypes() {
        if let Some(configuration) = registry.configuration(ctype) {
            let columns: Vec<String> = configuration
                .columns
                .iter()
                .map(|c| format!("{}:{}", c.col_pos, c.name))
                .collect();
            table.add_row(vec![
                configuration.ctype.clone(),
                configuration.label.clone(),
                columns.join(", "),
            ]);
        }
    }
    table.to_string()
}

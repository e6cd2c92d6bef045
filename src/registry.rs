//! Container type registry
//!
//! Classifies CTypes as container elements and keeps the column layout each
//! container type declares.

use crate::record::ColPos;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type Registry interface
pub trait TypeRegistry {
    fn is_container_element(&self, ctype: &str) -> bool;
}

/// One column of a container grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfiguration {
    pub col_pos: ColPos,
    #[serde(default)]
    pub name: String,
}

/// Registered container type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfiguration {
    pub ctype: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub columns: Vec<ColumnConfiguration>,
}

impl ContainerConfiguration {
    pub fn new(ctype: impl Into<String>) -> Self {
        let ctype = ctype.into();
        Self {
            label: ctype.clone(),
            ctype,
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, col_pos: ColPos, name: impl Into<String>) -> Self {
        self.columns.push(ColumnConfiguration {
            col_pos,
            name: name.into(),
        });
        self
    }
}

/// Registry backed by container configurations
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    containers: BTreeMap<String, ContainerConfiguration>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container type, replacing any earlier registration of the same CType
    pub fn register(&mut self, configuration: ContainerConfiguration) {
        self.containers
            .insert(configuration.ctype.clone(), configuration);
    }

    pub fn configuration(&self, ctype: &str) -> Option<&ContainerConfiguration> {
        self.containers.get(ctype)
    }

    /// Declared column positions of a container type, in declaration order
    pub fn column_positions(&self, ctype: &str) -> Vec<ColPos> {
        self.configuration(ctype)
            .map(|c| c.columns.iter().map(|column| column.col_pos).collect())
            .unwrap_or_default()
    }

    pub fn ctypes(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl FromIterator<ContainerConfiguration> for ContainerRegistry {
    fn from_iter<T: IntoIterator<Item = ContainerConfiguration>>(iter: T) -> Self {
        let mut registry = Self::new();
        for configuration in iter {
            registry.register(configuration);
        }
        registry
    }
}

impl TypeRegistry for ContainerRegistry {
    fn is_container_element(&self, ctype: &str) -> bool {
        self.containers.contains_key(ctype)
    }
}

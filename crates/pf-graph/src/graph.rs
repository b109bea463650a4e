//! Frozen network topology.

use std::collections::HashMap;

use pf_core::CompId;

use crate::component::{Component, ComponentKind};
use crate::rules::HighlightRule;
use crate::validate;

/// A validated, immutable arena of components with their wiring, the
/// designated source and the highlight-exception table.
///
/// Only the shape lives here. Valve state and flow flags are owned by the
/// flow engine, which indexes its per-component vectors by `CompId::slot`.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) components: Vec<Component>,
    pub(crate) names: HashMap<String, CompId>,
    pub(crate) source: CompId,
    pub(crate) rules: Vec<HighlightRule>,
}

impl Graph {
    /// All components, in insertion (id) order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get a component by id (None if the id belongs to another graph).
    pub fn component(&self, id: CompId) -> Option<&Component> {
        self.components.get(id.slot())
    }

    /// Look up a component by its unique name.
    pub fn find(&self, name: &str) -> Option<CompId> {
        self.names.get(name).copied()
    }

    pub fn name(&self, id: CompId) -> Option<&str> {
        self.component(id).map(|c| c.name.as_str())
    }

    pub fn kind(&self, id: CompId) -> Option<ComponentKind> {
        self.component(id).map(|c| c.kind)
    }

    /// The feed tank traversal starts from.
    pub fn source(&self) -> CompId {
        self.source
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Ids of every component of `kind`, in id order.
    pub fn ids_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = CompId> + '_ {
        self.components
            .iter()
            .filter(move |c| c.kind == kind)
            .map(|c| c.id)
    }

    /// Which components the source can reach with every valve open.
    pub fn reachable_ignoring_valves(&self) -> Vec<bool> {
        validate::static_reach(&self.components, self.source)
    }
}

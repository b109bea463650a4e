//! Incremental network builder.

use pf_core::{CompId, Ports};

use crate::component::{Component, ComponentKind, Neighbors};
use crate::error::ConfigResult;
use crate::graph::Graph;
use crate::rules::HighlightRule;
use crate::validate;

/// Builder for assembling a network once, at startup.
///
/// Add components first, then wire them with `connect`, pick the source and
/// register highlight rules. `build()` validates everything and freezes the
/// result into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    components: Vec<Component>,
    links: Vec<(CompId, Neighbors)>,
    terminals: Vec<CompId>,
    source: Option<CompId>,
    rules: Vec<HighlightRule>,
    next_id: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component with its declared pipe stubs and return its id.
    pub fn add(&mut self, name: impl Into<String>, kind: ComponentKind, ports: Ports) -> CompId {
        let id = CompId::from_index(self.next_id);
        self.next_id += 1;
        self.components.push(Component {
            id,
            name: name.into(),
            kind,
            ports,
            neighbors: Neighbors::NONE,
            terminal: kind.is_terminal(),
        });
        id
    }

    pub fn add_pipe(&mut self, name: impl Into<String>, ports: Ports) -> CompId {
        self.add(name, ComponentKind::Pipe, ports)
    }

    /// Tanks are drawn without stubs; pipes butt straight onto the shell.
    pub fn add_tank(&mut self, name: impl Into<String>) -> CompId {
        self.add(name, ComponentKind::Tank, Ports::NONE)
    }

    /// Mark a component as an allowed dead end (e.g. a vent solenoid).
    /// Checked and applied in `build()`.
    pub fn mark_terminal(&mut self, id: CompId) {
        self.terminals.push(id);
    }

    /// Record the outbound links of `id`. Checked and applied in `build()`.
    pub fn connect(&mut self, id: CompId, neighbors: Neighbors) {
        self.links.push((id, neighbors));
    }

    pub fn set_source(&mut self, id: CompId) {
        self.source = Some(id);
    }

    pub fn add_rule(&mut self, rule: HighlightRule) {
        self.rules.push(rule);
    }

    /// Validate wiring and rules and freeze the network.
    pub fn build(mut self) -> ConfigResult<Graph> {
        let names = validate::unique_names(&self.components)?;
        validate::apply_links(&mut self.components, &self.links)?;
        validate::apply_terminal_marks(&mut self.components, &self.terminals)?;
        let source = validate::check_source(&self.components, self.source)?;
        validate::check_reachability(&self.components, source)?;
        validate::check_rules(&self.components, &self.rules)?;

        Ok(Graph {
            components: self.components,
            names,
            source,
            rules: self.rules,
        })
    }

    /// Number of components added so far.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

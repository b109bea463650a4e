//! The flow engine: valve state, flow flags and port highlights over a
//! fixed topology.

use pf_core::{CompId, Ports};
use pf_graph::{Component, ComponentKind, Graph, ValveState};
use tracing::debug;

use crate::error::{FlowResult, StateError};
use crate::gate::admits_flow;
use crate::highlight::apply_rules;
use crate::snapshot::FlowSnapshot;
use crate::traverse::propagate;

/// Upper bound of a ball valve opening. Openings are percentages.
pub const FULL_OPEN_PCT: f64 = 100.0;

/// Owns the frozen `Graph` plus everything that changes at run time.
///
/// The driver mutates valve state through `set_valve_*`, then calls
/// `recompute_flow`; a renderer reads the results through the query methods.
/// Flags stay cleared until the first recompute.
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph,
    states: Vec<ValveState>,
    reached: Vec<bool>,
    flowing: Vec<bool>,
    highlights: Vec<Ports>,
}

impl Network {
    /// Wrap a validated graph with every valve closed.
    pub fn new(graph: Graph) -> Self {
        let n = graph.len();
        let states = graph
            .components()
            .iter()
            .map(|c| ValveState::initial(c.kind))
            .collect();
        Self {
            graph,
            states,
            reached: vec![false; n],
            flowing: vec![false; n],
            highlights: vec![Ports::NONE; n],
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Clear every flow flag and port highlight.
    pub fn reset_flow(&mut self) {
        self.reached.fill(false);
        self.flowing.fill(false);
        self.highlights.fill(Ports::NONE);
    }

    /// Recompute flow flags and highlights from the current valve state.
    ///
    /// Always starts from a reset, so repeated calls with unchanged valves
    /// produce identical results.
    pub fn recompute_flow(&mut self) {
        self.reset_flow();
        propagate(&self.graph, &self.states, &mut self.reached, &mut self.flowing);
        apply_rules(&self.graph, &self.states, &self.flowing, &mut self.highlights);

        debug!(
            reached = self.reached.iter().filter(|&&r| r).count(),
            flowing = self.flowing.iter().filter(|&&f| f).count(),
            "flow recomputed"
        );
    }

    fn component(&self, id: CompId) -> FlowResult<&Component> {
        self.graph
            .component(id)
            .ok_or(StateError::UnknownComponent { id })
    }

    /// Resolve a component name to its id.
    pub fn id(&self, name: &str) -> FlowResult<CompId> {
        self.graph.find(name).ok_or_else(|| StateError::UnknownName {
            name: name.to_string(),
        })
    }

    /// Open or close a valve. A ball valve goes fully open or fully closed.
    pub fn set_valve_state(&mut self, id: CompId, open: bool) -> FlowResult<()> {
        let comp = self.component(id)?;
        let state = match comp.kind {
            ComponentKind::Solenoid => ValveState::Binary { open },
            ComponentKind::BallValve => ValveState::Percent {
                open_pct: if open { FULL_OPEN_PCT } else { 0.0 },
            },
            kind => {
                return Err(StateError::NotAValve {
                    name: comp.name.clone(),
                    kind: kind.label(),
                });
            }
        };
        debug!(valve = %comp.name, open, "valve state set");
        self.states[id.slot()] = state;
        Ok(())
    }

    /// Set a ball valve opening in percent, `0..=100`.
    pub fn set_valve_percentage(&mut self, id: CompId, pct: f64) -> FlowResult<()> {
        let comp = self.component(id)?;
        if comp.kind != ComponentKind::BallValve {
            return Err(StateError::NotProportional {
                name: comp.name.clone(),
                kind: comp.kind.label(),
            });
        }
        if !(0.0..=FULL_OPEN_PCT).contains(&pct) {
            return Err(StateError::OutOfRange {
                name: comp.name.clone(),
                value: pct,
            });
        }
        debug!(valve = %comp.name, pct, "valve opening set");
        self.states[id.slot()] = ValveState::Percent { open_pct: pct };
        Ok(())
    }

    pub fn set_valve_state_by_name(&mut self, name: &str, open: bool) -> FlowResult<()> {
        let id = self.id(name)?;
        self.set_valve_state(id, open)
    }

    pub fn set_valve_percentage_by_name(&mut self, name: &str, pct: f64) -> FlowResult<()> {
        let id = self.id(name)?;
        self.set_valve_percentage(id, pct)
    }

    pub fn valve_state(&self, id: CompId) -> FlowResult<ValveState> {
        self.component(id)?;
        Ok(self.states[id.slot()])
    }

    /// Whether the component's gate currently admits flow.
    pub fn is_open(&self, id: CompId) -> FlowResult<bool> {
        let comp = self.component(id)?;
        Ok(admits_flow(comp.kind, self.states[id.slot()]))
    }

    /// Whether the pipe carried fluid at the last recompute.
    pub fn is_pipe_flowing(&self, id: CompId) -> FlowResult<bool> {
        let comp = self.component(id)?;
        if comp.kind != ComponentKind::Pipe {
            return Err(StateError::NotAPipe {
                name: comp.name.clone(),
                kind: comp.kind.label(),
            });
        }
        Ok(self.flowing[id.slot()])
    }

    /// Sides of the component rendered as fluid-filled.
    pub fn port_highlights(&self, id: CompId) -> FlowResult<Ports> {
        self.component(id)?;
        Ok(self.highlights[id.slot()])
    }

    /// Whether the traversal entered the component at the last recompute.
    pub fn is_reached(&self, id: CompId) -> FlowResult<bool> {
        self.component(id)?;
        Ok(self.reached[id.slot()])
    }

    /// Ids of the pipes carrying fluid, in id order.
    pub fn flowing_pipes(&self) -> impl Iterator<Item = CompId> + '_ {
        self.graph
            .components()
            .iter()
            .filter(|c| self.flowing[c.id.slot()])
            .map(|c| c.id)
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        let components = self.graph.components();
        FlowSnapshot {
            flowing: self
                .flowing_pipes()
                .map(|id| components[id.slot()].name.clone())
                .collect(),
            highlights: components
                .iter()
                .filter(|c| !self.highlights[c.id.slot()].is_empty())
                .map(|c| (c.name.clone(), self.highlights[c.id.slot()]))
                .collect(),
        }
    }
}

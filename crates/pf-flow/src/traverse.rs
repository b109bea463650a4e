//! Breadth-first flow propagation from the source tank.

use std::collections::VecDeque;

use pf_core::Side;
use pf_graph::{ComponentKind, Graph, ValveState};

use crate::gate::admits_flow;

/// Walk outbound links from the source, entering a neighbor only when its
/// gate admits flow. Every component entered is marked in `reached`, and
/// pipes additionally in `flowing`.
///
/// Both slices are indexed by `CompId::slot` and must already be cleared.
/// The visited set makes this terminate on any directed graph, cycles
/// included.
pub(crate) fn propagate(
    graph: &Graph,
    states: &[ValveState],
    reached: &mut [bool],
    flowing: &mut [bool],
) {
    let source = graph.source();
    let components = graph.components();

    reached[source.slot()] = true;
    let mut queue = VecDeque::from([source]);

    while let Some(id) = queue.pop_front() {
        let comp = &components[id.slot()];
        if comp.kind == ComponentKind::Pipe {
            flowing[id.slot()] = true;
        }

        for side in Side::ALL {
            let Some(next) = comp.neighbors.get(side) else {
                continue;
            };
            let slot = next.slot();
            if reached[slot] {
                continue;
            }
            if admits_flow(components[slot].kind, states[slot]) {
                reached[slot] = true;
                queue.push_back(next);
            }
        }
    }
}

//! Flow propagation over arbitrary directed wiring, cycles included.

use pf_core::{CompId, Ports};
use pf_flow::{Network, admits_flow};
use pf_graph::{ComponentKind, GraphBuilder, Neighbors};
use proptest::prelude::*;

type Shape = Vec<(u8, bool, [Option<usize>; 4])>;

/// Component 0 is the source tank; the rest are pipes, solenoids and ball
/// valves wired by the generated links. Everything is marked terminal so any
/// wiring passes validation.
fn build(shape: &Shape) -> Network {
    let n = shape.len();
    let mut b = GraphBuilder::new();
    let ids: Vec<CompId> = shape
        .iter()
        .enumerate()
        .map(|(i, &(kind, _, _))| {
            let kind = match (i, kind % 3) {
                (0, _) => ComponentKind::Tank,
                (_, 0) => ComponentKind::Pipe,
                (_, 1) => ComponentKind::Solenoid,
                _ => ComponentKind::BallValve,
            };
            b.add(format!("c{i}"), kind, Ports::ALL)
        })
        .collect();

    for (i, (_, _, links)) in shape.iter().enumerate() {
        let [t, r, bo, l] = links.map(|link| link.map(|j| ids[j % n]));
        b.connect(ids[i], Neighbors::new(t, r, bo, l));
        b.mark_terminal(ids[i]);
    }
    b.set_source(ids[0]);

    let mut net = Network::new(b.build().unwrap());
    for (i, &(_, open, _)) in shape.iter().enumerate() {
        match net.graph().kind(ids[i]) {
            Some(ComponentKind::Solenoid) => net.set_valve_state(ids[i], open).unwrap(),
            Some(ComponentKind::BallValve) => {
                net.set_valve_percentage(ids[i], if open { 35.0 } else { 0.0 }).unwrap()
            }
            _ => {}
        }
    }
    net
}

/// Least fixed point: the source, plus any gate-admitting neighbor of a
/// reached component.
fn expected_reach(net: &Network) -> Vec<bool> {
    let graph = net.graph();
    let mut reached = vec![false; graph.len()];
    reached[graph.source().slot()] = true;
    loop {
        let mut changed = false;
        for comp in graph.components() {
            if !reached[comp.id.slot()] {
                continue;
            }
            for (_, next) in comp.neighbors.iter() {
                let state = net.valve_state(next).unwrap();
                if !reached[next.slot()] && admits_flow(graph.kind(next).unwrap(), state) {
                    reached[next.slot()] = true;
                    changed = true;
                }
            }
        }
        if !changed {
            return reached;
        }
    }
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop::collection::vec(
        (
            0u8..3,
            any::<bool>(),
            prop::array::uniform4(proptest::option::of(0usize..16)),
        ),
        1..16,
    )
}

proptest! {
    #[test]
    fn reach_matches_fixed_point(shape in shape_strategy()) {
        let mut net = build(&shape);
        net.recompute_flow();

        let expected = expected_reach(&net);
        for comp in net.graph().components() {
            prop_assert_eq!(net.is_reached(comp.id).unwrap(), expected[comp.id.slot()]);
            if comp.kind == ComponentKind::Pipe {
                prop_assert_eq!(net.is_pipe_flowing(comp.id).unwrap(), expected[comp.id.slot()]);
            }
        }
    }

    #[test]
    fn recompute_is_idempotent(shape in shape_strategy()) {
        let mut net = build(&shape);
        net.recompute_flow();
        let first = net.snapshot();
        net.recompute_flow();
        prop_assert_eq!(first, net.snapshot());
    }

    #[test]
    fn opening_a_valve_never_removes_flow(shape in shape_strategy(), pick in any::<prop::sample::Index>()) {
        let mut net = build(&shape);
        net.recompute_flow();
        let before = net.snapshot();

        let valves: Vec<CompId> = net
            .graph()
            .components()
            .iter()
            .filter(|c| c.kind.is_valve())
            .map(|c| c.id)
            .collect();
        prop_assume!(!valves.is_empty());
        net.set_valve_state(valves[pick.index(valves.len())], true).unwrap();
        net.recompute_flow();
        let after = net.snapshot();

        prop_assert!(before.flowing.is_subset(&after.flowing));
    }
}

#[test]
fn cycle_through_source_terminates() {
    // tank -> a -> b -> tank, b -> nozzle
    let mut b = GraphBuilder::new();
    let tank = b.add_tank("tank");
    let a = b.add_pipe("a", Ports::ALL);
    let pb = b.add_pipe("b", Ports::ALL);
    let nozzle = b.add("nozzle", ComponentKind::Nozzle, Ports::ALL);
    b.connect(tank, Neighbors::new(None, Some(a), None, None));
    b.connect(a, Neighbors::new(None, Some(pb), None, None));
    b.connect(pb, Neighbors::new(Some(tank), None, Some(nozzle), None));
    b.set_source(tank);

    let mut net = Network::new(b.build().unwrap());
    net.recompute_flow();
    assert!(net.is_pipe_flowing(a).unwrap());
    assert!(net.is_pipe_flowing(pb).unwrap());
    assert!(net.is_reached(nozzle).unwrap());
}

//! Wiring and highlight exceptions of the engine test stand.
//!
//! GN2 pressurant feeds the LOx and kerosene (K) run tanks through solenoids
//! sv1 and sv3, and the main-valve actuation line through the p6..p17 column.
//! Both propellants meet at the nozzle through solenoids sv5/sv6 and ball
//! valves bv1/bv2. sv2 and sv4 are vents.

use pf_core::{CompId, Ports, Side};
use pf_graph::{ComponentKind, ConfigResult, Graph, GraphBuilder, HighlightRule, Neighbors};

const T: bool = true;
const F: bool = false;

fn links(
    top: Option<CompId>,
    right: Option<CompId>,
    bottom: Option<CompId>,
    left: Option<CompId>,
) -> Neighbors {
    Neighbors::new(top, right, bottom, left)
}

/// Assemble and validate the fixed test-stand topology.
pub fn assemble() -> ConfigResult<Graph> {
    let mut b = GraphBuilder::new();

    // Tanks
    let gn2 = b.add_tank("gn2");
    let lox = b.add_tank("lox");
    let k = b.add_tank("k");

    // Solenoids
    let sv1 = b.add("sv1", ComponentKind::Solenoid, Ports::new(F, T, T, F));
    let sv2 = b.add("sv2", ComponentKind::Solenoid, Ports::new(F, T, F, F));
    let sv3 = b.add("sv3", ComponentKind::Solenoid, Ports::new(F, F, T, T));
    let sv4 = b.add("sv4", ComponentKind::Solenoid, Ports::new(F, T, F, F));
    let sv5 = b.add("sv5", ComponentKind::Solenoid, Ports::new(F, T, T, F));
    let sv6 = b.add("sv6", ComponentKind::Solenoid, Ports::new(F, F, T, T));

    // Ball valves
    let bv1 = b.add("bv1", ComponentKind::BallValve, Ports::new(T, F, T, F));
    let bv2 = b.add("bv2", ComponentKind::BallValve, Ports::new(T, F, T, F));

    // Orifices
    let or1 = b.add("or1", ComponentKind::Orifice, Ports::new(T, F, T, F));
    let or2 = b.add("or2", ComponentKind::Orifice, Ports::new(T, F, T, F));

    // Instrumentation
    let pt1 = b.add("pt1", ComponentKind::PressureSensor, Ports::new(F, T, F, F));
    let pt2 = b.add("pt2", ComponentKind::PressureSensor, Ports::new(F, F, F, T));
    let pt3 = b.add("pt3", ComponentKind::PressureSensor, Ports::new(F, T, T, T));
    let tc1 = b.add("tc1", ComponentKind::TempSensor, Ports::new(T, F, F, F));

    // Pipes
    let p1 = b.add_pipe("p1", Ports::new(F, T, F, T));
    let p2 = b.add_pipe("p2", Ports::new(T, T, T, T));
    let p3 = b.add_pipe("p3", Ports::new(F, T, F, T));
    let p4 = b.add_pipe("p4", Ports::new(F, T, F, T));
    let p5 = b.add_pipe("p5", Ports::new(T, F, T, T));
    let p6 = b.add_pipe("p6", Ports::new(T, F, T, F));
    let p7 = b.add_pipe("p7", Ports::new(T, T, T, F));
    let p8 = b.add_pipe("p8", Ports::new(T, F, T, T));
    let p9 = b.add_pipe("p9", Ports::new(T, F, T, F));
    let p10 = b.add_pipe("p10", Ports::new(T, T, T, T));
    let p11 = b.add_pipe("p11", Ports::new(T, F, T, F));
    let p12 = b.add_pipe("p12", Ports::new(T, F, T, F));
    let p13 = b.add_pipe("p13", Ports::new(T, T, T, F));
    let p14 = b.add_pipe("p14", Ports::new(T, T, F, F));
    let p15 = b.add_pipe("p15", Ports::new(T, F, T, F));
    let p16 = b.add_pipe("p16", Ports::new(T, F, T, T));
    let p17 = b.add_pipe("p17", Ports::new(T, T, F, T));
    let p19 = b.add_pipe("p19", Ports::new(T, T, F, T));
    let p20 = b.add_pipe("p20", Ports::new(F, T, T, T));
    let p21 = b.add_pipe("p21", Ports::new(T, T, F, T));
    let p22 = b.add_pipe("p22", Ports::new(T, F, F, T));

    let nozzle = b.add("nozzle", ComponentKind::Nozzle, Ports::only(Side::Top));

    b.mark_terminal(sv2);
    b.mark_terminal(sv4);

    // Row 1
    b.connect(gn2, links(None, None, Some(p2), None));

    // Row 2
    b.connect(sv1, links(None, None, Some(p5), None));
    b.connect(p1, links(None, None, None, Some(sv1)));
    b.connect(p2, links(None, Some(p3), Some(p6), Some(p1)));
    b.connect(p3, links(None, Some(p4), None, None));
    b.connect(p4, links(None, Some(sv3), None, None));
    b.connect(sv3, links(None, None, Some(p7), None));

    // Row 3
    b.connect(p5, links(None, None, Some(p8), Some(pt1)));
    b.connect(p6, links(None, None, Some(p9), None));
    b.connect(p7, links(None, Some(pt2), Some(p10), None));

    // Row 4
    b.connect(p8, links(None, None, Some(lox), Some(sv2)));
    b.connect(p9, links(None, None, Some(p11), None));
    b.connect(p10, links(None, None, Some(k), Some(sv4)));

    // Row 5
    b.connect(lox, links(None, None, Some(or1), None));
    b.connect(p11, links(None, None, Some(p12), None));
    b.connect(k, links(None, None, Some(p13), None));

    // Row 6
    b.connect(or1, links(None, None, Some(p16), None));
    b.connect(p12, links(None, None, Some(p15), None));
    b.connect(p13, links(None, None, Some(or2), None));

    // Row 7
    b.connect(p15, links(None, None, Some(p17), None));
    b.connect(p16, links(None, None, Some(bv2), None));
    b.connect(or2, links(None, None, Some(bv1), None));
    b.connect(bv2, links(None, None, Some(p14), None));

    // Row 8
    b.connect(sv5, links(None, None, Some(p19), None));
    b.connect(sv6, links(None, None, Some(p21), None));
    b.connect(p17, links(None, Some(sv6), None, Some(sv5)));
    b.connect(bv1, links(None, None, None, Some(p22)));

    // Row 9
    b.connect(p14, links(None, Some(p19), None, None));
    b.connect(p19, links(None, Some(p20), None, Some(p14)));
    b.connect(p20, links(None, None, Some(nozzle), None));
    b.connect(p21, links(Some(sv6), Some(pt3), None, Some(p20)));
    b.connect(pt3, links(Some(p22), None, Some(tc1), Some(p21)));
    b.connect(p22, links(None, None, None, Some(pt3)));

    b.set_source(gn2);

    let top = Ports::only(Side::Top);
    let right = Ports::only(Side::Right);
    let bottom = Ports::only(Side::Bottom);
    let left = Ports::only(Side::Left);
    let through = Ports::new(T, F, T, F);
    let tee = Ports::new(F, T, T, T);

    b.add_rule(HighlightRule::new(p1).light(sv1, right));
    b.add_rule(HighlightRule::new(p4).light(sv3, left));
    b.add_rule(HighlightRule::new(p5).light(sv1, bottom).light(pt1, right));
    b.add_rule(HighlightRule::new(p7).light(sv3, bottom).light(pt2, left));
    b.add_rule(HighlightRule::new(p8).light(sv2, right).light(or1, through));
    b.add_rule(HighlightRule::new(p10).light(sv4, right));
    b.add_rule(
        HighlightRule::new(p15)
            .light(sv5, right)
            .light(sv6, left)
            .light_when_open(sv6, bottom, sv6)
            .light_when_open(sv5, bottom, sv5),
    );
    b.add_rule(
        HighlightRule::new(p13)
            .light(bv1, top)
            .light(or2, through)
            .light_when_open(bv1, through, bv1),
    );
    b.add_rule(
        HighlightRule::new(p14)
            .light(bv2, bottom)
            .light_when_open(bv2, top, bv2),
    );
    b.add_rule(
        HighlightRule::new(p16)
            .light(bv2, top)
            .light_when_open(bv2, bottom, bv2),
    );
    b.add_rule(HighlightRule::new(p19).light(sv5, Ports::new(F, T, T, F)));
    b.add_rule(
        HighlightRule::new(p21)
            .light(pt3, tee)
            .light(tc1, top)
            .light(sv6, bottom)
            .light_when_open(sv6, left, sv6),
    );
    b.add_rule(
        HighlightRule::new(p22)
            .light(pt3, tee)
            .light(tc1, top)
            .light(bv1, bottom),
    );

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_cleanly() {
        let graph = assemble().unwrap();
        assert_eq!(graph.len(), 39);
        assert_eq!(graph.name(graph.source()), Some("gn2"));
        assert_eq!(graph.ids_of_kind(ComponentKind::Pipe).count(), 21);
        assert_eq!(graph.rules().len(), 13);
    }

    #[test]
    fn every_component_is_statically_reachable() {
        let graph = assemble().unwrap();
        let reach = graph.reachable_ignoring_valves();
        for comp in graph.components() {
            assert!(reach[comp.id.slot()], "{} unreachable", comp.name);
        }
    }

    #[test]
    fn ball_valve_feeds_pipe_through_its_left_link() {
        let graph = assemble().unwrap();
        let bv1 = graph.find("bv1").unwrap();
        let p22 = graph.find("p22").unwrap();
        assert_eq!(graph.component(bv1).unwrap().neighbors.get(Side::Left), Some(p22));
    }
}

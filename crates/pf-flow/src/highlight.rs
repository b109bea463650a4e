//! Application of the highlight-exception table after traversal.

use pf_core::Ports;
use pf_graph::{Graph, RuleCondition, ValveState};

use crate::gate::admits_flow;

/// Light the ports named by every rule whose trigger pipe is flowing.
///
/// Lighting is additive: an effect never clears a side lit by an earlier
/// effect. Only `Network::reset_flow` clears highlights.
pub(crate) fn apply_rules(
    graph: &Graph,
    states: &[ValveState],
    flowing: &[bool],
    highlights: &mut [Ports],
) {
    let components = graph.components();
    for rule in graph.rules() {
        if !flowing[rule.trigger.slot()] {
            continue;
        }
        for effect in &rule.effects {
            let applies = match effect.condition {
                RuleCondition::Always => true,
                RuleCondition::WhenOpen(valve) => {
                    admits_flow(components[valve.slot()].kind, states[valve.slot()])
                }
            };
            if applies {
                highlights[effect.target.slot()].merge(effect.ports);
            }
        }
    }
}

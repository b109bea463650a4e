//! Declarative highlight-exception table.
//!
//! Valve and sensor glyphs have several sides, and which of them show fluid
//! cannot be read off the pipes generically. Each rule says: when this pipe
//! carries fluid, light these sides of these neighbors, optionally only while
//! some valve is open.

use pf_core::{CompId, Ports};

/// Extra condition on a single effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    Always,
    /// Applies only while the given valve admits flow.
    WhenOpen(CompId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEffect {
    pub target: CompId,
    pub ports: Ports,
    pub condition: RuleCondition,
}

/// All effects triggered by one pipe carrying fluid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRule {
    pub trigger: CompId,
    pub effects: Vec<RuleEffect>,
}

impl HighlightRule {
    pub fn new(trigger: CompId) -> Self {
        Self {
            trigger,
            effects: Vec::new(),
        }
    }

    /// Light `ports` of `target` unconditionally.
    pub fn light(mut self, target: CompId, ports: Ports) -> Self {
        self.effects.push(RuleEffect {
            target,
            ports,
            condition: RuleCondition::Always,
        });
        self
    }

    /// Light `ports` of `target` only while `valve` is open.
    pub fn light_when_open(mut self, target: CompId, ports: Ports, valve: CompId) -> Self {
        self.effects.push(RuleEffect {
            target,
            ports,
            condition: RuleCondition::WhenOpen(valve),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::Side;

    #[test]
    fn effects_keep_insertion_order() {
        let pipe = CompId::from_index(0);
        let valve = CompId::from_index(1);
        let rule = HighlightRule::new(pipe)
            .light(valve, Ports::only(Side::Top))
            .light_when_open(valve, Ports::only(Side::Bottom), valve);

        assert_eq!(rule.trigger, pipe);
        assert_eq!(rule.effects.len(), 2);
        assert_eq!(rule.effects[0].condition, RuleCondition::Always);
        assert_eq!(rule.effects[1].condition, RuleCondition::WhenOpen(valve));
        assert_eq!(rule.effects[1].ports, Ports::only(Side::Bottom));
    }
}

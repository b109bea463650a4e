//! Build-time validation of wiring and highlight rules.

use std::collections::{HashMap, HashSet, VecDeque};

use pf_core::CompId;
use tracing::warn;

use crate::component::{Component, ComponentKind, Neighbors};
use crate::error::{ConfigError, ConfigResult};
use crate::rules::{HighlightRule, RuleCondition};

fn lookup<'a>(
    components: &'a [Component],
    id: CompId,
    context: &'static str,
) -> ConfigResult<&'a Component> {
    components
        .get(id.slot())
        .ok_or(ConfigError::UnknownComponent { id, context })
}

pub(crate) fn unique_names(components: &[Component]) -> ConfigResult<HashMap<String, CompId>> {
    let mut names = HashMap::with_capacity(components.len());
    for comp in components {
        if names.insert(comp.name.clone(), comp.id).is_some() {
            return Err(ConfigError::DuplicateName {
                name: comp.name.clone(),
            });
        }
    }
    Ok(names)
}

/// Check every recorded link against the arena and write it into place.
pub(crate) fn apply_links(
    components: &mut [Component],
    links: &[(CompId, Neighbors)],
) -> ConfigResult<()> {
    let mut wired: HashSet<CompId> = HashSet::new();
    for &(id, neighbors) in links {
        let name = lookup(components, id, "wiring")?.name.clone();
        if !wired.insert(id) {
            return Err(ConfigError::RewiredComponent { name });
        }
        for (_, to) in neighbors.iter() {
            lookup(components, to, "neighbor link")?;
        }
        components[id.slot()].neighbors = neighbors;
    }
    Ok(())
}

pub(crate) fn apply_terminal_marks(
    components: &mut [Component],
    marks: &[CompId],
) -> ConfigResult<()> {
    for &id in marks {
        lookup(components, id, "terminal mark")?;
        components[id.slot()].terminal = true;
    }
    Ok(())
}

pub(crate) fn check_source(components: &[Component], source: Option<CompId>) -> ConfigResult<CompId> {
    let source = source.ok_or(ConfigError::MissingSource)?;
    let comp = lookup(components, source, "source")?;
    if comp.kind != ComponentKind::Tank {
        return Err(ConfigError::SourceNotTank {
            name: comp.name.clone(),
        });
    }
    Ok(source)
}

/// Breadth-first reach from `source`, treating every valve as open.
pub(crate) fn static_reach(components: &[Component], source: CompId) -> Vec<bool> {
    let mut seen = vec![false; components.len()];
    if source.slot() >= seen.len() {
        return seen;
    }
    seen[source.slot()] = true;

    let mut queue = VecDeque::from([source]);
    while let Some(id) = queue.pop_front() {
        for (_, next) in components[id.slot()].neighbors.iter() {
            if !seen[next.slot()] {
                seen[next.slot()] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Reachable components must continue the flow unless they may terminate
/// it, and every nozzle must be reachable at all.
pub(crate) fn check_reachability(components: &[Component], source: CompId) -> ConfigResult<()> {
    let reach = static_reach(components, source);

    for comp in components {
        let reached = reach[comp.id.slot()];
        if reached && !comp.terminal && comp.neighbors.is_empty() {
            return Err(ConfigError::DanglingComponent {
                name: comp.name.clone(),
            });
        }
        if !reached {
            if comp.kind == ComponentKind::Nozzle {
                return Err(ConfigError::UnreachableSink {
                    name: comp.name.clone(),
                });
            }
            warn!(component = %comp.name, "component is unreachable from the source and will never carry flow");
        }
    }
    Ok(())
}

pub(crate) fn check_rules(components: &[Component], rules: &[HighlightRule]) -> ConfigResult<()> {
    for rule in rules {
        let trigger = lookup(components, rule.trigger, "highlight rule trigger")?;
        if trigger.kind != ComponentKind::Pipe {
            return Err(ConfigError::RuleTriggerNotPipe {
                name: trigger.name.clone(),
            });
        }

        for effect in &rule.effects {
            let target = lookup(components, effect.target, "highlight rule target")?;
            if let Some(side) = effect.ports.iter().find(|&s| !target.ports.contains(s)) {
                return Err(ConfigError::UndeclaredPort {
                    trigger: trigger.name.clone(),
                    target: target.name.clone(),
                    side,
                });
            }

            if let RuleCondition::WhenOpen(valve) = effect.condition {
                let valve = lookup(components, valve, "highlight rule condition")?;
                if !valve.kind.is_valve() {
                    return Err(ConfigError::RuleConditionNotValve {
                        trigger: trigger.name.clone(),
                        name: valve.name.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{Ports, Side};

    fn comp(index: u32, name: &str, kind: ComponentKind, ports: Ports) -> Component {
        Component {
            id: CompId::from_index(index),
            name: name.into(),
            kind,
            ports,
            neighbors: Neighbors::NONE,
            terminal: kind.is_terminal(),
        }
    }

    fn id(index: u32) -> CompId {
        CompId::from_index(index)
    }

    #[test]
    fn duplicate_names_rejected() {
        let comps = vec![
            comp(0, "p1", ComponentKind::Pipe, Ports::ALL),
            comp(1, "p1", ComponentKind::Pipe, Ports::ALL),
        ];
        assert_eq!(
            unique_names(&comps).unwrap_err(),
            ConfigError::DuplicateName { name: "p1".into() }
        );
    }

    #[test]
    fn link_to_missing_component_rejected() {
        let mut comps = vec![comp(0, "tank", ComponentKind::Tank, Ports::NONE)];
        let links = [(id(0), Neighbors::new(None, None, Some(id(7)), None))];
        let err = apply_links(&mut comps, &links).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownComponent {
                id: id(7),
                context: "neighbor link"
            }
        );
        assert!(comps[0].neighbors.is_empty(), "failed link must not be applied");
    }

    #[test]
    fn wiring_twice_rejected() {
        let mut comps = vec![
            comp(0, "tank", ComponentKind::Tank, Ports::NONE),
            comp(1, "p1", ComponentKind::Pipe, Ports::ALL),
        ];
        let links = [
            (id(0), Neighbors::new(None, None, Some(id(1)), None)),
            (id(0), Neighbors::NONE),
        ];
        assert_eq!(
            apply_links(&mut comps, &links).unwrap_err(),
            ConfigError::RewiredComponent { name: "tank".into() }
        );
    }

    #[test]
    fn terminal_mark_on_missing_component_rejected() {
        let mut comps = vec![comp(0, "sv2", ComponentKind::Solenoid, Ports::ALL)];
        assert!(apply_terminal_marks(&mut comps, &[id(0)]).is_ok());
        assert!(comps[0].terminal);

        assert_eq!(
            apply_terminal_marks(&mut comps, &[id(3)]).unwrap_err(),
            ConfigError::UnknownComponent {
                id: id(3),
                context: "terminal mark"
            }
        );
    }

    #[test]
    fn rule_target_must_exist() {
        let comps = vec![comp(0, "p1", ComponentKind::Pipe, Ports::ALL)];
        let rule = HighlightRule::new(id(0)).light(id(9), Ports::only(Side::Top));
        assert_eq!(
            check_rules(&comps, &[rule]).unwrap_err(),
            ConfigError::UnknownComponent {
                id: id(9),
                context: "highlight rule target"
            }
        );
    }

    #[test]
    fn rule_condition_must_exist() {
        let comps = vec![
            comp(0, "p1", ComponentKind::Pipe, Ports::ALL),
            comp(1, "bv1", ComponentKind::BallValve, Ports::new(true, false, true, false)),
        ];
        let rule =
            HighlightRule::new(id(0)).light_when_open(id(1), Ports::only(Side::Top), id(5));
        assert_eq!(
            check_rules(&comps, &[rule]).unwrap_err(),
            ConfigError::UnknownComponent {
                id: id(5),
                context: "highlight rule condition"
            }
        );
    }

    #[test]
    fn source_must_be_a_tank() {
        let comps = vec![comp(0, "p1", ComponentKind::Pipe, Ports::ALL)];
        assert_eq!(check_source(&comps, None).unwrap_err(), ConfigError::MissingSource);
        assert_eq!(
            check_source(&comps, Some(id(0))).unwrap_err(),
            ConfigError::SourceNotTank { name: "p1".into() }
        );
    }

    #[test]
    fn static_reach_handles_cycles() {
        let mut comps = vec![
            comp(0, "tank", ComponentKind::Tank, Ports::NONE),
            comp(1, "a", ComponentKind::Pipe, Ports::ALL),
            comp(2, "b", ComponentKind::Pipe, Ports::ALL),
            comp(3, "island", ComponentKind::Pipe, Ports::ALL),
        ];
        comps[0].neighbors = Neighbors::new(None, None, Some(id(1)), None);
        comps[1].neighbors = Neighbors::new(None, Some(id(2)), None, None);
        comps[2].neighbors = Neighbors::new(None, None, None, Some(id(1)));
        assert_eq!(static_reach(&comps, id(0)), vec![true, true, true, false]);
    }

    #[test]
    fn trapped_nozzle_rejected() {
        let mut comps = vec![
            comp(0, "tank", ComponentKind::Tank, Ports::NONE),
            comp(1, "a", ComponentKind::Pipe, Ports::ALL),
            comp(2, "b", ComponentKind::Pipe, Ports::ALL),
            comp(3, "nozzle", ComponentKind::Nozzle, Ports::only(Side::Top)),
        ];
        comps[0].neighbors = Neighbors::new(None, None, Some(id(1)), None);
        comps[1].neighbors = Neighbors::new(None, Some(id(2)), None, None);
        comps[2].neighbors = Neighbors::new(None, None, None, Some(id(1)));
        assert_eq!(
            check_reachability(&comps, id(0)).unwrap_err(),
            ConfigError::UnreachableSink {
                name: "nozzle".into()
            }
        );
    }

    #[test]
    fn rule_must_light_declared_ports() {
        let comps = vec![
            comp(0, "p1", ComponentKind::Pipe, Ports::ALL),
            comp(1, "sv1", ComponentKind::Solenoid, Ports::new(false, true, true, false)),
        ];
        let ok = HighlightRule::new(id(0)).light(id(1), Ports::only(Side::Right));
        assert!(check_rules(&comps, &[ok]).is_ok());

        let bad = HighlightRule::new(id(0)).light(id(1), Ports::new(true, true, false, false));
        assert_eq!(
            check_rules(&comps, &[bad]).unwrap_err(),
            ConfigError::UndeclaredPort {
                trigger: "p1".into(),
                target: "sv1".into(),
                side: Side::Top,
            }
        );
    }

    #[test]
    fn rule_trigger_and_condition_kinds_checked() {
        let comps = vec![
            comp(0, "p1", ComponentKind::Pipe, Ports::ALL),
            comp(1, "pt1", ComponentKind::PressureSensor, Ports::only(Side::Right)),
        ];
        let not_pipe = HighlightRule::new(id(1)).light(id(0), Ports::ALL);
        assert_eq!(
            check_rules(&comps, &[not_pipe]).unwrap_err(),
            ConfigError::RuleTriggerNotPipe { name: "pt1".into() }
        );

        let not_valve =
            HighlightRule::new(id(0)).light_when_open(id(1), Ports::only(Side::Right), id(1));
        assert_eq!(
            check_rules(&comps, &[not_valve]).unwrap_err(),
            ConfigError::RuleConditionNotValve {
                trigger: "p1".into(),
                name: "pt1".into(),
            }
        );
    }
}

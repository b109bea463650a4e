//! Valve-state scenarios loaded from YAML.

use std::collections::BTreeMap;
use std::path::Path;

use pf_flow::{FlowResult, Network};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StandResult;

/// A named set of valve commands.
///
/// Valves the scenario does not mention keep their current state.
///
/// ```yaml
/// name: lox-fill
/// solenoids:
///   sv1: true
/// ball_valves:
///   bv2: 25
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub solenoids: BTreeMap<String, bool>,
    /// Openings in percent, `0..=100`.
    #[serde(default)]
    pub ball_valves: BTreeMap<String, f64>,
}

impl Scenario {
    pub fn from_yaml_str(content: &str) -> StandResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load_yaml(path: &Path) -> StandResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply every command, or none of them if any is rejected.
    ///
    /// Flow is not recomputed here.
    pub fn apply(&self, network: &mut Network) -> FlowResult<()> {
        let mut next = network.clone();
        for (name, &open) in &self.solenoids {
            next.set_valve_state_by_name(name, open)?;
        }
        for (name, &pct) in &self.ball_valves {
            next.set_valve_percentage_by_name(name, pct)?;
        }
        *network = next;
        info!(
            scenario = %self.name,
            commands = self.solenoids.len() + self.ball_valves.len(),
            "scenario applied"
        );
        Ok(())
    }
}

use std::collections::{BTreeMap, BTreeSet};

use pf_core::Ports;
use serde::{Deserialize, Serialize};

/// Name-keyed copy of the flow result, for comparing runs and for output.
///
/// Components without any lit side are left out of `highlights`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub flowing: BTreeSet<String>,
    pub highlights: BTreeMap<String, Ports>,
}

impl FlowSnapshot {
    pub fn is_flowing(&self, pipe: &str) -> bool {
        self.flowing.contains(pipe)
    }

    pub fn highlights(&self, name: &str) -> Ports {
        self.highlights.get(name).copied().unwrap_or_default()
    }
}

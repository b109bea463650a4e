//! Component data model: kinds, valve state and directional neighbor links.

use pf_core::{CompId, Ports, Side};

/// Variant tag for every node that can be placed on the P&ID grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Pipe,
    Solenoid,
    BallValve,
    Orifice,
    PressureSensor,
    TempSensor,
    Tank,
    Nozzle,
}

impl ComponentKind {
    /// Valves are the only kinds with externally controlled state.
    pub fn is_valve(self) -> bool {
        matches!(self, ComponentKind::Solenoid | ComponentKind::BallValve)
    }

    /// Kinds that may legitimately end a branch: the engine nozzle and
    /// instrument taps.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ComponentKind::Nozzle | ComponentKind::PressureSensor | ComponentKind::TempSensor
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Pipe => "pipe",
            ComponentKind::Solenoid => "solenoid",
            ComponentKind::BallValve => "ball valve",
            ComponentKind::Orifice => "orifice",
            ComponentKind::PressureSensor => "pressure sensor",
            ComponentKind::TempSensor => "temperature sensor",
            ComponentKind::Tank => "tank",
            ComponentKind::Nozzle => "nozzle",
        }
    }
}

/// Externally controlled state of a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValveState {
    /// Pipes, tanks, sensors, orifices and the nozzle have nothing to set.
    Passive,
    /// Solenoid: energized (open) or not.
    Binary { open: bool },
    /// Ball valve opening, 0 (closed) to 100 (fully open).
    Percent { open_pct: f64 },
}

impl ValveState {
    /// State a freshly assembled network starts in: every valve closed.
    pub fn initial(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Solenoid => ValveState::Binary { open: false },
            ComponentKind::BallValve => ValveState::Percent { open_pct: 0.0 },
            _ => ValveState::Passive,
        }
    }
}

/// Outbound links of a component, one optional slot per side.
///
/// Links follow the physical flow direction and are not symmetric: `a`
/// naming `b` as its bottom neighbor says nothing about `b`'s links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors([Option<CompId>; 4]);

impl Neighbors {
    pub const NONE: Neighbors = Neighbors([None; 4]);

    /// Argument order is top, right, bottom, left.
    pub const fn new(
        top: Option<CompId>,
        right: Option<CompId>,
        bottom: Option<CompId>,
        left: Option<CompId>,
    ) -> Self {
        Self([top, right, bottom, left])
    }

    pub fn get(&self, side: Side) -> Option<CompId> {
        self.0[side.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Present links in top, right, bottom, left order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, CompId)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(|side| self.get(side).map(|id| (side, id)))
    }
}

/// A node of the network with its fixed wiring.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: CompId,
    /// Unique tag used by drivers to address the component (e.g. `sv1`).
    pub name: String,
    pub kind: ComponentKind,
    /// Sides of the glyph that carry a pipe stub.
    pub ports: Ports,
    pub neighbors: Neighbors,
    /// Allowed to end a branch without an outbound link.
    pub terminal: bool,
}

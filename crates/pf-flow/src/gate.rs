//! Gating policy: whether a component lets the traversal advance into it.

use pf_graph::{ComponentKind, ValveState};

/// Single dispatch point over the component tag.
///
/// Solenoids pass when energized, ball valves when opened past zero, and
/// every other kind always passes. A valve whose state does not match its
/// kind is treated as closed.
pub fn admits_flow(kind: ComponentKind, state: ValveState) -> bool {
    match kind {
        ComponentKind::Solenoid => matches!(state, ValveState::Binary { open: true }),
        ComponentKind::BallValve => {
            matches!(state, ValveState::Percent { open_pct } if open_pct > 0.0)
        }
        ComponentKind::Pipe
        | ComponentKind::Orifice
        | ComponentKind::PressureSensor
        | ComponentKind::TempSensor
        | ComponentKind::Tank
        | ComponentKind::Nozzle => true,
    }
}

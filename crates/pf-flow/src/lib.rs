//! pf-flow: flow propagation over the fixed P&ID network.
//!
//! After every valve change the driver calls `Network::recompute_flow`, which
//! 1. clears all flow flags and port highlights,
//! 2. walks breadth-first from the source tank, entering a neighbor only if
//!    its gate admits flow (solenoid energized, ball valve opened past zero,
//!    anything else always), marking every pipe it enters as flowing,
//! 3. applies the highlight-exception table to light valve and sensor ports
//!    next to flowing pipes.
//!
//! The engine is synchronous and single-writer. `SharedNetwork` wraps it in a
//! mutex for drivers that mutate valves from several threads.

pub mod error;
pub mod gate;
mod highlight;
pub mod network;
pub mod shared;
pub mod snapshot;
mod traverse;

pub use error::{FlowResult, StateError};
pub use gate::admits_flow;
pub use network::{FULL_OPEN_PCT, Network};
pub use shared::SharedNetwork;
pub use snapshot::FlowSnapshot;

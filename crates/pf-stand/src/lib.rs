//! pf-stand: the engine test stand as a flow network.
//!
//! `build(grid_unit)` assembles the fixed wiring and highlight exceptions of
//! the stand, wraps them in a flow `Network` with every valve closed, and
//! computes the grid layout a renderer needs.
//!
//! ```
//! let mut stand = pf_stand::build(50.0).unwrap();
//! stand.network.set_valve_state_by_name("sv1", true).unwrap();
//! stand.network.recompute_flow();
//!
//! let p5 = stand.network.id("p5").unwrap();
//! assert!(stand.network.is_pipe_flowing(p5).unwrap());
//! ```

pub mod error;
pub mod layout;
pub mod scenario;
pub mod stand;

pub use error::{StandError, StandResult};
pub use layout::{Label, Layout, Placement};
pub use scenario::Scenario;
pub use stand::assemble;

use pf_flow::Network;

/// The assembled stand: flow engine plus its static layout.
#[derive(Debug, Clone)]
pub struct TestStand {
    pub network: Network,
    pub layout: Layout,
}

/// Build the stand with `grid_unit` pixels per grid cell.
pub fn build(grid_unit: f64) -> StandResult<TestStand> {
    let graph = assemble()?;
    let layout = Layout::new(grid_unit, &graph)?;
    Ok(TestStand {
        network: Network::new(graph),
        layout,
    })
}

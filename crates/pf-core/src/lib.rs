//! pf-core: shared foundation for the P&ID flow display.
//!
//! Contains:
//! - ids (compact component handles for the network arena)
//! - side (grid sides and four-sided port sets)
//! - error (shared error type)

pub mod error;
pub mod ids;
pub mod side;

pub use error::{PfError, PfResult};
pub use ids::CompId;
pub use side::{Ports, Side};

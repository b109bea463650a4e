//! pf-graph: component model and fixed-topology arena for the P&ID.
//!
//! Provides:
//! - Component kinds, valve state and directional neighbor links
//! - The declarative highlight-exception table
//! - An incremental builder that validates wiring and rules and freezes
//!   them into an immutable `Graph`
//!
//! # Example
//!
//! ```
//! use pf_core::{Ports, Side};
//! use pf_graph::{ComponentKind, GraphBuilder, Neighbors};
//!
//! let mut builder = GraphBuilder::new();
//! let tank = builder.add_tank("gn2");
//! let pipe = builder.add_pipe("p1", Ports::new(true, false, true, false));
//! let nozzle = builder.add("nozzle", ComponentKind::Nozzle, Ports::only(Side::Top));
//! builder.connect(tank, Neighbors::new(None, None, Some(pipe), None));
//! builder.connect(pipe, Neighbors::new(None, None, Some(nozzle), None));
//! builder.set_source(tank);
//!
//! let graph = builder.build().unwrap();
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.find("p1"), Some(pipe));
//! ```

pub mod builder;
pub mod component;
pub mod error;
pub mod graph;
pub mod rules;
pub(crate) mod validate;

pub use builder::GraphBuilder;
pub use component::{Component, ComponentKind, Neighbors, ValveState};
pub use error::{ConfigError, ConfigResult};
pub use graph::Graph;
pub use rules::{HighlightRule, RuleCondition, RuleEffect};

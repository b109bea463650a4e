//! Static grid layout handed to a renderer.
//!
//! The flow engine never reads this. Positions are grid cells scaled by the
//! unit length the display was built with.

use pf_core::{Ports, Side};
use pf_graph::{ComponentKind, Graph};
use serde::{Deserialize, Serialize};

use crate::error::{StandError, StandResult};

/// Window size in grid units.
pub const GRID_COLUMNS: f64 = 8.0;
pub const GRID_ROWS: f64 = 12.0;

pub const FLUID_COLOR: &str = "#41d94d";
pub const TANK_COLOR: &str = "#1d2396";
pub const BACKGROUND: &str = "black";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub grid_unit: f64,
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub fluid_color: String,
    pub placements: Vec<Placement>,
    pub labels: Vec<Label>,
}

/// Where and how one network component is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub ports: Ports,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Solenoid glyph side drawn as the inlet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlet: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet: Option<Side>,
}

/// Free text drawn on the schematic (header and fill/drain callouts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: u32,
    #[serde(default)]
    pub underline: bool,
}

struct Cell {
    name: &'static str,
    column: f64,
    row: f64,
    rows_tall: f64,
    caption: Option<&'static str>,
    inlet: Option<Side>,
    outlet: Option<Side>,
}

const fn cell(name: &'static str, column: f64, row: f64) -> Cell {
    Cell {
        name,
        column,
        row,
        rows_tall: 1.0,
        caption: None,
        inlet: None,
        outlet: None,
    }
}

const fn captioned(name: &'static str, column: f64, row: f64, caption: &'static str) -> Cell {
    Cell {
        caption: Some(caption),
        ..cell(name, column, row)
    }
}

const fn solenoid(
    name: &'static str,
    column: f64,
    row: f64,
    caption: &'static str,
    inlet: Side,
    outlet: Option<Side>,
) -> Cell {
    Cell {
        inlet: Some(inlet),
        outlet,
        ..captioned(name, column, row, caption)
    }
}

const CELLS: &[Cell] = &[
    captioned("gn2", 3.0, 1.0, "GN2"),
    captioned("lox", 1.0, 5.0, "LOx"),
    captioned("k", 6.0, 5.0, "K"),
    solenoid("sv1", 1.0, 2.0, "1", Side::Right, Some(Side::Bottom)),
    solenoid("sv2", 0.0, 4.0, "2", Side::Right, None),
    solenoid("sv3", 6.0, 2.0, "3", Side::Left, Some(Side::Bottom)),
    solenoid("sv4", 5.0, 4.0, "4", Side::Right, None),
    solenoid("sv5", 2.0, 8.0, "5", Side::Right, Some(Side::Bottom)),
    solenoid("sv6", 4.0, 8.0, "6", Side::Left, Some(Side::Bottom)),
    captioned("bv1", 6.0, 8.0, "7"),
    captioned("bv2", 1.0, 8.0, "8"),
    cell("or1", 1.0, 6.0),
    cell("or2", 6.0, 7.0),
    cell("pt1", 0.0, 3.0),
    cell("pt2", 7.0, 3.0),
    cell("pt3", 5.0, 9.0),
    cell("tc1", 5.0, 10.0),
    cell("p1", 2.0, 2.0),
    cell("p2", 3.0, 2.0),
    cell("p3", 4.0, 2.0),
    cell("p4", 5.0, 2.0),
    cell("p5", 1.0, 3.0),
    cell("p6", 3.0, 3.0),
    cell("p7", 6.0, 3.0),
    cell("p8", 1.0, 4.0),
    cell("p9", 3.0, 4.0),
    cell("p10", 6.0, 4.0),
    cell("p11", 3.0, 5.0),
    cell("p12", 3.0, 6.0),
    cell("p13", 6.0, 6.0),
    cell("p14", 1.0, 9.0),
    cell("p15", 3.0, 7.0),
    cell("p16", 1.0, 7.0),
    cell("p17", 3.0, 8.0),
    cell("p19", 2.0, 9.0),
    cell("p20", 3.0, 9.0),
    cell("p21", 4.0, 9.0),
    cell("p22", 6.0, 9.0),
    Cell {
        rows_tall: 1.5,
        ..cell("nozzle", 3.0, 10.0)
    },
];

/// (text, column, row, columns wide, font size, underline)
const LABELS: &[(&str, f64, f64, f64, u32, bool)] = &[
    ("P&ID", 0.0, 0.0, GRID_COLUMNS, 24, true),
    ("K Fill", 7.0, 4.0, 1.0, 12, false),
    ("K Drain", 7.0, 6.0, 1.0, 12, false),
    ("LOx\nFill/Drain", 0.0, 7.0, 1.0, 12, false),
];

impl Layout {
    /// Scale the stand's grid placement by `grid_unit` (pixels per cell).
    pub fn new(grid_unit: f64, graph: &Graph) -> StandResult<Self> {
        if !(grid_unit.is_finite() && grid_unit > 0.0) {
            return Err(StandError::InvalidGridUnit { value: grid_unit });
        }

        let placements = CELLS
            .iter()
            .map(|c| {
                let comp = graph
                    .find(c.name)
                    .and_then(|id| graph.component(id))
                    .ok_or_else(|| StandError::MissingComponent {
                        name: c.name.to_string(),
                    })?;
                let color = (comp.kind == ComponentKind::Tank).then(|| TANK_COLOR.to_string());
                Ok(Placement {
                    name: comp.name.clone(),
                    kind: comp.kind.label().to_string(),
                    x: c.column * grid_unit,
                    y: c.row * grid_unit,
                    width: grid_unit,
                    height: c.rows_tall * grid_unit,
                    ports: comp.ports,
                    caption: c.caption.map(str::to_string),
                    color,
                    inlet: c.inlet,
                    outlet: c.outlet,
                })
            })
            .collect::<StandResult<Vec<_>>>()?;

        let labels = LABELS
            .iter()
            .map(|&(text, column, row, columns, font_size, underline)| Label {
                text: text.to_string(),
                x: column * grid_unit,
                y: row * grid_unit,
                width: columns * grid_unit,
                height: grid_unit,
                font_size,
                underline,
            })
            .collect();

        Ok(Self {
            grid_unit,
            width: GRID_COLUMNS * grid_unit,
            height: GRID_ROWS * grid_unit,
            background: BACKGROUND.to_string(),
            fluid_color: FLUID_COLOR.to_string(),
            placements,
            labels,
        })
    }

    pub fn placement(&self, name: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.name == name)
    }

    pub fn to_yaml(&self) -> StandResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stand::assemble;

    #[test]
    fn every_component_is_placed_once() {
        let graph = assemble().unwrap();
        let layout = Layout::new(50.0, &graph).unwrap();
        assert_eq!(layout.placements.len(), graph.len());
        for comp in graph.components() {
            assert!(layout.placement(&comp.name).is_some(), "{} not placed", comp.name);
        }
    }

    #[test]
    fn positions_scale_with_grid_unit() {
        let graph = assemble().unwrap();
        let layout = Layout::new(40.0, &graph).unwrap();
        assert_eq!((layout.width, layout.height), (320.0, 480.0));

        let p13 = layout.placement("p13").unwrap();
        assert_eq!((p13.x, p13.y), (240.0, 240.0));

        let nozzle = layout.placement("nozzle").unwrap();
        assert_eq!(nozzle.height, 60.0);
        assert_eq!(nozzle.width, 40.0);
    }

    #[test]
    fn solenoid_inlets_are_declared_ports() {
        let graph = assemble().unwrap();
        let layout = Layout::new(10.0, &graph).unwrap();
        for p in &layout.placements {
            for side in [p.inlet, p.outlet].into_iter().flatten() {
                assert!(p.ports.contains(side), "{} {side}", p.name);
            }
        }
        assert_eq!(layout.placement("gn2").unwrap().color.as_deref(), Some(TANK_COLOR));
    }

    #[test]
    fn bad_grid_unit_rejected() {
        let graph = assemble().unwrap();
        for bad in [0.0, -0.0, -3.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Layout::new(bad, &graph),
                Err(StandError::InvalidGridUnit { .. })
            ));
        }
    }
}

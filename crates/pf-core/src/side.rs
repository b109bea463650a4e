//! The four connection sides of a grid cell and sets of them.

use core::fmt;

/// One side of a component glyph on the P&ID grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Clockwise from 12 o'clock. Traversal inspects neighbors in this order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of sides: used both for the pipe stubs a component declares and
/// for the sides currently rendered as fluid-filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ports {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Ports {
    pub const NONE: Ports = Ports::new(false, false, false, false);
    pub const ALL: Ports = Ports::new(true, true, true, true);

    /// Argument order is top, right, bottom, left.
    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn only(side: Side) -> Self {
        let mut ports = Self::NONE;
        ports.insert(side);
        ports
    }

    pub fn contains(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn insert(&mut self, side: Side) {
        match side {
            Side::Top => self.top = true,
            Side::Right => self.right = true,
            Side::Bottom => self.bottom = true,
            Side::Left => self.left = true,
        }
    }

    /// Add every side of `other`; never clears a side.
    pub fn merge(&mut self, other: Ports) {
        self.top |= other.top;
        self.right |= other.right;
        self.bottom |= other.bottom;
        self.left |= other.left;
    }

    pub fn is_empty(&self) -> bool {
        !(self.top || self.right || self.bottom || self.left)
    }

    pub fn is_subset_of(&self, other: &Ports) -> bool {
        self.iter().all(|side| other.contains(side))
    }

    /// Sides present in the set, in `Side::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL.into_iter().filter(|&side| self.contains(side))
    }
}

impl FromIterator<Side> for Ports {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        let mut ports = Ports::NONE;
        for side in iter {
            ports.insert(side);
        }
        ports
    }
}

impl fmt::Display for Ports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<&str> = self.iter().map(Side::name).collect();
        f.write_str(&names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_additive() {
        let mut lit = Ports::only(Side::Right);
        lit.merge(Ports::new(false, false, true, false));
        assert_eq!(lit, Ports::new(false, true, true, false));

        lit.merge(Ports::NONE);
        assert_eq!(lit, Ports::new(false, true, true, false));
    }

    #[test]
    fn subset_against_declared_stubs() {
        let declared = Ports::new(true, false, true, false);
        assert!(Ports::only(Side::Top).is_subset_of(&declared));
        assert!(Ports::NONE.is_subset_of(&declared));
        assert!(!Ports::only(Side::Left).is_subset_of(&declared));
    }

    #[test]
    fn iter_follows_clockwise_order() {
        let sides: Vec<Side> = Ports::new(true, false, true, true).iter().collect();
        assert_eq!(sides, vec![Side::Top, Side::Bottom, Side::Left]);
        let back: Ports = sides.into_iter().collect();
        assert_eq!(back, Ports::new(true, false, true, true));
    }

    #[test]
    fn display_joins_side_names() {
        assert_eq!(Ports::new(false, true, true, false).to_string(), "right+bottom");
        assert_eq!(Ports::NONE.to_string(), "-");
    }
}

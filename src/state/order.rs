//! Order types for all Diplomacy phases.
//!
//! One tagged enum covers hold, move, support, convoy, retreat, disband,
//! build, and waive. A `Support` whose destination equals the supported
//! location is a support-hold; `Move` carries a flag for convoyed routes.

use crate::map::{Power, Region};
use crate::state::unit::{Location, UnitKind};

/// A Diplomacy order.
///
/// Each variant carries exactly the data needed to unambiguously specify
/// the order. Structural equality and exhaustive matching are relied on
/// throughout the adjudicator and sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Hold in place.
    Hold { unit: Location },

    /// Move to an adjacent location, or via convoy when flagged.
    Move {
        unit: Location,
        dest: Location,
        via_convoy: bool,
    },

    /// Support another unit; `dest == supported` (by region) means
    /// support-hold, otherwise support of the move `supported -> dest`.
    Support {
        unit: Location,
        supported: Location,
        dest: Location,
    },

    /// Convoy an army across this fleet's sea region.
    Convoy {
        unit: Location,
        army: Location,
        dest: Location,
    },

    /// Retreat a dislodged unit.
    Retreat { unit: Location, dest: Location },

    /// Remove a unit (retreat phase or build phase).
    Disband { unit: Location },

    /// Place a new unit on a vacant home supply center.
    Build {
        power: Power,
        kind: UnitKind,
        location: Location,
    },

    /// Voluntarily skip one build.
    Waive { power: Power },
}

impl Order {
    /// Returns the location of the unit issuing this order, if any
    /// (builds and waives have no issuing unit).
    pub fn unit_location(&self) -> Option<Location> {
        match *self {
            Order::Hold { unit }
            | Order::Move { unit, .. }
            | Order::Support { unit, .. }
            | Order::Convoy { unit, .. }
            | Order::Retreat { unit, .. }
            | Order::Disband { unit } => Some(unit),
            Order::Build { .. } | Order::Waive { .. } => None,
        }
    }

    /// Returns the region of the issuing unit, if any.
    pub fn unit_region(&self) -> Option<Region> {
        self.unit_location().map(|l| l.region)
    }

    /// Returns true for a `Support` whose destination is the supported
    /// unit's own region.
    pub fn is_support_hold(&self) -> bool {
        matches!(*self, Order::Support { supported, dest, .. } if supported.region == dest.region)
    }

    /// Returns the destination region of a `Move`, if this is one.
    pub fn move_dest(&self) -> Option<Region> {
        match *self {
            Order::Move { dest, .. } => Some(dest.region),
            _ => None,
        }
    }
}

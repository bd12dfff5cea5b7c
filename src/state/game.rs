//! Game state representation.
//!
//! Holds the complete snapshot of a Diplomacy game at a point in time:
//! turn descriptor, unit list, supply-center ownership, and any units
//! awaiting retreat. States are immutable values in the analyzer — the
//! adjudicator consumes one state and produces a fresh one.

use serde::Serialize;

use crate::map::{Coast, Power, Region, ALL_REGIONS, REGION_COUNT};
use crate::state::unit::{Location, Unit, UnitKind};

/// The season of a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Fall,
}

/// The phase within a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Movement,
    Retreat,
    Build,
}

/// A turn descriptor: year, season, and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Turn {
    pub year: u16,
    pub season: Season,
    pub phase: Phase,
}

impl Turn {
    pub const fn new(year: u16, season: Season, phase: Phase) -> Self {
        Self { year, season, phase }
    }
}

/// A unit forced out of its region, with its legal retreat options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DislodgedUnit {
    pub unit: Unit,
    /// Region the successful attack came from.
    pub attacker_from: Region,
    /// Locations this unit may legally retreat to.
    pub retreats: Vec<Location>,
}

/// Complete game state at a point in time.
///
/// At most one unit per region; dislodged units live in their own list and
/// the list is non-empty only during a retreat phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub turn: Turn,
    pub units: Vec<Unit>,
    /// Supply center owner per region index: None if not an owned SC.
    pub sc_owner: [Option<Power>; REGION_COUNT],
    pub dislodged: Vec<DislodgedUnit>,
}

impl GameState {
    /// Creates an empty state with no units or ownership.
    pub fn empty(turn: Turn) -> Self {
        GameState {
            turn,
            units: Vec::new(),
            sc_owner: [None; REGION_COUNT],
            dislodged: Vec::new(),
        }
    }

    /// Builds the standard 1901 opening position.
    pub fn opening() -> Self {
        use crate::map::Power::*;
        use crate::map::Region::*;
        use UnitKind::{Army as A, Fleet as F};

        let mut state = GameState::empty(Turn::new(1901, Season::Spring, Phase::Movement));
        let setup: &[(Power, UnitKind, Region, Coast)] = &[
            (Austria, A, Vie, Coast::None),
            (Austria, A, Bud, Coast::None),
            (Austria, F, Tri, Coast::None),
            (England, F, Lon, Coast::None),
            (England, F, Edi, Coast::None),
            (England, A, Lvp, Coast::None),
            (France, A, Par, Coast::None),
            (France, A, Mar, Coast::None),
            (France, F, Bre, Coast::None),
            (Germany, A, Ber, Coast::None),
            (Germany, A, Mun, Coast::None),
            (Germany, F, Kie, Coast::None),
            (Italy, A, Rom, Coast::None),
            (Italy, A, Ven, Coast::None),
            (Italy, F, Nap, Coast::None),
            (Russia, A, Mos, Coast::None),
            (Russia, A, War, Coast::None),
            (Russia, F, Sev, Coast::None),
            (Russia, F, Stp, Coast::South),
            (Turkey, A, Con, Coast::None),
            (Turkey, A, Smy, Coast::None),
            (Turkey, F, Ank, Coast::None),
        ];
        for &(power, kind, region, coast) in setup {
            state.place_unit(Unit::new(kind, power, Location::with_coast(region, coast)));
            state.sc_owner[region as usize] = Some(power);
        }
        state
    }

    /// Returns the unit occupying a region, if any.
    pub fn unit_at(&self, region: Region) -> Option<&Unit> {
        self.units.iter().find(|u| u.location.region == region)
    }

    /// Places a unit. Returns false if the region is already occupied.
    pub fn place_unit(&mut self, unit: Unit) -> bool {
        if self.unit_at(unit.location.region).is_some() {
            return false;
        }
        self.units.push(unit);
        true
    }

    /// Removes and returns the unit at a region, if any.
    pub fn remove_unit_at(&mut self, region: Region) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.location.region == region)?;
        Some(self.units.swap_remove(idx))
    }

    /// Returns the supply-center owner of a region.
    pub fn sc_owner(&self, region: Region) -> Option<Power> {
        self.sc_owner[region as usize]
    }

    /// Sets supply-center ownership for a region.
    pub fn set_sc_owner(&mut self, region: Region, owner: Option<Power>) {
        self.sc_owner[region as usize] = owner;
    }

    /// Counts supply centers owned by a power.
    pub fn sc_count(&self, power: Power) -> usize {
        self.sc_owner.iter().filter(|o| **o == Some(power)).count()
    }

    /// Counts units belonging to a power.
    pub fn unit_count(&self, power: Power) -> usize {
        self.units.iter().filter(|u| u.power == power).count()
    }

    /// Returns the dislodged unit whose home region is `region`, if any.
    pub fn dislodged_at(&self, region: Region) -> Option<&DislodgedUnit> {
        self.dislodged.iter().find(|d| d.unit.location.region == region)
    }

    /// Returns supply-center ownership as a list of (region, power) pairs.
    pub fn supply_center_pairs(&self) -> Vec<(Region, Power)> {
        ALL_REGIONS
            .iter()
            .filter_map(|&r| self.sc_owner[r as usize].map(|p| (r, p)))
            .collect()
    }

    /// Returns true if a power still participates in the game (has any unit
    /// or any supply center).
    pub fn power_alive(&self, power: Power) -> bool {
        self.unit_count(power) > 0 || self.sc_count(power) > 0
    }
}

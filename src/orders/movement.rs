//! Movement-phase order generation.
//!
//! Enumerates legal hold, move, support, and convoy orders for the unit in
//! a given region: adjacent moves (with per-coast enumeration for fleets
//! entering bicoastal regions), single-hop convoyed moves where a fleet is
//! actually positioned to carry them, supports restricted to destinations
//! this unit can reach, and convoys for fleets in sea regions.

use crate::map::{adjacent_regions, fleet_hops, is_adjacent, Coast, Region, RegionKind, ALL_REGIONS};
use crate::state::{GameState, Location, Order, Unit, UnitKind};

/// Generates all legal movement-phase orders for the unit at `region`.
///
/// Returns an empty vec if no unit occupies the region.
pub fn legal_orders(region: Region, state: &GameState) -> Vec<Order> {
    let unit = match state.unit_at(region) {
        Some(u) => *u,
        None => return Vec::new(),
    };

    let mut orders = Vec::new();

    // Hold is always legal.
    orders.push(Order::Hold { unit: unit.location });

    // Direct moves to adjacent regions.
    let move_targets = move_targets(&unit);
    for &dest in &move_targets {
        orders.push(Order::Move { unit: unit.location, dest, via_convoy: false });
    }

    // Convoyed moves for armies with a fleet positioned to carry them.
    if unit.kind == UnitKind::Army {
        for dest in convoy_move_targets(&unit, state) {
            orders.push(Order::Move { unit: unit.location, dest, via_convoy: true });
        }
    }

    // Supports for every other unit whose position or destination we reach.
    generate_supports(&unit, state, &move_targets, &mut orders);

    // Convoy orders: only fleets in sea regions may carry.
    if unit.kind == UnitKind::Fleet && region.kind() == RegionKind::Sea {
        generate_convoys(&unit, state, &mut orders);
    }

    orders
}

/// Destinations reachable in one direct step, one `Location` per arrival
/// coast for bicoastal fleet destinations.
fn move_targets(unit: &Unit) -> Vec<Location> {
    let mut targets = Vec::new();
    match unit.kind {
        UnitKind::Army => {
            for &dest in adjacent_regions(unit.location.region, Coast::None, false).iter() {
                targets.push(Location::new(dest));
            }
        }
        UnitKind::Fleet => {
            for &(dest, coast) in fleet_hops(unit.location.region, unit.location.coast) {
                targets.push(Location::with_coast(dest, coast));
            }
        }
    }
    targets
}

/// Coastal destinations an army can reach via a single occupied sea region.
///
/// A destination qualifies when some sea region holds a fleet and touches
/// both the army's region and the destination. Longer chains are left to
/// the adjudicator's path search; sampling only proposes one-hop routes.
fn convoy_move_targets(unit: &Unit, state: &GameState) -> Vec<Location> {
    let src = unit.location.region;
    let mut targets: Vec<Location> = Vec::new();

    for sea_fleet in state.units.iter() {
        if sea_fleet.kind != UnitKind::Fleet {
            continue;
        }
        let sea = sea_fleet.location.region;
        if sea.kind() != RegionKind::Sea {
            continue;
        }
        if !is_adjacent(sea, Coast::None, src, Coast::None, true) {
            continue;
        }
        for &(dest, _) in fleet_hops(sea, Coast::None) {
            if dest == src || dest.kind() == RegionKind::Sea {
                continue;
            }
            let loc = Location::new(dest);
            if !targets.contains(&loc) {
                targets.push(loc);
            }
        }
    }

    targets
}

/// Generates support-hold and support-move orders for the given unit.
fn generate_supports(
    unit: &Unit,
    state: &GameState,
    move_targets: &[Location],
    orders: &mut Vec<Order>,
) {
    let reachable: Vec<Region> = move_targets.iter().map(|l| l.region).collect();

    for other in state.units.iter() {
        if other.location.region == unit.location.region {
            continue;
        }

        // Support hold: this unit must be able to move to the supported
        // unit's region.
        if reachable.contains(&other.location.region) {
            orders.push(Order::Support {
                unit: unit.location,
                supported: other.location,
                dest: Location::new(other.location.region),
            });
        }

        // Support move: the supported unit must itself reach the
        // destination, and so must we.
        let other_fleet = other.kind == UnitKind::Fleet;
        for dest in adjacent_regions(other.location.region, other.location.coast, other_fleet) {
            if dest == unit.location.region {
                continue; // cannot support a move into our own region
            }
            if !other.kind.can_occupy(dest) || !reachable.contains(&dest) {
                continue;
            }
            orders.push(Order::Support {
                unit: unit.location,
                supported: other.location,
                dest: Location::new(dest),
            });
        }
    }
}

/// Generates convoy orders for a fleet in a sea region: one per army this
/// sea touches, per coastal destination it also touches.
fn generate_convoys(unit: &Unit, state: &GameState, orders: &mut Vec<Order>) {
    let sea = unit.location.region;

    for army in state.units.iter() {
        if army.kind != UnitKind::Army {
            continue;
        }
        let src = army.location.region;
        if !is_adjacent(sea, Coast::None, src, Coast::None, true) {
            continue;
        }
        for &(dest, _) in fleet_hops(sea, Coast::None) {
            if dest == src || dest.kind() == RegionKind::Sea {
                continue;
            }
            orders.push(Order::Convoy {
                unit: unit.location,
                army: army.location,
                dest: Location::new(dest),
            });
        }
    }
}

/// Generates per-unit option lists for every unit of `power`, in region
/// order. The caller picks exactly one order from each inner list.
pub fn movement_options(power: crate::map::Power, state: &GameState) -> Vec<Vec<Order>> {
    let mut options = Vec::new();
    for &region in ALL_REGIONS.iter() {
        if let Some(unit) = state.unit_at(region) {
            if unit.power != power {
                continue;
            }
            let legal = legal_orders(region, state);
            if !legal.is_empty() {
                options.push(legal);
            }
        }
    }
    options
}

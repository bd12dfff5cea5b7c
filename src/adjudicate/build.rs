//! Build-phase resolution.
//!
//! For each power, delta = owned supply centers minus units. A positive
//! delta admits up to delta builds on vacant owned home centers; a negative
//! delta requires exactly -delta disbands, topped up by the civil-disorder
//! rule when the power supplies fewer: fleets before armies, then greater
//! distance to the nearest home supply center, then region tag.

use std::collections::VecDeque;
use std::sync::LazyLock;

use crate::map::{Coast, Power, RegionKind, ALL_REGIONS, ARMY_ADJ, FLEET_ADJ, REGION_COUNT};
use crate::state::{GameState, Order, Unit, UnitKind};

use super::phase::next_turn;
use super::{OrderStatus, Resolution};

/// BFS distances between all region pairs over one movement graph.
struct DistMatrix {
    dist: Box<[i16]>,
}

static ARMY_DIST: LazyLock<DistMatrix> = LazyLock::new(|| build_dist_matrix(false));
static FLEET_DIST: LazyLock<DistMatrix> = LazyLock::new(|| build_dist_matrix(true));

fn build_dist_matrix(fleet: bool) -> DistMatrix {
    let mut dist = vec![-1i16; REGION_COUNT * REGION_COUNT];
    let mut queue: VecDeque<(usize, i16)> = VecDeque::with_capacity(REGION_COUNT);

    for src in 0..REGION_COUNT {
        dist[src * REGION_COUNT + src] = 0;
        queue.clear();
        queue.push_back((src, 0));

        while let Some((cur, d)) = queue.pop_front() {
            let neighbors: Vec<usize> = if fleet {
                FLEET_ADJ[cur].iter().map(|&(r, _)| r as usize).collect()
            } else {
                ARMY_ADJ[cur].iter().map(|&r| r as usize).collect()
            };
            for to in neighbors {
                if dist[src * REGION_COUNT + to] == -1 {
                    dist[src * REGION_COUNT + to] = d + 1;
                    queue.push_back((to, d + 1));
                }
            }
        }
    }

    DistMatrix { dist: dist.into_boxed_slice() }
}

/// Distance from a unit to the nearest home supply center of its power,
/// over the graph its kind moves on. Unreachable counts as farthest.
fn home_distance(unit: &Unit) -> i16 {
    let dm = if unit.kind == UnitKind::Fleet { &*FLEET_DIST } else { &*ARMY_DIST };
    let from = unit.location.region as usize;
    let mut best = i16::MAX;
    for &region in ALL_REGIONS.iter() {
        if region.home_power() != Some(unit.power) {
            continue;
        }
        let d = dm.dist[from * REGION_COUNT + region as usize];
        if d >= 0 && d < best {
            best = d;
        }
    }
    best
}

/// Resolves build-phase orders and returns the successor state plus one
/// resolution per submitted order.
pub fn resolve_builds(state: &GameState, orders: &[(Order, Power)]) -> (GameState, Vec<Resolution>) {
    let mut next = state.clone();
    next.dislodged.clear();

    let mut resolutions: Vec<Resolution> = Vec::with_capacity(orders.len());
    let mut builds_used = [0i32; 7];
    let mut disbands_used = [0i32; 7];
    let mut disbanded = [false; REGION_COUNT];

    let delta_of = |power: Power| -> i32 {
        state.sc_count(power) as i32 - state.unit_count(power) as i32
    };

    for (order, power) in orders.iter() {
        let resolution = apply_order(
            order,
            *power,
            state,
            &mut next,
            delta_of(*power),
            &mut builds_used,
            &mut disbands_used,
            &mut disbanded,
        );
        resolutions.push(resolution);
    }

    // Civil disorder: powers short on required disbands lose units
    // automatically — fleets first, then farthest from home, then by tag.
    for &power in crate::map::ALL_POWERS.iter() {
        let delta = delta_of(power);
        if delta >= 0 {
            continue;
        }
        let mut remaining = (-delta) - disbands_used[power as usize];
        if remaining <= 0 {
            continue;
        }
        let mut candidates: Vec<Unit> = next
            .units
            .iter()
            .filter(|u| u.power == power)
            .copied()
            .collect();
        candidates.sort_by_key(|u| {
            let kind_rank = if u.kind == UnitKind::Fleet { 0 } else { 1 };
            (kind_rank, -(home_distance(u) as i32), u.location.region.tag())
        });
        for unit in candidates {
            if remaining == 0 {
                break;
            }
            next.remove_unit_at(unit.location.region);
            remaining -= 1;
        }
    }

    next.turn = next_turn(state.turn, false);
    (next, resolutions)
}

#[allow(clippy::too_many_arguments)]
fn apply_order(
    order: &Order,
    issuer: Power,
    state: &GameState,
    next: &mut GameState,
    delta: i32,
    builds_used: &mut [i32; 7],
    disbands_used: &mut [i32; 7],
    disbanded: &mut [bool; REGION_COUNT],
) -> Resolution {
    match *order {
        Order::Build { power, kind, location } => {
            if power != issuer {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "wrong power");
            }
            if delta <= 0 || builds_used[power as usize] >= delta {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "no build available");
            }
            let region = location.region;
            if region.home_power() != Some(power)
                || !region.is_supply_center()
                || state.sc_owner(region) != Some(power)
            {
                return Resolution::with_reason(
                    *order,
                    issuer,
                    OrderStatus::Void,
                    "not an owned home supply center",
                );
            }
            if next.unit_at(region).is_some() {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "region occupied");
            }
            match kind {
                UnitKind::Army => {
                    if !UnitKind::Army.can_occupy(region) {
                        return Resolution::with_reason(*order, issuer, OrderStatus::Void, "illegal build location");
                    }
                }
                UnitKind::Fleet => {
                    if !matches!(region.kind(), RegionKind::Coastal | RegionKind::Bicoastal) {
                        return Resolution::with_reason(*order, issuer, OrderStatus::Void, "illegal build location");
                    }
                    if region.is_bicoastal() {
                        if !region.valid_coasts().contains(&location.coast) {
                            return Resolution::with_reason(*order, issuer, OrderStatus::Void, "missing coast");
                        }
                    } else if location.coast != Coast::None {
                        return Resolution::with_reason(*order, issuer, OrderStatus::Void, "illegal build location");
                    }
                }
            }
            next.place_unit(Unit::new(kind, power, location));
            builds_used[power as usize] += 1;
            Resolution::new(*order, issuer, OrderStatus::Succeeds)
        }
        Order::Waive { power } => {
            if power != issuer {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "wrong power");
            }
            if delta <= 0 || builds_used[power as usize] >= delta {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "no build available");
            }
            builds_used[power as usize] += 1;
            Resolution::new(*order, issuer, OrderStatus::Succeeds)
        }
        Order::Disband { unit } => {
            if delta >= 0 {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "no adjustment needed");
            }
            if disbands_used[issuer as usize] >= -delta {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "excess disband");
            }
            let region = unit.region;
            if disbanded[region as usize] {
                return Resolution::with_reason(*order, issuer, OrderStatus::Void, "duplicate order");
            }
            match state.unit_at(region) {
                Some(u) if u.power == issuer => {}
                _ => {
                    return Resolution::with_reason(*order, issuer, OrderStatus::Void, "no such unit");
                }
            }
            next.remove_unit_at(region);
            disbanded[region as usize] = true;
            disbands_used[issuer as usize] += 1;
            Resolution::new(*order, issuer, OrderStatus::Succeeds)
        }
        _ => Resolution::with_reason(*order, issuer, OrderStatus::Void, "wrong phase"),
    }
}

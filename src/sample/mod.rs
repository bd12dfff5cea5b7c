//! Coherent joint-action sampling.
//!
//! The exact joint order space is O(options^units) and is never enumerated.
//! Instead one coherent joint action is drawn per call, in two passes:
//!
//! 1. every unit picks a primary Move/Hold by softmax over heuristic
//!    scores, with destinations already claimed by an earlier friendly
//!    unit filtered out, followed by a swap scan that downgrades one leg
//!    of any A->B / B->A pair to a hold;
//! 2. each unit reconsiders its primary action against the Support/Convoy
//!    options that reference a real decision from pass 1, so every support
//!    and convoy in the output points at an order that actually exists.
//!
//! Retreat sampling is uniform per dislodged unit; build sampling prefers
//! armies and distinct locations, disbands are drawn uniformly.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::map::{is_adjacent, Coast, Power, Region, ALL_POWERS};
use crate::orders::{build_options, movement_options, retreat_options};
use crate::state::{GameState, Order, Phase, Unit, UnitKind};

/// Draws one coherent joint action for the given powers in the state's
/// current phase. Movement treats the powers as one coordinated coalition;
/// retreat and build phases sample per power.
pub fn sample_joint(powers: &[Power], state: &GameState, rng: &mut SmallRng) -> Vec<(Order, Power)> {
    match state.turn.phase {
        Phase::Movement => sample_movement(powers, state, rng),
        Phase::Retreat => powers
            .iter()
            .flat_map(|&p| sample_retreats(p, state, rng))
            .collect(),
        Phase::Build => powers
            .iter()
            .flat_map(|&p| sample_builds(p, state, rng))
            .collect(),
    }
}

/// Draws one joint action for every power on the board, coalition powers
/// first as one block, each remaining power independently.
pub fn sample_all_powers(
    coalition: &[Power],
    state: &GameState,
    rng: &mut SmallRng,
) -> Vec<(Order, Power)> {
    let mut orders = sample_joint(coalition, state, rng);
    for &power in ALL_POWERS.iter() {
        if coalition.contains(&power) {
            continue;
        }
        orders.extend(sample_joint(&[power], state, rng));
    }
    orders
}

/// One unit's sampling state across the two passes.
struct Pick {
    unit: Unit,
    options: Vec<Order>,
    choice: Order,
    score: f32,
}

fn sample_movement(powers: &[Power], state: &GameState, rng: &mut SmallRng) -> Vec<(Order, Power)> {
    let mut picks: Vec<Pick> = Vec::new();
    let mut claimed: Vec<Region> = Vec::new();

    // Pass 1: primary Move/Hold per unit, claimed destinations excluded.
    for &power in powers {
        for options in movement_options(power, state) {
            let unit = options
                .first()
                .and_then(|o| o.unit_location())
                .and_then(|l| state.unit_at(l.region))
                .copied();
            let unit = match unit {
                Some(u) => u,
                None => continue,
            };

            let mut candidates: Vec<(Order, f32)> = options
                .iter()
                .filter(|o| matches!(o, Order::Hold { .. } | Order::Move { .. }))
                .filter(|o| match o.move_dest() {
                    Some(dest) => !claimed.contains(&dest),
                    None => true,
                })
                .map(|&o| (o, score_primary(&o, unit.power, powers, state)))
                .collect();
            if candidates.is_empty() {
                candidates.push((Order::Hold { unit: unit.location }, 0.0));
            }

            let (choice, score) = softmax_draw(&candidates, rng);
            if let Some(dest) = choice.move_dest() {
                claimed.push(dest);
            }
            picks.push(Pick { unit, options, choice, score });
        }
    }

    // Pass 1b: a non-convoyed A->B / B->A pair always bounces; downgrade
    // the weaker leg to a hold.
    suppress_swaps(&mut picks);

    // Pass 2: coordination upgrade to supports and convoys that reference
    // real pass-1 decisions.
    for i in 0..picks.len() {
        let candidates = coordination_candidates(i, &picks, powers, state);
        if candidates.is_empty() {
            continue;
        }
        let mut weighted: Vec<(Order, f32)> = vec![(picks[i].choice, picks[i].score)];
        weighted.extend(candidates);
        let (choice, score) = softmax_draw(&weighted, rng);
        picks[i].choice = choice;
        picks[i].score = score;
    }

    picks.into_iter().map(|p| (p.choice, p.unit.power)).collect()
}

/// Heuristic score for a primary Move/Hold; the range stays within
/// roughly [-20, 6] so the softmax never overflows.
fn score_primary(order: &Order, power: Power, coalition: &[Power], state: &GameState) -> f32 {
    match *order {
        Order::Hold { unit } => {
            let region = unit.region;
            if region.is_supply_center() && state.sc_owner(region) == Some(power) {
                0.5
            } else {
                0.0
            }
        }
        Order::Move { dest, .. } => {
            let region = dest.region;
            if region.is_supply_center() {
                match state.sc_owner(region) {
                    Some(owner) if owner == power => 1.0,
                    Some(owner) if coalition.contains(&owner) => -4.0,
                    Some(_) => 6.0,
                    None => 5.0,
                }
            } else {
                1.0
            }
        }
        _ => 0.0,
    }
}

/// Softmax draw over scored candidates, stabilized by subtracting the
/// maximum score before exponentiating.
fn softmax_draw(candidates: &[(Order, f32)], rng: &mut SmallRng) -> (Order, f32) {
    debug_assert!(!candidates.is_empty());
    let max = candidates
        .iter()
        .map(|c| c.1)
        .fold(f32::NEG_INFINITY, f32::max);
    let weights: Vec<f64> = candidates.iter().map(|c| ((c.1 - max) as f64).exp()).collect();
    let total: f64 = weights.iter().sum();
    let mut draw = rng.gen::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        draw -= w;
        if draw <= 0.0 {
            return candidates[i];
        }
    }
    *candidates.last().expect("candidates is non-empty")
}

/// Downgrades the lower-scored leg of every non-convoyed position swap.
fn suppress_swaps(picks: &mut [Pick]) {
    for i in 0..picks.len() {
        for j in (i + 1)..picks.len() {
            let (a_dest, a_convoy) = match picks[i].choice {
                Order::Move { dest, via_convoy, .. } => (dest.region, via_convoy),
                _ => continue,
            };
            let (b_dest, b_convoy) = match picks[j].choice {
                Order::Move { dest, via_convoy, .. } => (dest.region, via_convoy),
                _ => continue,
            };
            if a_convoy || b_convoy {
                continue;
            }
            if a_dest != picks[j].unit.location.region || b_dest != picks[i].unit.location.region {
                continue;
            }
            let weaker = if picks[i].score <= picks[j].score { i } else { j };
            picks[weaker].choice = Order::Hold { unit: picks[weaker].unit.location };
            picks[weaker].score = 0.0;
        }
    }
}

/// Support/Convoy options of pick `i` that reference another pick's actual
/// decision, each with its coordination score.
fn coordination_candidates(
    i: usize,
    picks: &[Pick],
    coalition: &[Power],
    state: &GameState,
) -> Vec<(Order, f32)> {
    let mut out = Vec::new();

    for option in picks[i].options.iter() {
        match *option {
            Order::Support { supported, dest, .. } => {
                let supported_pick = picks
                    .iter()
                    .enumerate()
                    .find(|(j, p)| *j != i && p.unit.location.region == supported.region)
                    .map(|(_, p)| p);
                let supported_pick = match supported_pick {
                    Some(p) => p,
                    None => continue,
                };

                if supported.region == dest.region {
                    // Support-hold: only of a unit that stayed a plain hold.
                    if !matches!(supported_pick.choice, Order::Hold { .. }) {
                        continue;
                    }
                    out.push((*option, score_support_hold(supported.region, coalition, state)));
                } else {
                    // Support-move: the referenced move must be happening.
                    let matches_move = matches!(
                        supported_pick.choice,
                        Order::Move { dest: d, .. } if d.region == dest.region
                    );
                    if !matches_move {
                        continue;
                    }
                    out.push((*option, score_support_move(dest.region, coalition, state)));
                }
            }
            Order::Convoy { army, dest, .. } => {
                let carried = picks.iter().enumerate().find(|(j, p)| {
                    *j != i
                        && p.unit.location.region == army.region
                        && matches!(
                            p.choice,
                            Order::Move { dest: d, via_convoy: true, .. } if d.region == dest.region
                        )
                });
                if carried.is_none() {
                    continue;
                }
                out.push((*option, 2.0));
            }
            _ => {}
        }
    }

    out
}

/// True when any non-coalition unit can reach the region in one step.
fn threatened(region: Region, coalition: &[Power], state: &GameState) -> bool {
    state.units.iter().any(|u| {
        !coalition.contains(&u.power)
            && is_adjacent(
                u.location.region,
                u.location.coast,
                region,
                Coast::None,
                u.kind == UnitKind::Fleet,
            )
    })
}

fn score_support_hold(region: Region, coalition: &[Power], state: &GameState) -> f32 {
    let under_threat = threatened(region, coalition, state);
    let coalition_center = region.is_supply_center()
        && state
            .sc_owner(region)
            .map(|o| coalition.contains(&o))
            .unwrap_or(false);
    if under_threat && coalition_center {
        5.0
    } else if under_threat {
        2.0
    } else {
        0.1
    }
}

fn score_support_move(dest: Region, coalition: &[Power], state: &GameState) -> f32 {
    let enemy_center = dest.is_supply_center()
        && state
            .sc_owner(dest)
            .map(|o| !coalition.contains(&o))
            .unwrap_or(false);
    let enemy_unit = state
        .unit_at(dest)
        .map(|u| !coalition.contains(&u.power))
        .unwrap_or(false);
    if enemy_center {
        6.0
    } else if enemy_unit {
        4.0
    } else if dest.is_supply_center() && state.sc_owner(dest).is_none() {
        3.0
    } else {
        1.5
    }
}

/// Uniform draw among each dislodged unit's retreat options.
pub fn sample_retreats(power: Power, state: &GameState, rng: &mut SmallRng) -> Vec<(Order, Power)> {
    let mut orders = Vec::new();
    for choices in retreat_options(power, state) {
        if choices.is_empty() {
            continue;
        }
        let idx = rng.gen_range(0..choices.len());
        orders.push((choices[idx], power));
    }
    orders
}

/// Builds prefer armies over fleets at distinct locations; forced disbands
/// are drawn uniformly up to the needed count.
pub fn sample_builds(power: Power, state: &GameState, rng: &mut SmallRng) -> Vec<(Order, Power)> {
    let mut option_lists = build_options(power, state);
    let choices = match option_lists.pop() {
        Some(c) => c,
        None => return Vec::new(),
    };

    let sc = state.sc_count(power) as i32;
    let units = state.unit_count(power) as i32;

    if sc > units {
        let mut orders: Vec<(Order, Power)> = Vec::new();
        let mut used: Vec<Region> = Vec::new();
        let mut armies: Vec<Order> = Vec::new();
        let mut fleets: Vec<Order> = Vec::new();
        for order in choices.iter() {
            match order {
                Order::Build { kind: UnitKind::Army, .. } => armies.push(*order),
                Order::Build { kind: UnitKind::Fleet, .. } => fleets.push(*order),
                _ => {}
            }
        }
        shuffle(&mut armies, rng);
        shuffle(&mut fleets, rng);

        for order in armies.into_iter().chain(fleets) {
            if orders.len() as i32 >= sc - units {
                break;
            }
            if let Order::Build { location, .. } = order {
                if used.contains(&location.region) {
                    continue;
                }
                used.push(location.region);
                orders.push((order, power));
            }
        }
        orders
    } else if units > sc {
        let mut disbands = choices;
        shuffle(&mut disbands, rng);
        disbands
            .into_iter()
            .take((units - sc) as usize)
            .map(|o| (o, power))
            .collect()
    } else {
        Vec::new()
    }
}

/// Fisher-Yates shuffle.
fn shuffle(orders: &mut [Order], rng: &mut SmallRng) {
    for i in (1..orders.len()).rev() {
        let j = rng.gen_range(0..=i);
        orders.swap(i, j);
    }
}

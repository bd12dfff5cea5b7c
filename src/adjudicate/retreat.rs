//! Retreat-phase resolution.
//!
//! Retreats are validated against the dislodged unit's retreat set; two or
//! more retreats into the same region annihilate every contestant. Disband
//! orders and missing orders both remove the unit. Supply centers change
//! hands after Fall retreats.

use crate::map::{Power, REGION_COUNT};
use crate::state::{GameState, Location, Order, Season};

use super::phase::{next_turn, update_sc_ownership};
use super::{OrderStatus, Resolution};

/// Resolves retreat-phase orders and returns the successor state plus one
/// resolution per submitted order.
pub fn resolve_retreats(state: &GameState, orders: &[(Order, Power)]) -> (GameState, Vec<Resolution>) {
    // Validated retreat destination per dislodged region, parallel to the
    // input list; None = no valid retreat (disband, bad order, or absent).
    let mut accepted: Vec<Option<(usize, Location)>> = Vec::new();
    let mut resolutions: Vec<Resolution> = Vec::with_capacity(orders.len());
    let mut ordered = [false; REGION_COUNT];

    for (i, (order, power)) in orders.iter().enumerate() {
        let location = match order.unit_location() {
            Some(l) => l,
            None => {
                resolutions.push(Resolution::with_reason(*order, *power, OrderStatus::Void, "wrong phase"));
                continue;
            }
        };
        let dislodged = match state.dislodged_at(location.region) {
            Some(d) if d.unit.power == *power => d,
            _ => {
                resolutions.push(Resolution::with_reason(*order, *power, OrderStatus::Void, "no dislodged unit"));
                continue;
            }
        };
        if ordered[location.region as usize] {
            resolutions.push(Resolution::with_reason(*order, *power, OrderStatus::Void, "duplicate order"));
            continue;
        }

        match order {
            Order::Disband { .. } => {
                ordered[location.region as usize] = true;
                resolutions.push(Resolution::new(*order, *power, OrderStatus::Succeeds));
            }
            Order::Retreat { dest, .. } => {
                ordered[location.region as usize] = true;
                let valid = dislodged.retreats.iter().any(|r| *r == *dest);
                if valid {
                    accepted.push(Some((i, *dest)));
                    // Status filled in after standoff detection.
                    resolutions.push(Resolution::new(*order, *power, OrderStatus::Succeeds));
                } else {
                    resolutions.push(Resolution::with_reason(
                        *order,
                        *power,
                        OrderStatus::Void,
                        "not a legal retreat",
                    ));
                }
            }
            _ => {
                resolutions.push(Resolution::with_reason(*order, *power, OrderStatus::Void, "wrong phase"));
            }
        }
    }

    // Standoffs: any destination region contested by more than one valid
    // retreat annihilates all of them.
    let mut target_count = [0u8; REGION_COUNT];
    for entry in accepted.iter().flatten() {
        target_count[entry.1.region as usize] += 1;
    }
    for entry in accepted.iter_mut() {
        if let Some((input_idx, dest)) = *entry {
            if target_count[dest.region as usize] > 1 {
                resolutions[input_idx].status = OrderStatus::Bounced;
                *entry = None;
            }
        }
    }

    // Build the successor state: surviving retreats re-enter the board,
    // everything else disappears.
    let mut next = state.clone();
    next.dislodged.clear();
    for entry in accepted.iter().flatten() {
        let (input_idx, dest) = *entry;
        let (order, _) = orders[input_idx];
        if let Some(src) = order.unit_location() {
            if let Some(d) = state.dislodged_at(src.region) {
                let mut unit = d.unit;
                unit.location = dest;
                next.place_unit(unit);
            }
        }
    }

    if state.turn.season == Season::Fall {
        update_sc_ownership(&mut next);
    }
    next.turn = next_turn(state.turn, false);

    (next, resolutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Coast, Region};
    use crate::state::{DislodgedUnit, Phase, Turn, Unit, UnitKind};

    fn retreat_state(season: Season) -> GameState {
        GameState::empty(Turn::new(1902, season, Phase::Retreat))
    }

    fn dislodge(
        state: &mut GameState,
        power: Power,
        kind: UnitKind,
        region: Region,
        attacker: Region,
        retreats: &[Region],
    ) {
        state.dislodged.push(DislodgedUnit {
            unit: Unit::new(kind, power, Location::new(region)),
            attacker_from: attacker,
            retreats: retreats.iter().map(|&r| Location::new(r)).collect(),
        });
    }

    #[test]
    fn valid_retreat_moves_unit() {
        let mut state = retreat_state(Season::Spring);
        dislodge(&mut state, Power::Austria, UnitKind::Army, Region::Ser, Region::Bul, &[Region::Alb]);

        let orders = [(
            Order::Retreat { unit: Location::new(Region::Ser), dest: Location::new(Region::Alb) },
            Power::Austria,
        )];
        let (next, resolutions) = resolve_retreats(&state, &orders);
        assert_eq!(resolutions[0].status, OrderStatus::Succeeds);
        assert!(next.unit_at(Region::Alb).is_some());
        assert!(next.dislodged.is_empty());
        assert_eq!(next.turn, Turn::new(1902, Season::Fall, Phase::Movement));
    }

    #[test]
    fn contested_retreats_annihilate() {
        let mut state = retreat_state(Season::Spring);
        dislodge(&mut state, Power::Austria, UnitKind::Army, Region::Ser, Region::Bud, &[Region::Alb]);
        dislodge(&mut state, Power::Turkey, UnitKind::Army, Region::Gre, Region::Bul, &[Region::Alb]);

        let orders = [
            (
                Order::Retreat { unit: Location::new(Region::Ser), dest: Location::new(Region::Alb) },
                Power::Austria,
            ),
            (
                Order::Retreat { unit: Location::new(Region::Gre), dest: Location::new(Region::Alb) },
                Power::Turkey,
            ),
        ];
        let (next, resolutions) = resolve_retreats(&state, &orders);
        assert_eq!(resolutions[0].status, OrderStatus::Bounced);
        assert_eq!(resolutions[1].status, OrderStatus::Bounced);
        assert!(next.unit_at(Region::Alb).is_none());
        assert!(next.units.is_empty());
    }

    #[test]
    fn unordered_dislodged_unit_disbands() {
        let mut state = retreat_state(Season::Spring);
        dislodge(&mut state, Power::Austria, UnitKind::Army, Region::Ser, Region::Bul, &[Region::Alb]);

        let (next, resolutions) = resolve_retreats(&state, &[]);
        assert!(resolutions.is_empty());
        assert!(next.units.is_empty());
        assert!(next.dislodged.is_empty());
    }

    #[test]
    fn illegal_retreat_is_void_and_disbands() {
        let mut state = retreat_state(Season::Spring);
        dislodge(&mut state, Power::Austria, UnitKind::Army, Region::Ser, Region::Bul, &[Region::Alb]);

        let orders = [(
            Order::Retreat { unit: Location::new(Region::Ser), dest: Location::new(Region::Bul) },
            Power::Austria,
        )];
        let (next, resolutions) = resolve_retreats(&state, &orders);
        assert_eq!(resolutions[0].status, OrderStatus::Void);
        assert_eq!(resolutions[0].reason, Some("not a legal retreat"));
        assert!(next.units.is_empty());
    }

    #[test]
    fn fall_retreat_updates_ownership_and_advances_to_build() {
        let mut state = retreat_state(Season::Fall);
        dislodge(&mut state, Power::France, UnitKind::Army, Region::Pic, Region::Par, &[Region::Bel]);

        let orders = [(
            Order::Retreat { unit: Location::new(Region::Pic), dest: Location::new(Region::Bel) },
            Power::France,
        )];
        let (next, _) = resolve_retreats(&state, &orders);
        assert_eq!(next.sc_owner(Region::Bel), Some(Power::France));
        assert_eq!(next.turn, Turn::new(1902, Season::Fall, Phase::Build));
    }

    #[test]
    fn fleet_retreat_keeps_coast() {
        let mut state = retreat_state(Season::Spring);
        state.dislodged.push(DislodgedUnit {
            unit: Unit::new(UnitKind::Fleet, Power::France, Location::new(Region::Mar)),
            attacker_from: Region::Pie,
            retreats: vec![Location::with_coast(Region::Spa, Coast::South)],
        });

        let orders = [(
            Order::Retreat {
                unit: Location::new(Region::Mar),
                dest: Location::with_coast(Region::Spa, Coast::South),
            },
            Power::France,
        )];
        let (next, resolutions) = resolve_retreats(&state, &orders);
        assert_eq!(resolutions[0].status, OrderStatus::Succeeds);
        let unit = next.unit_at(Region::Spa).unwrap();
        assert_eq!(unit.location.coast, Coast::South);
    }
}

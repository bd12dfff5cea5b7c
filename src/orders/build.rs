//! Build-phase order generation.
//!
//! Compares supply-center count to unit count for a power:
//! - surplus: one option list of builds on vacant owned home centers
//!   (both unit kinds where legal, one entry per coast for bicoastal
//!   fleet builds) plus a waive;
//! - deficit: one option list of disbands, one per owned unit;
//! - balanced: no options.
//!
//! The sampler is responsible for drawing the right number of orders from
//! the single list.

use crate::map::{Power, RegionKind, ALL_REGIONS};
use crate::state::{GameState, Location, Order, UnitKind};

/// Generates the build-phase option list for a power, wrapped in the same
/// one-list-per-decision shape the other phases use.
pub fn build_options(power: Power, state: &GameState) -> Vec<Vec<Order>> {
    let sc = state.sc_count(power);
    let units = state.unit_count(power);

    if sc > units {
        vec![build_choices(power, state)]
    } else if units > sc {
        vec![disband_choices(power, state)]
    } else {
        Vec::new()
    }
}

/// Build orders for every vacant home supply center still owned by the
/// power, plus a waive.
fn build_choices(power: Power, state: &GameState) -> Vec<Order> {
    let mut choices = Vec::new();

    for &region in ALL_REGIONS.iter() {
        if region.home_power() != Some(power) || !region.is_supply_center() {
            continue;
        }
        if state.sc_owner(region) != Some(power) || state.unit_at(region).is_some() {
            continue;
        }

        let kind = region.kind();

        if matches!(kind, RegionKind::Inland | RegionKind::Coastal | RegionKind::Bicoastal) {
            choices.push(Order::Build {
                power,
                kind: UnitKind::Army,
                location: Location::new(region),
            });
        }

        match kind {
            RegionKind::Coastal => {
                choices.push(Order::Build {
                    power,
                    kind: UnitKind::Fleet,
                    location: Location::new(region),
                });
            }
            RegionKind::Bicoastal => {
                for &coast in region.valid_coasts() {
                    choices.push(Order::Build {
                        power,
                        kind: UnitKind::Fleet,
                        location: Location::with_coast(region, coast),
                    });
                }
            }
            _ => {}
        }
    }

    choices.push(Order::Waive { power });
    choices
}

/// Disband orders for every unit the power owns.
fn disband_choices(power: Power, state: &GameState) -> Vec<Order> {
    state
        .units
        .iter()
        .filter(|u| u.power == power)
        .map(|u| Order::Disband { unit: u.location })
        .collect()
}

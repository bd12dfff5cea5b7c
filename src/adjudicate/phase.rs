//! Turn sequencing.
//!
//! Phase flow:
//! - Spring Movement -> Spring Retreat (if dislodged) or Fall Movement
//! - Spring Retreat  -> Fall Movement
//! - Fall Movement   -> Fall Retreat (if dislodged) or Fall Build
//! - Fall Retreat    -> Fall Build
//! - Fall Build      -> Spring Movement of year + 1

use crate::map::ALL_REGIONS;
use crate::state::{GameState, Phase, Season, Turn};

/// Computes the turn descriptor following `turn`.
pub fn next_turn(turn: Turn, has_dislodgements: bool) -> Turn {
    match turn.phase {
        Phase::Movement => {
            if has_dislodgements {
                Turn::new(turn.year, turn.season, Phase::Retreat)
            } else {
                after_movement(turn)
            }
        }
        Phase::Retreat => after_movement(turn),
        Phase::Build => Turn::new(turn.year + 1, Season::Spring, Phase::Movement),
    }
}

fn after_movement(turn: Turn) -> Turn {
    match turn.season {
        Season::Spring => Turn::new(turn.year, Season::Fall, Phase::Movement),
        Season::Fall => Turn::new(turn.year, Season::Fall, Phase::Build),
    }
}

/// Captures supply centers: every occupied supply-center region passes to
/// the occupier's power. Called after Fall Movement and Fall Retreat only;
/// unoccupied centers keep their owner.
pub fn update_sc_ownership(state: &mut GameState) {
    for &region in ALL_REGIONS.iter() {
        if !region.is_supply_center() {
            continue;
        }
        if let Some(unit) = state.unit_at(region) {
            state.sc_owner[region as usize] = Some(unit.power);
        }
    }
}

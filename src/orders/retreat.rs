//! Retreat-phase order generation.
//!
//! Each dislodged unit's options are one retreat per legal destination —
//! the set the adjudicator computed at dislodgement time — plus a disband.

use crate::map::Power;
use crate::state::{GameState, Order};

/// Generates per-unit option lists for every dislodged unit of `power`.
pub fn retreat_options(power: Power, state: &GameState) -> Vec<Vec<Order>> {
    let mut options = Vec::new();

    for d in state.dislodged.iter() {
        if d.unit.power != power {
            continue;
        }
        let mut choices = Vec::with_capacity(d.retreats.len() + 1);
        for &dest in d.retreats.iter() {
            choices.push(Order::Retreat { unit: d.unit.location, dest });
        }
        choices.push(Order::Disband { unit: d.unit.location });
        options.push(choices);
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Coast, Region};
    use crate::state::{
        DislodgedUnit, GameState, Location, Phase, Season, Turn, Unit, UnitKind,
    };

    fn retreat_state() -> GameState {
        let mut state = GameState::empty(Turn::new(1901, Season::Spring, Phase::Retreat));
        state.dislodged.push(DislodgedUnit {
            unit: Unit::new(UnitKind::Army, Power::Austria, Location::new(Region::Ser)),
            attacker_from: Region::Bul,
            retreats: vec![Location::new(Region::Alb), Location::new(Region::Gre)],
        });
        state.dislodged.push(DislodgedUnit {
            unit: Unit::new(
                UnitKind::Fleet,
                Power::Russia,
                Location::with_coast(Region::Stp, Coast::South),
            ),
            attacker_from: Region::Lvn,
            retreats: vec![Location::new(Region::Bot)],
        });
        state
    }

    #[test]
    fn one_list_per_dislodged_unit() {
        let state = retreat_state();
        assert_eq!(retreat_options(Power::Austria, &state).len(), 1);
        assert_eq!(retreat_options(Power::Russia, &state).len(), 1);
        assert!(retreat_options(Power::Turkey, &state).is_empty());
    }

    #[test]
    fn options_are_retreats_plus_disband() {
        let state = retreat_state();
        let options = retreat_options(Power::Austria, &state);
        let choices = &options[0];
        assert_eq!(choices.len(), 3);
        assert!(choices.iter().any(|o| matches!(
            o,
            Order::Retreat { dest, .. } if dest.region == Region::Alb
        )));
        assert!(choices.iter().any(|o| matches!(
            o,
            Order::Retreat { dest, .. } if dest.region == Region::Gre
        )));
        assert!(matches!(choices.last(), Some(Order::Disband { .. })));
    }

    #[test]
    fn cornered_unit_can_only_disband() {
        let mut state = GameState::empty(Turn::new(1903, Season::Fall, Phase::Retreat));
        state.dislodged.push(DislodgedUnit {
            unit: Unit::new(UnitKind::Army, Power::Turkey, Location::new(Region::Syr)),
            attacker_from: Region::Arm,
            retreats: Vec::new(),
        });
        let options = retreat_options(Power::Turkey, &state);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].len(), 1);
        assert!(matches!(options[0][0], Order::Disband { .. }));
    }
}

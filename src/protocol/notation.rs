//! Textual order notation.
//!
//! One line per order. Display convention: sea region tags are UPPERCASE,
//! land and coastal tags Title Case, and coast qualifiers lowercase after
//! a slash ("F MAO - Spa/nc").

use crate::map::{Coast, Region, RegionKind};
use crate::state::{GameState, Location, Order, UnitKind};

/// Renders a region tag per the display convention.
pub fn region_display(region: Region) -> String {
    let tag = region.tag();
    if region.kind() == RegionKind::Sea {
        tag.to_uppercase()
    } else {
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Renders a location, appending the lowercase coast qualifier when set.
pub fn format_location(location: Location) -> String {
    if location.coast == Coast::None {
        region_display(location.region)
    } else {
        format!("{}/{}", region_display(location.region), location.coast.tag())
    }
}

/// Unit-kind letter for the unit at a region, consulting the dislodged
/// list too (retreat-phase orders reference units off the board).
fn kind_letter(region: Region, state: &GameState) -> char {
    if let Some(unit) = state.unit_at(region) {
        return unit.kind.letter();
    }
    if let Some(d) = state.dislodged_at(region) {
        return d.unit.kind.letter();
    }
    UnitKind::Army.letter()
}

/// Renders one order as its single-line textual form. `state` is the
/// position the order was issued in; it supplies the unit-kind letters.
pub fn format_order(order: &Order, state: &GameState) -> String {
    match *order {
        Order::Hold { unit } => {
            format!("{} {} H", kind_letter(unit.region, state), region_display(unit.region))
        }
        Order::Move { unit, dest, via_convoy } => format!(
            "{} {} - {}{}",
            kind_letter(unit.region, state),
            region_display(unit.region),
            format_location(dest),
            if via_convoy { " via convoy" } else { "" }
        ),
        Order::Support { unit, supported, dest } => {
            if supported.region == dest.region {
                format!(
                    "{} {} S {}",
                    kind_letter(unit.region, state),
                    region_display(unit.region),
                    region_display(supported.region)
                )
            } else {
                format!(
                    "{} {} S {} - {}",
                    kind_letter(unit.region, state),
                    region_display(unit.region),
                    region_display(supported.region),
                    region_display(dest.region)
                )
            }
        }
        Order::Convoy { unit, army, dest } => format!(
            "F {} C {} - {}",
            region_display(unit.region),
            region_display(army.region),
            region_display(dest.region)
        ),
        Order::Retreat { unit, dest } => format!(
            "{} {} R {}",
            kind_letter(unit.region, state),
            region_display(unit.region),
            format_location(dest)
        ),
        Order::Disband { unit } => {
            format!("{} {} D", kind_letter(unit.region, state), region_display(unit.region))
        }
        Order::Build { kind, location, .. } => {
            format!("Build {} {}", kind.letter(), format_location(location))
        }
        Order::Waive { power } => format!("{} Waive", power.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Power;
    use crate::state::{Phase, Season, Turn, Unit};

    fn state_with(units: &[(Power, UnitKind, Region, Coast)]) -> GameState {
        let mut state = GameState::empty(Turn::new(1901, Season::Spring, Phase::Movement));
        for &(p, k, r, c) in units {
            state.place_unit(Unit::new(k, p, Location::with_coast(r, c)));
        }
        state
    }

    #[test]
    fn sea_regions_are_uppercase() {
        assert_eq!(region_display(Region::Nth), "NTH");
        assert_eq!(region_display(Region::Mao), "MAO");
        assert_eq!(region_display(Region::Par), "Par");
        assert_eq!(region_display(Region::Spa), "Spa");
    }

    #[test]
    fn hold_and_move_forms() {
        let state = state_with(&[
            (Power::Austria, UnitKind::Army, Region::Vie, Coast::None),
            (Power::France, UnitKind::Fleet, Region::Mao, Coast::None),
        ]);
        let hold = Order::Hold { unit: Location::new(Region::Vie) };
        assert_eq!(format_order(&hold, &state), "A Vie H");

        let mv = Order::Move {
            unit: Location::new(Region::Mao),
            dest: Location::with_coast(Region::Spa, Coast::North),
            via_convoy: false,
        };
        assert_eq!(format_order(&mv, &state), "F MAO - Spa/nc");
    }

    #[test]
    fn convoyed_move_is_flagged() {
        let state = state_with(&[(Power::England, UnitKind::Army, Region::Lon, Coast::None)]);
        let mv = Order::Move {
            unit: Location::new(Region::Lon),
            dest: Location::new(Region::Bel),
            via_convoy: true,
        };
        assert_eq!(format_order(&mv, &state), "A Lon - Bel via convoy");
    }

    #[test]
    fn support_forms() {
        let state = state_with(&[
            (Power::Austria, UnitKind::Army, Region::Tyr, Coast::None),
            (Power::Austria, UnitKind::Army, Region::Vie, Coast::None),
            (Power::Austria, UnitKind::Army, Region::Gal, Coast::None),
            (Power::Austria, UnitKind::Army, Region::Bud, Coast::None),
        ]);
        let hold_support = Order::Support {
            unit: Location::new(Region::Tyr),
            supported: Location::new(Region::Vie),
            dest: Location::new(Region::Vie),
        };
        assert_eq!(format_order(&hold_support, &state), "A Tyr S Vie");

        let move_support = Order::Support {
            unit: Location::new(Region::Gal),
            supported: Location::new(Region::Bud),
            dest: Location::new(Region::Rum),
        };
        assert_eq!(format_order(&move_support, &state), "A Gal S Bud - Rum");
    }

    #[test]
    fn convoy_retreat_disband_build_waive() {
        let state = state_with(&[
            (Power::England, UnitKind::Fleet, Region::Nth, Coast::None),
            (Power::England, UnitKind::Army, Region::Lon, Coast::None),
            (Power::Russia, UnitKind::Fleet, Region::Sev, Coast::None),
        ]);
        let convoy = Order::Convoy {
            unit: Location::new(Region::Nth),
            army: Location::new(Region::Lon),
            dest: Location::new(Region::Bel),
        };
        assert_eq!(format_order(&convoy, &state), "F NTH C Lon - Bel");

        let retreat = Order::Retreat {
            unit: Location::new(Region::Sev),
            dest: Location::new(Region::Arm),
        };
        assert_eq!(format_order(&retreat, &state), "F Sev R Arm");

        let disband = Order::Disband { unit: Location::new(Region::Sev) };
        assert_eq!(format_order(&disband, &state), "F Sev D");

        let build = Order::Build {
            power: Power::Russia,
            kind: UnitKind::Fleet,
            location: Location::with_coast(Region::Stp, Coast::South),
        };
        assert_eq!(format_order(&build, &state), "Build F Stp/sc");

        assert_eq!(
            format_order(&Order::Waive { power: Power::Russia }, &state),
            "Russia Waive"
        );
    }
}

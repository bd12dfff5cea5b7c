//! Adjudicator acceptance tests: classic rule corners exercised through
//! the public API, plus the turn-advance round trips.

use stabalyzer::adjudicate::{adjudicate, OrderStatus, Resolution};
use stabalyzer::map::{Coast, Power, Region, ALL_REGIONS};
use stabalyzer::state::{
    GameState, Location, Order, Phase, Season, Turn, Unit, UnitKind,
};

fn movement_state(season: Season) -> GameState {
    GameState::empty(Turn::new(1901, season, Phase::Movement))
}

fn place(state: &mut GameState, power: Power, kind: UnitKind, region: Region) {
    assert!(
        state.place_unit(Unit::new(kind, power, Location::new(region))),
        "{:?} already occupied",
        region
    );
}

fn mv(from: Region, to: Region) -> Order {
    Order::Move {
        unit: Location::new(from),
        dest: Location::new(to),
        via_convoy: false,
    }
}

fn mv_convoy(from: Region, to: Region) -> Order {
    Order::Move {
        unit: Location::new(from),
        dest: Location::new(to),
        via_convoy: true,
    }
}

fn hold(at: Region) -> Order {
    Order::Hold { unit: Location::new(at) }
}

fn support_move(at: Region, from: Region, to: Region) -> Order {
    Order::Support {
        unit: Location::new(at),
        supported: Location::new(from),
        dest: Location::new(to),
    }
}

fn convoy(at: Region, army: Region, to: Region) -> Order {
    Order::Convoy {
        unit: Location::new(at),
        army: Location::new(army),
        dest: Location::new(to),
    }
}

fn status_of(resolutions: &[Resolution], region: Region) -> OrderStatus {
    resolutions
        .iter()
        .find(|r| r.order.unit_region() == Some(region))
        .map(|r| r.status)
        .unwrap_or_else(|| panic!("no resolution for {:?}", region))
}

// === The seven reference scenarios ===

#[test]
fn supported_attack_dislodges_holding_fleet() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::England, UnitKind::Fleet, Region::Bla);
    place(&mut state, Power::England, UnitKind::Army, Region::Arm);
    place(&mut state, Power::Turkey, UnitKind::Fleet, Region::Ank);

    let orders = [
        (mv(Region::Bla, Region::Ank), Power::England),
        (support_move(Region::Arm, Region::Bla, Region::Ank), Power::England),
        (hold(Region::Ank), Power::Turkey),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(status_of(&resolutions, Region::Bla), OrderStatus::Succeeds);
    assert_eq!(status_of(&resolutions, Region::Ank), OrderStatus::Dislodged);
    assert_eq!(next.unit_at(Region::Ank).unwrap().power, Power::England);
    assert_eq!(next.dislodged.len(), 1);
}

#[test]
fn support_cut_by_unrelated_attacker() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::Austria, UnitKind::Army, Region::Bud);
    place(&mut state, Power::Austria, UnitKind::Army, Region::Ser);
    place(&mut state, Power::Russia, UnitKind::Army, Region::Rum);
    place(&mut state, Power::Turkey, UnitKind::Army, Region::Bul);

    let orders = [
        (mv(Region::Bud, Region::Rum), Power::Austria),
        (support_move(Region::Ser, Region::Bud, Region::Rum), Power::Austria),
        (hold(Region::Rum), Power::Russia),
        (mv(Region::Bul, Region::Ser), Power::Turkey),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    // With the support cut, the attack is 1 against a hold of 1: bounce.
    assert_eq!(status_of(&resolutions, Region::Ser), OrderStatus::Cut);
    assert_eq!(status_of(&resolutions, Region::Bud), OrderStatus::Bounced);
    assert_eq!(next.unit_at(Region::Rum).unwrap().power, Power::Russia);
}

#[test]
fn head_to_head_with_support_dislodges_loser() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::Germany, UnitKind::Army, Region::Ber);
    place(&mut state, Power::Germany, UnitKind::Army, Region::Mun);
    place(&mut state, Power::Russia, UnitKind::Army, Region::Sil);

    let orders = [
        (mv(Region::Ber, Region::Sil), Power::Germany),
        (support_move(Region::Mun, Region::Ber, Region::Sil), Power::Germany),
        (mv(Region::Sil, Region::Ber), Power::Russia),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(status_of(&resolutions, Region::Ber), OrderStatus::Succeeds);
    assert_eq!(status_of(&resolutions, Region::Sil), OrderStatus::Dislodged);
    assert_eq!(next.unit_at(Region::Sil).unwrap().power, Power::Germany);
    assert!(next.unit_at(Region::Ber).is_none());
}

#[test]
fn three_unit_circular_movement_succeeds() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::Turkey, UnitKind::Fleet, Region::Ank);
    place(&mut state, Power::Turkey, UnitKind::Army, Region::Con);
    place(&mut state, Power::Turkey, UnitKind::Army, Region::Smy);

    let orders = [
        (mv(Region::Ank, Region::Con), Power::Turkey),
        (mv(Region::Con, Region::Smy), Power::Turkey),
        (mv(Region::Smy, Region::Ank), Power::Turkey),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    for region in [Region::Ank, Region::Con, Region::Smy] {
        assert_eq!(status_of(&resolutions, region), OrderStatus::Succeeds);
    }
    assert_eq!(next.unit_at(Region::Con).unwrap().kind, UnitKind::Fleet);
    assert_eq!(next.unit_at(Region::Smy).unwrap().kind, UnitKind::Army);
    assert_eq!(next.unit_at(Region::Ank).unwrap().kind, UnitKind::Army);
}

#[test]
fn convoy_by_sea_chain_succeeds() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::England, UnitKind::Army, Region::Lon);
    place(&mut state, Power::England, UnitKind::Fleet, Region::Nth);

    let orders = [
        (mv_convoy(Region::Lon, Region::Bel), Power::England),
        (convoy(Region::Nth, Region::Lon, Region::Bel), Power::England),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(status_of(&resolutions, Region::Lon), OrderStatus::Succeeds);
    assert_eq!(next.unit_at(Region::Bel).unwrap().power, Power::England);
}

#[test]
fn convoy_through_coastal_region_is_void() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::Turkey, UnitKind::Army, Region::Gre);
    place(&mut state, Power::Turkey, UnitKind::Fleet, Region::Aeg);
    place(&mut state, Power::Turkey, UnitKind::Fleet, Region::Con);
    place(&mut state, Power::Turkey, UnitKind::Fleet, Region::Bla);

    let orders = [
        (mv_convoy(Region::Gre, Region::Sev), Power::Turkey),
        (convoy(Region::Aeg, Region::Gre, Region::Sev), Power::Turkey),
        (convoy(Region::Con, Region::Gre, Region::Sev), Power::Turkey),
        (convoy(Region::Bla, Region::Gre, Region::Sev), Power::Turkey),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    // Constantinople is coastal, so its convoy is void and no all-sea
    // chain connects the Aegean to the Black Sea.
    assert_eq!(status_of(&resolutions, Region::Con), OrderStatus::Void);
    assert_eq!(status_of(&resolutions, Region::Gre), OrderStatus::Fails);
    assert_eq!(next.unit_at(Region::Gre).unwrap().power, Power::Turkey);
    assert!(next.unit_at(Region::Sev).is_none());
}

#[test]
fn waive_advances_past_build_phase() {
    let mut state = GameState::empty(Turn::new(1904, Season::Fall, Phase::Build));
    state.set_sc_owner(Region::Vie, Some(Power::Austria));
    state.set_sc_owner(Region::Bud, Some(Power::Austria));
    place(&mut state, Power::Austria, UnitKind::Army, Region::Bud);

    let orders = [(Order::Waive { power: Power::Austria }, Power::Austria)];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(resolutions[0].status, OrderStatus::Succeeds);
    assert_eq!(next.turn, Turn::new(1905, Season::Spring, Phase::Movement));
    assert_eq!(next.unit_count(Power::Austria), 1);
}

// === Turn-advance round trips ===

#[test]
fn movement_turn_advance_round_trip() {
    // Spring Movement, no dislodgements -> Fall Movement.
    let mut spring = movement_state(Season::Spring);
    place(&mut spring, Power::France, UnitKind::Army, Region::Par);
    let (next, _) = adjudicate(&spring, &[(mv(Region::Par, Region::Bur), Power::France)]);
    assert_eq!(next.turn, Turn::new(1901, Season::Fall, Phase::Movement));

    // Spring Movement with a dislodgement -> Spring Retreat.
    let mut contested = movement_state(Season::Spring);
    place(&mut contested, Power::France, UnitKind::Army, Region::Bur);
    place(&mut contested, Power::France, UnitKind::Army, Region::Ruh);
    place(&mut contested, Power::Germany, UnitKind::Army, Region::Mun);
    let (next, _) = adjudicate(
        &contested,
        &[
            (mv(Region::Bur, Region::Mun), Power::France),
            (support_move(Region::Ruh, Region::Bur, Region::Mun), Power::France),
            (hold(Region::Mun), Power::Germany),
        ],
    );
    assert_eq!(next.turn, Turn::new(1901, Season::Spring, Phase::Retreat));

    // Spring Retreat -> Fall Movement.
    let (next, _) = adjudicate(&next, &[]);
    assert_eq!(next.turn, Turn::new(1901, Season::Fall, Phase::Movement));

    // Fall Movement, no dislodgements -> Fall Build.
    let (next, _) = adjudicate(&next, &[]);
    assert_eq!(next.turn, Turn::new(1901, Season::Fall, Phase::Build));

    // Fall Build -> next Spring Movement.
    let (next, _) = adjudicate(&next, &[]);
    assert_eq!(next.turn, Turn::new(1902, Season::Spring, Phase::Movement));
}

// === Additional rule corners ===

#[test]
fn beleaguered_garrison_survives() {
    // Two equal supported attacks from different sides bounce each other
    // and the defender stays put.
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::Italy, UnitKind::Army, Region::Tyr);
    place(&mut state, Power::Italy, UnitKind::Army, Region::Boh);
    place(&mut state, Power::Russia, UnitKind::Army, Region::Sil);
    place(&mut state, Power::Russia, UnitKind::Army, Region::Ber);
    place(&mut state, Power::Germany, UnitKind::Army, Region::Mun);

    let orders = [
        (mv(Region::Tyr, Region::Mun), Power::Italy),
        (support_move(Region::Boh, Region::Tyr, Region::Mun), Power::Italy),
        (mv(Region::Sil, Region::Mun), Power::Russia),
        (support_move(Region::Ber, Region::Sil, Region::Mun), Power::Russia),
        (hold(Region::Mun), Power::Germany),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(status_of(&resolutions, Region::Tyr), OrderStatus::Bounced);
    assert_eq!(status_of(&resolutions, Region::Sil), OrderStatus::Bounced);
    assert_eq!(next.unit_at(Region::Mun).unwrap().power, Power::Germany);
    assert!(next.dislodged.is_empty());
}

#[test]
fn convoyed_swap_exchanges_places() {
    // A land move and a convoyed move may trade regions; without the
    // convoy the pair would bounce head-to-head.
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::England, UnitKind::Army, Region::Lon);
    place(&mut state, Power::England, UnitKind::Army, Region::Wal);
    place(&mut state, Power::England, UnitKind::Fleet, Region::Eng);

    let orders = [
        (mv_convoy(Region::Lon, Region::Wal), Power::England),
        (convoy(Region::Eng, Region::Lon, Region::Wal), Power::England),
        (mv(Region::Wal, Region::Lon), Power::England),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(status_of(&resolutions, Region::Lon), OrderStatus::Succeeds);
    assert_eq!(status_of(&resolutions, Region::Wal), OrderStatus::Succeeds);
    assert!(next.unit_at(Region::Lon).is_some());
    assert!(next.unit_at(Region::Wal).is_some());
}

#[test]
fn plain_swap_bounces() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::England, UnitKind::Army, Region::Lon);
    place(&mut state, Power::England, UnitKind::Army, Region::Wal);

    let orders = [
        (mv(Region::Lon, Region::Wal), Power::England),
        (mv(Region::Wal, Region::Lon), Power::England),
    ];
    let (next, resolutions) = adjudicate(&state, &orders);

    assert_eq!(status_of(&resolutions, Region::Lon), OrderStatus::Bounced);
    assert_eq!(status_of(&resolutions, Region::Wal), OrderStatus::Bounced);
    assert_eq!(next.unit_at(Region::Lon).unwrap().location.region, Region::Lon);
}

#[test]
fn bicoastal_fleet_move_requires_coast() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::France, UnitKind::Fleet, Region::Mao);

    let coastless = Order::Move {
        unit: Location::new(Region::Mao),
        dest: Location::new(Region::Spa),
        via_convoy: false,
    };
    let (_, resolutions) = adjudicate(&state, &[(coastless, Power::France)]);
    assert_eq!(resolutions[0].status, OrderStatus::Void);

    let with_coast = Order::Move {
        unit: Location::new(Region::Mao),
        dest: Location::with_coast(Region::Spa, Coast::South),
        via_convoy: false,
    };
    let (next, resolutions) = adjudicate(&state, &[(with_coast, Power::France)]);
    assert_eq!(resolutions[0].status, OrderStatus::Succeeds);
    assert_eq!(next.unit_at(Region::Spa).unwrap().location.coast, Coast::South);
}

#[test]
fn spring_adjudication_preserves_center_ownership() {
    let mut state = movement_state(Season::Spring);
    state.set_sc_owner(Region::Bel, Some(Power::Germany));
    place(&mut state, Power::France, UnitKind::Army, Region::Bur);

    let (next, _) = adjudicate(&state, &[(mv(Region::Bur, Region::Bel), Power::France)]);
    // The army arrives, but the center only changes hands in Fall.
    assert_eq!(next.unit_at(Region::Bel).unwrap().power, Power::France);
    assert_eq!(next.sc_owner(Region::Bel), Some(Power::Germany));
}

#[test]
fn resolutions_echo_every_submitted_order() {
    let mut state = movement_state(Season::Spring);
    place(&mut state, Power::Austria, UnitKind::Army, Region::Vie);

    let orders = [
        (mv(Region::Vie, Region::Gal), Power::Austria),
        (mv(Region::Bud, Region::Rum), Power::Austria), // no such unit
        (hold(Region::Vie), Power::Austria),            // duplicate
    ];
    let (_, resolutions) = adjudicate(&state, &orders);
    assert_eq!(resolutions.len(), orders.len());
    for (resolution, (order, _)) in resolutions.iter().zip(orders.iter()) {
        assert_eq!(&resolution.order, order);
    }
    assert_eq!(resolutions[1].status, OrderStatus::Void);
    assert_eq!(resolutions[2].status, OrderStatus::Void);
}

#[test]
fn adjudication_upholds_board_invariants() {
    // Hammer a crowded region from three sides plus an outgoing move and
    // check the structural invariants on the result.
    let mut state = movement_state(Season::Fall);
    place(&mut state, Power::Austria, UnitKind::Army, Region::Vie);
    place(&mut state, Power::Austria, UnitKind::Army, Region::Boh);
    place(&mut state, Power::Germany, UnitKind::Army, Region::Mun);
    place(&mut state, Power::Italy, UnitKind::Army, Region::Pie);
    place(&mut state, Power::Italy, UnitKind::Army, Region::Ven);

    let orders = [
        (mv(Region::Vie, Region::Tyr), Power::Austria),
        (mv(Region::Boh, Region::Tyr), Power::Austria),
        (mv(Region::Mun, Region::Tyr), Power::Germany),
        (mv(Region::Ven, Region::Tyr), Power::Italy),
        (mv(Region::Pie, Region::Ven), Power::Italy),
    ];
    let (next, _) = adjudicate(&state, &orders);

    for &region in ALL_REGIONS.iter() {
        let occupants = next
            .units
            .iter()
            .filter(|u| u.location.region == region)
            .count();
        assert!(occupants <= 1, "{:?} holds {} units", region, occupants);
    }
    if next.turn.phase != Phase::Retreat {
        assert!(next.dislodged.is_empty());
    }
    assert_eq!(next.units.len(), state.units.len());
}

//! Adjacency data for the Classic Diplomacy map.
//!
//! Each region carries an army-neighbor list and a fleet-neighbor list; fleet
//! entries name the coast of arrival for bicoastal destinations. Bicoastal
//! origins (bul, spa, stp) have empty base fleet lists and use coast-keyed
//! lists instead — a fleet there always sits on a specific coast.
//!
//! All data is compile-time `static` and symmetric: if A can reach B then B
//! can reach A with the matching coasts. Constantinople and Kiel act as land
//! bridges: armies cross the straits they sit on (con-ank, con-smy, kie-den,
//! kie-hol).

use super::region::{Coast, Region, REGION_COUNT};

/// A fleet destination: region plus the coast of arrival
/// (`Coast::None` for regions without split coasts).
pub type FleetHop = (Region, Coast);

use Coast::{East as EC, None as N, North as NC, South as SC};
use Region::*;

/// Army neighbors per region, indexed by `Region as usize`.
pub static ARMY_ADJ: [&[Region]; REGION_COUNT] = [
    /* adr */ &[],
    /* aeg */ &[],
    /* alb */ &[Gre, Ser, Tri],
    /* ank */ &[Arm, Con, Smy],
    /* apu */ &[Nap, Rom, Ven],
    /* arm */ &[Ank, Sev, Smy, Syr],
    /* bal */ &[],
    /* bar */ &[],
    /* bel */ &[Bur, Hol, Pic, Ruh],
    /* ber */ &[Kie, Mun, Pru, Sil],
    /* bla */ &[],
    /* boh */ &[Gal, Mun, Sil, Tyr, Vie],
    /* bot */ &[],
    /* bre */ &[Gas, Par, Pic],
    /* bud */ &[Gal, Rum, Ser, Tri, Vie],
    /* bul */ &[Con, Gre, Rum, Ser],
    /* bur */ &[Bel, Gas, Mar, Mun, Par, Pic, Ruh],
    /* cly */ &[Edi, Lvp],
    /* con */ &[Ank, Bul, Smy],
    /* den */ &[Kie, Swe],
    /* eas */ &[],
    /* edi */ &[Cly, Lvp, Yor],
    /* eng */ &[],
    /* fin */ &[Nor, Stp, Swe],
    /* gal */ &[Boh, Bud, Rum, Sil, Ukr, Vie, War],
    /* gas */ &[Bre, Bur, Mar, Par, Spa],
    /* gol */ &[],
    /* gre */ &[Alb, Bul, Ser],
    /* hel */ &[],
    /* hol */ &[Bel, Kie, Ruh],
    /* ion */ &[],
    /* iri */ &[],
    /* kie */ &[Ber, Den, Hol, Mun, Ruh],
    /* lon */ &[Wal, Yor],
    /* lvn */ &[Mos, Pru, Stp, War],
    /* lvp */ &[Cly, Edi, Wal, Yor],
    /* mao */ &[],
    /* mar */ &[Bur, Gas, Pie, Spa],
    /* mos */ &[Lvn, Sev, Stp, Ukr, War],
    /* mun */ &[Ber, Boh, Bur, Kie, Ruh, Sil, Tyr],
    /* naf */ &[Tun],
    /* nap */ &[Apu, Rom],
    /* nat */ &[],
    /* nor */ &[Fin, Stp, Swe],
    /* nrg */ &[],
    /* nth */ &[],
    /* par */ &[Bre, Bur, Gas, Pic],
    /* pic */ &[Bel, Bre, Bur, Par],
    /* pie */ &[Mar, Tus, Tyr, Ven],
    /* por */ &[Spa],
    /* pru */ &[Ber, Lvn, Sil, War],
    /* rom */ &[Apu, Nap, Tus, Ven],
    /* ruh */ &[Bel, Bur, Hol, Kie, Mun],
    /* rum */ &[Bud, Bul, Gal, Ser, Sev, Ukr],
    /* ser */ &[Alb, Bud, Bul, Gre, Rum, Tri],
    /* sev */ &[Arm, Mos, Rum, Ukr],
    /* sil */ &[Ber, Boh, Gal, Mun, Pru, War],
    /* ska */ &[],
    /* smy */ &[Ank, Arm, Con, Syr],
    /* spa */ &[Gas, Mar, Por],
    /* stp */ &[Fin, Lvn, Mos, Nor],
    /* swe */ &[Den, Fin, Nor],
    /* syr */ &[Arm, Smy],
    /* tri */ &[Alb, Bud, Ser, Tyr, Ven, Vie],
    /* tun */ &[Naf],
    /* tus */ &[Pie, Rom, Ven],
    /* tyn */ &[],
    /* tyr */ &[Boh, Mun, Pie, Tri, Ven, Vie],
    /* ukr */ &[Gal, Mos, Rum, Sev, War],
    /* ven */ &[Apu, Pie, Rom, Tri, Tus, Tyr],
    /* vie */ &[Boh, Bud, Gal, Tri, Tyr],
    /* wal */ &[Lon, Lvp, Yor],
    /* war */ &[Gal, Lvn, Mos, Pru, Sil, Ukr],
    /* wes */ &[],
    /* yor */ &[Edi, Lon, Lvp, Wal],
];

/// Fleet neighbors per region, indexed by `Region as usize`.
///
/// Bicoastal origins are empty here; see [`coast_fleet_adj`].
pub static FLEET_ADJ: [&[FleetHop]; REGION_COUNT] = [
    /* adr */ &[(Alb, N), (Apu, N), (Ion, N), (Tri, N), (Ven, N)],
    /* aeg */ &[(Bul, SC), (Con, N), (Eas, N), (Gre, N), (Ion, N), (Smy, N)],
    /* alb */ &[(Adr, N), (Gre, N), (Ion, N), (Tri, N)],
    /* ank */ &[(Arm, N), (Bla, N), (Con, N)],
    /* apu */ &[(Adr, N), (Ion, N), (Nap, N), (Ven, N)],
    /* arm */ &[(Ank, N), (Bla, N), (Sev, N)],
    /* bal */ &[(Ber, N), (Bot, N), (Den, N), (Kie, N), (Lvn, N), (Pru, N), (Swe, N)],
    /* bar */ &[(Nor, N), (Nrg, N), (Stp, NC)],
    /* bel */ &[(Eng, N), (Hol, N), (Nth, N), (Pic, N)],
    /* ber */ &[(Bal, N), (Kie, N), (Pru, N)],
    /* bla */ &[(Ank, N), (Arm, N), (Bul, EC), (Con, N), (Rum, N), (Sev, N)],
    /* boh */ &[],
    /* bot */ &[(Bal, N), (Fin, N), (Lvn, N), (Stp, SC), (Swe, N)],
    /* bre */ &[(Eng, N), (Gas, N), (Mao, N), (Pic, N)],
    /* bud */ &[],
    /* bul */ &[],
    /* bur */ &[],
    /* cly */ &[(Edi, N), (Lvp, N), (Nat, N), (Nrg, N)],
    /* con */ &[(Aeg, N), (Ank, N), (Bla, N), (Bul, EC), (Bul, SC), (Smy, N)],
    /* den */ &[(Bal, N), (Hel, N), (Kie, N), (Nth, N), (Ska, N), (Swe, N)],
    /* eas */ &[(Aeg, N), (Ion, N), (Smy, N), (Syr, N)],
    /* edi */ &[(Cly, N), (Nrg, N), (Nth, N), (Yor, N)],
    /* eng */ &[(Bel, N), (Bre, N), (Iri, N), (Lon, N), (Mao, N), (Nth, N), (Pic, N), (Wal, N)],
    /* fin */ &[(Bot, N), (Stp, SC), (Swe, N)],
    /* gal */ &[],
    /* gas */ &[(Bre, N), (Mao, N), (Spa, NC)],
    /* gol */ &[(Mar, N), (Pie, N), (Spa, SC), (Tus, N), (Tyn, N), (Wes, N)],
    /* gre */ &[(Aeg, N), (Alb, N), (Bul, SC), (Ion, N)],
    /* hel */ &[(Den, N), (Hol, N), (Kie, N), (Nth, N)],
    /* hol */ &[(Bel, N), (Hel, N), (Kie, N), (Nth, N)],
    /* ion */ &[(Adr, N), (Aeg, N), (Alb, N), (Apu, N), (Eas, N), (Gre, N), (Nap, N), (Tun, N), (Tyn, N)],
    /* iri */ &[(Eng, N), (Lvp, N), (Mao, N), (Nat, N), (Wal, N)],
    /* kie */ &[(Bal, N), (Ber, N), (Den, N), (Hel, N), (Hol, N)],
    /* lon */ &[(Eng, N), (Nth, N), (Wal, N), (Yor, N)],
    /* lvn */ &[(Bal, N), (Bot, N), (Pru, N), (Stp, SC)],
    /* lvp */ &[(Cly, N), (Iri, N), (Nat, N), (Wal, N)],
    /* mao */ &[(Bre, N), (Eng, N), (Gas, N), (Iri, N), (Naf, N), (Nat, N), (Por, N), (Spa, NC), (Spa, SC), (Wes, N)],
    /* mar */ &[(Gol, N), (Pie, N), (Spa, SC)],
    /* mos */ &[],
    /* mun */ &[],
    /* naf */ &[(Mao, N), (Tun, N), (Wes, N)],
    /* nap */ &[(Apu, N), (Ion, N), (Rom, N), (Tyn, N)],
    /* nat */ &[(Cly, N), (Iri, N), (Lvp, N), (Mao, N), (Nrg, N)],
    /* nor */ &[(Bar, N), (Nrg, N), (Nth, N), (Ska, N), (Stp, NC), (Swe, N)],
    /* nrg */ &[(Bar, N), (Cly, N), (Edi, N), (Nat, N), (Nor, N), (Nth, N)],
    /* nth */ &[(Bel, N), (Den, N), (Edi, N), (Eng, N), (Hel, N), (Hol, N), (Lon, N), (Nor, N), (Nrg, N), (Ska, N), (Yor, N)],
    /* par */ &[],
    /* pic */ &[(Bel, N), (Bre, N), (Eng, N)],
    /* pie */ &[(Gol, N), (Mar, N), (Tus, N)],
    /* por */ &[(Mao, N), (Spa, NC), (Spa, SC)],
    /* pru */ &[(Bal, N), (Ber, N), (Lvn, N)],
    /* rom */ &[(Nap, N), (Tus, N), (Tyn, N)],
    /* ruh */ &[],
    /* rum */ &[(Bla, N), (Bul, EC), (Sev, N)],
    /* ser */ &[],
    /* sev */ &[(Arm, N), (Bla, N), (Rum, N)],
    /* sil */ &[],
    /* ska */ &[(Den, N), (Nor, N), (Nth, N), (Swe, N)],
    /* smy */ &[(Aeg, N), (Con, N), (Eas, N), (Syr, N)],
    /* spa */ &[],
    /* stp */ &[],
    /* swe */ &[(Bal, N), (Bot, N), (Den, N), (Fin, N), (Nor, N), (Ska, N)],
    /* syr */ &[(Eas, N), (Smy, N)],
    /* tri */ &[(Adr, N), (Alb, N), (Ven, N)],
    /* tun */ &[(Ion, N), (Naf, N), (Tyn, N), (Wes, N)],
    /* tus */ &[(Gol, N), (Pie, N), (Rom, N), (Tyn, N)],
    /* tyn */ &[(Gol, N), (Ion, N), (Nap, N), (Rom, N), (Tun, N), (Tus, N), (Wes, N)],
    /* tyr */ &[],
    /* ukr */ &[],
    /* ven */ &[(Adr, N), (Apu, N), (Tri, N)],
    /* vie */ &[],
    /* wal */ &[(Eng, N), (Iri, N), (Lon, N), (Lvp, N)],
    /* war */ &[],
    /* wes */ &[(Gol, N), (Mao, N), (Naf, N), (Spa, SC), (Tun, N), (Tyn, N)],
    /* yor */ &[(Edi, N), (Lon, N), (Nth, N)],
];

static BUL_EAST: &[FleetHop] = &[(Bla, N), (Con, N), (Rum, N)];
static BUL_SOUTH: &[FleetHop] = &[(Aeg, N), (Con, N), (Gre, N)];
static SPA_NORTH: &[FleetHop] = &[(Gas, N), (Mao, N), (Por, N)];
static SPA_SOUTH: &[FleetHop] = &[(Gol, N), (Mao, N), (Mar, N), (Por, N), (Wes, N)];
static STP_NORTH: &[FleetHop] = &[(Bar, N), (Nor, N)];
static STP_SOUTH: &[FleetHop] = &[(Bot, N), (Fin, N), (Lvn, N)];

/// Returns the coast-specific fleet neighbors for a bicoastal region, or
/// None when the region/coast pair is not a bicoastal coast.
pub fn coast_fleet_adj(region: Region, coast: Coast) -> Option<&'static [FleetHop]> {
    match (region, coast) {
        (Region::Bul, Coast::East) => Some(BUL_EAST),
        (Region::Bul, Coast::South) => Some(BUL_SOUTH),
        (Region::Spa, Coast::North) => Some(SPA_NORTH),
        (Region::Spa, Coast::South) => Some(SPA_SOUTH),
        (Region::Stp, Coast::North) => Some(STP_NORTH),
        (Region::Stp, Coast::South) => Some(STP_SOUTH),
        _ => None,
    }
}

/// Returns the fleet hops leaving a region, taking the origin coast into
/// account. A bicoastal origin without a coast yields an empty list — a
/// fleet there always has one.
pub fn fleet_hops(region: Region, coast: Coast) -> &'static [FleetHop] {
    if region.is_bicoastal() {
        coast_fleet_adj(region, coast).unwrap_or(&[])
    } else {
        FLEET_ADJ[region as usize]
    }
}

/// Returns true iff a unit of the given kind may move from `from` to `to`
/// in one step, ignoring other units.
///
/// For fleets, `from_coast` matters when the origin is bicoastal and
/// `to_coast` narrows the destination when it is bicoastal; `Coast::None`
/// as `to_coast` accepts any arrival coast.
pub fn is_adjacent(from: Region, from_coast: Coast, to: Region, to_coast: Coast, fleet: bool) -> bool {
    if !fleet {
        return ARMY_ADJ[from as usize].contains(&to);
    }
    fleet_hops(from, from_coast)
        .iter()
        .any(|&(r, c)| r == to && (to_coast == Coast::None || c == to_coast))
}

/// Returns the destinations reachable in one step as bare region tags,
/// with coast qualifiers stripped and duplicates removed.
pub fn adjacent_regions(region: Region, coast: Coast, fleet: bool) -> Vec<Region> {
    if !fleet {
        return ARMY_ADJ[region as usize].to_vec();
    }
    let mut out: Vec<Region> = Vec::new();
    for &(r, _) in fleet_hops(region, coast) {
        if !out.contains(&r) {
            out.push(r);
        }
    }
    out
}

/// Returns the coasts at which a fleet leaving (`from`, `from_coast`) can
/// arrive in the bicoastal region `to`.
pub fn arrival_coasts(from: Region, from_coast: Coast, to: Region) -> Vec<Coast> {
    fleet_hops(from, from_coast)
        .iter()
        .filter(|&&(r, _)| r == to)
        .map(|&(_, c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::region::{RegionKind, ALL_REGIONS};

    #[test]
    fn army_adjacency_is_symmetric() {
        for r in ALL_REGIONS.iter() {
            for n in ARMY_ADJ[*r as usize] {
                assert!(
                    ARMY_ADJ[*n as usize].contains(r),
                    "army {:?} -> {:?} has no reverse edge",
                    r,
                    n
                );
            }
        }
    }

    #[test]
    fn fleet_adjacency_is_symmetric() {
        for r in ALL_REGIONS.iter() {
            let coasts: &[Coast] = if r.is_bicoastal() {
                r.valid_coasts()
            } else {
                &[Coast::None]
            };
            for &fc in coasts {
                for &(to, tc) in fleet_hops(*r, fc) {
                    let back = fleet_hops(to, tc);
                    assert!(
                        back.iter().any(|&(br, bc)| br == *r && bc == fc),
                        "fleet {:?}/{:?} -> {:?}/{:?} has no reverse edge",
                        r,
                        fc,
                        to,
                        tc
                    );
                }
            }
        }
    }

    #[test]
    fn sea_regions_have_no_army_neighbors() {
        for r in ALL_REGIONS.iter() {
            if r.kind() == RegionKind::Sea {
                assert!(ARMY_ADJ[*r as usize].is_empty(), "{:?}", r);
            }
        }
    }

    #[test]
    fn inland_regions_have_no_fleet_neighbors() {
        for r in ALL_REGIONS.iter() {
            if r.kind() == RegionKind::Inland {
                assert!(FLEET_ADJ[*r as usize].is_empty(), "{:?}", r);
            }
        }
    }

    #[test]
    fn land_bridges() {
        // Constantinople spans the Bosporus.
        assert!(is_adjacent(Region::Con, Coast::None, Region::Ank, Coast::None, false));
        assert!(is_adjacent(Region::Con, Coast::None, Region::Smy, Coast::None, false));
        // Kiel connects Denmark and Holland by land.
        assert!(is_adjacent(Region::Kie, Coast::None, Region::Den, Coast::None, false));
        assert!(is_adjacent(Region::Kie, Coast::None, Region::Hol, Coast::None, false));
        // And fleets pass them too.
        assert!(is_adjacent(Region::Kie, Coast::None, Region::Hol, Coast::None, true));
        assert!(is_adjacent(Region::Con, Coast::None, Region::Ank, Coast::None, true));
    }

    #[test]
    fn bicoastal_origin_requires_coast() {
        assert!(fleet_hops(Region::Stp, Coast::None).is_empty());
        assert!(!is_adjacent(Region::Stp, Coast::None, Region::Bar, Coast::None, true));
        assert!(is_adjacent(Region::Stp, Coast::North, Region::Bar, Coast::None, true));
        assert!(!is_adjacent(Region::Stp, Coast::South, Region::Bar, Coast::None, true));
    }

    #[test]
    fn bicoastal_destination_coasts() {
        // MAO reaches both coasts of Spain.
        assert_eq!(
            arrival_coasts(Region::Mao, Coast::None, Region::Spa),
            vec![Coast::North, Coast::South]
        );
        // Marseilles reaches only the south coast.
        assert_eq!(
            arrival_coasts(Region::Mar, Coast::None, Region::Spa),
            vec![Coast::South]
        );
        assert!(is_adjacent(Region::Mar, Coast::None, Region::Spa, Coast::South, true));
        assert!(!is_adjacent(Region::Mar, Coast::None, Region::Spa, Coast::North, true));
    }

    #[test]
    fn adjacent_regions_strips_coasts() {
        let from_mao = adjacent_regions(Region::Mao, Coast::None, true);
        // Spain appears once even though both coasts are reachable.
        assert_eq!(from_mao.iter().filter(|r| **r == Region::Spa).count(), 1);
        assert_eq!(from_mao.len(), 9);
    }

    #[test]
    fn army_cannot_use_fleet_edges() {
        assert!(!is_adjacent(Region::Bre, Coast::None, Region::Eng, Coast::None, false));
        assert!(is_adjacent(Region::Bre, Coast::None, Region::Eng, Coast::None, true));
    }

    #[test]
    fn vienna_neighbors() {
        let adj = adjacent_regions(Region::Vie, Coast::None, false);
        assert_eq!(adj, vec![Region::Boh, Region::Bud, Region::Gal, Region::Tri, Region::Tyr]);
    }
}

//! Zobrist hashing of game states.
//!
//! A fixed table of 64-bit keys, derived deterministically from a
//! compile-time seed with SplitMix64, indexed by (unit kind, power, region,
//! coast), (supply-center region, owner), and (year, season, phase). A
//! state's hash is the XOR of one key per unit, one per owned supply
//! center, and one for the turn descriptor.

use std::sync::LazyLock;

use crate::map::{Coast, Power, Region, REGION_COUNT};
use crate::state::game::{GameState, Phase, Season};
use crate::state::unit::UnitKind;

/// Compile-time seed; changing it changes every key but nothing else.
const ZOBRIST_SEED: u64 = 0x5ab1_1e5a_d1f0_90e7;

/// Years outside [1901, 2000] clamp onto the table edges.
const YEAR_BASE: u16 = 1901;
const YEAR_SPAN: usize = 100;

struct ZobristTable {
    /// [kind][power][region][coast]
    unit: Box<[[[[u64; 5]; REGION_COUNT]; 7]; 2]>,
    /// [region][power]
    sc: Box<[[u64; 7]; REGION_COUNT]>,
    year: [u64; YEAR_SPAN],
    season: [u64; 2],
    phase: [u64; 3],
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

static TABLE: LazyLock<ZobristTable> = LazyLock::new(|| {
    let mut s = ZOBRIST_SEED;
    let mut unit = Box::new([[[[0u64; 5]; REGION_COUNT]; 7]; 2]);
    for kind in unit.iter_mut() {
        for power in kind.iter_mut() {
            for region in power.iter_mut() {
                for key in region.iter_mut() {
                    *key = splitmix64(&mut s);
                }
            }
        }
    }
    let mut sc = Box::new([[0u64; 7]; REGION_COUNT]);
    for region in sc.iter_mut() {
        for key in region.iter_mut() {
            *key = splitmix64(&mut s);
        }
    }
    let mut year = [0u64; YEAR_SPAN];
    for key in year.iter_mut() {
        *key = splitmix64(&mut s);
    }
    let mut season = [0u64; 2];
    for key in season.iter_mut() {
        *key = splitmix64(&mut s);
    }
    let mut phase = [0u64; 3];
    for key in phase.iter_mut() {
        *key = splitmix64(&mut s);
    }
    ZobristTable { unit, sc, year, season, phase }
});

const fn kind_index(kind: UnitKind) -> usize {
    match kind {
        UnitKind::Army => 0,
        UnitKind::Fleet => 1,
    }
}

const fn coast_index(coast: Coast) -> usize {
    match coast {
        Coast::None => 0,
        Coast::North => 1,
        Coast::South => 2,
        Coast::East => 3,
        Coast::West => 4,
    }
}

const fn season_index(season: Season) -> usize {
    match season {
        Season::Spring => 0,
        Season::Fall => 1,
    }
}

const fn phase_index(phase: Phase) -> usize {
    match phase {
        Phase::Movement => 0,
        Phase::Retreat => 1,
        Phase::Build => 2,
    }
}

/// Returns the key for one unit placement.
pub fn unit_key(kind: UnitKind, power: Power, region: Region, coast: Coast) -> u64 {
    TABLE.unit[kind_index(kind)][power as usize][region as usize][coast_index(coast)]
}

/// Returns the key for one supply-center ownership.
pub fn sc_key(region: Region, owner: Power) -> u64 {
    TABLE.sc[region as usize][owner as usize]
}

/// Hashes a full game state.
pub fn hash_state(state: &GameState) -> u64 {
    let mut h: u64 = 0;
    for unit in &state.units {
        h ^= unit_key(unit.kind, unit.power, unit.location.region, unit.location.coast);
    }
    for (i, owner) in state.sc_owner.iter().enumerate() {
        if let Some(power) = owner {
            h ^= TABLE.sc[i][*power as usize];
        }
    }
    let year_idx = (state.turn.year.saturating_sub(YEAR_BASE) as usize).min(YEAR_SPAN - 1);
    h ^= TABLE.year[year_idx];
    h ^= TABLE.season[season_index(state.turn.season)];
    h ^= TABLE.phase[phase_index(state.turn.phase)];
    h
}

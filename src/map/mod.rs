//! Static map table for the Classic Diplomacy board.
//!
//! Regions, coasts, powers, supply centers, and the adjacency graph. All
//! data is compile-time constant and read-only; the rest of the crate
//! queries it through the functions re-exported here.

pub mod adjacency;
pub mod region;

pub use adjacency::{
    adjacent_regions, arrival_coasts, coast_fleet_adj, fleet_hops, is_adjacent, FleetHop,
    ARMY_ADJ, FLEET_ADJ,
};
pub use region::{
    Coast, Power, Region, RegionInfo, RegionKind, ALL_POWERS, ALL_REGIONS, REGION_COUNT,
    REGION_INFO, SUPPLY_CENTER_COUNT,
};

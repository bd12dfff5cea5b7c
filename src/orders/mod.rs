//! Legal-order generation.
//!
//! Produces per-unit option lists for a power in the current phase. Each
//! inner list holds the legal orders for one unit (or one build/disband
//! decision); callers — the sampler above all — pick one order per list.

pub mod build;
pub mod movement;
pub mod retreat;

use crate::map::Power;
use crate::state::{GameState, Order, Phase};

pub use build::build_options;
pub use movement::{legal_orders, movement_options};
pub use retreat::retreat_options;

/// Generates the option lists for a power in the state's current phase.
pub fn options_for(power: Power, state: &GameState) -> Vec<Vec<Order>> {
    match state.turn.phase {
        Phase::Movement => movement_options(power, state),
        Phase::Retreat => retreat_options(power, state),
        Phase::Build => build_options(power, state),
    }
}

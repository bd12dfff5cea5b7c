//! Order resolution.
//!
//! Resolves a full set of simultaneous orders against a state and produces
//! the next state plus one `Resolution` per submitted order. The adjudicator
//! is total: illegal or impossible orders become records with a non-success
//! status, never errors.

pub mod build;
pub mod movement;
pub mod phase;
pub mod retreat;

use crate::map::Power;
use crate::state::{GameState, Order, Phase};

pub use build::resolve_builds;
pub use movement::resolve_movement;
pub use phase::{next_turn, update_sc_ownership};
pub use retreat::resolve_retreats;

/// The outcome of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Succeeds,
    Fails,
    Void,
    Cut,
    Dislodged,
    Bounced,
}

/// A resolved order: the submitted order, its issuing power, the outcome,
/// and an optional explanatory reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub order: Order,
    pub power: Power,
    pub status: OrderStatus,
    pub reason: Option<&'static str>,
}

impl Resolution {
    pub fn new(order: Order, power: Power, status: OrderStatus) -> Self {
        Resolution { order, power, status, reason: None }
    }

    pub fn with_reason(order: Order, power: Power, status: OrderStatus, reason: &'static str) -> Self {
        Resolution { order, power, status, reason: Some(reason) }
    }
}

/// Resolves the submitted orders in the state's current phase and returns
/// the successor state plus per-order outcomes.
pub fn adjudicate(state: &GameState, orders: &[(Order, Power)]) -> (GameState, Vec<Resolution>) {
    match state.turn.phase {
        Phase::Movement => resolve_movement(state, orders),
        Phase::Retreat => resolve_retreats(state, orders),
        Phase::Build => resolve_builds(state, orders),
    }
}

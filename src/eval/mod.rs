//! Coalition fitness.
//!
//! Pure evaluation of a state for a coalition of powers: supply centers
//! weigh 1000, units 1, and user-supplied priorities add or subtract 1000
//! per matched (power, region) occupancy. Terminal outcomes — an 18-center
//! domination or the elimination of every outside power — clamp the score.

use serde::Serialize;

use crate::map::{Power, Region, ALL_POWERS, ALL_REGIONS};
use crate::state::GameState;

/// Score assigned to any terminal win.
pub const WIN_SCORE: i64 = 999_999;

/// Supply centers needed for a solo victory.
pub const DOMINATION_CENTERS: usize = 18;

/// An ordered, non-empty set of powers evaluated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coalition {
    pub name: String,
    pub powers: Vec<Power>,
}

impl Coalition {
    pub fn new(name: impl Into<String>, powers: Vec<Power>) -> Self {
        debug_assert!(!powers.is_empty(), "a coalition has at least one power");
        Coalition { name: name.into(), powers }
    }

    /// Single-power coalition named after the power.
    pub fn solo(power: Power) -> Self {
        Coalition::new(power.name(), vec![power])
    }

    pub fn contains(&self, power: Power) -> bool {
        self.powers.contains(&power)
    }
}

/// How a terminal state was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WinKind {
    Domination,
    Elimination,
}

/// A score adjustment tied to a (power, region) occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    pub action: PriorityAction,
    pub power: Power,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityAction {
    /// Subtract 1000 while the power occupies the region.
    Deny,
    /// Add 1000 while the power occupies the region.
    Allow,
}

/// Evaluation of a state for a coalition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fitness {
    pub supply_centers: u32,
    pub units: u32,
    pub score: i64,
    pub win: bool,
    pub win_kind: Option<WinKind>,
    /// True when an outside power reached a domination win.
    pub terminal_loss: bool,
}

/// Scores a state for the coalition, applying any priorities.
pub fn evaluate(state: &GameState, coalition: &Coalition, priorities: &[Priority]) -> Fitness {
    let supply_centers: u32 = coalition
        .powers
        .iter()
        .map(|&p| state.sc_count(p) as u32)
        .sum();
    let units: u32 = coalition
        .powers
        .iter()
        .map(|&p| state.unit_count(p) as u32)
        .sum();

    // Domination: any single power with 18 centers ends the game.
    for &power in ALL_POWERS.iter() {
        if state.sc_count(power) >= DOMINATION_CENTERS {
            if coalition.contains(power) {
                return Fitness {
                    supply_centers,
                    units,
                    score: WIN_SCORE,
                    win: true,
                    win_kind: Some(WinKind::Domination),
                    terminal_loss: false,
                };
            }
            return Fitness {
                supply_centers,
                units,
                score: 0,
                win: false,
                win_kind: None,
                terminal_loss: true,
            };
        }
    }

    // Elimination: nothing left outside the coalition.
    let outsiders_alive = ALL_POWERS
        .iter()
        .any(|&p| !coalition.contains(p) && state.power_alive(p));
    if !outsiders_alive {
        return Fitness {
            supply_centers,
            units,
            score: WIN_SCORE,
            win: true,
            win_kind: Some(WinKind::Elimination),
            terminal_loss: false,
        };
    }

    let mut score = supply_centers as i64 * 1000 + units as i64;
    for priority in priorities {
        let occupied = state
            .unit_at(priority.region)
            .map(|u| u.power == priority.power)
            .unwrap_or(false);
        if occupied {
            score += match priority.action {
                PriorityAction::Allow => 1000,
                PriorityAction::Deny => -1000,
            };
        }
    }

    Fitness {
        supply_centers,
        units,
        score,
        win: false,
        win_kind: None,
        terminal_loss: false,
    }
}

/// Returns the power holding a domination win in this state, if any.
pub fn domination_winner(state: &GameState) -> Option<Power> {
    ALL_POWERS
        .iter()
        .copied()
        .find(|&p| state.sc_count(p) >= DOMINATION_CENTERS)
}

/// Returns true when the game is over from the coalition's point of view:
/// a domination win exists or nobody outside the coalition survives.
pub fn is_terminal(state: &GameState, coalition: &Coalition) -> bool {
    if domination_winner(state).is_some() {
        return true;
    }
    !ALL_POWERS
        .iter()
        .any(|&p| !coalition.contains(p) && state.power_alive(p))
}

/// Hands a power enough supply centers for a domination win; shared by the
/// crate's own tests and the integration suite.
#[doc(hidden)]
pub fn grant_domination(state: &mut GameState, power: Power) {
    let mut granted = 0;
    for &region in ALL_REGIONS.iter() {
        if region.is_supply_center() {
            state.set_sc_owner(region, Some(power));
            granted += 1;
            if granted == DOMINATION_CENTERS {
                break;
            }
        }
    }
}

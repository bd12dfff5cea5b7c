//! Serializable analysis report.
//!
//! Converts the coordinator's merged ranking into the structure the front
//! end renders: stringified orders, per-candidate predicted turns with
//! state snapshots, fitness and confidence annotations, and the global
//! simulation totals.

use serde::Serialize;

use crate::eval::Fitness;
use crate::map::Power;
use crate::mcts::{ConfidenceLevel, PredictedTurn, RankedMove};
use crate::search::AnalysisReport;
use crate::state::{GameState, Order, Turn};

use super::notation::{format_location, format_order};

/// The full recommended-orders output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    pub candidates: Vec<CandidateOutput>,
    pub total_simulations: u64,
    pub elapsed_ms: u64,
}

/// One ranked candidate order set.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateOutput {
    pub rank: usize,
    pub orders: Vec<String>,
    pub opponent_orders: Vec<String>,
    pub predicted_turns: Vec<PredictedTurnOutput>,
    pub fitness: Fitness,
    pub raw_score: i64,
    pub expected_value: f64,
    pub confidence: ConfidenceOutput,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceOutput {
    pub level: ConfidenceLevel,
    pub visits: u64,
    pub stdev: f64,
}

/// One step of the predicted continuation.
#[derive(Debug, Clone, Serialize)]
pub struct PredictedTurnOutput {
    pub turn: Turn,
    /// Unit snapshot after the turn resolved, e.g. "France F MAO".
    pub units: Vec<String>,
    /// Supply-center ownership as (region, power) pairs.
    pub supply_centers: Vec<(String, String)>,
    pub coalition_orders: Vec<String>,
    pub opponent_orders: Vec<String>,
}

/// Builds the serializable output from a merged report. `state` is the
/// analyzed position; order notation is resolved against the position each
/// order set was issued in.
pub fn build_output(report: &AnalysisReport, state: &GameState) -> AnalysisOutput {
    AnalysisOutput {
        candidates: report
            .candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| candidate_output(i + 1, candidate, state))
            .collect(),
        total_simulations: report.total_simulations,
        elapsed_ms: report.elapsed_ms,
    }
}

fn candidate_output(rank: usize, candidate: &RankedMove, state: &GameState) -> CandidateOutput {
    CandidateOutput {
        rank,
        orders: format_orders(&candidate.orders, state),
        opponent_orders: format_orders(&candidate.opponent_orders, state),
        predicted_turns: predicted_turn_outputs(&candidate.predicted_turns, state),
        fitness: candidate.fitness,
        raw_score: candidate.raw_score,
        expected_value: candidate.expected_value,
        confidence: ConfidenceOutput {
            level: candidate.confidence,
            visits: candidate.visits,
            stdev: candidate.stdev,
        },
    }
}

fn format_orders(orders: &[(Order, Power)], state: &GameState) -> Vec<String> {
    orders.iter().map(|(o, _)| format_order(o, state)).collect()
}

fn predicted_turn_outputs(trail: &[PredictedTurn], root: &GameState) -> Vec<PredictedTurnOutput> {
    let mut outputs = Vec::with_capacity(trail.len());
    let mut issued_in = root;

    for step in trail.iter() {
        outputs.push(PredictedTurnOutput {
            turn: step.turn,
            units: snapshot_units(&step.state),
            supply_centers: step
                .state
                .supply_center_pairs()
                .into_iter()
                .map(|(r, p)| (r.tag().to_string(), p.name().to_string()))
                .collect(),
            coalition_orders: format_orders(&step.coalition_orders, issued_in),
            opponent_orders: format_orders(&step.opponent_orders, issued_in),
        });
        issued_in = &step.state;
    }

    outputs
}

fn snapshot_units(state: &GameState) -> Vec<String> {
    state
        .units
        .iter()
        .map(|u| {
            format!(
                "{} {} {}",
                u.power.name(),
                u.kind.letter(),
                format_location(u.location)
            )
        })
        .collect()
}
